//! Color themes for the form UI.
//!
//! Two built-in themes (dark, light) plus loading from a JSON file. Theme files
//! specify colors either as a named color (`"Cyan"`) or as `[r, g, b]`.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable color representation: RGB triple or named color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                _ => Color::Reset,
            },
        }
    }
}

impl From<Color> for ColorDef {
    fn from(color: Color) -> Self {
        match color {
            Color::Rgb(r, g, b) => ColorDef::Rgb(r, g, b),
            other => ColorDef::Named(format!("{:?}", other)),
        }
    }
}

/// Colors used across the form UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Panel background
    pub background: Color,
    /// Regular text
    pub foreground: Color,
    /// Card and input borders
    pub border: Color,
    /// Field labels
    pub label_fg: Color,
    /// Text typed into inputs
    pub value_fg: Color,
    /// Placeholder text in empty inputs
    pub placeholder_fg: Color,
    /// The `*` marker on required fields
    pub required_fg: Color,
    /// Add buttons
    pub button_fg: Color,
    /// Remove buttons
    pub remove_fg: Color,
    /// Focused element highlight
    pub focused_fg: Color,
    /// Secondary text (card headers, hints)
    pub muted_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            foreground: Color::Rgb(212, 212, 212),
            border: Color::Rgb(100, 100, 100),
            label_fg: Color::Rgb(170, 170, 170),
            value_fg: Color::White,
            placeholder_fg: Color::DarkGray,
            required_fg: Color::Rgb(255, 100, 100),
            button_fg: Color::Cyan,
            remove_fg: Color::Rgb(255, 100, 100),
            focused_fg: Color::Rgb(86, 182, 255),
            muted_fg: Color::Rgb(130, 130, 130),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(40, 40, 40),
            border: Color::Rgb(180, 180, 180),
            label_fg: Color::Rgb(90, 90, 90),
            value_fg: Color::Black,
            placeholder_fg: Color::Gray,
            required_fg: Color::Rgb(200, 30, 30),
            button_fg: Color::Rgb(0, 90, 200),
            remove_fg: Color::Rgb(200, 30, 30),
            focused_fg: Color::Rgb(0, 90, 200),
            muted_fg: Color::Rgb(120, 120, 120),
        }
    }

    /// Look up a built-in theme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Load a theme from a JSON file. Missing fields fall back to the dark theme.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ThemeFile = serde_json::from_str(&content)?;
        Ok(file.into())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn default_background() -> ColorDef {
    Theme::dark().background.into()
}
fn default_foreground() -> ColorDef {
    Theme::dark().foreground.into()
}
fn default_border() -> ColorDef {
    Theme::dark().border.into()
}
fn default_label_fg() -> ColorDef {
    Theme::dark().label_fg.into()
}
fn default_value_fg() -> ColorDef {
    Theme::dark().value_fg.into()
}
fn default_placeholder_fg() -> ColorDef {
    Theme::dark().placeholder_fg.into()
}
fn default_required_fg() -> ColorDef {
    Theme::dark().required_fg.into()
}
fn default_button_fg() -> ColorDef {
    Theme::dark().button_fg.into()
}
fn default_remove_fg() -> ColorDef {
    Theme::dark().remove_fg.into()
}
fn default_focused_fg() -> ColorDef {
    Theme::dark().focused_fg.into()
}
fn default_muted_fg() -> ColorDef {
    Theme::dark().muted_fg.into()
}

/// On-disk theme representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(default = "default_background")]
    background: ColorDef,
    #[serde(default = "default_foreground")]
    foreground: ColorDef,
    #[serde(default = "default_border")]
    border: ColorDef,
    #[serde(default = "default_label_fg")]
    label_fg: ColorDef,
    #[serde(default = "default_value_fg")]
    value_fg: ColorDef,
    #[serde(default = "default_placeholder_fg")]
    placeholder_fg: ColorDef,
    #[serde(default = "default_required_fg")]
    required_fg: ColorDef,
    #[serde(default = "default_button_fg")]
    button_fg: ColorDef,
    #[serde(default = "default_remove_fg")]
    remove_fg: ColorDef,
    #[serde(default = "default_focused_fg")]
    focused_fg: ColorDef,
    #[serde(default = "default_muted_fg")]
    muted_fg: ColorDef,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        Self {
            background: file.background.into(),
            foreground: file.foreground.into(),
            border: file.border.into(),
            label_fg: file.label_fg.into(),
            value_fg: file.value_fg.into(),
            placeholder_fg: file.placeholder_fg.into(),
            required_fg: file.required_fg.into(),
            button_fg: file.button_fg.into(),
            remove_fg: file.remove_fg.into(),
            focused_fg: file.focused_fg.into(),
            muted_fg: file.muted_fg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert!(Theme::builtin("dark").is_some());
        assert!(Theme::builtin("light").is_some());
        assert!(Theme::builtin("solarized").is_none());
    }

    #[test]
    fn test_theme_file_named_and_rgb_colors() {
        let json = r#"{ "background": [10, 20, 30], "button_fg": "Magenta" }"#;
        let file: ThemeFile = serde_json::from_str(json).unwrap();
        let theme: Theme = file.into();
        assert_eq!(theme.background, Color::Rgb(10, 20, 30));
        assert_eq!(theme.button_fg, Color::Magenta);
        // Unspecified fields fall back to the dark theme
        assert_eq!(theme.border, Theme::dark().border);
    }

    #[test]
    fn test_empty_theme_file_is_dark() {
        let file: ThemeFile = serde_json::from_str("{}").unwrap();
        let theme: Theme = file.into();
        assert_eq!(theme, Theme::dark());
    }
}
