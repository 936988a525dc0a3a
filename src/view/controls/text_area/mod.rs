//! Fixed-height multi-line text area, used for description bullets.
//!
//! Long values wrap character-wise across the rows; while focused the view
//! scrolls vertically so the cursor row stays visible. Like `text_input` the
//! control is stateless and borrows everything it draws.

mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use render::render_text_area;

use super::{point_in_rect, FocusState};

/// What to draw for one text area.
#[derive(Debug, Clone, Copy)]
pub struct TextArea<'a> {
    /// Current value (owned by the record being edited)
    pub value: &'a str,
    /// Shown dimmed while the value is empty
    pub placeholder: &'a str,
    /// Focus state
    pub focus: FocusState,
    /// Cursor position in characters, drawn only while focused
    pub cursor: usize,
}

impl<'a> TextArea<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "",
            focus: FocusState::Normal,
            cursor: 0,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }
}

/// Colors for the text area control
#[derive(Debug, Clone, Copy)]
pub struct TextAreaColors {
    /// Value text color
    pub value: Color,
    /// Placeholder color
    pub placeholder: Color,
    /// Left gutter color
    pub border: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for TextAreaColors {
    fn default() -> Self {
        Self {
            value: Color::White,
            placeholder: Color::DarkGray,
            border: Color::Gray,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl TextAreaColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            value: theme.value_fg,
            placeholder: theme.placeholder_fg,
            border: theme.border,
            focused: theme.focused_fg,
            disabled: theme.muted_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAreaLayout {
    /// The editable text area (to the right of the gutter)
    pub text_area: Rect,
    /// The full control area
    pub full_area: Rect,
}

impl TextAreaLayout {
    /// Check if a point is within any part of the control
    pub fn contains(&self, x: u16, y: u16) -> bool {
        point_in_rect(self.full_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_frame<F>(width: u16, height: u16, f: F)
    where
        F: FnOnce(&mut ratatui::Frame, Rect),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, height);
                f(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn test_text_area_renders() {
        test_frame(40, 2, |frame, area| {
            let text_area = TextArea::new("built the thing");
            let colors = TextAreaColors::default();
            let layout = render_text_area(frame, area, &text_area, &colors);

            assert!(layout.text_area.width > 0);
            assert_eq!(layout.full_area.height, 2);
        });
    }

    #[test]
    fn test_text_area_hit_detection() {
        test_frame(40, 2, |frame, area| {
            let text_area = TextArea::new("x");
            let colors = TextAreaColors::default();
            let layout = render_text_area(frame, area, &text_area, &colors);

            assert!(layout.contains(5, 1));
            assert!(!layout.contains(5, 2));
        });
    }

    #[test]
    fn test_text_area_degenerate_area() {
        test_frame(3, 2, |frame, area| {
            let text_area = TextArea::new("x");
            let colors = TextAreaColors::default();
            let layout = render_text_area(frame, area, &text_area, &colors);
            assert_eq!(layout.text_area.width, 0);
        });
    }
}
