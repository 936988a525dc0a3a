//! Single-line labeled text input.
//!
//! Renders as: `Label *: [value_____________]`
//!
//! The control is stateless: the value lives in the externally owned record and
//! the cursor column lives in the form state, so the props struct only borrows
//! what to draw. Rendering returns a [`TextInputLayout`] for mouse hit testing.

mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use render::render_text_input;

use super::{point_in_rect, FocusState};

/// What to draw for one text input.
#[derive(Debug, Clone, Copy)]
pub struct TextInput<'a> {
    /// Label displayed before the input
    pub label: &'a str,
    /// Current value (owned by the record being edited)
    pub value: &'a str,
    /// Shown dimmed while the value is empty
    pub placeholder: &'a str,
    /// Draws a `*` marker after the label
    pub required: bool,
    /// Focus state
    pub focus: FocusState,
    /// Cursor position in characters, drawn only while focused
    pub cursor: usize,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            required: false,
            focus: FocusState::Normal,
            cursor: 0,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
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

/// Colors for the text input control
#[derive(Debug, Clone, Copy)]
pub struct TextInputColors {
    /// Label color
    pub label: Color,
    /// Value text color
    pub value: Color,
    /// Placeholder color
    pub placeholder: Color,
    /// Bracket color
    pub border: Color,
    /// Required marker color
    pub required: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for TextInputColors {
    fn default() -> Self {
        Self {
            label: Color::White,
            value: Color::White,
            placeholder: Color::DarkGray,
            border: Color::Gray,
            required: Color::Red,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl TextInputColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            label: theme.label_fg,
            value: theme.value_fg,
            placeholder: theme.placeholder_fg,
            border: theme.border,
            required: theme.required_fg,
            focused: theme.focused_fg,
            disabled: theme.muted_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInputLayout {
    /// The editable value area (between the brackets)
    pub value_area: Rect,
    /// The full control area
    pub full_area: Rect,
}

impl TextInputLayout {
    /// Check if a point is on the value area
    pub fn is_value(&self, x: u16, y: u16) -> bool {
        point_in_rect(self.value_area, x, y)
    }

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
    fn test_text_input_renders() {
        test_frame(40, 1, |frame, area| {
            let input = TextInput::new("Name", "hello").required(true);
            let colors = TextInputColors::default();
            let layout = render_text_input(frame, area, &input, &colors, None);

            assert!(layout.value_area.width > 0);
            assert!(layout.full_area.width >= layout.value_area.width);
        });
    }

    #[test]
    fn test_text_input_hit_detection() {
        test_frame(40, 1, |frame, area| {
            let input = TextInput::new("Name", "hello");
            let colors = TextInputColors::default();
            let layout = render_text_input(frame, area, &input, &colors, None);

            let vx = layout.value_area.x;
            assert!(layout.is_value(vx, 0));
            assert!(layout.contains(vx, 0));
            assert!(!layout.is_value(0, 0));
        });
    }

    #[test]
    fn test_text_input_degenerate_area() {
        test_frame(6, 1, |frame, area| {
            let input = TextInput::new("Name", "hello");
            let colors = TextInputColors::default();
            let layout = render_text_input(frame, area, &input, &colors, None);
            // Too narrow to draw anything useful; empty layout, no panic.
            assert_eq!(layout.value_area.width, 0);
        });
    }

    #[test]
    fn test_text_input_label_alignment() {
        test_frame(60, 2, |frame, _| {
            let colors = TextInputColors::default();
            let a = render_text_input(
                frame,
                Rect::new(0, 0, 60, 1),
                &TextInput::new("Name", ""),
                &colors,
                Some(18),
            );
            let b = render_text_input(
                frame,
                Rect::new(0, 1, 60, 1),
                &TextInput::new("Technologies Used", ""),
                &colors,
                Some(18),
            );
            assert_eq!(a.value_area.x, b.value_area.x);
        });
    }
}
