//! Text input rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{FocusState, TextInput, TextInputColors, TextInputLayout};

/// Render a single-line text input.
///
/// # Arguments
/// * `frame` - The ratatui frame to render to
/// * `area` - Rectangle where the control should be rendered
/// * `input` - What to draw
/// * `colors` - Colors for rendering
/// * `label_width` - Optional minimum label width for aligning a column of inputs
///
/// # Returns
/// Layout information for hit testing
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    colors: &TextInputColors,
    label_width: Option<u16>,
) -> TextInputLayout {
    let actual_label_width = label_width.unwrap_or(input.label.len() as u16);
    // label + marker + ": " + brackets needs to leave room for some value text
    let overhead = actual_label_width + 4 + 2;
    if area.height == 0 || area.width <= overhead + 2 {
        return TextInputLayout::default();
    }

    let (label_color, value_color, border_color) = match input.focus {
        FocusState::Normal => (colors.label, colors.value, colors.border),
        FocusState::Focused | FocusState::Hovered => (colors.focused, colors.value, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let marker = if input.required { " *" } else { "  " };
    let padded_label = format!("{:width$}", input.label, width = actual_label_width as usize);

    let value_width = area.width - overhead;
    let focused = input.focus == FocusState::Focused;

    let mut spans = vec![
        Span::styled(padded_label, Style::default().fg(label_color)),
        Span::styled(marker, Style::default().fg(colors.required)),
        Span::styled(": ", Style::default().fg(label_color)),
        Span::styled("[", Style::default().fg(border_color)),
    ];

    if input.value.is_empty() && !focused {
        let shown = clip_to_width(input.placeholder, value_width as usize);
        spans.push(Span::styled(
            format!("{:width$}", shown, width = value_width as usize),
            Style::default().fg(colors.placeholder),
        ));
    } else if focused {
        let (before, at, after) = cursor_window(input.value, input.cursor, value_width as usize);
        let used = UnicodeWidthStr::width(before.as_str())
            + UnicodeWidthStr::width(at.as_str())
            + UnicodeWidthStr::width(after.as_str());
        spans.push(Span::styled(before, Style::default().fg(value_color)));
        spans.push(Span::styled(
            at,
            Style::default().fg(value_color).add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(after, Style::default().fg(value_color)));
        if used < value_width as usize {
            spans.push(Span::raw(" ".repeat(value_width as usize - used)));
        }
    } else {
        let shown = clip_to_width(input.value, value_width as usize);
        spans.push(Span::styled(
            format!("{:width$}", shown, width = value_width as usize),
            Style::default().fg(value_color),
        ));
    }

    spans.push(Span::styled("]", Style::default().fg(border_color)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let value_start = area.x + actual_label_width + 5;
    TextInputLayout {
        value_area: Rect::new(value_start, area.y, value_width, 1),
        full_area: Rect::new(area.x, area.y, area.width, 1),
    }
}

/// Take the longest prefix that fits in `width` terminal columns.
fn clip_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Split the value into (before, cursor cell, after) clipped to `width` columns,
/// scrolling so the cursor stays visible. The cursor cell is a single character
/// (or a space when the cursor sits at the end of the value).
fn cursor_window(value: &str, cursor: usize, width: usize) -> (String, String, String) {
    if width == 0 {
        return (String::new(), String::new(), String::new());
    }
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk backwards from the cursor to find the first visible character,
    // reserving one column for the cursor cell itself.
    let mut budget = width.saturating_sub(1);
    let mut start = cursor;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if w > budget {
            break;
        }
        budget -= w;
        start -= 1;
    }

    let before: String = chars[start..cursor].iter().collect();
    let before_width: usize = chars[start..cursor].iter().map(|c| c.width().unwrap_or(0)).sum();

    let (at, at_width) = if cursor < chars.len() {
        (chars[cursor].to_string(), chars[cursor].width().unwrap_or(0))
    } else {
        (" ".to_string(), 1)
    };

    let mut after = String::new();
    let mut used = before_width + at_width;
    for &c in chars.iter().skip(cursor + 1) {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        after.push(c);
    }

    (before, at, after)
}
