//! Text area rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use super::{FocusState, TextArea, TextAreaColors, TextAreaLayout};

/// Render a multi-line text area with a `▏` gutter down the left edge.
///
/// Returns layout information for hit testing.
pub fn render_text_area(
    frame: &mut Frame,
    area: Rect,
    text_area: &TextArea,
    colors: &TextAreaColors,
) -> TextAreaLayout {
    // Gutter plus one space, then at least a few columns of text
    if area.height == 0 || area.width < 6 {
        return TextAreaLayout::default();
    }

    let (text_color, gutter_color) = match text_area.focus {
        FocusState::Normal => (colors.value, colors.border),
        FocusState::Focused | FocusState::Hovered => (colors.value, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled),
    };

    let text_width = (area.width - 2) as usize;
    let focused = text_area.focus == FocusState::Focused;

    let chars: Vec<char> = text_area.value.chars().collect();
    let cursor = text_area.cursor.min(chars.len());
    let rows = wrap_chars(&chars, text_width);
    let (cursor_row, cursor_col) = position_of(&rows, cursor);

    // Scroll so the cursor row is visible within the fixed height
    let height = area.height as usize;
    let first_row = if focused {
        cursor_row.saturating_sub(height - 1)
    } else {
        0
    };

    for (i, row_index) in (first_row..first_row + height).enumerate() {
        let y = area.y + i as u16;
        let mut spans = vec![Span::styled("\u{258F} ", Style::default().fg(gutter_color))];

        match rows.get(row_index) {
            Some(row) => {
                if focused && row_index == cursor_row {
                    let (before, at, after) = split_at_cursor(row, cursor_col);
                    spans.push(Span::styled(before, Style::default().fg(text_color)));
                    spans.push(Span::styled(
                        at,
                        Style::default().fg(text_color).add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::styled(after, Style::default().fg(text_color)));
                } else {
                    spans.push(Span::styled(
                        row.iter().collect::<String>(),
                        Style::default().fg(text_color),
                    ));
                }
            }
            None => {
                // Row past the end of the text; cursor may still sit here
                if focused && row_index == cursor_row {
                    spans.push(Span::styled(
                        " ",
                        Style::default().fg(text_color).add_modifier(Modifier::REVERSED),
                    ));
                }
            }
        }

        if row_index == 0 && chars.is_empty() && !focused {
            spans.push(Span::styled(
                text_area.placeholder.to_string(),
                Style::default().fg(colors.placeholder),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    TextAreaLayout {
        text_area: Rect::new(area.x + 2, area.y, area.width - 2, area.height),
        full_area: area,
    }
}

/// Wrap characters into rows of at most `width` terminal columns.
/// Always yields at least one (possibly empty) row.
fn wrap_chars(chars: &[char], width: usize) -> Vec<Vec<char>> {
    if width == 0 {
        return vec![Vec::new()];
    }
    let mut rows: Vec<Vec<char>> = vec![Vec::new()];
    let mut used = 0;
    for &c in chars {
        let w = c.width().unwrap_or(0);
        if used + w > width && !rows[rows.len() - 1].is_empty() {
            rows.push(Vec::new());
            used = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        used += w;
    }
    rows
}

/// Locate a character offset as (row, column-within-row).
///
/// An offset equal to the text length lands one past the final character,
/// which may be the start of a fresh row when the last row is full.
fn position_of(rows: &[Vec<char>], offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    for (i, row) in rows.iter().enumerate() {
        if remaining <= row.len() {
            let at_row_end = remaining == row.len() && !row.is_empty();
            let is_last = i + 1 == rows.len();
            if at_row_end && !is_last {
                return (i + 1, 0);
            }
            return (i, remaining);
        }
        remaining -= row.len();
    }
    (rows.len().saturating_sub(1), rows.last().map_or(0, |r| r.len()))
}

/// Split a row at the cursor column into (before, cursor cell, after).
fn split_at_cursor(row: &[char], col: usize) -> (String, String, String) {
    let col = col.min(row.len());
    let before: String = row[..col].iter().collect();
    let (at, after) = if col < row.len() {
        (row[col].to_string(), row[col + 1..].iter().collect())
    } else {
        (" ".to_string(), String::new())
    };
    (before, at, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(s: &str, width: usize) -> Vec<String> {
        let chars: Vec<char> = s.chars().collect();
        wrap_chars(&chars, width)
            .into_iter()
            .map(|r| r.into_iter().collect())
            .collect()
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap("abc", 10), vec!["abc"]);
    }

    #[test]
    fn test_wrap_exact_width() {
        assert_eq!(wrap("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap("", 3), vec![""]);
    }

    #[test]
    fn test_position_of_within_row() {
        let rows = wrap_chars(&"abcdef".chars().collect::<Vec<_>>(), 3);
        assert_eq!(position_of(&rows, 0), (0, 0));
        assert_eq!(position_of(&rows, 2), (0, 2));
        // End of a full row rolls to the start of the next
        assert_eq!(position_of(&rows, 3), (1, 0));
        assert_eq!(position_of(&rows, 6), (1, 3));
    }

    #[test]
    fn test_split_at_cursor() {
        let row: Vec<char> = "abc".chars().collect();
        let (before, at, after) = split_at_cursor(&row, 1);
        assert_eq!((before.as_str(), at.as_str(), after.as_str()), ("a", "b", "c"));

        let (before, at, after) = split_at_cursor(&row, 3);
        assert_eq!((before.as_str(), at.as_str(), after.as_str()), ("abc", " ", ""));
    }
}
