//! Reusable form controls.
//!
//! Each control follows the same shape: a props struct describing what to draw, a
//! `*Colors` struct derived from the theme, a render function, and a `*Layout`
//! struct of hit areas returned by the render function for mouse dispatch.

pub mod text_area;
pub mod text_input;

use ratatui::layout::Rect;

/// Focus state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Default appearance
    #[default]
    Normal,
    /// Has keyboard focus
    Focused,
    /// Mouse is hovering over it
    Hovered,
    /// Not interactive
    Disabled,
}

/// Check whether a point falls inside a rect.
pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
