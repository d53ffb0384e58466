/// Popup components for the kiosk.
///
/// This module aggregates the concrete popup types and the shared helpers
/// (`render_backdrop`, `centered_rect_fixed`, `draw_popup_frame`) so there is
/// a single source of truth for popup utilities.
pub mod confirm;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear},
};

use crate::{components::Component, tui::Frame};

/// A small extension over `Component` for the app's popup slot.
pub trait PopupComponent: Component {
    /// Whether the popup is modal (blocks page interactions). Defaults to true.
    fn is_modal(&self) -> bool {
        true
    }
}

/// Render a modal-style backdrop that visually separates a popup from the
/// underlying page. Terminals have no real transparency, so a solid dark
/// background stands in for a dim overlay.
pub fn render_backdrop(frame: &mut Frame<'_>, area: Rect) {
    let backdrop = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(backdrop, area);
}

/// Compute a centered rectangle with a fixed width/height clamped to `area`.
pub fn centered_rect_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);

    let x = area.x.saturating_add((area.width.saturating_sub(w)) / 2);
    let y = area.y.saturating_add((area.height.saturating_sub(h)) / 2);

    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

/// Draw a rounded, bordered popup shell with a title at `area`, clearing the
/// area first so underlying content doesn't bleed through.
pub fn draw_popup_frame(frame: &mut Frame<'_>, area: Rect, title: impl Into<String>) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(block, area);
    area
}
