//! Shared building blocks for the three form controllers.
//!
//! - [`FormField`]: a single-line editor with select-on-focus and an
//!   invalid-border flag.
//! - [`ErrorBanner`]: the one shared error-message element of a form; only
//!   one message is visible at a time, last writer wins.
//! - [`validate`]: the check-and-report primitive every blur handler calls.
//!
//! The controllers own the focus ring; `validate` reports back whether the
//! condition failed so the caller can snap focus onto the offending field.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::Span,
    widgets::{Block, Paragraph},
};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler as _;

use crate::style::Theme;

/// A labelled single-line input.
pub struct FormField {
    pub label: &'static str,
    pub input: Input,
    pub invalid: bool,
    /// Content is "selected": the next typed character replaces the whole
    /// value, any other editing key keeps it. Set whenever the field gains
    /// focus, mirroring a text input that selects its content on focus.
    select_armed: bool,
    secret: bool,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            input: Input::default(),
            invalid: false,
            select_armed: false,
            secret: false,
        }
    }

    /// Mask the rendered value (passwords).
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Called when the field gains focus: select the current content.
    pub fn focus(&mut self) {
        self.select_armed = true;
    }

    pub fn is_selected(&self) -> bool {
        self.select_armed
    }

    /// Feed a key into the editor, honoring the selected state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.select_armed {
            if matches!(key.code, KeyCode::Char(_)) {
                self.input = Input::default();
            }
            self.select_armed = false;
        }
        self.input.handle_event(&crossterm::event::Event::Key(key));
    }

    /// Reset to the default-empty state (value, border, selection).
    pub fn reset(&mut self) {
        self.input = Input::default();
        self.invalid = false;
        self.select_armed = false;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        // keep 2 for borders and 1 for cursor
        let width = area.width.max(3) - 3;
        let scroll = self.input.visual_scroll(width as usize);

        let title_style = if focused {
            Style::default()
                .fg(theme.roles.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.roles.subtle_text)
        };
        // The invalid border wins over focus: a field that just failed its
        // check is both focused and flagged.
        let border_style = if self.invalid {
            Style::default().fg(theme.roles.danger)
        } else if focused {
            Style::default().fg(theme.roles.primary)
        } else {
            Style::default().fg(theme.roles.muted)
        };
        let value_style = if focused && self.select_armed {
            theme.selection_style()
        } else if focused {
            Style::default().fg(theme.roles.text)
        } else {
            Style::default().fg(theme.roles.subtle_text)
        };

        let shown: String = if self.secret {
            self.input.value().chars().map(|_| '•').collect()
        } else {
            self.input.value().to_string()
        };
        let widget = Paragraph::new(Span::styled(shown, value_style))
            .scroll((0, scroll as u16))
            .block(
                Block::bordered()
                    .title(self.label)
                    .title_style(title_style)
                    .border_set(border::ROUNDED)
                    .border_style(border_style),
            );
        frame.render_widget(widget, area);

        if focused {
            // Ratatui hides the cursor unless it's explicitly set. Position it
            // past the end of the input text, inside the border.
            let x = self.input.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((area.x + x as u16, area.y + 1));
        }
    }
}

/// The single shared error-message element of a form.
///
/// Every `validate` call writes (or hides) this banner, so concurrent
/// validation of two fields cannot interleave messages: only the most recent
/// call's message is visible.
#[derive(Default)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(msg) = &self.message else {
            return;
        };
        let banner = Paragraph::new(msg.as_str())
            .centered()
            .style(Style::default().fg(theme.roles.danger));
        frame.render_widget(banner, area);
    }
}

/// Check-and-report primitive shared by all blur handlers.
///
/// If `failed` is true: show `message` in the banner, select the field's
/// content and flag its border. Otherwise hide the banner and restore the
/// border. Idempotent, and touches nothing but the given field/banner pair.
///
/// Returns `failed` so the caller can move focus back onto the field.
pub fn validate(field: &mut FormField, banner: &mut ErrorBanner, failed: bool, message: &str) -> bool {
    if failed {
        banner.show(message);
        field.focus();
        field.invalid = true;
    } else {
        banner.hide();
        field.invalid = false;
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(field: &mut FormField, s: &str) {
        for c in s.chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_replaces_selected_content() {
        let mut field = FormField::new("Name");
        type_str(&mut field, "Jack");
        field.focus();
        assert!(field.is_selected());
        type_str(&mut field, "Jo");
        assert_eq!(field.value(), "Jo");
    }

    #[test]
    fn non_character_key_keeps_selected_content() {
        let mut field = FormField::new("Name");
        type_str(&mut field, "Jack");
        field.focus();
        field.handle_key(key(KeyCode::Backspace));
        // Selection is disarmed, content only lost its last character.
        assert_eq!(field.value(), "Jac");
        assert!(!field.is_selected());
    }

    #[test]
    fn validate_reports_and_clears() {
        let mut field = FormField::new("Email");
        let mut banner = ErrorBanner::new();

        assert!(validate(&mut field, &mut banner, true, "Invalid Email Address"));
        assert_eq!(banner.message(), Some("Invalid Email Address"));
        assert!(field.invalid);
        assert!(field.is_selected());

        assert!(!validate(&mut field, &mut banner, false, "Invalid Email Address"));
        assert!(!banner.is_visible());
        assert!(!field.invalid);
    }

    #[test]
    fn validate_is_idempotent() {
        let mut field = FormField::new("Email");
        let mut banner = ErrorBanner::new();

        validate(&mut field, &mut banner, true, "Invalid Email Address");
        validate(&mut field, &mut banner, true, "Invalid Email Address");
        assert_eq!(banner.message(), Some("Invalid Email Address"));
        assert!(field.invalid);
    }

    #[test]
    fn banner_shows_only_the_most_recent_message() {
        let mut name = FormField::new("Name");
        let mut email = FormField::new("Email");
        let mut banner = ErrorBanner::new();

        validate(&mut name, &mut banner, true, "Contact Name is Too Short");
        validate(&mut email, &mut banner, true, "Invalid Email Address");
        assert_eq!(banner.message(), Some("Invalid Email Address"));
        // The earlier field keeps its own flag untouched.
        assert!(name.invalid);
    }
}
