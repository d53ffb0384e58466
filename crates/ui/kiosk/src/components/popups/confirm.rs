use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::{
    action::{Action, PopupResult},
    components::Component,
    tui::Frame,
};

use super::{PopupComponent, centered_rect_fixed, draw_popup_frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Ok,
    Cancel,
}

/// Modal confirmation popup with selectable OK/Cancel buttons.
///
/// Behavior:
/// - Arrow Left/Right or Tab/BackTab: switch selected button
/// - Enter: submit (emits Action::PopupResult with Confirmed/Cancelled)
/// - Esc: cancel (emits Action::PopupResult(Cancelled))
///
/// The popup only reports; the page that requested it decides what a
/// confirmation means (the contact form uses it to guard its reset).
pub struct ConfirmPopup {
    title: String,
    question: String,
    ok_label: String,
    cancel_label: String,
    selected: Choice,
    min_width: u16,
    min_height: u16,
}

impl ConfirmPopup {
    pub fn new<T: Into<String>, Q: Into<String>>(title: T, question: Q) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            ok_label: "OK".into(),
            cancel_label: "Cancel".into(),
            selected: Choice::Ok,
            min_width: 60,
            min_height: 9,
        }
    }

    pub fn ok_label<S: Into<String>>(mut self, label: S) -> Self {
        self.ok_label = label.into();
        self
    }

    pub fn cancel_label<S: Into<String>>(mut self, label: S) -> Self {
        self.cancel_label = label.into();
        self
    }

    fn confirm_action(&self) -> Action {
        match self.selected {
            Choice::Ok => Action::PopupResult(PopupResult::Confirmed),
            Choice::Cancel => Action::PopupResult(PopupResult::Cancelled),
        }
    }

    fn cancel_action(&self) -> Action {
        Action::PopupResult(PopupResult::Cancelled)
    }

    fn toggle_selection(&mut self) {
        self.selected = match self.selected {
            Choice::Ok => Choice::Cancel,
            Choice::Cancel => Choice::Ok,
        };
    }

    fn inner_rect(area: ratatui::layout::Rect) -> ratatui::layout::Rect {
        ratatui::layout::Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }
}

impl Component for ConfirmPopup {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_selection();
                None
            }
            KeyCode::Enter => Some(self.confirm_action()),
            KeyCode::Esc => Some(self.cancel_action()),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // When the result gets re-injected into the action loop, close
            // the popup to keep the lifecycle consistent.
            Action::PopupResult(PopupResult::Confirmed)
            | Action::PopupResult(PopupResult::Cancelled) => Ok(Some(Action::ClosePopup)),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: ratatui::layout::Rect) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }

        let w = self.min_width.min(area.width);
        let h = self.min_height.min(area.height);
        let dialog = centered_rect_fixed(area, w, h);

        let _ = draw_popup_frame(f, dialog, &self.title);

        let inner = Self::inner_rect(dialog);

        let mut lines: Vec<Line> = Vec::new();
        for l in self.question.lines() {
            lines.push(Line::from(Span::raw(l)));
        }

        if inner.height >= 3 {
            lines.push(Line::raw(""));
        }

        let selected_style = Style::default().fg(Color::Black).bg(Color::White).bold();
        let unselected_style = Style::default().fg(Color::White).bg(Color::Black);

        let ok_span = Span::styled(
            format!("[ {} ]", self.ok_label),
            if self.selected == Choice::Ok {
                selected_style
            } else {
                unselected_style
            },
        );
        let cancel_span = Span::styled(
            format!("[ {} ]", self.cancel_label),
            if self.selected == Choice::Cancel {
                selected_style
            } else {
                unselected_style
            },
        );

        // Center the button row by left-padding with spaces.
        let spacing = "   ";
        let buttons_len =
            (2 + self.ok_label.len() + 2) + spacing.len() + (2 + self.cancel_label.len() + 2);
        let pad = (inner.width as usize).saturating_sub(buttons_len) / 2;
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            ok_span,
            Span::raw(spacing),
            cancel_span,
        ]));

        if inner.height >= 4 {
            lines.push(Line::raw(""));
            let hints = Line::from(vec![
                Span::styled("←/→/Tab", Style::default().fg(Color::White)),
                Span::raw(": Select   "),
                Span::styled("Enter", Style::default().fg(Color::White)),
                Span::raw(": Confirm   "),
                Span::styled("Esc", Style::default().fg(Color::White)),
                Span::raw(": Cancel"),
            ])
            .fg(Color::DarkGray);
            lines.push(hints);
        }

        let para = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
        f.render_widget(para, inner);

        Ok(())
    }
}

impl PopupComponent for ConfirmPopup {}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_on_default_selection_confirms() {
        let mut popup = ConfirmPopup::new("Confirm", "Are You Sure?");
        let action = popup.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::PopupResult(PopupResult::Confirmed)));
    }

    #[test]
    fn toggled_selection_cancels() {
        let mut popup = ConfirmPopup::new("Confirm", "Are You Sure?");
        popup.handle_key_event(key(KeyCode::Tab)).unwrap();
        let action = popup.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::PopupResult(PopupResult::Cancelled)));
    }

    #[test]
    fn escape_always_cancels() {
        let mut popup = ConfirmPopup::new("Confirm", "Are You Sure?");
        let action = popup.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::PopupResult(PopupResult::Cancelled)));
    }
}
