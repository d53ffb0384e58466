use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use super::Component;
use crate::{
    action::Action,
    components::form::FormField,
    style::{Theme, default_dark_theme},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Username,
    Password,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::Submit,
            Focus::Password => Focus::Username,
            Focus::Submit => Focus::Password,
        }
    }
}

/// The login form. There is no credential check and no blur validation;
/// submitting announces the typed username as the session and resets the
/// fields.
pub struct LoginForm {
    tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    username: FormField,
    password: FormField,
    focus: Focus,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            tx: None,
            theme: default_dark_theme(),
            username: FormField::new("Username"),
            password: FormField::new("Password").secret(),
            focus: Focus::Username,
        }
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut FormField> {
        match focus {
            Focus::Username => Some(&mut self.username),
            Focus::Password => Some(&mut self.password),
            Focus::Submit => None,
        }
    }

    fn submit(&mut self) -> Result<Option<Action>> {
        let username = self.username.value().to_string();
        info!("logged in as {username:?}");

        self.username.reset();
        self.password.reset();
        self.focus = Focus::Username;
        self.username.focus();

        Ok(Some(Action::LoggedIn(username)))
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoginForm {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.tx = Some(tx);
        Ok(())
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn init(&mut self, _area: Size) -> Result<()> {
        self.focus = Focus::Username;
        self.username.focus();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                if let Some(field) = self.field_mut(self.focus) {
                    field.focus();
                }
                Ok(None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                if let Some(field) = self.field_mut(self.focus) {
                    field.focus();
                }
                Ok(None)
            }
            KeyCode::Enter => self.submit(),
            _ => {
                if let Some(field) = self.field_mut(self.focus) {
                    field.handle_key(key);
                }
                Ok(None)
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame, body: Rect) -> Result<()> {
        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(50),
            Constraint::Fill(1),
        ])
        .split(body);
        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1),
            Constraint::Length(1), // submit
            Constraint::Fill(1),
        ]);
        let [_, username, password, _, submit, _] = vertical.areas(horizontal[1]);

        self.username
            .render(frame, username, self.focus == Focus::Username, &self.theme);
        self.password
            .render(frame, password, self.focus == Focus::Password, &self.theme);

        let style = if self.focus == Focus::Submit {
            Style::default()
                .fg(self.theme.roles.inverted_text)
                .bg(self.theme.roles.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.roles.subtle_text)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("[ Login ]", style))).centered(),
            submit,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut LoginForm, s: &str) {
        for c in s.chars() {
            form.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn submit_announces_the_username_and_resets() {
        let mut form = LoginForm::new();
        type_str(&mut form, "alice");
        form.handle_key_event(key(KeyCode::Tab)).unwrap();
        type_str(&mut form, "whatever");

        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::LoggedIn("alice".to_string())));
        assert_eq!(form.username.value(), "");
        assert_eq!(form.password.value(), "");
    }

    #[test]
    fn any_password_is_accepted() {
        let mut form = LoginForm::new();
        type_str(&mut form, "bob");
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::LoggedIn("bob".to_string())));
    }
}
