use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use site::{UserRecord, rules};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use super::Component;
use crate::{
    action::Action,
    components::form::{ErrorBanner, FormField, validate},
    style::{Theme, default_dark_theme},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    FirstName,
    LastName,
    Email,
    Password,
    Confirm,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::FirstName => Focus::LastName,
            Focus::LastName => Focus::Email,
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Confirm,
            Focus::Confirm => Focus::Submit,
            Focus::Submit => Focus::FirstName,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::FirstName => Focus::Submit,
            Focus::LastName => Focus::FirstName,
            Focus::Email => Focus::LastName,
            Focus::Password => Focus::Email,
            Focus::Confirm => Focus::Password,
            Focus::Submit => Focus::Confirm,
        }
    }
}

/// The registration form. Blur checks advise but never block: the submit
/// commits whatever is present, with the username deliberately left empty
/// for the account-setup step that follows registration.
pub struct RegisterForm {
    tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    first_name: FormField,
    last_name: FormField,
    email: FormField,
    password: FormField,
    confirm: FormField,
    banner: ErrorBanner,
    focus: Focus,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            tx: None,
            theme: default_dark_theme(),
            first_name: FormField::new("First Name"),
            last_name: FormField::new("Last Name"),
            email: FormField::new("Email Address"),
            password: FormField::new("Password").secret(),
            confirm: FormField::new("Confirm Password").secret(),
            banner: ErrorBanner::new(),
            focus: Focus::FirstName,
        }
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut FormField> {
        match focus {
            Focus::FirstName => Some(&mut self.first_name),
            Focus::LastName => Some(&mut self.last_name),
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Confirm => Some(&mut self.confirm),
            Focus::Submit => None,
        }
    }

    fn blur_check(&mut self, leaving: Focus) -> bool {
        match leaving {
            Focus::FirstName => {
                let failed = rules::name_too_short(self.first_name.value());
                validate(
                    &mut self.first_name,
                    &mut self.banner,
                    failed,
                    "First Name is Too Short",
                )
            }
            Focus::LastName => {
                let failed = rules::name_too_short(self.last_name.value());
                validate(
                    &mut self.last_name,
                    &mut self.banner,
                    failed,
                    "last Name is Too Short",
                )
            }
            Focus::Email => {
                let failed = rules::email_invalid(self.email.value());
                validate(
                    &mut self.email,
                    &mut self.banner,
                    failed,
                    "Invalid Email Address",
                )
            }
            Focus::Password => {
                let failed = rules::password_too_short(self.password.value());
                validate(
                    &mut self.password,
                    &mut self.banner,
                    failed,
                    "password is Too Short",
                )
            }
            Focus::Confirm => {
                let failed =
                    rules::passwords_mismatch(self.password.value(), self.confirm.value());
                validate(
                    &mut self.confirm,
                    &mut self.banner,
                    failed,
                    "passwords do not match",
                )
            }
            Focus::Submit => false,
        }
    }

    fn move_focus(&mut self, target: Focus) {
        if self.blur_check(self.focus) {
            return;
        }
        self.focus = target;
        if let Some(field) = self.field_mut(target) {
            field.focus();
        }
    }

    /// Commit the registration. No validity gate: the blur checks are
    /// advisory and the submit path takes the values as they stand.
    fn submit(&mut self) -> Result<Option<Action>> {
        let record = UserRecord {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            // Registration collects no username; the field stays empty in
            // the committed record.
            username: String::new(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        };

        info!("First Name: {}", record.first_name);
        info!("Last Name: {}", record.last_name);
        info!("Email Address: {}", record.email);

        self.clear_form();
        Ok(Some(Action::UserRegistered(record)))
    }

    fn clear_form(&mut self) {
        self.first_name.reset();
        self.last_name.reset();
        self.email.reset();
        self.password.reset();
        self.confirm.reset();
        self.banner.hide();
        self.focus = Focus::FirstName;
        self.first_name.focus();
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RegisterForm {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.tx = Some(tx);
        Ok(())
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn init(&mut self, _area: Size) -> Result<()> {
        self.banner.hide();
        self.focus = Focus::FirstName;
        self.first_name.focus();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(self.focus.next());
                Ok(None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(self.focus.prev());
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
            Constraint::Length(1), // banner
            Constraint::Length(1),
            Constraint::Length(3), // first name
            Constraint::Length(3), // last name
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(3), // confirm
            Constraint::Length(1),
            Constraint::Length(1), // submit
            Constraint::Fill(1),
        ]);
        let [banner, _, first, last, email, password, confirm, _, submit, _] =
            vertical.areas(horizontal[1]);

        self.banner.render(frame, banner, &self.theme);
        self.first_name
            .render(frame, first, self.focus == Focus::FirstName, &self.theme);
        self.last_name
            .render(frame, last, self.focus == Focus::LastName, &self.theme);
        self.email
            .render(frame, email, self.focus == Focus::Email, &self.theme);
        self.password
            .render(frame, password, self.focus == Focus::Password, &self.theme);
        self.confirm
            .render(frame, confirm, self.focus == Focus::Confirm, &self.theme);

        let style = if self.focus == Focus::Submit {
            Style::default()
                .fg(self.theme.roles.inverted_text)
                .bg(self.theme.roles.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.roles.subtle_text)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("[ Register ]", style))).centered(),
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

    fn type_str(form: &mut RegisterForm, s: &str) {
        for c in s.chars() {
            form.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn tab(form: &mut RegisterForm) {
        form.handle_key_event(key(KeyCode::Tab)).unwrap();
    }

    #[test]
    fn blur_messages_follow_the_field_left() {
        let mut form = RegisterForm::new();
        type_str(&mut form, "J");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("First Name is Too Short"));

        type_str(&mut form, "Jo");
        tab(&mut form);
        type_str(&mut form, "D");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("last Name is Too Short"));
    }

    #[test]
    fn short_password_blur_shows_message() {
        let mut form = RegisterForm::new();
        type_str(&mut form, "Jo");
        tab(&mut form);
        type_str(&mut form, "Do");
        tab(&mut form);
        type_str(&mut form, "test@x.com");
        tab(&mut form);
        type_str(&mut form, "12345");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("password is Too Short"));
    }

    #[test]
    fn mismatched_confirmation_blur_shows_message() {
        let mut form = RegisterForm::new();
        type_str(&mut form, "Jo");
        tab(&mut form);
        type_str(&mut form, "Do");
        tab(&mut form);
        type_str(&mut form, "test@x.com");
        tab(&mut form);
        type_str(&mut form, "secret1");
        tab(&mut form);
        type_str(&mut form, "secret2");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("passwords do not match"));
        assert_eq!(form.focus, Focus::Confirm);
    }

    #[test]
    fn submit_commits_with_an_empty_username() {
        let mut form = RegisterForm::new();
        type_str(&mut form, "Jo");
        tab(&mut form);
        type_str(&mut form, "Doe");
        tab(&mut form);
        type_str(&mut form, "test@x.com");
        tab(&mut form);
        type_str(&mut form, "secret1");
        tab(&mut form);
        type_str(&mut form, "secret1");

        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            Some(Action::UserRegistered(UserRecord {
                first_name: "Jo".into(),
                last_name: "Doe".into(),
                username: String::new(),
                email: "test@x.com".into(),
                password: "secret1".into(),
            }))
        );
        assert_eq!(form.first_name.value(), "");
        assert!(!form.banner.is_visible());
    }

    #[test]
    fn submit_is_not_blocked_by_failing_checks() {
        let mut form = RegisterForm::new();
        type_str(&mut form, "J");
        // Everything else empty, nothing validated. The commit still happens.
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            Some(Action::UserRegistered(UserRecord {
                first_name: "J".into(),
                last_name: String::new(),
                username: String::new(),
                email: String::new(),
                password: String::new(),
            }))
        );
    }
}
