use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use site::{ContactRecord, rules};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use super::Component;
use crate::{
    action::{Action, PopupResult},
    components::form::{ErrorBanner, FormField, validate},
    style::{Theme, default_dark_theme},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Email,
    Phone,
    Message,
    Submit,
    Reset,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Phone,
            Focus::Phone => Focus::Message,
            Focus::Message => Focus::Submit,
            Focus::Submit => Focus::Reset,
            Focus::Reset => Focus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Reset,
            Focus::Email => Focus::Name,
            Focus::Phone => Focus::Email,
            Focus::Message => Focus::Phone,
            Focus::Submit => Focus::Message,
            Focus::Reset => Focus::Submit,
        }
    }
}

/// The contact form: name, email, phone and message fields with blur
/// validation, a submit gated by native validity, and a reset guarded by a
/// confirmation popup.
pub struct ContactForm {
    tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    name: FormField,
    email: FormField,
    phone: FormField,
    message: FormField,
    banner: ErrorBanner,
    focus: Focus,
    /// A reset confirmation popup is open; the next PopupResult is ours.
    reset_pending: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            tx: None,
            theme: default_dark_theme(),
            name: FormField::new("Contact Name"),
            email: FormField::new("Email Address"),
            phone: FormField::new("Contact Number"),
            message: FormField::new("Message"),
            banner: ErrorBanner::new(),
            focus: Focus::Name,
            reset_pending: false,
        }
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut FormField> {
        match focus {
            Focus::Name => Some(&mut self.name),
            Focus::Email => Some(&mut self.email),
            Focus::Phone => Some(&mut self.phone),
            Focus::Message => Some(&mut self.message),
            Focus::Submit | Focus::Reset => None,
        }
    }

    /// Run the blur check for the field being left. Returns true if it
    /// failed, in which case focus stays put (the field re-selects itself).
    fn blur_check(&mut self, leaving: Focus) -> bool {
        match leaving {
            Focus::Name => {
                let failed = rules::name_too_short(self.name.value());
                validate(
                    &mut self.name,
                    &mut self.banner,
                    failed,
                    "Contact Name is Too Short",
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
            Focus::Phone => {
                let failed = rules::phone_invalid(self.phone.value());
                validate(
                    &mut self.phone,
                    &mut self.banner,
                    failed,
                    "Invalid Contact Number",
                )
            }
            Focus::Message => {
                let failed = rules::message_too_short(self.message.value());
                validate(
                    &mut self.message,
                    &mut self.banner,
                    failed,
                    "Contact Message Too Short",
                )
            }
            Focus::Submit | Focus::Reset => false,
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

    /// The native-validity gate: all four fields are required, the phone
    /// carries its pattern constraint. Custom blur messages play no part
    /// here; this is the sole gate before the commit.
    fn native_validity(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !rules::phone_invalid(self.phone.value())
            && !self.message.is_empty()
    }

    fn submit(&mut self) -> Result<Option<Action>> {
        if !self.native_validity() {
            debug!("contact form not valid");
            return Ok(None);
        }

        let record = ContactRecord {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            phone: self.phone.value().to_string(),
            message: self.message.value().to_string(),
        };

        info!("Contact Name: {}", record.name);
        info!("Email Address: {}", record.email);
        info!("Contact Number: {}", record.phone);
        info!("Contact Message: {}", record.message);

        self.clear_form();
        Ok(Some(Action::ContactSubmitted(record)))
    }

    fn clear_form(&mut self) {
        self.name.reset();
        self.email.reset();
        self.phone.reset();
        self.message.reset();
        self.banner.hide();
        self.focus = Focus::Name;
        self.name.focus();
    }

    #[cfg(test)]
    fn values(&self) -> [&str; 4] {
        [
            self.name.value(),
            self.email.value(),
            self.phone.value(),
            self.message.value(),
        ]
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.tx = Some(tx);
        Ok(())
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn init(&mut self, _area: Size) -> Result<()> {
        // The name field starts focused with its content selected.
        self.banner.hide();
        self.focus = Focus::Name;
        self.name.focus();
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
            KeyCode::Enter => {
                if self.focus == Focus::Reset {
                    self.reset_pending = true;
                    return Ok(Some(Action::ConfirmReset));
                }
                self.submit()
            }
            _ => {
                if let Some(field) = self.field_mut(self.focus) {
                    field.handle_key(key);
                }
                Ok(None)
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::PopupResult(result) = action {
            if self.reset_pending {
                self.reset_pending = false;
                // Only an explicit confirmation clears the form; declining
                // leaves every value untouched.
                if result == PopupResult::Confirmed {
                    self.clear_form();
                }
            }
        }
        Ok(None)
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
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // phone
            Constraint::Length(3), // message
            Constraint::Length(1),
            Constraint::Length(1), // buttons
            Constraint::Fill(1),
        ]);
        let [banner, _, name, email, phone, message, _, buttons, _] =
            vertical.areas(horizontal[1]);

        self.banner.render(frame, banner, &self.theme);
        self.name
            .render(frame, name, self.focus == Focus::Name, &self.theme);
        self.email
            .render(frame, email, self.focus == Focus::Email, &self.theme);
        self.phone
            .render(frame, phone, self.focus == Focus::Phone, &self.theme);
        self.message
            .render(frame, message, self.focus == Focus::Message, &self.theme);

        let button_style = |focused: bool| {
            if focused {
                Style::default()
                    .fg(self.theme.roles.inverted_text)
                    .bg(self.theme.roles.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.roles.subtle_text)
            }
        };
        let row = Line::from(vec![
            Span::styled("[ Send Message ]", button_style(self.focus == Focus::Submit)),
            Span::raw("   "),
            Span::styled("[ Reset ]", button_style(self.focus == Focus::Reset)),
        ]);
        frame.render_widget(Paragraph::new(row).centered(), buttons);

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

    fn type_str(form: &mut ContactForm, s: &str) {
        for c in s.chars() {
            form.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn tab(form: &mut ContactForm) {
        form.handle_key_event(key(KeyCode::Tab)).unwrap();
    }

    fn fill_valid(form: &mut ContactForm) {
        type_str(form, "Jack Ingram");
        tab(form);
        type_str(form, "test@x.com");
        tab(form);
        type_str(form, "555-555-5555");
        tab(form);
        type_str(form, "Hello there");
    }

    #[test]
    fn short_name_blur_shows_message_and_keeps_focus() {
        let mut form = ContactForm::new();
        type_str(&mut form, "J");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("Contact Name is Too Short"));
        assert!(form.name.invalid);
        assert_eq!(form.focus, Focus::Name);
        // The field re-selected itself, so typing replaces the content.
        type_str(&mut form, "Jo");
        assert_eq!(form.name.value(), "Jo");
    }

    #[test]
    fn valid_name_blur_clears_the_message() {
        let mut form = ContactForm::new();
        type_str(&mut form, "J");
        tab(&mut form);
        type_str(&mut form, "Jo");
        tab(&mut form);
        assert!(!form.banner.is_visible());
        assert!(!form.name.invalid);
        assert_eq!(form.focus, Focus::Email);
    }

    #[test]
    fn email_and_phone_blur_messages() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jo");
        tab(&mut form);
        type_str(&mut form, "a@b.co");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("Invalid Email Address"));

        type_str(&mut form, "test@x.com");
        tab(&mut form);
        type_str(&mut form, "5555555555");
        tab(&mut form);
        assert_eq!(form.banner.message(), Some("Invalid Contact Number"));
    }

    #[test]
    fn submit_with_valid_fields_captures_and_clears() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert_eq!(
            action,
            Some(Action::ContactSubmitted(ContactRecord {
                name: "Jack Ingram".into(),
                email: "test@x.com".into(),
                phone: "555-555-5555".into(),
                message: "Hello there".into(),
            }))
        );
        assert_eq!(form.values(), ["", "", "", ""]);
        assert!(!form.banner.is_visible());
    }

    #[test]
    fn submit_with_failing_native_validity_is_suppressed() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jack Ingram");
        // Email, phone and message left empty: required check fails.
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
        // The form stays populated for correction.
        assert_eq!(form.name.value(), "Jack Ingram");
    }

    #[test]
    fn unseparated_phone_fails_the_pattern_gate() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Jack Ingram");
        tab(&mut form);
        type_str(&mut form, "test@x.com");
        tab(&mut form);
        type_str(&mut form, "5555555555");
        // Jump straight to submit without blurring the phone field.
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn reset_asks_for_confirmation_first() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        tab(&mut form); // message -> submit
        tab(&mut form); // submit -> reset
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ConfirmReset));
        // Nothing cleared yet.
        assert_eq!(form.name.value(), "Jack Ingram");
    }

    #[test]
    fn declining_the_reset_leaves_values_unchanged() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        tab(&mut form);
        tab(&mut form);
        form.handle_key_event(key(KeyCode::Enter)).unwrap();
        form.update(Action::PopupResult(PopupResult::Cancelled))
            .unwrap();
        assert_eq!(
            form.values(),
            ["Jack Ingram", "test@x.com", "555-555-5555", "Hello there"]
        );
    }

    #[test]
    fn confirming_the_reset_clears_the_form() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        tab(&mut form);
        tab(&mut form);
        form.handle_key_event(key(KeyCode::Enter)).unwrap();
        form.update(Action::PopupResult(PopupResult::Confirmed))
            .unwrap();
        assert_eq!(form.values(), ["", "", "", ""]);
        assert!(!form.banner.is_visible());
    }

    #[test]
    fn stray_popup_results_are_ignored() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        form.update(Action::PopupResult(PopupResult::Confirmed))
            .unwrap();
        assert_eq!(form.name.value(), "Jack Ingram");
    }
}
