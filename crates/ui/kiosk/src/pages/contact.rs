use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    components::{Component, contact_form::ContactForm},
    pages::Page,
    style::{Theme, default_dark_theme},
    tui::Event,
};

/// Contact Us. A heading over the contact form; all behavior lives in the
/// form component.
pub struct ContactPage {
    form: ContactForm,
    theme: Theme,
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            theme: default_dark_theme(),
        }
    }
}

impl Default for ContactPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for ContactPage {
    fn name(&self) -> &str {
        "contact"
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.form.register_action_handler(tx)
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme.clone();
        self.form.register_theme(theme)
    }

    fn init(&mut self, area: Size) -> Result<()> {
        self.form.init(area)
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        self.form.handle_events(event)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        self.form.update(action)
    }

    fn on_enter(&mut self) -> Result<()> {
        // Entering the page puts the cursor in the name field with its
        // content selected.
        self.form.init(Size::default())
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let heading = Paragraph::new(Line::from("Contact Us"))
            .style(
                Style::default()
                    .fg(self.theme.roles.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(heading, rows[1]);

        self.form.draw(frame, rows[2])
    }
}
