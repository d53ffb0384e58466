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
    components::{Component, login_form::LoginForm},
    pages::Page,
    style::{Theme, default_dark_theme},
    tui::Event,
};

pub struct LoginPage {
    form: LoginForm,
    theme: Theme,
}

impl LoginPage {
    pub fn new() -> Self {
        Self {
            form: LoginForm::new(),
            theme: default_dark_theme(),
        }
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for LoginPage {
    fn name(&self) -> &str {
        "login"
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
        self.form.init(Size::default())
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let heading = Paragraph::new(Line::from("Login"))
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
