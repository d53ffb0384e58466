use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use site::PageKey;

use crate::{action::Action, components::Component, style::Theme, style::default_dark_theme};

/// Bottom status line: page title on the left (the tab-title analog of the
/// site), key hints on the right.
pub struct Footer {
    title: String,
    theme: Theme,
}

impl Footer {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            theme: default_dark_theme(),
        }
    }

    pub fn set_title(&mut self, key: PageKey) {
        self.title = key.title().to_string();
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Footer {
    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Navigate(key) = action {
            self.set_title(key);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let left = if self.title.is_empty() {
            " Storefront".to_string()
        } else {
            format!(" Storefront — {}", self.title)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                left,
                Style::default().fg(self.theme.roles.text),
            ))),
            cols[0],
        );

        let hints = Line::from(vec![
            Span::styled("Tab", Style::default().fg(self.theme.roles.subtle_text)),
            Span::styled(": next  ", Style::default().fg(self.theme.roles.muted)),
            Span::styled("Enter", Style::default().fg(self.theme.roles.subtle_text)),
            Span::styled(": submit  ", Style::default().fg(self.theme.roles.muted)),
            Span::styled("Ctrl-C", Style::default().fg(self.theme.roles.subtle_text)),
            Span::styled(": quit ", Style::default().fg(self.theme.roles.muted)),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), cols[1]);
        Ok(())
    }
}
