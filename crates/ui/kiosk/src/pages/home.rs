use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
};
use site::PageKey;
use tui_big_text::{BigText, PixelSize};

use crate::{
    action::Action,
    pages::Page,
    style::{Theme, default_dark_theme},
    tui::Event,
};

/// Share of ongoing work shown on the landing page.
const PROJECTS_PROGRESS: u16 = 37;

/// The landing page: headline, current-projects gauge and a single control
/// that jumps to the projects page.
pub struct HomePage {
    theme: Theme,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            theme: default_dark_theme(),
        }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for HomePage {
    fn name(&self) -> &str {
        "home"
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        if let Some(Event::Key(KeyEvent {
            code: KeyCode::Enter,
            ..
        })) = event
        {
            return Ok(Some(Action::Navigate(PageKey::Projects)));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(8),  // headline
            Constraint::Length(2),  // tagline
            Constraint::Length(3),  // gauge
            Constraint::Length(1),
            Constraint::Length(1),  // view-projects control
            Constraint::Fill(2),
        ])
        .split(area);

        let banner = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(Style::default().fg(self.theme.roles.primary))
            .lines(vec!["Storefront".into()])
            .centered()
            .build();
        frame.render_widget(banner, rows[1]);

        let tagline = Paragraph::new(Line::from(
            "Welcome. Browse the pages above, or get in touch via Contact Us.",
        ))
        .style(Style::default().fg(self.theme.roles.subtle_text))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, rows[2]);

        let cols = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(50),
            Constraint::Fill(1),
        ])
        .split(rows[3]);
        let gauge = Gauge::default()
            .block(Block::bordered().title("Current Projects"))
            .gauge_style(Style::default().fg(self.theme.roles.accent))
            .percent(PROJECTS_PROGRESS);
        frame.render_widget(gauge, cols[1]);

        let button = Paragraph::new(Line::from(Span::styled(
            "[ View Projects ]",
            Style::default()
                .fg(self.theme.roles.inverted_text)
                .bg(self.theme.roles.primary)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, rows[5]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    #[test]
    fn enter_jumps_to_the_projects_page() {
        let mut page = HomePage::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let action = page.handle_events(Some(event)).unwrap();
        assert_eq!(action, Some(Action::Navigate(PageKey::Projects)));
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut page = HomePage::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(page.handle_events(Some(event)).unwrap(), None);
    }
}
