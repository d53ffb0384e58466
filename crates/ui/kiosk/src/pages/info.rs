use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};
use site::PageKey;

use crate::{
    pages::Page,
    style::{Theme, default_dark_theme},
};

/// A static content page. Products, Services, About Us and Our Projects all
/// share this shape; only the heading and copy differ.
pub struct InfoPage {
    key: PageKey,
    copy: &'static str,
    theme: Theme,
}

impl InfoPage {
    pub fn new(key: PageKey) -> Self {
        let copy = match key {
            PageKey::Products => {
                "Everything we stock, from the everyday to the hard to find. \
                 Ask on the contact page if something is missing."
            }
            PageKey::Services => {
                "Repairs, installations and custom orders. Turnaround times \
                 vary by season."
            }
            PageKey::About => {
                "A small storefront run by a smaller team. We have been at \
                 the same corner since the doors first opened."
            }
            PageKey::Projects => {
                "A running list of the jobs we are proud of, newest first."
            }
            _ => "",
        };
        Self {
            key,
            copy,
            theme: default_dark_theme(),
        }
    }
}

impl Page for InfoPage {
    fn name(&self) -> &str {
        match self.key {
            PageKey::Products => "products",
            PageKey::Services => "services",
            PageKey::About => "about",
            PageKey::Projects => "projects",
            _ => "info",
        }
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

        let heading = Paragraph::new(Line::from(self.key.title()))
            .style(
                Style::default()
                    .fg(self.theme.roles.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(heading, rows[1]);

        let cols = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(60),
            Constraint::Fill(1),
        ])
        .split(rows[2]);
        let body = Paragraph::new(self.copy)
            .style(Style::default().fg(self.theme.roles.text))
            .wrap(Wrap { trim: true })
            .block(Block::default());
        frame.render_widget(body, cols[1]);

        Ok(())
    }
}
