//! Site navigation bar.
//!
//! The link row is computed declaratively from two pieces of state: which
//! page is active and whether a user is logged in. A login inserts a
//! `usernameNav` entry immediately after the `contact` link (its target is a
//! no-op), hides the `login` link and shows `logout`. Nothing is cloned or
//! mutated in place; the render pass just reflects the state.

use color_eyre::Result;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use site::PageKey;

use crate::{action::Action, components::Component, style::Theme, style::default_dark_theme};

/// Fixed order of the page links. `contact` stays adjacent to the session
/// controls so the username entry lands between them.
const PAGE_LINKS: [PageKey; 6] = [
    PageKey::Home,
    PageKey::Products,
    PageKey::Services,
    PageKey::About,
    PageKey::Projects,
    PageKey::Contact,
];

/// One rendered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub active: bool,
}

pub struct NavBar {
    active: Option<PageKey>,
    session: Option<String>,
    theme: Theme,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            active: None,
            session: None,
            theme: default_dark_theme(),
        }
    }

    /// Mark the link whose id equals the page key as the active one.
    /// Reapplying the same mark is a no-op.
    pub fn set_active(&mut self, key: PageKey) {
        self.active = Some(key);
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// The full link row for the current state.
    pub fn entries(&self) -> Vec<NavEntry> {
        let mut entries: Vec<NavEntry> = PAGE_LINKS
            .iter()
            .map(|key| NavEntry {
                id: key.to_string(),
                label: key.title().to_string(),
                active: self.active == Some(*key),
            })
            .collect();

        if let Some(username) = &self.session {
            entries.push(NavEntry {
                id: "usernameNav".to_string(),
                label: username.clone(),
                active: false,
            });
            entries.push(NavEntry {
                id: "logout".to_string(),
                label: "Logout".to_string(),
                active: false,
            });
        } else {
            entries.push(NavEntry {
                id: "login".to_string(),
                label: "Login".to_string(),
                active: self.active == Some(PageKey::Login),
            });
        }

        entries.push(NavEntry {
            id: "register".to_string(),
            label: "Register".to_string(),
            active: self.active == Some(PageKey::Register),
        });

        entries
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NavBar {
    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::LoggedIn(username) => {
                self.session = Some(username);
            }
            Action::Navigate(key) => {
                self.set_active(key);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut spans: Vec<Span> = vec![
            Span::styled(
                " Storefront ",
                Style::default()
                    .fg(self.theme.roles.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for entry in self.entries() {
            let style = if entry.active {
                Style::default()
                    .fg(self.theme.roles.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if entry.id == "usernameNav" {
                Style::default().fg(self.theme.roles.accent)
            } else {
                Style::default().fg(self.theme.roles.subtle_text)
            };
            spans.push(Span::styled(entry.label, style));
            spans.push(Span::raw("  "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(nav: &NavBar) -> Vec<String> {
        nav.entries().into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn marking_the_active_link_is_idempotent() {
        let mut nav = NavBar::new();
        nav.set_active(PageKey::About);
        let once = nav.entries();
        nav.set_active(PageKey::About);
        assert_eq!(nav.entries(), once);
        assert!(once.iter().any(|e| e.id == "about" && e.active));
    }

    #[test]
    fn logged_out_shows_login_and_no_username() {
        let nav = NavBar::new();
        let ids = ids(&nav);
        assert!(ids.contains(&"login".to_string()));
        assert!(!ids.contains(&"logout".to_string()));
        assert!(!ids.contains(&"usernameNav".to_string()));
    }

    #[test]
    fn login_inserts_username_after_contact_and_swaps_controls() {
        let mut nav = NavBar::new();
        nav.update(Action::LoggedIn("alice".to_string())).unwrap();

        let entries = nav.entries();
        let contact_pos = entries.iter().position(|e| e.id == "contact").unwrap();
        let username = &entries[contact_pos + 1];
        assert_eq!(username.id, "usernameNav");
        assert_eq!(username.label, "alice");

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert!(!ids.contains(&"login"));
        assert!(ids.contains(&"logout"));
    }
}
