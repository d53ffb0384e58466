//! Path-to-page dispatch.
//!
//! The router owns one page instance per page key and tracks which one is
//! active. Paths are parsed by [`site::parse_page_key`]; an unrecognized
//! path surfaces as a [`site::RouteError`] carrying the derived key, which
//! the app reports instead of navigating.

use std::collections::HashMap;

use color_eyre::Result;
use site::{PageKey, RouteError, parse_page_key};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::pages::{ContactPage, HomePage, InfoPage, LoginPage, Page, RegisterPage};

pub struct Router {
    pages: HashMap<PageKey, Box<dyn Page>>,
    active: PageKey,
}

impl Router {
    /// Build the full page set, one entry per page key, starting on Home.
    pub fn new() -> Self {
        let mut pages: HashMap<PageKey, Box<dyn Page>> = HashMap::new();
        for key in PageKey::iter() {
            let page: Box<dyn Page> = match key {
                PageKey::Home => Box::new(HomePage::new()),
                PageKey::Products | PageKey::Services | PageKey::About | PageKey::Projects => {
                    Box::new(InfoPage::new(key))
                }
                PageKey::Contact => Box::new(ContactPage::new()),
                PageKey::Login => Box::new(LoginPage::new()),
                PageKey::Register => Box::new(RegisterPage::new()),
            };
            pages.insert(key, page);
        }
        Self {
            pages,
            active: PageKey::Home,
        }
    }

    pub fn active_key(&self) -> PageKey {
        self.active
    }

    pub fn active_mut(&mut self) -> &mut dyn Page {
        // Every key is inserted in new(), so the lookup cannot miss.
        self.pages
            .get_mut(&self.active)
            .expect("router holds a page for every key")
            .as_mut()
    }

    /// Visit every page, for bulk registration of handlers and theme.
    pub fn for_each_page(
        &mut self,
        mut f: impl FnMut(&mut dyn Page) -> Result<()>,
    ) -> Result<()> {
        for page in self.pages.values_mut() {
            f(page.as_mut())?;
        }
        Ok(())
    }

    /// Switch the active page, running the exit/enter hooks.
    pub fn navigate(&mut self, key: PageKey) -> Result<()> {
        debug!("navigate: {} -> {}", self.active, key);
        self.active_mut().on_exit()?;
        self.active = key;
        self.active_mut().on_enter()?;
        Ok(())
    }

    /// Resolve a raw path to a page key without navigating.
    pub fn resolve(path: &str) -> Result<PageKey, RouteError> {
        parse_page_key(path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_home_with_a_page_per_key() {
        let router = Router::new();
        assert_eq!(router.active_key(), PageKey::Home);
        assert_eq!(router.pages.len(), PageKey::iter().count());
    }

    #[test]
    fn navigate_switches_the_active_page() {
        let mut router = Router::new();
        router.navigate(PageKey::Contact).unwrap();
        assert_eq!(router.active_key(), PageKey::Contact);
        assert_eq!(router.active_mut().name(), "contact");
    }

    #[test]
    fn resolve_follows_the_path_parser() {
        assert_eq!(Router::resolve("/register.html").unwrap(), PageKey::Register);
        assert!(Router::resolve("/missing.html").is_err());
    }
}
