//! Page keys and path parsing.
//!
//! Page identity is derived from a URL-style path: strip one leading `/` and
//! the trailing 5-character extension (`.html`), then match the remainder
//! against the fixed set of recognized keys. Anything else is a diagnostic,
//! never a crash; the shell keeps running with no page-specific wiring.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Length of the fixed page extension, including the dot (`.html`).
const EXTENSION_LEN: usize = 5;

/// The eight recognized pages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Home,
    Products,
    Services,
    About,
    Contact,
    Projects,
    Login,
    Register,
}

impl PageKey {
    /// Title shown in the kiosk header, mirroring the per-page tab titles.
    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Home => "Home",
            PageKey::Products => "Products",
            PageKey::Services => "Services",
            PageKey::About => "About Us",
            PageKey::Contact => "Contact Us",
            PageKey::Projects => "Projects",
            PageKey::Login => "Login",
            PageKey::Register => "Register",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The derived key matched none of the recognized pages. Carries the key
    /// so the caller can log a useful diagnostic.
    #[error("unrecognized page key {key:?} (from path {path:?})")]
    Unrecognized { key: String, path: String },
}

/// Derive a [`PageKey`] from a path such as `/contact.html`.
///
/// Parsing assumes the fixed-length extension. A path that does not end in a
/// 5-character extension yields a garbled key and therefore an
/// [`RouteError::Unrecognized`]; that is deliberate and matches how the site
/// treats any unknown path.
pub fn parse_page_key(path: &str) -> Result<PageKey, RouteError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let end = trimmed.len().saturating_sub(EXTENSION_LEN);
    // `get` keeps a multibyte tail from slicing mid-character.
    let key = trimmed.get(..end).unwrap_or("");

    PageKey::from_str(key).map_err(|_| RouteError::Unrecognized {
        key: key.to_string(),
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn every_recognized_page_parses_from_its_path() {
        for key in PageKey::iter() {
            let path = format!("/{key}.html");
            assert_eq!(parse_page_key(&path), Ok(key), "path {path}");
        }
    }

    #[test]
    fn keys_serialize_lowercase() {
        assert_eq!(PageKey::About.to_string(), "about");
        assert_eq!("register".parse::<PageKey>(), Ok(PageKey::Register));
    }

    #[test]
    fn unknown_page_is_a_diagnostic_not_a_panic() {
        let err = parse_page_key("/missing.html").unwrap_err();
        assert_eq!(
            err,
            RouteError::Unrecognized {
                key: "missing".into(),
                path: "/missing.html".into(),
            }
        );
    }

    #[test]
    fn path_without_full_extension_yields_unrecognized() {
        // Shorter than the fixed extension: the derived key is empty.
        let err = parse_page_key("/x").unwrap_err();
        assert!(matches!(err, RouteError::Unrecognized { ref key, .. } if key.is_empty()));
    }

    #[test]
    fn wrong_extension_garbles_the_key() {
        // Fixed-length stripping does not inspect the suffix; "/contact.htm"
        // derives "contac" and must not match.
        assert!(parse_page_key("/contact.htm").is_err());
    }

    #[test]
    fn leading_separator_is_optional() {
        assert_eq!(parse_page_key("login.html"), Ok(PageKey::Login));
    }
}
