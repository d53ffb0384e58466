//! Domain core for the Storefront site.
//!
//! Everything in here is UI-agnostic: page keys and route parsing, the two
//! session records, and the field validation predicates the form controllers
//! evaluate on blur. The kiosk crate owns presentation and event wiring.

pub mod records;
pub mod routes;
pub mod rules;

pub use records::{ContactRecord, UserRecord};
pub use routes::{PageKey, RouteError, parse_page_key};
