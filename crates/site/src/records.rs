//! Session records.
//!
//! Both records are snapshots: a fresh value is built from the form fields on
//! every successful submission and replaces the previous one wholesale. There
//! is no history and no identity beyond "the last submission this session".
//! Validation is enforced upstream by the form controllers, never here.

use serde::{Deserialize, Serialize};

/// Captured on each successful contact-form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Captured on each successful registration submission.
///
/// `username` is always empty: the registration form does not collect one.
/// This is a tracked quirk of the form, kept as-is rather than silently
/// filled in (a username may be assigned by a later flow).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_default_to_empty_strings() {
        let contact = ContactRecord::default();
        assert_eq!(contact.name, "");
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.message, "");

        let user = UserRecord::default();
        assert_eq!(user.username, "");
        assert_eq!(user.password, "");
    }
}
