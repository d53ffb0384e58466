//! Field validation predicates.
//!
//! Each predicate answers "is this value unacceptable?" so the form
//! controllers can hand the result straight to the validate protocol
//! (condition true -> show message, false -> clear it). Keeping them pure
//! makes the blur handlers one-liners and the edge cases unit-testable
//! without a terminal.

use regex::Regex;
use std::sync::LazyLock;

/// North-American style phone number: optional `+CC `, 3-digit area code with
/// optional parens, then `NNN-NNNN` with space/dot/dash separators. Plain
/// unseparated digit runs are rejected on purpose.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}$")
        .expect("invalid phone pattern")
});

/// Contact and first/last names need at least two characters.
pub fn name_too_short(value: &str) -> bool {
    value.len() < 2
}

/// An email must be at least 8 characters long and contain an `@`.
///
/// Both halves are required: `a@b.co` is too short even though it has an
/// `@`, and an 8-character value without one is still invalid.
pub fn email_invalid(value: &str) -> bool {
    value.len() < 8 || !value.contains('@')
}

/// A contact number must match [`static@PHONE_PATTERN`].
pub fn phone_invalid(value: &str) -> bool {
    !PHONE_PATTERN.is_match(value)
}

/// A contact message needs at least two characters.
pub fn message_too_short(value: &str) -> bool {
    value.len() < 2
}

/// Passwords need at least six characters.
pub fn password_too_short(value: &str) -> bool {
    value.len() < 6
}

/// The confirmation must equal the password's *current* value; the check is
/// re-run on blur so editing the password after confirming flags a mismatch.
pub fn passwords_mismatch(password: &str, confirm: &str) -> bool {
    password != confirm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lengths_zero_and_one_fail() {
        assert!(name_too_short(""));
        assert!(name_too_short("J"));
        assert!(!name_too_short("Jo"));
        assert!(!name_too_short("Joanna"));
    }

    #[test]
    fn short_email_with_at_sign_still_fails() {
        assert!(email_invalid("a@b.co"));
    }

    #[test]
    fn long_email_without_at_sign_fails() {
        assert!(email_invalid("abcdefgh"));
    }

    #[test]
    fn plausible_email_passes() {
        assert!(!email_invalid("test@x.com"));
    }

    #[test]
    fn separated_phone_numbers_pass() {
        assert!(!phone_invalid("555-555-5555"));
        assert!(!phone_invalid("(555) 555-5555"));
        assert!(!phone_invalid("+1 555 555 5555"));
        assert!(!phone_invalid("555.555.5555"));
    }

    #[test]
    fn unseparated_digit_run_fails() {
        assert!(phone_invalid("5555555555"));
    }

    #[test]
    fn obvious_garbage_phone_fails() {
        assert!(phone_invalid(""));
        assert!(phone_invalid("call me"));
        assert!(phone_invalid("555-55-5555"));
    }

    #[test]
    fn message_needs_two_characters() {
        assert!(message_too_short(""));
        assert!(message_too_short("x"));
        assert!(!message_too_short("hi"));
    }

    #[test]
    fn password_length_boundary() {
        assert!(password_too_short("12345"));
        assert!(!password_too_short("123456"));
    }

    #[test]
    fn confirm_tracks_the_current_password() {
        assert!(!passwords_mismatch("hunter2!", "hunter2!"));
        assert!(passwords_mismatch("hunter2!", "hunter2"));
        // Password edited after the confirmation was filled in.
        assert!(passwords_mismatch("hunter3!", "hunter2!"));
    }
}
