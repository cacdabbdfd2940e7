//! Form field checks shared by the login and register pages.
//!
//! These mirror the server's request schema so obviously bad input is caught
//! before a round trip.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name -> first error message for that field.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Loose address check: one `@`, non-empty local part, dotted domain, no
/// whitespace.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Record `message` for `field` unless it already has an error.
pub fn record(errors: &mut FieldErrors, field: &'static str, message: &str) {
    errors.entry(field).or_insert_with(|| message.to_owned());
}

/// Check a character count against `[min, max]`.
#[must_use]
pub fn char_len_within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}
