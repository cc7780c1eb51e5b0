use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::forms::field::{FieldDescriptor, FieldError, FieldKind};

// Structural check only; consecutive dots and the like are accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-()+\s]+$").unwrap());

const MIN_PHONE_DIGITS: usize = 10;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value) && value.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

pub fn meets_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Checks one value against its descriptor.
///
/// The value is trimmed first. A required field that is empty fails before any
/// type-specific check runs; an empty optional field always passes.
pub fn check(descriptor: &FieldDescriptor, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return if descriptor.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match descriptor.kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        FieldKind::Url if !is_valid_url(value) => Err(FieldError::InvalidUrl),
        FieldKind::Email | FieldKind::Tel | FieldKind::Url => Ok(()),
        FieldKind::Text | FieldKind::Password | FieldKind::Other => match descriptor.min_length {
            Some(min) if !meets_min_length(value, min) => Err(FieldError::TooShort(min)),
            _ => Ok(()),
        },
    }
}
