use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for form field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,
    #[error("username cannot be empty")]
    EmptyUsername,
    #[error("invalid username: {0}")]
    InvalidUsername(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("answer Yes or No, got: {0}")]
    InvalidYesNo(String),
}

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid hardcoded regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid hardcoded regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid hardcoded regex"));

/// Validates a username: non-empty, letters, digits and `@.+-_` only.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    match username {
        "" => Err(ValidationError::EmptyUsername),
        s if USERNAME_RE.is_match(s) => Ok(()),
        _ => Err(ValidationError::InvalidUsername(username.to_string())),
    }
}

/// Validates an email address (shape check only; the backend is authoritative).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates an http(s) URL.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(url.to_string()))
    }
}

/// Normalizes a Yes/No answer to its canonical capitalization.
pub fn normalize_yes_no(answer: &str) -> Result<&'static str, ValidationError> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok("Yes"),
        "no" => Ok("No"),
        _ => Err(ValidationError::InvalidYesNo(answer.to_string())),
    }
}

/// Splits a comma-separated entry into trimmed, non-empty items.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
