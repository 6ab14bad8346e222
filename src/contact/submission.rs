use serde_json::{Map, Value};

use crate::core::models::SubmissionRequest;

/// Body keys that may hold the reCAPTCHA token, highest priority first.
pub const TOKEN_ALIASES: &[&str] = &["recaptcha_token", "token", "g-recaptcha-response"];

fn trimmed_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Token from the first alias holding a non-blank string. Passed on untrimmed.
#[must_use]
pub fn find_token(body: &Map<String, Value>) -> Option<String> {
    TOKEN_ALIASES.iter().find_map(|alias| {
        body.get(*alias)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

/// Pull the four required fields out of a contact form body.
///
/// Returns `None` if any of them is missing, blank, or not a string.
#[must_use]
pub fn extract_submission(body: &Map<String, Value>) -> Option<SubmissionRequest> {
    Some(SubmissionRequest {
        name: trimmed_field(body, "name")?,
        email: trimmed_field(body, "email")?,
        message: trimmed_field(body, "message")?,
        verification_token: find_token(body)?,
    })
}
