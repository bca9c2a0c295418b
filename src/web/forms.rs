//! Form bodies posted by the dashboard pages.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Strips surrounding whitespace before the length bounds are checked.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// `POST /register` body.
///
/// Missing fields deserialize as empty strings so that they are reported as
/// validation errors rather than as a malformed body. Both fields are trimmed
/// on the way in.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 64, message = "Short code is too long"))]
    pub short_code: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 256, message = "Discord URL is too long"))]
    pub discord_url: String,
}

/// `POST /delete` body.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 64, message = "Short code is too long"))]
    pub short_code: String,
}
