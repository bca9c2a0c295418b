//! Short code normalization and validation.

use url::Url;

use crate::error::AppError;

/// Codes whose `/{code}` path is already taken by a fixed route.
pub const RESERVED_CODES: &[&str] = &["assets", "dashboard", "delete", "register"];

/// Trims surrounding whitespace and lowercases the code.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_code("  AbC "), "abc");
/// ```
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates an already normalized short code.
///
/// # Rules
///
/// - Must not be empty
/// - Must fit in one path segment: no `/`, and not `.` or `..`
/// - Cannot be the path of a fixed route
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request("Short code is required"));
    }

    if code.contains('/') || code == "." || code == ".." {
        return Err(AppError::bad_request(
            "Short code must be a single path segment",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(format!(
            "The short code '{code}' is reserved"
        )));
    }

    Ok(())
}

/// Public short link for `code`, percent-encoded as a path segment.
pub fn short_url(public_url: &str, code: &str) -> String {
    let Ok(mut url) = Url::parse(public_url) else {
        return format!("{public_url}/{code}");
    };

    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().push(code);
        }
        Err(()) => return format!("{public_url}/{code}"),
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_code("  AbC\t"), "abc");
        assert_eq!(normalize_code("597"), "597");
        assert_eq!(normalize_code("   "), "");
    }

    #[test]
    fn test_validate_accepts_plain_codes() {
        assert!(validate_code("597").is_ok());
        assert!(validate_code("helldivers").is_ok());
        assert!(validate_code("my-server_2").is_ok());
    }

    #[test]
    fn test_validate_accepts_punctuation_and_spaces() {
        for code in ["my.server", "a b", "100%", "a?b", "a#b", "a\\b", "auth", "www"] {
            assert!(validate_code(code).is_ok(), "{code:?} should be valid");
        }
    }

    #[test]
    fn test_validate_empty_string() {
        let err = validate_code("").unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_validate_rejects_multi_segment_codes() {
        for code in ["a/b", "/", ".", ".."] {
            assert!(validate_code(code).is_err(), "{code:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_short_url() {
        assert_eq!(short_url("https://drop-reg.cc", "597"), "https://drop-reg.cc/597");
        assert_eq!(
            short_url("https://drop-reg.cc", "my.server"),
            "https://drop-reg.cc/my.server"
        );
        assert_eq!(short_url("https://drop-reg.cc", "a b"), "https://drop-reg.cc/a%20b");
        assert_eq!(short_url("https://drop-reg.cc", "100%"), "https://drop-reg.cc/100%25");
        assert_eq!(short_url("https://drop-reg.cc", "a?b#c"), "https://drop-reg.cc/a%3Fb%23c");
        assert_eq!(
            short_url("http://localhost:8080", "597"),
            "http://localhost:8080/597"
        );
    }
}
