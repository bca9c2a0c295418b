//! Host and subdomain extraction from HTTP request headers.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Extracts the host name from the `Host` header, without the port.
///
/// Handles:
/// - IPv4 addresses (e.g., `192.168.1.1`)
/// - IPv6 addresses (e.g., `[::1]`)
/// - Hostnames with ports (e.g., `example.com:3000`)
///
/// The result is lowercased. Returns `None` if the header is missing or not
/// valid UTF-8.
pub fn extract_host(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?.trim();

    let host = if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    };

    if host.is_empty() {
        return None;
    }

    Some(host.to_ascii_lowercase())
}

/// Extracts the short code carried in a `{code}.{domain}` host.
///
/// When `base_domain` is set, only hosts directly under it qualify
/// (`597.drop-reg.cc` with base `drop-reg.cc`). Without it, any host with at
/// least three labels yields its first label.
///
/// Returns `None` for `www`, bare domains, `localhost` and IP literals.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_subdomain("597.drop-reg.cc", None), Some("597".into()));
/// assert_eq!(extract_subdomain("www.drop-reg.cc", None), None);
/// assert_eq!(extract_subdomain("127.0.0.1", None), None);
/// ```
pub fn extract_subdomain(host: &str, base_domain: Option<&str>) -> Option<String> {
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    if host.starts_with('[') || host.parse::<IpAddr>().is_ok() || host.contains("localhost") {
        return None;
    }

    let label = match base_domain {
        Some(base) => {
            let base = base.split(':').next().unwrap_or(base).to_ascii_lowercase();
            let prefix = host.strip_suffix(&base)?.strip_suffix('.')?;
            if prefix.is_empty() || prefix.contains('.') {
                return None;
            }
            prefix.to_string()
        }
        None => {
            let parts: Vec<&str> = host.split('.').collect();
            if parts.len() < 3 || parts[0].is_empty() {
                return None;
            }
            parts[0].to_string()
        }
    };

    if label == "www" {
        return None;
    }

    Some(label)
}
