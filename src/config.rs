//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time from `TRASTEROS_API_URL`.
//! When unset, requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL, without a trailing slash requirement.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("TRASTEROS_API_URL").unwrap_or("")
}

/// Join `base` and `path` with exactly one `/` between them.
#[must_use]
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Path of the plan endpoint for `tenant`.
#[must_use]
pub fn plan_path(tenant: &str) -> String {
    format!("/api/tenants/{}/plan", encode_segment(tenant))
}

/// Path of the reservation endpoint for `tenant`.
#[must_use]
pub fn reservations_path(tenant: &str) -> String {
    format!("/api/tenants/{}/reservations", encode_segment(tenant))
}

/// Percent-encode a single path segment. Unreserved characters pass through.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.trim().bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
