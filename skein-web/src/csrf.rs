//! Cross-site request forgery protection names shared between the
//! generated scripts and the serving layer.
//!
//! The serving layer issues the cookie and checks the header on mutating
//! requests; generated scripts echo the cookie value back in the header.

/// Cookie carrying the CSRF token.
pub const COOKIE: &str = "skein";

/// Request header the scripts copy the token into.
pub const HEADER: &str = "X-Skein-Csrf";

/// Expression fragment reading the token out of `document.cookie`.
pub fn cookie_token() -> String {
    format!(
        "document.cookie.split('; ').find(c => c.startsWith('{COOKIE}=')).substring({})",
        COOKIE.len() + 1
    )
}
