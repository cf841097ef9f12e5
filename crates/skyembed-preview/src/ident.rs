//! AT Protocol identifier syntax checks.
//!
//! Both checks are pure and never touch the network; they gate every
//! outbound lookup so malformed input is rejected before any XRPC call.

use std::sync::LazyLock;

use regex::Regex;

/// Handle syntax: dot-separated labels of 1-63 alphanumerics with internal
/// hyphens, at least two labels, and a TLD that starts with a letter.
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$",
    )
    .expect("handle regex is valid")
});

/// Record key syntax: 1-512 characters from `[a-zA-Z0-9-_.~]`.
static RKEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.~-]{1,512}$").expect("rkey regex is valid"));

/// Check whether `s` is a syntactically valid handle (e.g. `alice.bsky.social`).
pub fn is_valid_handle(s: &str) -> bool {
    HANDLE_RE.is_match(s)
}

/// Check whether `s` is a syntactically valid record key.
///
/// `.` and `..` match the character class but are reserved.
pub fn is_valid_record_key(s: &str) -> bool {
    s != "." && s != ".." && RKEY_RE.is_match(s)
}
