//! Candidate classification.
//!
//! Decides what a trimmed candidate is. Checks run in a fixed order and the
//! first match wins: a scheme marker beats everything, then the email shape,
//! then a bare domain with an optional path. Everything else is plain text.
//!
//! The domain shape is a deliberately small baseline: dot-separated labels
//! of alphanumerics and hyphens, with an alphabetic final label of at least
//! two characters. No IDN handling, no punycode, no TLD registry.

use rustc_hash::FxHashSet;

/// Schemes recognized when no allow-list is configured.
pub const DEFAULT_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto"];

/// What a trimmed candidate turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkClassification {
    /// Not link-shaped; the word is emitted as escaped literal text.
    NotAUrl,
    /// Carries a recognized `scheme:` marker; href is the token verbatim.
    FullUrl,
    /// Domain-shaped with no scheme; href gains an `http://` prefix.
    BareDomain,
    /// `local@domain` shape; href gains a `mailto:` prefix.
    Email,
}

/// Classify a trimmed candidate token.
///
/// `schemes` holds lowercase scheme names; candidates are matched
/// case-insensitively against it.
pub fn classify(token: &[u8], schemes: &FxHashSet<String>) -> LinkClassification {
    if token.is_empty() {
        return LinkClassification::NotAUrl;
    }
    if has_scheme_marker(token, schemes) {
        return LinkClassification::FullUrl;
    }
    if is_email(token) {
        return LinkClassification::Email;
    }
    if is_bare_domain(token) {
        return LinkClassification::BareDomain;
    }
    LinkClassification::NotAUrl
}

/// Build the scheme set used when the caller configures none.
pub fn default_schemes() -> FxHashSet<String> {
    DEFAULT_SCHEMES.iter().map(|s| (*s).to_owned()).collect()
}

/// Check for a `scheme:` or `scheme://` prefix with a recognized scheme and
/// non-empty content after the marker.
fn has_scheme_marker(token: &[u8], schemes: &FxHashSet<String>) -> bool {
    // Scheme chars are letters, digits, '+', '-', '.'; an '@' or '/' before
    // the colon therefore disqualifies the token here and lets the email and
    // domain checks see it instead.
    let mut pos = 0;
    while pos < token.len() {
        let b = token[pos];
        if b == b':' {
            break;
        }
        if !b.is_ascii_alphanumeric() && b != b'+' && b != b'-' && b != b'.' {
            return false;
        }
        pos += 1;
    }
    if pos == 0 || pos >= token.len() {
        return false;
    }

    // SAFETY: token[..pos] is ASCII by the scan above
    let scheme = unsafe { std::str::from_utf8_unchecked(&token[..pos]) };
    if !schemes.contains(&scheme.to_ascii_lowercase()) {
        return false;
    }

    // Non-empty remainder, also after "//" when present.
    let rest = &token[pos + 1..];
    if let Some(stripped) = rest.strip_prefix(b"//") {
        !stripped.is_empty()
    } else {
        !rest.is_empty()
    }
}

/// `local@domain` where the domain is domain-shaped.
fn is_email(token: &[u8]) -> bool {
    let Some(at) = token.iter().position(|&b| b == b'@') else {
        return false;
    };
    let (local, domain) = (&token[..at], &token[at + 1..]);
    !local.is_empty() && !local.contains(&b'@') && is_domain(domain)
}

/// Domain-shaped token, optionally followed by `/path`.
fn is_bare_domain(token: &[u8]) -> bool {
    if token.contains(&b'@') {
        return false;
    }
    let host = match token.iter().position(|&b| b == b'/') {
        // A path may be empty ("example.com/") but the host may not.
        Some(slash) => &token[..slash],
        None => token,
    };
    is_domain(host)
}

/// Dot-separated labels of `[A-Za-z0-9-]`, at least one dot, and an
/// alphabetic final label of length >= 2.
fn is_domain(host: &[u8]) -> bool {
    if host.is_empty() || !host.contains(&b'.') {
        return false;
    }
    let mut last_label: &[u8] = &[];
    for label in host.split(|&b| b == b'.') {
        if label.is_empty() {
            return false;
        }
        if !label
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return false;
        }
        last_label = label;
    }
    last_label.len() >= 2 && last_label.iter().all(u8::is_ascii_alphabetic)
}
