//! HTML escaping.
//!
//! Fast-path optimized: scans for the first escapable byte with `memchr`,
//! then bulk-copies the segments between escapes.
//!
//! Text content and attribute values share one policy: `&`, `<`, `>`, `"`
//! and `'` are always rewritten, so any literal byte run in the output is
//! safe in both positions.

use memchr::{memchr2, memchr3};

/// Lookup table of bytes that must be rewritten to entities.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'&' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape HTML-significant bytes into the output buffer.
///
/// # Example
/// ```
/// use urlize::escape::escape_into;
///
/// let mut out = Vec::new();
/// escape_into(&mut out, b"a < b & c");
/// assert_eq!(out, b"a &lt; b &amp; c");
/// ```
#[inline]
pub fn escape_into(out: &mut Vec<u8>, input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let mut pos = match first_escape(input) {
        Some(p) => p,
        None => {
            out.extend_from_slice(input);
            return;
        }
    };

    if pos > 0 {
        out.extend_from_slice(&input[..pos]);
    }

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }

        if pos < input.len() {
            let entity: &[u8] = match input[pos] {
                b'&' => b"&amp;",
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'"' => b"&quot;",
                b'\'' => b"&#39;",
                _ => unreachable!(),
            };
            out.extend_from_slice(entity);
            pos += 1;
        }
    }
}

/// Check whether a byte run contains anything that needs escaping.
#[inline]
pub fn needs_escape(input: &[u8]) -> bool {
    first_escape(input).is_some()
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'&', b'<', b'>', input);
    let b = memchr2(b'"', b'\'', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Escape and return as a String. Prefer [`escape_into`] to reuse buffers.
pub fn escape_to_string(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len() + input.len() / 8);
    escape_into(&mut out, input.as_bytes());
    // SAFETY: only ASCII entity sequences are added to valid UTF-8 input
    unsafe { String::from_utf8_unchecked(out) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        escape_into(&mut out, input);
        out
    }

    #[test]
    fn test_clean_passthrough() {
        assert_eq!(escaped(b"Hello, World!"), b"Hello, World!");
        assert_eq!(escaped(b""), b"");
    }

    #[test]
    fn test_all_five() {
        assert_eq!(escaped(b"&<>\"'"), b"&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(escaped(b"<"), b"&lt;");
        assert_eq!(escaped(b"tail<"), b"tail&lt;");
        assert_eq!(escaped(b"<head"), b"&lt;head");
    }

    #[test]
    fn test_consecutive() {
        assert_eq!(escaped(b"<<<"), b"&lt;&lt;&lt;");
    }

    #[test]
    fn test_needs_escape() {
        assert!(!needs_escape(b"plain"));
        assert!(needs_escape(b"it's"));
        assert!(needs_escape(b"a & b"));
        assert!(!needs_escape(b""));
    }

    #[test]
    fn test_unicode_untouched() {
        assert_eq!(
            escape_to_string("caf\u{e9} <menu>"),
            "caf\u{e9} &lt;menu&gt;"
        );
    }
}
