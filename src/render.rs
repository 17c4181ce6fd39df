//! HTML output writer.
//!
//! A thin wrapper over a byte buffer that knows how to emit escaped literal
//! text and anchor markup. The buffer is reusable so repeated calls can
//! avoid reallocation.

use crate::escape;

/// Attributes added to every anchor when `new_context` is set.
const NEW_CONTEXT_ATTRS: &str = " target=\"_blank\" rel=\"noopener noreferrer\"";

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use urlize::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.write_escaped(b"a < b");
/// assert_eq!(writer.into_string(), "a &lt; b");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(256),
        }
    }

    /// Create with capacity sized for an input length.
    ///
    /// Linkified text grows past its input (anchor markup, entities);
    /// half again the input length covers typical prose.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 2),
        }
    }

    /// Write raw bytes without escaping. Only for whitespace runs and
    /// markup produced by this writer.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a static string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write literal text with HTML escaping.
    #[inline]
    pub fn write_escaped(&mut self, text: &[u8]) {
        escape::escape_into(&mut self.out, text);
    }

    /// Open an anchor: `<a href="[prefix]target"[ attrs]>`.
    ///
    /// `scheme_prefix` supplies the inferred scheme for targets that lack
    /// one (`http://` for bare domains, `mailto:` for addresses); it is
    /// emitted into the href only, never into the display text.
    pub fn anchor_open(&mut self, scheme_prefix: Option<&'static str>, target: &[u8], new_context: bool) {
        self.write_str("<a href=\"");
        if let Some(prefix) = scheme_prefix {
            self.write_str(prefix);
        }
        self.write_escaped(target);
        self.write_str("\"");
        if new_context {
            self.write_str(NEW_CONTEXT_ATTRS);
        }
        self.write_str(">");
    }

    /// Close an anchor.
    #[inline]
    pub fn anchor_close(&mut self) {
        self.write_str("</a>");
    }

    /// Access the underlying buffer (for buffer-swapping callers).
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    /// Consume the writer and return the output as a String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: the writer only ever appends UTF-8 fragments
        unsafe { String::from_utf8_unchecked(self.out) }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
