//! urlize: rewrite URL-like tokens in plain text into safe HTML anchors.
//!
//! Takes a block of plain text and wraps anything that looks like a URL, a
//! bare domain name, or an email address in anchor markup. Everything else
//! is HTML-escaped and passed through untouched, whitespace included, so
//! the output drops straight into an HTML document.
//!
//! # Design Principles
//! - No regex: pure byte-level scanning
//! - No validation: heuristic pattern matching only, never a network call
//! - Minimal allocations: ranges into the input buffer, one output buffer
//! - Never fails on text: malformed input degrades to escaped literals
//!
//! # Example
//! ```
//! let html = urlize::urlize("Check https://example.com now.");
//! assert_eq!(
//!     html,
//!     "Check <a href=\"https://example.com\">https://example.com</a> now."
//! );
//! ```

pub mod classify;
pub mod escape;
pub mod options;
pub mod range;
pub mod render;
pub mod trim;
pub mod truncate;
pub mod word;

// Re-export primary types
pub use classify::LinkClassification;
pub use options::{ConfigError, Options};
pub use range::Range;
pub use render::HtmlWriter;

use rustc_hash::FxHashSet;
use word::{Word, Words};

/// Linkify text with default options.
///
/// This is the primary API for simple use cases. The defaults are always
/// valid, so this never fails.
///
/// # Example
/// ```
/// let html = urlize::urlize("contact a@b.co.");
/// assert_eq!(html, "contact <a href=\"mailto:a@b.co\">a@b.co</a>.");
/// ```
pub fn urlize(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer, &Options::default());
    writer.into_string()
}

/// Linkify text with options.
///
/// Configuration is validated once, before any text is scanned; a rejected
/// configuration produces no partial output.
pub fn urlize_with_options(input: &str, options: &Options) -> Result<String, ConfigError> {
    options.validate()?;
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer, options);
    Ok(writer.into_string())
}

/// Linkify text into a provided buffer.
///
/// Avoids allocation when the buffer already has sufficient capacity.
pub fn urlize_into_with_options(
    input: &str,
    out: &mut Vec<u8>,
    options: &Options,
) -> Result<(), ConfigError> {
    options.validate()?;
    out.clear();
    out.reserve(input.len() + input.len() / 2);
    let mut writer = HtmlWriter::new();
    // Use the provided buffer directly
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input.as_bytes(), &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
    Ok(())
}

/// Render the whole input: each word rendered, each whitespace run copied
/// through verbatim.
fn render_to_writer(input: &[u8], writer: &mut HtmlWriter, options: &Options) {
    let schemes = options.scheme_set();
    for word in Words::new(input) {
        render_word(input, word, &schemes, options, writer);
        writer.write_bytes(word.trailing.slice(input));
    }
}

/// Render one word: trim, classify, and either emit an anchor with the
/// stripped punctuation around it or fall back to escaped literal text.
fn render_word(
    input: &[u8],
    word: Word,
    schemes: &FxHashSet<String>,
    options: &Options,
    writer: &mut HtmlWriter,
) {
    if word.text.is_empty() {
        return;
    }

    let trimmed = trim::trim_word(input, word.text);
    let core = trimmed.core.slice(input);

    let scheme_prefix = match classify::classify(core, schemes) {
        LinkClassification::NotAUrl => {
            writer.write_escaped(word.text.slice(input));
            return;
        }
        LinkClassification::FullUrl => None,
        LinkClassification::BareDomain => Some("http://"),
        LinkClassification::Email => Some("mailto:"),
    };

    writer.write_escaped(trimmed.head.slice(input));
    writer.anchor_open(scheme_prefix, core, options.new_context);
    // SAFETY of slice_str: trimming strips ASCII bytes only, so the core
    // range lies on character boundaries of the input str.
    write_display(writer, trimmed.core.slice_str(input), options.truncate_length);
    writer.anchor_close();
    writer.write_escaped(trimmed.tail.slice(input));
}

/// Emit the visible link text, truncated to the configured budget.
fn write_display(writer: &mut HtmlWriter, text: &str, truncate_length: Option<usize>) {
    if let Some(max_chars) = truncate_length {
        if let Some((front, back)) = truncate::split_for_display(text, max_chars) {
            writer.write_escaped(front.as_bytes());
            writer.write_str(truncate::ELLIPSIS);
            writer.write_escaped(back.as_bytes());
            return;
        }
    }
    writer.write_escaped(text.as_bytes());
}
