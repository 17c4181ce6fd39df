//! Whitespace segmentation.
//!
//! Splits the input into words plus the whitespace run that follows each,
//! so reassembly reproduces the original spacing byte for byte. Link
//! candidates never span whitespace, so every later stage works on one
//! word at a time.

use crate::Range;

/// Whitespace class used for segmentation: space, tab, LF, CR.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// A maximal run of non-whitespace bytes and the whitespace that follows it.
///
/// Concatenating `text` then `trailing` for every word, in order, yields the
/// input exactly. When the input starts with whitespace, the first word has
/// an empty `text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    /// The non-whitespace run (may be empty for a leading-whitespace word).
    pub text: Range,
    /// The whitespace run after it (empty for a word at end of input).
    pub trailing: Range,
}

/// Iterator over the words of an input buffer.
///
/// # Example
/// ```
/// use urlize::word::Words;
///
/// let input = b"two  words\n";
/// let words: Vec<_> = Words::new(input).collect();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text.slice(input), b"two");
/// assert_eq!(words[0].trailing.slice(input), b"  ");
/// assert_eq!(words[1].trailing.slice(input), b"\n");
/// ```
pub struct Words<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Words<'a> {
    /// Create a segmenter over an input buffer.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        if self.pos >= self.input.len() {
            return None;
        }

        let text_start = self.pos;
        let mut pos = self.pos;
        while pos < self.input.len() && !is_whitespace(self.input[pos]) {
            pos += 1;
        }
        let text_end = pos;
        while pos < self.input.len() && is_whitespace(self.input[pos]) {
            pos += 1;
        }
        self.pos = pos;

        Some(Word {
            text: Range::from_usize(text_start, text_end),
            trailing: Range::from_usize(text_end, pos),
        })
    }
}
