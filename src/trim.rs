//! Punctuation trimming around link candidates.
//!
//! A word like `(https://example.com/a_(b)).` carries punctuation that
//! belongs to the sentence, not the URL. Trimming peels such bytes off both
//! ends with a bounded fixed-point loop over index offsets; nothing is
//! allocated and the removed bytes stay addressable as ranges so they can
//! be re-emitted literally around the anchor.
//!
//! A trailing closing delimiter is only stripped when the rest of the token
//! holds no unmatched opener of the same pair. This keeps reference-style
//! URLs such as `example.com/foo_(bar)` intact while still dropping the
//! outer closer of `(example.com/foo_(bar))`.

use crate::Range;

/// Bytes strippable from the front of a word: opening quotes and brackets.
const LEADING_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'(' as usize] = true;
    table[b'[' as usize] = true;
    table[b'{' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Bytes unconditionally strippable from the back of a word.
/// Closing delimiters are handled separately via the balance rule.
const TRAILING_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'.' as usize] = true;
    table[b',' as usize] = true;
    table[b'!' as usize] = true;
    table[b'?' as usize] = true;
    table[b':' as usize] = true;
    table[b';' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// The opener paired with a closing delimiter, if `b` is one.
#[inline]
const fn opener_for(b: u8) -> Option<u8> {
    match b {
        b')' => Some(b'('),
        b']' => Some(b'['),
        b'}' => Some(b'{'),
        _ => None,
    }
}

/// A word split into stripped punctuation and the remaining candidate.
///
/// `head`, `core` and `tail` are adjacent sub-ranges of the original word
/// text, in order. Stripping is a fixed point: trimming `core` again
/// changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trimmed {
    /// Leading punctuation to re-emit before the anchor.
    pub head: Range,
    /// The candidate considered for classification (may be empty).
    pub core: Range,
    /// Trailing punctuation to re-emit after the anchor.
    pub tail: Range,
}

/// Strip leading/trailing punctuation from a word's text range.
///
/// The loop is bounded by the token length, so it terminates on any input;
/// each iteration removes at most one byte per side and stops as soon as an
/// iteration changes nothing.
pub fn trim_word(input: &[u8], text: Range) -> Trimmed {
    let word_start = text.start_usize();
    let word_end = text.end_usize();
    let mut start = word_start;
    let mut end = word_end;

    for _ in 0..text.len() {
        let mut changed = false;

        if start < end && LEADING_TABLE[input[start] as usize] {
            start += 1;
            changed = true;
        }

        if start < end {
            let last = input[end - 1];
            if TRAILING_TABLE[last as usize] {
                end -= 1;
                changed = true;
            } else if let Some(opener) = opener_for(last) {
                if unmatched_openers(&input[start..end - 1], opener, last) == 0 {
                    end -= 1;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    Trimmed {
        head: Range::from_usize(word_start, start),
        core: Range::from_usize(start, end),
        tail: Range::from_usize(end, word_end),
    }
}

/// Count openers of a delimiter pair left unmatched after scanning `token`.
#[inline]
fn unmatched_openers(token: &[u8], opener: u8, closer: u8) -> u32 {
    let mut depth = 0u32;
    for &b in token {
        if b == opener {
            depth += 1;
        } else if b == closer && depth > 0 {
            depth -= 1;
        }
    }
    depth
}
