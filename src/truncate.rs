//! Display-text truncation.
//!
//! Long link targets are shortened for display by replacing the middle with
//! an ellipsis, keeping a recognizable prefix and suffix. The href always
//! carries the full target; only the visible text is shortened.

/// Truncation marker inserted where the middle was removed.
pub const ELLIPSIS: &str = "\u{2026}";

/// The prefix/suffix of `text` to display under a character budget.
///
/// Returns `None` when `text` already fits in `max_chars`; otherwise the
/// two returned slices plus [`ELLIPSIS`] total exactly `max_chars`
/// characters. Counting is by `char`, so multi-byte text never splits
/// inside a character.
pub fn split_for_display(text: &str, max_chars: usize) -> Option<(&str, &str)> {
    let total = text.chars().count();
    if max_chars == 0 || total <= max_chars {
        return None;
    }

    // One char goes to the marker; the prefix gets the longer half.
    let keep = max_chars - 1;
    let front = keep - keep / 2;
    let back = keep / 2;

    let front_end = char_offset(text, front);
    let back_start = char_offset(text, total - back);
    Some((&text[..front_end], &text[back_start..]))
}

/// Byte offset of the `n`-th character (or the end of the text).
#[inline]
fn char_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(offset, _)| offset)
}
