//! Compact byte-range into the input buffer.
//!
//! All stages of the pipeline pass ranges around instead of owned strings;
//! the input text is only copied once, into the output buffer.

/// Half-open byte range `[start, end)` into an input buffer.
///
/// Uses `u32` offsets; inputs up to 4GB are supported.
///
/// # Example
/// ```
/// use urlize::Range;
///
/// let input = b"Hello, World!";
/// let range = Range::new(7, 12);
/// assert_eq!(range.slice(input), b"World");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if either offset exceeds `u32::MAX`.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Create an empty range at a position.
    #[inline]
    pub const fn empty_at(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// The slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }

    /// The slice as a `&str`.
    ///
    /// # Safety
    /// The caller must ensure the range lies on character boundaries of
    /// valid UTF-8.
    #[inline]
    pub fn slice_str<'a>(&self, input: &'a [u8]) -> &'a str {
        // SAFETY: caller guarantees valid UTF-8 at these boundaries
        unsafe { std::str::from_utf8_unchecked(self.slice(input)) }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start offset as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End offset as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}
