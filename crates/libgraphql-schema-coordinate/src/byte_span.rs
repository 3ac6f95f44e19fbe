/// Compact byte-offset span attached to every AST node.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// coordinate's source text. Both offsets are 0-based.
///
/// `u32` offsets are more than enough: a schema coordinate is at most a few
/// hundred bytes in practice.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the node (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the node (exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn merge(self, other: ByteSpan) -> ByteSpan {
        ByteSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the slice of `source` this span covers, or `None` if the span
    /// is out of bounds or does not fall on `char` boundaries.
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start as usize..self.end as usize)
    }
}
