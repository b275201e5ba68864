use std::{fmt, ops::Range};

/// A byte range into the parsed BPMN source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create an empty span at a byte offset
    pub fn at(offset: usize) -> Self {
        Self::new(offset..offset)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a union of two spans (encompassing both)
    pub fn union(&self, other: Span) -> Span {
        Self::new(self.start.min(other.start)..self.end.max(other.end))
    }

    /// Converts a 1-based row/column position into a span of one character.
    ///
    /// Columns count characters, not bytes. Positions past the end of the
    /// source clamp to its length.
    pub fn from_position(source: &str, row: u32, col: u32) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(row.saturating_sub(1) as usize)
            .map(str::len)
            .sum();
        let line = source.get(line_start..).unwrap_or_default();
        let offset = line
            .char_indices()
            .nth(col.saturating_sub(1) as usize)
            .map_or(source.len(), |(idx, _)| line_start + idx);
        let width = source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        Self::new(offset..offset + width)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0..0)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
