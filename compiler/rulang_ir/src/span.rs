//! Source location spans.
//!
//! Spans are compact byte ranges into the rule text. `start` is the offset
//! every lex and parse error reports.

use std::fmt;

/// Source location span.
///
/// - start: u32 - byte offset from the start of the rule text
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized nodes.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create from a byte range, saturating at `u32::MAX`.
    ///
    /// Rule texts are small; saturation only matters for pathological input
    /// and keeps the lexer free of panics.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(range.end).unwrap_or(u32::MAX);
        Span { start, end }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One-based line and column of a byte offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Locate `offset` inside `source`.
    ///
    /// Line breaks are the ones the lexer emits: `\n`, `\r\n` and a lone
    /// `\r`. Columns count characters, not bytes. Offsets past the end clamp
    /// to the position just after the last character.
    pub fn of(source: &str, offset: u32) -> Self {
        let mut line = 1u32;
        let mut column = 1u32;
        let mut chars = source.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            if idx >= offset as usize {
                break;
            }
            match ch {
                // `\r\n` is one break, counted at its `\n`.
                '\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {}
                '\n' | '\r' => {
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }
        SourceLocation { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
