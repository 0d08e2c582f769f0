//! Byte offset <-> line/column conversion.

use rustc_hash::FxHashMap;
pub use text_size::{TextRange, TextSize};

use super::{Position, Range};

/// A line/column pair where the column is a UTF-8 byte offset into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// A character in a line whose UTF-8 and UTF-16 widths differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WideChar {
    /// Byte offset of the character within its line
    start: TextSize,
    /// Byte offset just past the character
    end: TextSize,
}

impl WideChar {
    fn len(&self) -> TextSize {
        self.end - self.start
    }

    fn len_utf16(&self) -> u32 {
        if self.len() == TextSize::from(4) { 2 } else { 1 }
    }
}

/// Maps byte offsets of a document to editor positions and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
    /// Multi-byte characters per line
    wide_chars: FxHashMap<u32, Vec<WideChar>>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut wide_chars: FxHashMap<u32, Vec<WideChar>> = FxHashMap::default();

        let mut line = 0u32;
        let mut line_start = TextSize::from(0);
        let mut offset = TextSize::from(0);
        for c in text.chars() {
            let c_len = TextSize::of(c);
            if c == '\n' {
                line += 1;
                line_start = offset + c_len;
                line_starts.push(line_start);
            } else if c.len_utf8() > 1 {
                let start = offset - line_start;
                wide_chars.entry(line).or_default().push(WideChar {
                    start,
                    end: start + c_len,
                });
            }
            offset += c_len;
        }

        Self {
            line_starts,
            wide_chars,
            len: offset,
        }
    }

    /// Total length of the indexed text.
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::from(0)
    }

    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Line and byte column of an offset. Offsets past the end clamp to it.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Editor position (UTF-16 column) of a byte offset.
    pub fn position(&self, offset: TextSize) -> Position {
        let LineCol { line, col } = self.line_col(offset);
        let mut character = col;
        if let Some(wide) = self.wide_chars.get(&line) {
            for c in wide {
                if u32::from(c.end) <= col {
                    character -= u32::from(c.len());
                    character += c.len_utf16();
                }
            }
        }
        Position::new(line, character)
    }

    /// Editor range of a byte range.
    pub fn range(&self, range: TextRange) -> Range {
        Range::new(self.position(range.start()), self.position(range.end()))
    }

    /// Byte offset of an editor position.
    ///
    /// Returns `None` for lines past the end of the document. A character past
    /// the end of its line clamps to the line end (before the newline).
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let line_start = *self.line_starts.get(position.line as usize)?;
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .map(|next| *next - TextSize::from(1))
            .unwrap_or(self.len);
        let line_len = line_end - line_start;

        let mut utf8_col = position.character;
        if let Some(wide) = self.wide_chars.get(&position.line) {
            let mut utf16_seen = 0u32;
            utf8_col = 0;
            let mut cursor = TextSize::from(0);
            for c in wide {
                let narrow = u32::from(c.start - cursor);
                if utf16_seen + narrow >= position.character {
                    break;
                }
                utf16_seen += narrow;
                utf8_col += narrow;
                if utf16_seen + c.len_utf16() > position.character {
                    // Middle of a surrogate pair: snap to the start of the character
                    return Some(line_start + TextSize::from(utf8_col).min(line_len));
                }
                utf16_seen += c.len_utf16();
                utf8_col += u32::from(c.len());
                cursor = c.end;
            }
            utf8_col += position.character - utf16_seen;
        }

        let col = TextSize::from(utf8_col).min(line_len);
        Some(line_start + col)
    }
}
