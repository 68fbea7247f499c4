//! Platform-agnostic editor state

/// A position in the buffer. `column` is a byte offset into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BufferPosition {
    pub row: usize,
    pub column: usize,
}

impl BufferPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn zero() -> Self {
        Self { row: 0, column: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    /// Lines of text in the buffer, never empty
    pub lines: Vec<String>,
    /// Cursor position (row, column in bytes)
    pub cursor: BufferPosition,
    /// Selection anchor for text selection
    pub selection_anchor: Option<BufferPosition>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: BufferPosition::zero(),
            selection_anchor: None,
        }
    }

    /// Get the content as a single string
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Create from a string. Lines are split on `\n` only, so a trailing
    /// newline or `\r` survives a load/save round trip.
    pub fn from_text(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
            cursor: BufferPosition::zero(),
            selection_anchor: None,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.len()).unwrap_or(0)
    }

    /// Ordered selection range, if any and non-empty.
    pub fn selection_range(&self) -> Option<(BufferPosition, BufferPosition)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(if anchor < self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        })
    }

    /// Cursor as a 0-based (line, character column) pair.
    pub fn cursor_char_position(&self) -> (usize, usize) {
        let row = self.cursor.row;
        let column = self
            .line(row)
            .map(|line| line[..self.cursor.column.min(line.len())].chars().count())
            .unwrap_or(0);
        (row, column)
    }

    /// Convert a character column on `row` into a byte column, clamped to the line.
    pub fn byte_column(&self, row: usize, char_column: usize) -> usize {
        match self.line(row) {
            Some(line) => line
                .char_indices()
                .nth(char_column)
                .map(|(idx, _)| idx)
                .unwrap_or(line.len()),
            None => 0,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
