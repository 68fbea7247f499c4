//! Core editor engine with platform-agnostic business logic

use crate::{BufferPosition, EditorAction, EditorState};

pub const DEFAULT_TAB_WIDTH: usize = 4;

pub struct EditorEngine {
    state: EditorState,
    clipboard: String,
    tab_width: usize,
}

impl EditorEngine {
    pub fn new() -> Self {
        Self {
            state: EditorState::new(),
            clipboard: String::new(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn text(&self) -> String {
        self.state.to_text()
    }

    /// Replace the whole buffer, resetting cursor and selection.
    pub fn set_text(&mut self, content: &str) {
        self.state = EditorState::from_text(content);
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// Apply an action. Returns `true` if the buffer text changed.
    pub fn handle_action(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::TypeCharacter(c) => self.insert_text(&c.to_string()),
            EditorAction::TypeString(s) => self.insert_text(&s),
            EditorAction::Backspace => self.backspace(),
            EditorAction::Delete => self.delete(),
            EditorAction::Newline => self.insert_text("\n"),
            EditorAction::Tab => {
                let spaces = " ".repeat(self.tab_width);
                self.insert_text(&spaces)
            }
            EditorAction::MoveLeft => self.move_cursor(false, Self::step_left),
            EditorAction::MoveRight => self.move_cursor(false, Self::step_right),
            EditorAction::MoveUp => self.move_cursor(false, |s| s.step_vertical(-1)),
            EditorAction::MoveDown => self.move_cursor(false, |s| s.step_vertical(1)),
            EditorAction::MoveToBeginningOfLine => {
                self.move_cursor(false, |s| s.state.cursor.column = 0)
            }
            EditorAction::MoveToEndOfLine => self.move_cursor(false, |s| {
                s.state.cursor.column = s.state.line_len(s.state.cursor.row)
            }),
            EditorAction::MoveWordLeft => self.move_cursor(false, Self::step_word_left),
            EditorAction::MoveWordRight => self.move_cursor(false, Self::step_word_right),
            EditorAction::PageUp(rows) => {
                self.move_cursor(false, |s| s.step_vertical(-(rows.max(1) as isize)))
            }
            EditorAction::PageDown(rows) => {
                self.move_cursor(false, |s| s.step_vertical(rows.max(1) as isize))
            }
            EditorAction::MoveToStartOfDocument => {
                self.move_cursor(false, |s| s.state.cursor = BufferPosition::zero())
            }
            EditorAction::MoveToEndOfDocument => self.move_cursor(false, |s| {
                let last_row = s.state.line_count() - 1;
                s.state.cursor = BufferPosition::new(last_row, s.state.line_len(last_row));
            }),
            EditorAction::SetCursorPosition { row, column } => {
                self.move_cursor(false, |s| s.state.cursor = s.clamp(row, column))
            }
            EditorAction::SelectLeft => self.move_cursor(true, Self::step_left),
            EditorAction::SelectRight => self.move_cursor(true, Self::step_right),
            EditorAction::SelectUp => self.move_cursor(true, |s| s.step_vertical(-1)),
            EditorAction::SelectDown => self.move_cursor(true, |s| s.step_vertical(1)),
            EditorAction::ExtendSelection { row, column } => {
                self.move_cursor(true, |s| s.state.cursor = s.clamp(row, column))
            }
            EditorAction::SelectAll => {
                self.select_all();
                false
            }
            EditorAction::Cut => self.cut(),
            EditorAction::Copy => {
                self.copy();
                false
            }
            EditorAction::Paste => {
                let text = self.clipboard.clone();
                self.insert_text(&text)
            }
        }
    }

    /// Clamp a (row, byte column) pair to the buffer, snapping to a char boundary.
    fn clamp(&self, row: usize, column: usize) -> BufferPosition {
        let row = row.min(self.state.line_count() - 1);
        let line = &self.state.lines[row];
        let mut column = column.min(line.len());
        while !line.is_char_boundary(column) {
            column -= 1;
        }
        BufferPosition::new(row, column)
    }

    fn move_cursor(&mut self, extend: bool, step: impl FnOnce(&mut Self)) -> bool {
        if extend {
            if self.state.selection_anchor.is_none() {
                self.state.selection_anchor = Some(self.state.cursor);
            }
        } else {
            self.state.selection_anchor = None;
        }
        step(self);
        false
    }

    fn step_left(&mut self) {
        let cursor = self.state.cursor;
        if cursor.column > 0 {
            let before = &self.state.lines[cursor.row][..cursor.column];
            if let Some(prev_char) = before.chars().next_back() {
                self.state.cursor.column -= prev_char.len_utf8();
            }
        } else if cursor.row > 0 {
            self.state.cursor.row -= 1;
            self.state.cursor.column = self.state.line_len(cursor.row - 1);
        }
    }

    fn step_right(&mut self) {
        let cursor = self.state.cursor;
        let line = &self.state.lines[cursor.row];
        if cursor.column < line.len() {
            if let Some(next_char) = line[cursor.column..].chars().next() {
                self.state.cursor.column += next_char.len_utf8();
            }
        } else if cursor.row + 1 < self.state.line_count() {
            self.state.cursor = BufferPosition::new(cursor.row + 1, 0);
        }
    }

    /// Move by `delta` rows, keeping the character column where possible.
    fn step_vertical(&mut self, delta: isize) {
        let (row, char_column) = self.state.cursor_char_position();
        let last_row = self.state.line_count() - 1;
        let target = if delta < 0 {
            row.saturating_sub(delta.unsigned_abs())
        } else {
            (row + delta as usize).min(last_row)
        };
        if target == row {
            return;
        }
        let column = self.state.byte_column(target, char_column);
        self.state.cursor = BufferPosition::new(target, column);
    }

    fn step_word_left(&mut self) {
        let cursor = self.state.cursor;
        if cursor.column == 0 {
            self.step_left();
            return;
        }

        let line = &self.state.lines[cursor.row];
        let mut chars = line[..cursor.column].char_indices().rev().peekable();
        let mut pos = cursor.column;

        // Skip whitespace
        while let Some(&(idx, c)) = chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            pos = idx;
            chars.next();
        }

        // Skip word characters
        while let Some(&(idx, c)) = chars.peek() {
            if !is_word_char(c) {
                break;
            }
            pos = idx;
            chars.next();
        }

        if pos == cursor.column {
            // Punctuation run: step over a single char
            self.step_left();
        } else {
            self.state.cursor.column = pos;
        }
    }

    fn step_word_right(&mut self) {
        let cursor = self.state.cursor;
        let line = &self.state.lines[cursor.row];
        if cursor.column >= line.len() {
            self.step_right();
            return;
        }

        let rest = &line[cursor.column..];
        let mut pos = cursor.column;
        let mut chars = rest.chars().peekable();

        // Skip current word
        while let Some(&c) = chars.peek() {
            if !is_word_char(c) {
                break;
            }
            pos += c.len_utf8();
            chars.next();
        }

        // Skip whitespace
        while let Some(&c) = chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            pos += c.len_utf8();
            chars.next();
        }

        if pos == cursor.column {
            self.step_right();
        } else {
            self.state.cursor.column = pos;
        }
    }

    fn select_all(&mut self) {
        let last_row = self.state.line_count() - 1;
        self.state.selection_anchor = Some(BufferPosition::zero());
        self.state.cursor = BufferPosition::new(last_row, self.state.line_len(last_row));
    }

    fn selected_text(&self) -> Option<String> {
        let (start, end) = self.state.selection_range()?;
        if start.row == end.row {
            return Some(self.state.lines[start.row][start.column..end.column].to_string());
        }
        let mut text = self.state.lines[start.row][start.column..].to_string();
        for row in (start.row + 1)..end.row {
            text.push('\n');
            text.push_str(&self.state.lines[row]);
        }
        text.push('\n');
        text.push_str(&self.state.lines[end.row][..end.column]);
        Some(text)
    }

    fn delete_range(&mut self, start: BufferPosition, end: BufferPosition) {
        if start.row == end.row {
            self.state.lines[start.row].replace_range(start.column..end.column, "");
        } else {
            let tail = self.state.lines[end.row][end.column..].to_string();
            self.state.lines[start.row].truncate(start.column);
            self.state.lines[start.row].push_str(&tail);
            self.state.lines.drain((start.row + 1)..=end.row);
        }
        self.state.cursor = start;
    }

    /// Delete the selection if there is one. Returns `true` if text was removed.
    fn delete_selection(&mut self) -> bool {
        let range = self.state.selection_range();
        self.state.selection_anchor = None;
        match range {
            Some((start, end)) => {
                self.delete_range(start, end);
                true
            }
            None => false,
        }
    }

    fn insert_text(&mut self, text: &str) -> bool {
        let removed = self.delete_selection();
        if text.is_empty() {
            return removed;
        }

        let cursor = self.state.cursor;
        let tail = self.state.lines[cursor.row].split_off(cursor.column);
        let mut pieces = text.split('\n');
        if let Some(first) = pieces.next() {
            self.state.lines[cursor.row].push_str(first);
        }

        let mut row = cursor.row;
        for piece in pieces {
            row += 1;
            self.state.lines.insert(row, piece.to_string());
        }

        let column = self.state.lines[row].len();
        self.state.lines[row].push_str(&tail);
        self.state.cursor = BufferPosition::new(row, column);
        true
    }

    fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let end = self.state.cursor;
        self.step_left();
        let start = self.state.cursor;
        if start == end {
            return false;
        }
        self.delete_range(start, end);
        true
    }

    fn delete(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let start = self.state.cursor;
        self.step_right();
        let end = self.state.cursor;
        if start == end {
            return false;
        }
        self.delete_range(start, end);
        true
    }

    fn copy(&mut self) {
        if let Some(text) = self.selected_text() {
            self.clipboard = text;
        }
    }

    fn cut(&mut self) -> bool {
        match self.selected_text() {
            Some(text) => {
                self.clipboard = text;
                self.delete_selection()
            }
            None => false,
        }
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
