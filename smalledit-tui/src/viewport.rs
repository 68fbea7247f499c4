//! Scroll position and visual-row mapping for the text area

use ratatui::layout::Rect;
use smalledit_core::{BufferPosition, EditorError, EditorState};

pub const DEFAULT_VISIBLE_HEIGHT: usize = 20;
pub const DEFAULT_TEXT_WIDTH: usize = 80;

/// One screen row of the text area: characters `start..end` of `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRow {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    /// Text area from the last layout; zero-sized until the first one.
    pub area: Rect,
    /// First visible row: a line index, or a wrapped row index in wrap mode.
    pub top_row: usize,
    /// First visible character column when not wrapping.
    pub left_col: usize,
}

fn wrapped_rows(len: usize, width: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(width)
    }
}

fn char_len(state: &EditorState, line: usize) -> usize {
    state.line(line).map_or(0, |text| text.chars().count())
}

impl Viewport {
    pub fn visible_height(&self) -> Result<usize, EditorError> {
        match self.area.height {
            0 => Err(EditorError::GeometryUnavailable),
            height => Ok(height as usize),
        }
    }

    pub fn text_width(&self) -> Result<usize, EditorError> {
        match self.area.width {
            0 => Err(EditorError::GeometryUnavailable),
            width => Ok(width as usize),
        }
    }

    pub fn height_or_default(&self) -> usize {
        self.visible_height().unwrap_or(DEFAULT_VISIBLE_HEIGHT)
    }

    pub fn width_or_default(&self) -> usize {
        self.text_width().unwrap_or(DEFAULT_TEXT_WIDTH)
    }

    pub fn reset(&mut self) {
        self.top_row = 0;
        self.left_col = 0;
    }

    /// Rows needed to show the whole document.
    pub fn total_rows(&self, state: &EditorState, word_wrap: bool) -> usize {
        if !word_wrap {
            return state.line_count();
        }
        let width = self.width_or_default();
        (0..state.line_count())
            .map(|line| wrapped_rows(char_len(state, line), width))
            .sum()
    }

    /// Rows currently on screen, top to bottom.
    pub fn rows(&self, state: &EditorState, word_wrap: bool) -> Vec<VisualRow> {
        let height = self.height_or_default();
        let width = self.width_or_default();

        if !word_wrap {
            let end = (self.top_row + height).min(state.line_count());
            return (self.top_row..end)
                .map(|line| VisualRow {
                    line,
                    start: self.left_col,
                    end: self.left_col + width,
                })
                .collect();
        }

        let mut rows = Vec::with_capacity(height);
        let mut visual = 0;
        for line in 0..state.line_count() {
            let count = wrapped_rows(char_len(state, line), width);
            if visual + count <= self.top_row {
                visual += count;
                continue;
            }
            for chunk in 0..count {
                if visual >= self.top_row && rows.len() < height {
                    rows.push(VisualRow {
                        line,
                        start: chunk * width,
                        end: (chunk + 1) * width,
                    });
                }
                visual += 1;
            }
            if rows.len() >= height {
                break;
            }
        }
        rows
    }

    /// Absolute (row, column) of the cursor in visual coordinates.
    pub fn cursor_visual(&self, state: &EditorState, word_wrap: bool) -> (usize, usize) {
        let (line, column) = state.cursor_char_position();
        if !word_wrap {
            return (line, column);
        }
        let width = self.width_or_default();
        let before: usize = (0..line)
            .map(|l| wrapped_rows(char_len(state, l), width))
            .sum();
        let chunk = (column / width).min(wrapped_rows(char_len(state, line), width) - 1);
        (before + chunk, column - chunk * width)
    }

    /// Cursor position relative to the text area, if it is on screen.
    pub fn cursor_on_screen(&self, state: &EditorState, word_wrap: bool) -> Option<(u16, u16)> {
        let (row, col) = self.cursor_visual(state, word_wrap);
        let left = if word_wrap { 0 } else { self.left_col };
        if row < self.top_row || col < left {
            return None;
        }
        let (row, col) = (row - self.top_row, col - left);
        let height = self.height_or_default();
        let width = self.width_or_default();
        if row >= height {
            return None;
        }
        Some((col.min(width.saturating_sub(1)) as u16, row as u16))
    }

    pub fn scroll_to_cursor(&mut self, state: &EditorState, word_wrap: bool) {
        let (row, col) = self.cursor_visual(state, word_wrap);
        let height = self.height_or_default();
        let width = self.width_or_default();

        if row < self.top_row {
            self.top_row = row;
        } else if row >= self.top_row + height {
            self.top_row = row + 1 - height;
        }

        if word_wrap {
            self.left_col = 0;
        } else if col < self.left_col {
            self.left_col = col;
        } else if col >= self.left_col + width {
            self.left_col = col + 1 - width;
        }
    }

    pub fn scroll_by(&mut self, delta: isize, state: &EditorState, word_wrap: bool) {
        let max_top = self.total_rows(state, word_wrap).saturating_sub(1);
        self.top_row = if delta < 0 {
            self.top_row.saturating_sub(delta.unsigned_abs())
        } else {
            (self.top_row + delta as usize).min(max_top)
        };
    }

    /// Convert screen coordinates to a document position.
    /// Returns None if the click is outside the text area.
    pub fn screen_to_document(
        &self,
        screen_col: u16,
        screen_row: u16,
        state: &EditorState,
        word_wrap: bool,
    ) -> Option<BufferPosition> {
        let area = self.area;
        if screen_col < area.x || screen_col >= area.x + area.width {
            return None;
        }
        if screen_row < area.y || screen_row >= area.y + area.height {
            return None;
        }

        let rel_row = (screen_row - area.y) as usize;
        let rel_col = (screen_col - area.x) as usize;
        let rows = self.rows(state, word_wrap);
        let Some(row) = rows.get(rel_row).or(rows.last()).copied() else {
            return Some(BufferPosition::zero());
        };

        let column = if rel_row >= rows.len() {
            char_len(state, row.line)
        } else {
            (row.start + rel_col).min(char_len(state, row.line))
        };
        Some(BufferPosition::new(
            row.line,
            state.byte_column(row.line, column),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u16, height: u16) -> Viewport {
        Viewport {
            area: Rect::new(5, 1, width, height),
            ..Viewport::default()
        }
    }

    #[test]
    fn missing_geometry_falls_back_to_defaults() {
        let view = Viewport::default();
        assert!(matches!(
            view.visible_height(),
            Err(EditorError::GeometryUnavailable)
        ));
        assert_eq!(view.height_or_default(), DEFAULT_VISIBLE_HEIGHT);
        assert_eq!(view.width_or_default(), DEFAULT_TEXT_WIDTH);
    }

    #[test]
    fn wrapped_rows_split_long_lines() {
        let state = EditorState::from_text("abcdefgh\nxy");
        let view = viewport(3, 10);

        let rows = view.rows(&state, true);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2], VisualRow { line: 0, start: 6, end: 9 });
        assert_eq!(rows[3].line, 1);
        assert_eq!(view.total_rows(&state, true), 4);
        assert_eq!(view.total_rows(&state, false), 2);
    }

    #[test]
    fn cursor_follows_wrapping() {
        let mut state = EditorState::from_text("abcdefgh\nxy");
        state.cursor = BufferPosition::new(0, 7);
        let view = viewport(3, 10);

        assert_eq!(view.cursor_visual(&state, true), (2, 1));
        assert_eq!(view.cursor_visual(&state, false), (0, 7));
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        let mut state = EditorState::from_text(&"x\n".repeat(50));
        state.cursor = BufferPosition::new(30, 0);
        let mut view = viewport(10, 10);

        view.scroll_to_cursor(&state, false);
        assert_eq!(view.top_row, 21);

        state.cursor = BufferPosition::new(3, 0);
        view.scroll_to_cursor(&state, false);
        assert_eq!(view.top_row, 3);
    }

    #[test]
    fn click_maps_to_document_position() {
        let state = EditorState::from_text("hello\nwörld");
        let view = viewport(20, 5);

        assert_eq!(
            view.screen_to_document(5 + 2, 2, &state, false),
            Some(BufferPosition::new(1, 3))
        );
        // Past the end of the line clamps to its end.
        assert_eq!(
            view.screen_to_document(5 + 15, 1, &state, false),
            Some(BufferPosition::new(0, 5))
        );
        // Below the document lands at the end of the last line.
        assert_eq!(
            view.screen_to_document(5, 4, &state, false),
            Some(BufferPosition::new(1, 6))
        );
        assert_eq!(view.screen_to_document(0, 1, &state, false), None);
    }
}
