//! The open document: buffer, file state, cached statistics and search

use crate::error::Result;
use crate::file_store::{self, LoadOutcome};
use crate::{
    DocumentStats, EditorAction, EditorEngine, EditorState, FileState, SearchOutcome,
    SearchState, StatsCache,
};
use std::path::{Path, PathBuf};

/// Result of a plain save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// Untitled document: the caller has to ask for a path and use
    /// [`Document::save_as`].
    NeedsPath,
}

/// Owns everything the front end edits. Every text-changing path goes through
/// here so the modified flag and the statistics cache stay in step.
pub struct Document {
    engine: EditorEngine,
    file: FileState,
    stats: StatsCache,
    search: SearchState,
}

impl Document {
    pub fn new() -> Self {
        Self::with_engine(EditorEngine::new())
    }

    pub fn with_engine(engine: EditorEngine) -> Self {
        Self {
            engine,
            file: FileState::new(),
            stats: StatsCache::new(),
            search: SearchState::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        self.engine.state()
    }

    pub fn text(&self) -> String {
        self.engine.text()
    }

    pub fn file(&self) -> &FileState {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut FileState {
        &mut self.file
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub fn clipboard(&self) -> &str {
        self.engine.clipboard()
    }

    pub fn stats_valid(&self) -> bool {
        self.stats.is_valid()
    }

    /// Cached statistics, recomputed only after a text change.
    pub fn stats(&mut self) -> DocumentStats {
        if let Some(stats) = self.stats.cached() {
            return stats;
        }
        let text = self.engine.text();
        self.stats.get(&text)
    }

    /// Apply an editing action. Returns `true` if the text changed.
    pub fn apply(&mut self, action: EditorAction) -> bool {
        let changed = self.engine.handle_action(action);
        if changed {
            self.stats.invalidate();
            self.file.mark_modified();
        }
        changed
    }

    /// Move the cursor to a 0-based (line, character column).
    pub fn move_cursor_to(&mut self, line: usize, char_column: usize) {
        let column = self.engine.state().byte_column(line, char_column);
        self.engine
            .handle_action(EditorAction::SetCursorPosition { row: line, column });
    }

    fn replace_text(&mut self, content: &str) {
        self.engine.set_text(content);
        self.stats.invalidate();
    }

    /// Startup load. A missing file is adopted as the current path with an
    /// empty, modified buffer so that the first save creates it.
    pub fn load_initial(&mut self, path: &Path) -> Result<()> {
        match file_store::load(path) {
            Ok(LoadOutcome::Loaded(content)) => {
                self.replace_text(&content);
                self.file.set_path(path);
                self.file.mark_saved();
                Ok(())
            }
            Ok(LoadOutcome::Missing) => {
                self.replace_text("");
                self.file.set_path(path);
                self.file.mark_modified();
                Ok(())
            }
            Err(err) => {
                self.new_file();
                Err(err)
            }
        }
    }

    /// Open an existing file. On failure nothing changes.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let content = file_store::read_existing(path)?;
        self.replace_text(&content);
        self.file.set_path(path);
        self.file.mark_saved();
        Ok(())
    }

    pub fn new_file(&mut self) {
        self.replace_text("");
        self.file.reset();
    }

    pub fn save(&mut self) -> Result<SaveOutcome> {
        let Some(path) = self.file.path().map(Path::to_path_buf) else {
            return Ok(SaveOutcome::NeedsPath);
        };
        file_store::save(&path, &self.engine.text())?;
        self.file.mark_saved();
        Ok(SaveOutcome::Saved(path))
    }

    /// Write to `path` and adopt it. On failure the current path is kept.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        file_store::save(path, &self.engine.text())?;
        self.file.set_path(path);
        self.file.mark_saved();
        Ok(())
    }

    /// Find the next match of the stored term and move the cursor to it.
    pub fn find_next(&mut self) -> SearchOutcome {
        let text = self.engine.text();
        let outcome = self.search.find_next(&text);
        if let SearchOutcome::Found { line, column, .. } = outcome {
            self.move_cursor_to(line, column);
        }
        outcome
    }

    /// Store `term` and search from the top. Empty terms are ignored.
    pub fn find(&mut self, term: &str) -> Option<SearchOutcome> {
        if !self.search.set_term(term) {
            return None;
        }
        Some(self.find_next())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

