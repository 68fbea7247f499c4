pub mod actions;
pub mod commands;
pub mod document;
pub mod engine;
pub mod error;
pub mod file_state;
pub mod file_store;
pub mod gutter;
pub mod refresh;
pub mod search;
pub mod state;
pub mod stats;

pub use actions::EditorAction;
pub use commands::{Command, Menu, MenuItem, MENUS};
pub use document::{Document, SaveOutcome};
pub use engine::EditorEngine;
pub use error::EditorError;
pub use file_state::FileState;
pub use file_store::LoadOutcome;
pub use refresh::RefreshCoordinator;
pub use search::{FindDialogState, FindPhase, SearchOutcome, SearchState};
pub use state::{BufferPosition, EditorState};
pub use stats::{DocumentStats, StatsCache};
