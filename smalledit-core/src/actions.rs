//! Platform-agnostic editor actions

#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    // Text manipulation
    TypeCharacter(char),
    TypeString(String),
    Backspace,
    Delete,
    Newline,
    Tab,

    // Cursor movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveToBeginningOfLine,
    MoveToEndOfLine,
    MoveWordLeft,
    MoveWordRight,
    PageUp(usize),
    PageDown(usize),
    MoveToStartOfDocument,
    MoveToEndOfDocument,
    SetCursorPosition { row: usize, column: usize },

    // Selection
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectAll,
    ExtendSelection { row: usize, column: usize },

    // Clipboard
    Cut,
    Copy,
    Paste,
}
