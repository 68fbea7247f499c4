//! Key translation: global shortcuts to commands, editing keys to actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use smalledit_core::{Command, EditorAction, MENUS};

/// Global shortcuts, checked before editing keys.
pub fn command_for(event: &KeyEvent) -> Option<Command> {
    match (event.code, event.modifiers) {
        (KeyCode::Char(c), KeyModifiers::CONTROL) => match c.to_ascii_lowercase() {
            'f' => Some(Command::Find),
            'h' => Some(Command::FindNext),
            'q' => Some(Command::Quit),
            's' => Some(Command::SaveFile),
            'o' => Some(Command::OpenFile),
            'n' => Some(Command::NewFile),
            'a' => Some(Command::SelectAll),
            'x' => Some(Command::Cut),
            'c' => Some(Command::Copy),
            'v' => Some(Command::Paste),
            _ => None,
        },
        (KeyCode::F(3), KeyModifiers::NONE) => Some(Command::FindNext),
        _ => None,
    }
}

/// Menu index for F9, Esc or Alt+<letter>, where the letter is the menu
/// title's first character.
pub fn menu_for(event: &KeyEvent) -> Option<usize> {
    match (event.code, event.modifiers) {
        (KeyCode::F(9), _) | (KeyCode::Esc, KeyModifiers::NONE) => Some(0),
        (KeyCode::Char(c), KeyModifiers::ALT) => MENUS.iter().position(|menu| {
            menu.title
                .chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&c))
        }),
        _ => None,
    }
}

/// Editing and navigation keys. `page_rows` is the height of a page jump.
pub fn action_for(event: &KeyEvent, page_rows: usize) -> Option<EditorAction> {
    let action = match (event.code, event.modifiers) {
        // Word jumping
        (KeyCode::Left, KeyModifiers::CONTROL) => EditorAction::MoveWordLeft,
        (KeyCode::Right, KeyModifiers::CONTROL) => EditorAction::MoveWordRight,
        (KeyCode::Left, KeyModifiers::ALT) => EditorAction::MoveWordLeft,
        (KeyCode::Right, KeyModifiers::ALT) => EditorAction::MoveWordRight,

        // Selection with Shift (before regular movement)
        (KeyCode::Left, KeyModifiers::SHIFT) => EditorAction::SelectLeft,
        (KeyCode::Right, KeyModifiers::SHIFT) => EditorAction::SelectRight,
        (KeyCode::Up, KeyModifiers::SHIFT) => EditorAction::SelectUp,
        (KeyCode::Down, KeyModifiers::SHIFT) => EditorAction::SelectDown,

        // Document start/end
        (KeyCode::Home, KeyModifiers::CONTROL) => EditorAction::MoveToStartOfDocument,
        (KeyCode::End, KeyModifiers::CONTROL) => EditorAction::MoveToEndOfDocument,

        // Cursor movement
        (KeyCode::Left, _) => EditorAction::MoveLeft,
        (KeyCode::Right, _) => EditorAction::MoveRight,
        (KeyCode::Up, _) => EditorAction::MoveUp,
        (KeyCode::Down, _) => EditorAction::MoveDown,
        (KeyCode::Home, _) => EditorAction::MoveToBeginningOfLine,
        (KeyCode::End, _) => EditorAction::MoveToEndOfLine,
        (KeyCode::PageUp, _) => EditorAction::PageUp(page_rows),
        (KeyCode::PageDown, _) => EditorAction::PageDown(page_rows),

        // Text editing
        (KeyCode::Backspace, _) => EditorAction::Backspace,
        (KeyCode::Delete, _) => EditorAction::Delete,
        (KeyCode::Enter, _) => EditorAction::Newline,
        (KeyCode::Tab, KeyModifiers::NONE) => EditorAction::Tab,

        // Regular character input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            EditorAction::TypeCharacter(c)
        }

        _ => return None,
    };
    Some(action)
}
