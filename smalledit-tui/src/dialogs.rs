//! Modal dialogs: Find, Quit, path prompt and message box

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor as a character index.
    cursor: usize,
}

impl TextInput {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(idx, _)| idx)
    }

    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let len = self.text.chars().count();
        match (event.code, event.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                let idx = self.byte_index(self.cursor);
                self.text.insert(idx, c);
                self.cursor += 1;
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.text.clear();
                self.cursor = 0;
            }
            (KeyCode::Backspace, _) if self.cursor > 0 => {
                let idx = self.byte_index(self.cursor - 1);
                self.text.remove(idx);
                self.cursor -= 1;
            }
            (KeyCode::Delete, _) if self.cursor < len => {
                let idx = self.byte_index(self.cursor);
                self.text.remove(idx);
            }
            (KeyCode::Left, _) => self.cursor = self.cursor.saturating_sub(1),
            (KeyCode::Right, _) => self.cursor = (self.cursor + 1).min(len),
            (KeyCode::Home, _) => self.cursor = 0,
            (KeyCode::End, _) => self.cursor = len,
            (KeyCode::Backspace, _) | (KeyCode::Delete, _) => {}
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitChoice {
    Save,
    QuitWithoutSaving,
    Cancel,
}

pub const QUIT_BUTTONS: [(QuitChoice, &str); 3] = [
    (QuitChoice::Save, "Save"),
    (QuitChoice::QuitWithoutSaving, "Quit Without Saving"),
    (QuitChoice::Cancel, "Cancel"),
];

/// What a path prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    Open,
    SaveAs { quit_after: bool },
}

impl PathPurpose {
    pub fn title(self) -> &'static str {
        match self {
            PathPurpose::Open => "Open File",
            PathPurpose::SaveAs { .. } => "Save As",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            PathPurpose::Open => "Select a file to open:",
            PathPurpose::SaveAs { .. } => "Save file as:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Find(TextInput),
    Quit { selected: usize },
    Path { purpose: PathPurpose, input: TextInput },
    Message { title: String, body: String, error: bool },
}

/// How a dialog closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Find(String),
    Quit(QuitChoice),
    Path(PathPurpose, String),
    Cancelled,
    Dismissed,
}

impl Dialog {
    pub fn find(initial_term: &str) -> Self {
        Dialog::Find(TextInput::with_text(initial_term))
    }

    pub fn quit() -> Self {
        Dialog::Quit { selected: 0 }
    }

    pub fn path(purpose: PathPurpose, initial: &str) -> Self {
        Dialog::Path {
            purpose,
            input: TextInput::with_text(initial),
        }
    }

    pub fn message(title: impl Into<String>, body: impl Into<String>) -> Self {
        Dialog::Message {
            title: title.into(),
            body: body.into(),
            error: false,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Dialog::Message {
            title: title.into(),
            body: body.into(),
            error: true,
        }
    }

    /// Feed a key to the dialog. `Some` means the dialog is done.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<DialogOutcome> {
        match self {
            Dialog::Find(input) => match event.code {
                KeyCode::Enter => Some(DialogOutcome::Find(input.text().to_string())),
                KeyCode::Esc => Some(DialogOutcome::Cancelled),
                _ => {
                    input.handle_key(event);
                    None
                }
            },
            Dialog::Path { purpose, input } => match event.code {
                KeyCode::Enter => Some(DialogOutcome::Path(*purpose, input.text().to_string())),
                KeyCode::Esc => Some(DialogOutcome::Cancelled),
                _ => {
                    input.handle_key(event);
                    None
                }
            },
            Dialog::Quit { selected } => match event.code {
                KeyCode::Left | KeyCode::BackTab => {
                    *selected = (*selected + QUIT_BUTTONS.len() - 1) % QUIT_BUTTONS.len();
                    None
                }
                KeyCode::Right | KeyCode::Tab => {
                    *selected = (*selected + 1) % QUIT_BUTTONS.len();
                    None
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Some(DialogOutcome::Quit(QUIT_BUTTONS[*selected].0))
                }
                KeyCode::Esc => Some(DialogOutcome::Quit(QuitChoice::Cancel)),
                _ => None,
            },
            Dialog::Message { .. } => match event.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    Some(DialogOutcome::Dismissed)
                }
                _ => None,
            },
        }
    }
}
