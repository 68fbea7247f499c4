//! Command identifiers and the menu bar layout

/// Everything the menu bar and global shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewFile,
    OpenFile,
    SaveFile,
    SaveAsFile,
    Quit,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Find,
    FindNext,
    ToggleLineNumbers,
    ToggleWordWrap,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub help: &'static str,
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

const fn item(label: &'static str, help: &'static str, command: Command) -> MenuItem {
    MenuItem {
        label,
        help,
        command,
    }
}

pub const MENUS: &[Menu] = &[
    Menu {
        title: "File",
        items: &[
            item("New", "Create a new file", Command::NewFile),
            item("Open", "Open a file", Command::OpenFile),
            item("Save", "Save current file", Command::SaveFile),
            item("Save As", "Save file with new name", Command::SaveAsFile),
            item("Quit", "Exit the application", Command::Quit),
        ],
    },
    Menu {
        title: "Edit",
        items: &[
            item("Cut", "Cut selected text", Command::Cut),
            item("Copy", "Copy selected text", Command::Copy),
            item("Paste", "Paste text", Command::Paste),
            item("Select All", "Select all text", Command::SelectAll),
        ],
    },
    Menu {
        title: "Search",
        items: &[
            item("Find", "Find text", Command::Find),
            item("Find Next", "Find next occurrence", Command::FindNext),
        ],
    },
    Menu {
        title: "View",
        items: &[
            item("Line Numbers", "Toggle line numbers", Command::ToggleLineNumbers),
            item("Word Wrap", "Toggle word wrapping", Command::ToggleWordWrap),
        ],
    },
    Menu {
        title: "Help",
        items: &[item("About", "About this editor", Command::About)],
    },
];
