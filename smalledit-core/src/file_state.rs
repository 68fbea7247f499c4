//! Current file path and modification flag

use std::fmt;
use std::path::{Path, PathBuf};

pub const UNTITLED_NAME: &str = "New File";

type Listener = Box<dyn FnMut(&FileState)>;

/// Path and dirty flag of the open document. Listeners registered with
/// [`FileState::subscribe`] run after every change.
#[derive(Default)]
pub struct FileState {
    path: Option<PathBuf>,
    modified: bool,
    listeners: Vec<Listener>,
}

impl FileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// File name component of the path, or the untitled placeholder.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_NAME.to_string())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FileState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn mark_modified(&mut self) {
        if !self.modified {
            self.modified = true;
            self.notify();
        }
    }

    pub fn mark_saved(&mut self) {
        if self.modified {
            self.modified = false;
            self.notify();
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        self.notify();
    }

    /// Back to an untitled, unmodified document.
    pub fn reset(&mut self) {
        self.path = None;
        self.modified = false;
        self.notify();
    }

    fn notify(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(self);
        }
        // Keep anything subscribed from inside a listener.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}

impl fmt::Debug for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileState")
            .field("path", &self.path)
            .field("modified", &self.modified)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
