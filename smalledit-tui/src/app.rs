//! Application state and the terminal event loop

use crate::config::Config;
use crate::dialogs::{Dialog, DialogOutcome, PathPurpose, QuitChoice};
use crate::keymap::{action_for, command_for, menu_for};
use crate::render;
use crate::viewport::{Viewport, DEFAULT_VISIBLE_HEIGHT};
use anyhow::{Context, Result};
use crossterm::{
    cursor::SetCursorStyle,
    event::{
        self, poll, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use smalledit_core::gutter::line_number_labels;
use smalledit_core::{
    Command, Document, EditorAction, EditorEngine, EditorError, FindDialogState, RefreshCoordinator,
    SaveOutcome, SearchOutcome, MENUS,
};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop sleeps when nothing is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

const ABOUT_TEXT: &str = "Simple Text Editor\n\n\
A small terminal text editor.\n\
F9 or Esc opens the menu bar.";

/// Open menu and highlighted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuCursor {
    pub menu: usize,
    pub item: usize,
}

type Handler = fn(&mut App);

/// Menu and shortcut commands.
const DISPATCH: &[(Command, Handler)] = &[
    (Command::NewFile, App::new_file),
    (Command::OpenFile, App::open_file),
    (Command::SaveFile, App::save_file),
    (Command::SaveAsFile, App::save_file_as),
    (Command::Quit, App::quit),
    (Command::Cut, App::cut),
    (Command::Copy, App::copy),
    (Command::Paste, App::paste),
    (Command::SelectAll, App::select_all),
    (Command::Find, App::find),
    (Command::FindNext, App::find_next),
    (Command::ToggleLineNumbers, App::toggle_line_numbers),
    (Command::ToggleWordWrap, App::toggle_word_wrap),
    (Command::About, App::about),
];

pub struct App {
    document: Document,
    config: Config,
    viewport: Viewport,
    refresh: RefreshCoordinator,
    /// Gutter labels and status text as of the last refresh.
    gutter: Vec<String>,
    status_text: String,
    show_line_numbers: bool,
    word_wrap: bool,
    menu: Option<MenuCursor>,
    dialog: Option<Dialog>,
    find: FindDialogState,
    /// Set by the file-state listener; cleared when the title is pushed.
    title_dirty: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let engine = EditorEngine::new().with_tab_width(config.tab_width);
        let mut document = Document::with_engine(engine);

        let title_dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&title_dirty);
        document.file_mut().subscribe(move |_| flag.set(true));

        let mut app = Self {
            document,
            refresh: RefreshCoordinator::with_timing(
                config.debounce_delay(),
                config.quiet_threshold(),
            ),
            show_line_numbers: config.line_numbers,
            word_wrap: config.word_wrap,
            config,
            viewport: Viewport::default(),
            gutter: Vec::new(),
            status_text: String::new(),
            menu: None,
            dialog: None,
            find: FindDialogState::new(),
            title_dirty,
            should_quit: false,
        };
        app.recompute_derived();
        app
    }

    /// Load the file named on the command line. A blank path means an
    /// untitled document.
    pub fn open_initial(&mut self, path: Option<&Path>) {
        let Some(path) = path.filter(|p| !p.to_string_lossy().trim().is_empty()) else {
            return;
        };
        match self.document.load_initial(path) {
            Ok(()) => tracing::info!("Opened {:?}", path),
            Err(err) => {
                tracing::warn!("Startup load failed: {}", err);
                self.dialog = Some(Dialog::error("Error", format!("Could not open file: {}", err)));
            }
        }
        self.recompute_derived();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn gutter(&self) -> &[String] {
        &self.gutter
    }

    pub fn title(&self) -> String {
        let file = self.document.file();
        format!(
            "Text Editor - {}{}",
            file.display_name(),
            if file.is_modified() { "*" } else { "" }
        )
    }

    /// New window title if the file state changed since the last call.
    /// The status bar is brought up to date at the same time.
    pub fn sync_file_state(&mut self) -> Option<String> {
        if !self.title_dirty.replace(false) {
            return None;
        }
        self.recompute_status();
        Some(self.title())
    }

    /// Let the refresh coordinator fire. Returns `true` if derived views
    /// were recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.refresh.poll(now) {
            self.recompute_derived();
            true
        } else {
            false
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.refresh.next_deadline()
    }

    fn recompute_derived(&mut self) {
        let height = self.viewport.visible_height().unwrap_or_else(|err| {
            tracing::debug!("{}, using {} rows", err, DEFAULT_VISIBLE_HEIGHT);
            DEFAULT_VISIBLE_HEIGHT
        });
        let lines = self.document.stats().lines;
        self.gutter = line_number_labels(lines, height, self.viewport.top_row, self.word_wrap);
        self.recompute_status();
    }

    fn recompute_status(&mut self) {
        let stats = self.document.stats();
        let (line, column) = self.document.state().cursor_char_position();
        let file = self.document.file();
        self.status_text = format!(
            "{}{} | Ln {}, Col {} | {} chars, {} words, {} lines",
            file.display_name(),
            if file.is_modified() { "*" } else { "" },
            line + 1,
            column + 1,
            stats.characters,
            stats.words,
            stats.lines,
        );
    }

    fn page_rows(&self) -> usize {
        self.viewport.height_or_default().saturating_sub(1).max(1)
    }

    fn scroll_to_cursor(&mut self) {
        self.viewport
            .scroll_to_cursor(self.document.state(), self.word_wrap);
    }

    pub fn run_command(&mut self, command: Command) {
        tracing::debug!("Command {:?}", command);
        if let Some((_, handler)) = DISPATCH.iter().find(|(c, _)| *c == command) {
            handler(self);
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) {
        if self.dialog.is_some() {
            self.handle_dialog_key(&event);
        } else if self.menu.is_some() {
            self.handle_menu_key(&event);
        } else if let Some(command) = command_for(&event) {
            self.run_command(command);
        } else if let Some(menu) = menu_for(&event) {
            self.menu = Some(MenuCursor { menu, item: 0 });
        } else if let Some(action) = action_for(&event, self.page_rows()) {
            self.document.apply(action);
        }
        self.scroll_to_cursor();
        self.refresh.notify_changed(now);
    }

    fn handle_menu_key(&mut self, event: &KeyEvent) {
        let Some(mut cursor) = self.menu else {
            return;
        };
        let items = MENUS[cursor.menu].items.len();
        match event.code {
            KeyCode::Esc | KeyCode::F(9) => {
                self.menu = None;
                return;
            }
            KeyCode::Left => {
                cursor.menu = (cursor.menu + MENUS.len() - 1) % MENUS.len();
                cursor.item = 0;
            }
            KeyCode::Right => {
                cursor.menu = (cursor.menu + 1) % MENUS.len();
                cursor.item = 0;
            }
            KeyCode::Up => cursor.item = (cursor.item + items - 1) % items,
            KeyCode::Down => cursor.item = (cursor.item + 1) % items,
            KeyCode::Enter => {
                self.menu = None;
                let command = MENUS[cursor.menu].items[cursor.item].command;
                self.run_command(command);
                return;
            }
            _ => {
                if let Some(menu) = menu_for(event) {
                    cursor = MenuCursor { menu, item: 0 };
                }
            }
        }
        self.menu = Some(cursor);
    }

    fn handle_dialog_key(&mut self, event: &KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        let Some(outcome) = dialog.handle_key(event) else {
            return;
        };
        let closed = self.dialog.take();

        match outcome {
            DialogOutcome::Find(term) => self.confirm_find(&term),
            DialogOutcome::Quit(choice) => self.confirm_quit(choice),
            DialogOutcome::Path(purpose, path) => self.confirm_path(purpose, &path),
            DialogOutcome::Cancelled => {
                if matches!(closed, Some(Dialog::Find(_))) {
                    self.find.cancel();
                }
            }
            DialogOutcome::Dismissed => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        if self.dialog.is_some() {
            return;
        }
        let scroll = self.config.scroll_lines as isize;
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.viewport
                    .scroll_by(-scroll, self.document.state(), self.word_wrap);
            }
            MouseEventKind::ScrollDown => {
                self.viewport
                    .scroll_by(scroll, self.document.state(), self.word_wrap);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if event.row == 0 {
                    self.menu = menu_at(event.column).map(|menu| MenuCursor { menu, item: 0 });
                    return;
                }
                self.menu = None;
                if let Some(pos) = self.viewport.screen_to_document(
                    event.column,
                    event.row,
                    self.document.state(),
                    self.word_wrap,
                ) {
                    self.document.apply(EditorAction::SetCursorPosition {
                        row: pos.row,
                        column: pos.column,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(pos) = self.viewport.screen_to_document(
                    event.column,
                    event.row,
                    self.document.state(),
                    self.word_wrap,
                ) {
                    self.document.apply(EditorAction::ExtendSelection {
                        row: pos.row,
                        column: pos.column,
                    });
                }
            }
            _ => return,
        }
        self.refresh.notify_changed(now);
    }

    fn report_search(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Found { .. } => {}
            SearchOutcome::NotFound(term) => {
                self.dialog = Some(Dialog::message(
                    "Find",
                    EditorError::SearchNoMatch(term).to_string(),
                ));
            }
            SearchOutcome::EmptyText => {
                self.dialog = Some(Dialog::message("Find", "No text to search"));
            }
            SearchOutcome::NoTerm => self.find(),
        }
    }

    fn confirm_find(&mut self, term: &str) {
        let text = self.document.text();
        let Some(outcome) = self
            .find
            .confirm(term, &text, self.document.search_mut())
        else {
            return;
        };
        if let SearchOutcome::Found { line, column, .. } = outcome {
            self.document.move_cursor_to(line, column);
        }
        self.report_search(outcome);
    }

    fn confirm_quit(&mut self, choice: QuitChoice) {
        match choice {
            QuitChoice::Save => match self.document.save() {
                Ok(SaveOutcome::Saved(path)) => {
                    tracing::info!("Saved {:?}", path);
                    self.should_quit = true;
                }
                Ok(SaveOutcome::NeedsPath) => {
                    self.dialog = Some(Dialog::path(
                        PathPurpose::SaveAs { quit_after: true },
                        "",
                    ));
                }
                Err(err) => self.save_failed(err),
            },
            QuitChoice::QuitWithoutSaving => self.should_quit = true,
            QuitChoice::Cancel => {}
        }
    }

    fn confirm_path(&mut self, purpose: PathPurpose, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        let path = Path::new(path);
        match purpose {
            PathPurpose::Open => match self.document.open(path) {
                Ok(()) => {
                    tracing::info!("Opened {:?}", path);
                    self.viewport.reset();
                }
                Err(err) => {
                    tracing::warn!("Open failed: {}", err);
                    self.dialog =
                        Some(Dialog::error("Error", format!("Could not open file: {}", err)));
                }
            },
            PathPurpose::SaveAs { quit_after } => match self.document.save_as(path) {
                Ok(()) => {
                    tracing::info!("Saved {:?}", path);
                    self.should_quit = quit_after;
                }
                Err(err) => self.save_failed(err),
            },
        }
    }

    fn save_failed(&mut self, err: EditorError) {
        tracing::warn!("Save failed: {}", err);
        self.dialog = Some(Dialog::error("Error", format!("Could not save file: {}", err)));
    }

    fn new_file(&mut self) {
        self.document.new_file();
        self.viewport.reset();
    }

    fn open_file(&mut self) {
        self.dialog = Some(Dialog::path(PathPurpose::Open, ""));
    }

    fn save_file(&mut self) {
        match self.document.save() {
            Ok(SaveOutcome::Saved(path)) => tracing::info!("Saved {:?}", path),
            Ok(SaveOutcome::NeedsPath) => self.save_file_as(),
            Err(err) => self.save_failed(err),
        }
    }

    fn save_file_as(&mut self) {
        let current = self
            .document
            .file()
            .path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dialog = Some(Dialog::path(
            PathPurpose::SaveAs { quit_after: false },
            &current,
        ));
    }

    fn quit(&mut self) {
        if self.document.file().is_modified() {
            self.dialog = Some(Dialog::quit());
        } else {
            self.should_quit = true;
        }
    }

    fn cut(&mut self) {
        self.document.apply(EditorAction::Cut);
    }

    fn copy(&mut self) {
        self.document.apply(EditorAction::Copy);
    }

    fn paste(&mut self) {
        self.document.apply(EditorAction::Paste);
    }

    fn select_all(&mut self) {
        self.document.apply(EditorAction::SelectAll);
    }

    fn find(&mut self) {
        self.find.open();
        self.dialog = Some(Dialog::find(self.document.search().last_term()));
    }

    fn find_next(&mut self) {
        let outcome = self.document.find_next();
        self.report_search(outcome);
    }

    fn toggle_line_numbers(&mut self) {
        self.show_line_numbers = !self.show_line_numbers;
    }

    fn toggle_word_wrap(&mut self) {
        self.word_wrap = !self.word_wrap;
        self.viewport.reset();
    }

    fn about(&mut self) {
        self.dialog = Some(Dialog::message("About", ABOUT_TEXT));
    }

    fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let areas = render::areas(frame.size(), self.show_line_numbers);
        if self.viewport.area != areas.text {
            // New geometry: the gutter needs one label per visible row.
            self.viewport.area = areas.text;
            self.scroll_to_cursor();
            self.refresh.notify_changed(now);
        }

        let state = self.document.state();
        if let Some(gutter) = areas.gutter {
            render::gutter(frame, gutter, self.gutter());
        }
        let rows = self.viewport.rows(state, self.word_wrap);
        render::text_view(frame, areas.text, state, &rows);

        let help = self
            .menu
            .map(|cursor| MENUS[cursor.menu].items[cursor.item].help);
        render::status_bar(frame, areas.status, help.unwrap_or(self.status_text()));
        render::menu_bar(frame, areas.menu, self.menu);

        if let Some(dialog) = self.dialog() {
            render::dialog(frame, dialog);
        } else if self.menu.is_none() {
            if let Some((col, row)) = self.viewport.cursor_on_screen(state, self.word_wrap) {
                frame.set_cursor(areas.text.x + col, areas.text.y + row);
            }
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = std::io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetCursorStyle::SteadyBlock
        )
        .context("entering alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("creating terminal")?;

        let result = self.run_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            SetCursorStyle::DefaultUserShape,
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        while !self.should_quit {
            self.tick(Instant::now());
            if let Some(title) = self.sync_file_state() {
                execute!(terminal.backend_mut(), SetTitle(title))?;
            }

            terminal.draw(|frame| self.draw(frame, Instant::now()))?;

            let timeout = self
                .next_deadline()
                .map_or(IDLE_POLL, |deadline| {
                    deadline.saturating_duration_since(Instant::now())
                })
                .min(IDLE_POLL);

            if poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, Instant::now());
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
                    Event::Resize(_, _) => self.refresh.notify_changed(Instant::now()),
                    _ => {}
                }
            }
        }
        tracing::info!("Exiting");
        Ok(())
    }
}

/// Menu whose title covers column `col` of the menu bar.
fn menu_at(col: u16) -> Option<usize> {
    let mut start = 0usize;
    for (idx, menu) in MENUS.iter().enumerate() {
        let width = menu.title.chars().count() + 2;
        if (start..start + width).contains(&(col as usize)) {
            return Some(idx);
        }
        start += width;
    }
    None
}
