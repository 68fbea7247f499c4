//! Drawing: menu bar, gutter, text view, status bar and dialogs

use crate::app::MenuCursor;
use crate::dialogs::{Dialog, QUIT_BUTTONS};
use crate::viewport::VisualRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use smalledit_core::gutter::LABEL_WIDTH;
use smalledit_core::{EditorState, MENUS};

/// Gutter labels plus one column of padding.
pub const GUTTER_WIDTH: u16 = LABEL_WIDTH as u16 + 1;

const DIALOG_WIDTH: u16 = 60;

pub struct Areas {
    pub menu: Rect,
    pub gutter: Option<Rect>,
    pub text: Rect,
    pub status: Rect,
}

pub fn areas(area: Rect, show_line_numbers: bool) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let (gutter, text) = if show_line_numbers {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
            .split(rows[1]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[1])
    };

    Areas {
        menu: rows[0],
        gutter,
        text,
        status: rows[2],
    }
}

fn menu_title(title: &str) -> String {
    format!(" {} ", title)
}

pub fn menu_bar(frame: &mut Frame, area: Rect, open: Option<MenuCursor>) {
    let bar_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let spans: Vec<Span> = MENUS
        .iter()
        .enumerate()
        .map(|(idx, menu)| {
            let style = if open.is_some_and(|cursor| cursor.menu == idx) {
                bar_style.add_modifier(Modifier::REVERSED)
            } else {
                bar_style
            };
            Span::styled(menu_title(menu.title), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);

    let Some(cursor) = open else {
        return;
    };
    let Some(menu) = MENUS.get(cursor.menu) else {
        return;
    };

    let x: usize = MENUS[..cursor.menu]
        .iter()
        .map(|m| menu_title(m.title).chars().count())
        .sum();
    let width = menu
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0) as u16
        + 4;
    let full = frame.size();
    let dropdown = Rect {
        x: area.x + x as u16,
        y: area.y + 1,
        width,
        height: menu.items.len() as u16 + 2,
    }
    .intersection(full);

    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == cursor.item {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {:<w$} ", item.label, w = width as usize - 4), style))
        })
        .collect();

    frame.render_widget(Clear, dropdown);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        dropdown,
    );
}

pub fn gutter(frame: &mut Frame, area: Rect, labels: &[String]) {
    let lines: Vec<Line> = labels.iter().map(|label| Line::raw(label.as_str())).collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Character columns of the selection that fall on `line`.
fn selection_on_line(state: &EditorState, line: usize) -> Option<(usize, usize)> {
    let (start, end) = state.selection_range()?;
    if line < start.row || line > end.row {
        return None;
    }
    let text = state.line(line)?;
    let to_chars = |byte: usize| text[..byte.min(text.len())].chars().count();
    let from = if line == start.row { to_chars(start.column) } else { 0 };
    let to = if line == end.row {
        to_chars(end.column)
    } else {
        text.chars().count()
    };
    Some((from, to))
}

fn row_spans(state: &EditorState, row: &VisualRow, selection_style: Style) -> Line<'static> {
    let Some(text) = state.line(row.line) else {
        return Line::default();
    };
    let visible: Vec<char> = text
        .chars()
        .skip(row.start)
        .take(row.end.saturating_sub(row.start))
        .collect();

    let Some((from, to)) = selection_on_line(state, row.line) else {
        return Line::raw(visible.into_iter().collect::<String>());
    };

    // Clip the selection to this row.
    let from = from.clamp(row.start, row.start + visible.len()) - row.start;
    let to = to.clamp(row.start, row.start + visible.len()) - row.start;
    let piece = |a: usize, b: usize| visible[a..b].iter().collect::<String>();

    Line::from(vec![
        Span::raw(piece(0, from)),
        Span::styled(piece(from, to), selection_style),
        Span::raw(piece(to, visible.len())),
    ])
}

pub fn text_view(frame: &mut Frame, area: Rect, state: &EditorState, rows: &[VisualRow]) {
    let selection_style = Style::default().bg(Color::DarkGray);
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| row_spans(state, row, selection_style))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::White).bg(Color::Black)),
        area,
    );
}

pub fn status_bar(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string()).style(Style::default().fg(Color::Black).bg(Color::Gray)),
        area,
    );
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn button(label: &str, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Span::styled(format!("[ {} ]", label), style)
}

pub fn dialog(frame: &mut Frame, dialog: &Dialog) {
    let full = frame.size();
    match dialog {
        Dialog::Find(input) => {
            input_dialog(frame, full, "Find", "Search for:", input.text(), input.cursor(), "Find")
        }
        Dialog::Path { purpose, input } => input_dialog(
            frame,
            full,
            purpose.title(),
            purpose.prompt(),
            input.text(),
            input.cursor(),
            "OK",
        ),
        Dialog::Quit { selected } => {
            let area = centered(DIALOG_WIDTH + 10, 7, full);
            let mut buttons = Vec::new();
            for (idx, (_, label)) in QUIT_BUTTONS.iter().enumerate() {
                if idx > 0 {
                    buttons.push(Span::raw("  "));
                }
                buttons.push(button(label, idx == *selected));
            }
            let lines = vec![
                Line::raw("You are about to quit with unsaved changes. Do you want to save?"),
                Line::default(),
                Line::from(buttons),
            ];
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Do you really want to quit?"),
                ),
                area,
            );
        }
        Dialog::Message { title, body, error } => {
            let mut lines: Vec<Line> = body.lines().map(|l| Line::raw(l.to_string())).collect();
            lines.push(Line::default());
            lines.push(Line::from(button("OK", true)));
            let area = centered(DIALOG_WIDTH, lines.len() as u16 + 2, full);
            let border = if *error {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(title.as_str()),
                ),
                area,
            );
        }
    }
}

fn input_dialog(
    frame: &mut Frame,
    full: Rect,
    title: &str,
    prompt: &str,
    text: &str,
    cursor: usize,
    confirm: &str,
) {
    let area = centered(DIALOG_WIDTH, 7, full);
    let field_width = area.width.saturating_sub(2) as usize;

    // Keep the cursor inside the field on long input.
    let skip = (cursor + 1).saturating_sub(field_width);
    let shown: String = text.chars().skip(skip).take(field_width).collect();

    let lines = vec![
        Line::raw(prompt.to_string()),
        Line::styled(
            format!("{:<w$}", shown, w = field_width),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
        Line::default(),
        Line::from(vec![
            button(confirm, true),
            Span::raw("  "),
            Span::raw("Esc: Cancel"),
        ]),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
    if area.width > 2 && area.height > 2 {
        frame.set_cursor(area.x + 1 + (cursor - skip) as u16, area.y + 2);
    }
}
