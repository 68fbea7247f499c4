use smalledit_core::{BufferPosition, EditorAction, EditorEngine};

#[test]
fn test_type_character() {
    let mut engine = EditorEngine::new();
    assert!(engine.handle_action(EditorAction::TypeCharacter('h')));
    assert!(engine.handle_action(EditorAction::TypeCharacter('i')));

    assert_eq!(engine.text(), "hi");
    assert_eq!(engine.state().cursor, BufferPosition::new(0, 2));
}

#[test]
fn test_type_string() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello world".to_string()));

    assert_eq!(engine.text(), "hello world");
    assert_eq!(engine.state().cursor.column, 11);
}

#[test]
fn test_type_multiline_string() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello\nworld".to_string()));

    assert_eq!(engine.state().line_count(), 2);
    assert_eq!(engine.state().cursor, BufferPosition::new(1, 5));
}

#[test]
fn test_backspace_empty() {
    let mut engine = EditorEngine::new();
    assert!(!engine.handle_action(EditorAction::Backspace));

    assert_eq!(engine.text(), "");
    assert_eq!(engine.state().cursor, BufferPosition::zero());
}

#[test]
fn test_backspace_deletes_character() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeCharacter('a'));
    engine.handle_action(EditorAction::TypeCharacter('b'));
    engine.handle_action(EditorAction::Backspace);

    assert_eq!(engine.text(), "a");
    assert_eq!(engine.state().cursor.column, 1);
}

#[test]
fn test_delete_character() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("abc".to_string()));
    engine.handle_action(EditorAction::MoveLeft);
    engine.handle_action(EditorAction::Delete);

    assert_eq!(engine.text(), "ab");
}

#[test]
fn test_delete_at_end_of_document_is_noop() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("abc".to_string()));

    assert!(!engine.handle_action(EditorAction::Delete));
    assert_eq!(engine.text(), "abc");
}

#[test]
fn test_move_cursor_left_at_start() {
    let mut engine = EditorEngine::new();
    assert!(!engine.handle_action(EditorAction::MoveLeft));

    assert_eq!(engine.state().cursor, BufferPosition::zero());
}

#[test]
fn test_move_cursor_right() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeCharacter('a'));
    engine.handle_action(EditorAction::MoveLeft);
    engine.handle_action(EditorAction::MoveRight);

    assert_eq!(engine.state().cursor.column, 1);
}

#[test]
fn test_newline() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello".to_string()));
    engine.handle_action(EditorAction::Newline);
    engine.handle_action(EditorAction::TypeString("world".to_string()));

    assert_eq!(engine.text(), "hello\nworld");
    assert_eq!(engine.state().cursor, BufferPosition::new(1, 5));
}

#[test]
fn test_move_up_down() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("line1\nline2".to_string()));

    engine.handle_action(EditorAction::MoveUp);
    assert_eq!(engine.state().cursor.row, 0);

    engine.handle_action(EditorAction::MoveDown);
    assert_eq!(engine.state().cursor.row, 1);
}

#[test]
fn test_vertical_move_keeps_character_column() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("héllo\nab".to_string()));
    engine.handle_action(EditorAction::MoveUp);

    // Two characters in, which is three bytes into "héllo".
    assert_eq!(engine.state().cursor, BufferPosition::new(0, 3));
    assert_eq!(engine.state().cursor_char_position(), (0, 2));
}

#[test]
fn test_page_down_clamps_to_last_line() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("1\n2\n3\n4".to_string()));
    engine.handle_action(EditorAction::MoveToStartOfDocument);
    engine.handle_action(EditorAction::PageDown(10));

    assert_eq!(engine.state().cursor.row, 3);

    engine.handle_action(EditorAction::PageUp(2));
    assert_eq!(engine.state().cursor.row, 1);
}

#[test]
fn test_move_to_line_start_end() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello world".to_string()));

    engine.handle_action(EditorAction::MoveToBeginningOfLine);
    assert_eq!(engine.state().cursor.column, 0);

    engine.handle_action(EditorAction::MoveToEndOfLine);
    assert_eq!(engine.state().cursor.column, 11);
}

#[test]
fn test_word_movement() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello world".to_string()));

    engine.handle_action(EditorAction::MoveWordLeft);
    assert_eq!(engine.state().cursor.column, 6);
    engine.handle_action(EditorAction::MoveWordLeft);
    assert_eq!(engine.state().cursor.column, 0);

    engine.handle_action(EditorAction::MoveWordRight);
    assert_eq!(engine.state().cursor.column, 6);
}

#[test]
fn test_unicode_handling() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeCharacter('🚀'));

    assert_eq!(engine.text(), "🚀");
    assert_eq!(engine.state().cursor.column, 4); // UTF-8 bytes

    engine.handle_action(EditorAction::Backspace);
    assert_eq!(engine.text(), "");
}

#[test]
fn test_set_cursor_position_snaps_to_char_boundary() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("a🚀b".to_string()));
    engine.handle_action(EditorAction::SetCursorPosition { row: 7, column: 3 });

    assert_eq!(engine.state().cursor, BufferPosition::new(0, 1));
}

#[test]
fn test_tab_indentation() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello".to_string()));
    engine.handle_action(EditorAction::Tab);
    engine.handle_action(EditorAction::TypeString("world".to_string()));

    assert_eq!(engine.text(), "hello    world");
}

#[test]
fn test_custom_tab_width() {
    let mut engine = EditorEngine::new().with_tab_width(2);
    engine.handle_action(EditorAction::Tab);

    assert_eq!(engine.text(), "  ");
}

#[test]
fn test_select_all() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello\nworld".to_string()));
    assert!(!engine.handle_action(EditorAction::SelectAll));

    assert_eq!(engine.state().selection_anchor, Some(BufferPosition::zero()));
    assert_eq!(engine.state().cursor, BufferPosition::new(1, 5));
}

#[test]
fn test_select_left_right() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello".to_string()));
    engine.handle_action(EditorAction::SelectLeft);
    engine.handle_action(EditorAction::SelectLeft);

    assert_eq!(engine.state().selection_anchor, Some(BufferPosition::new(0, 5)));
    assert_eq!(engine.state().cursor.column, 3);

    engine.handle_action(EditorAction::MoveLeft);
    assert!(engine.state().selection_anchor.is_none());
}

#[test]
fn test_typing_replaces_selection() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("abc\ndef".to_string()));
    engine.handle_action(EditorAction::SelectAll);
    engine.handle_action(EditorAction::TypeCharacter('x'));

    assert_eq!(engine.text(), "x");
    assert_eq!(engine.state().cursor, BufferPosition::new(0, 1));
}

#[test]
fn test_cut_and_paste() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello world".to_string()));
    for _ in 0..5 {
        engine.handle_action(EditorAction::SelectLeft);
    }

    assert!(engine.handle_action(EditorAction::Cut));
    assert_eq!(engine.text(), "hello ");
    assert_eq!(engine.clipboard(), "world");

    engine.handle_action(EditorAction::MoveToBeginningOfLine);
    assert!(engine.handle_action(EditorAction::Paste));
    assert_eq!(engine.text(), "worldhello ");
}

#[test]
fn test_cut_without_selection_changes_nothing() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello".to_string()));

    assert!(!engine.handle_action(EditorAction::Cut));
    assert_eq!(engine.text(), "hello");
    assert_eq!(engine.clipboard(), "");
}

#[test]
fn test_copy_multiline_selection() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("ab\ncd\nef".to_string()));
    engine.handle_action(EditorAction::SetCursorPosition { row: 0, column: 1 });
    engine.handle_action(EditorAction::ExtendSelection { row: 2, column: 1 });

    assert!(!engine.handle_action(EditorAction::Copy));
    assert_eq!(engine.clipboard(), "b\ncd\ne");
    assert_eq!(engine.text(), "ab\ncd\nef");
}

#[test]
fn test_paste_multiline() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("one\ntwo".to_string()));
    engine.handle_action(EditorAction::SelectAll);
    engine.handle_action(EditorAction::Copy);
    engine.handle_action(EditorAction::MoveToEndOfDocument);
    engine.handle_action(EditorAction::Paste);

    assert_eq!(engine.text(), "one\ntwoone\ntwo");
    assert_eq!(engine.state().cursor, BufferPosition::new(2, 3));
}

#[test]
fn test_backspace_joins_lines() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello\nworld".to_string()));
    engine.handle_action(EditorAction::MoveToBeginningOfLine);
    engine.handle_action(EditorAction::Backspace);

    assert_eq!(engine.text(), "helloworld");
    assert_eq!(engine.state().cursor, BufferPosition::new(0, 5));
}

#[test]
fn test_delete_joins_lines() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("hello\nworld".to_string()));
    engine.handle_action(EditorAction::MoveUp);
    engine.handle_action(EditorAction::MoveToEndOfLine);
    engine.handle_action(EditorAction::Delete);

    assert_eq!(engine.text(), "helloworld");
}

#[test]
fn test_set_text_resets_cursor() {
    let mut engine = EditorEngine::new();
    engine.handle_action(EditorAction::TypeString("abc".to_string()));
    engine.set_text("x\r\ny\n");

    assert_eq!(engine.state().cursor, BufferPosition::zero());
    assert_eq!(engine.state().line_count(), 3);
    assert_eq!(engine.text(), "x\r\ny\n");
}
