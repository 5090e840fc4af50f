//! End-to-end replays of spec.md §8's concrete scenarios, driven byte by
//! byte through `core_input::InputPipeline` the way `gridvi-bin`'s main
//! loop would, rather than constructing `UserCommand`/`EditorCommand`
//! values directly.

mod common;

use common::{editor_with, editor_with_view, type_str};
use core_nav::Pos;

#[test]
fn insert_abc_then_escape_lands_on_last_inserted_char() {
    let mut editor = editor_with(b"");
    type_str(&mut editor, "iabc\x1b");

    let buffer_id = editor.focused_buffer_id();
    assert_eq!(editor.buffers.get(buffer_id).text.to_bytes(), b"abc\n");

    let cursor = editor.focused_window().cursor;
    assert_eq!(cursor.pos, Pos { x: 2, y: 0 });
}

#[test]
fn insert_two_lines_then_escape() {
    let mut editor = editor_with(b"");
    type_str(&mut editor, "ihello\nworld\x1b");

    let buffer_id = editor.focused_buffer_id();
    assert_eq!(
        editor.buffers.get(buffer_id).text.to_bytes(),
        b"hello\nworld\n"
    );

    let cursor = editor.focused_window().cursor;
    assert_eq!(cursor.pos, Pos { x: 4, y: 1 });
}

#[test]
fn goto_bottom_then_goto_top() {
    let mut editor = editor_with(b"foo\nbar\nbaz\n");

    type_str(&mut editor, "G");
    assert_eq!(editor.focused_window().cursor.pos, Pos { x: 0, y: 2 });

    type_str(&mut editor, "gg");
    assert_eq!(editor.focused_window().cursor.pos, Pos { x: 0, y: 0 });
}

#[test]
fn word_motions_over_blank_prefixed_line() {
    let mut editor = editor_with(b"  hello world\n");

    type_str(&mut editor, "w");
    assert_eq!(editor.focused_window().cursor.pos.x, 2);

    type_str(&mut editor, "w");
    assert_eq!(editor.focused_window().cursor.pos.x, 8);

    type_str(&mut editor, "b");
    assert_eq!(editor.focused_window().cursor.pos.x, 2);
}

#[test]
fn ctrl_d_then_ctrl_u_scroll_half_page() {
    let mut lines = String::new();
    for n in 0..100 {
        lines.push_str(&format!("line{n}\n"));
    }
    let mut editor = editor_with_view(lines.as_bytes(), 80, 11);

    type_str(&mut editor, "\x04");
    let after_down = editor.focused_window().y_offset;
    assert!(after_down > 0, "Ctrl-D should scroll the viewport down");

    type_str(&mut editor, "\x15");
    let after_up = editor.focused_window().y_offset;
    assert!(after_up < after_down, "Ctrl-U should scroll the viewport back up");
}

#[test]
fn colon_quit_sets_exit_flag() {
    let mut editor = editor_with(b"text\n");
    type_str(&mut editor, ":quit\n");
    assert!(editor.exit_requested);
}

#[test]
fn colon_unknown_command_sets_status_message() {
    let mut editor = editor_with(b"text\n");
    type_str(&mut editor, ":xyz\n");
    assert!(!editor.exit_requested);
    assert_eq!(editor.status_message, "Not an editor command: xyz");
}
