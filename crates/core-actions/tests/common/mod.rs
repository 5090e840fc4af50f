//! Shared scaffolding for `core-actions` integration tests: build an
//! `Editor` and replay a byte sequence through the full
//! `core-input -> core-actions::translate -> core-actions::dispatch`
//! pipeline, the same path `gridvi-bin`'s main loop drives.

use core_config::Config;
use core_model::{Point, Rect};
use core_state::Editor;

pub fn editor_with(initial: &[u8]) -> Editor {
    editor_with_view(initial, 80, 25)
}

pub fn editor_with_view(initial: &[u8], cols: u16, rows: u16) -> Editor {
    let screen = Rect::root(Point::new(0, 0), Point::new(cols, rows));
    Editor::new("fixture", initial, Config::default(), screen)
}

/// Feed every byte of `input` through the input pipeline, translating and
/// dispatching each resulting command immediately (mirrors the main loop's
/// "drain both queues before the next read" order).
pub fn type_str(editor: &mut Editor, input: &str) {
    for &byte in input.as_bytes() {
        if let Some(user_cmd) = editor.input.feed(byte) {
            core_actions::translate(editor, user_cmd);
            while let Some(editor_cmd) = editor.editor_queue.read() {
                core_actions::dispatch(editor, editor_cmd);
            }
        }
    }
}
