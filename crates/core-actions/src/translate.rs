//! Turns one `UserCommand` into queued `EditorCommand`(s), or applies it
//! directly when it has no window-dispatch counterpart (entering a mode,
//! executing a colon command).

use core_events::{EditorCommand, InsertEntry, UserCommand};
use core_model::Window;
use core_state::Editor;
use core_text::{Symbol, TextModel};

use crate::command_table;

/// Reposition the focused window's cursor for `i`/`I`/`a`/`A` before the
/// mode switch to Insert (already applied by `core_input::InputPipeline`)
/// takes effect. `a` deliberately steps onto the newline sentinel — Insert
/// mode is the one context where that is a valid cursor position (spec.md
/// §3's "never the newline sentinel" invariant is scoped to Normal mode).
fn position_for_insert(model: &TextModel, window: &mut Window, entry: InsertEntry) {
    let cursor = &mut window.cursor;
    match entry {
        InsertEntry::Before => {}
        InsertEntry::After => {
            let line = model.line(cursor.line);
            if let Some(next) = line.next(cursor.item) {
                let shift = line.symbol(cursor.item).screen_width();
                cursor.item = next;
                cursor.pos.x += shift;
            }
        }
        InsertEntry::LineStart => {
            core_nav::to_start_of_line(model, cursor);
        }
        InsertEntry::LineEnd => {
            core_nav::to_end_of_line(model, cursor);
        }
    }
}

/// Translate one `UserCommand`, queuing `EditorCommand`s for `dispatch` to
/// consume and applying mode-local effects (insert positioning, colon
/// commands) immediately.
pub fn translate(editor: &mut Editor, cmd: UserCommand) {
    match cmd {
        UserCommand::Move { kind, count } => {
            editor.editor_queue.write(EditorCommand::MoveCursor { kind, count });
        }
        UserCommand::Scroll { dir, amount } => {
            editor.editor_queue.write(EditorCommand::Scroll { dir, amount });
        }
        UserCommand::SwitchWindow(dir) => {
            editor.editor_queue.write(EditorCommand::SwitchWindow(dir));
        }
        UserCommand::EnterCommandMode => {}
        UserCommand::EnterInsert(entry) => {
            let current_tab = editor.current_tab;
            let buffer_id = editor.tabs[current_tab].focused_window().buffer;
            let model = &editor.buffers.get(buffer_id).text;
            let window = editor.tabs[current_tab].focused_window_mut();
            position_for_insert(model, window, entry);
        }
        UserCommand::Escape => {
            editor.editor_queue.write(EditorCommand::NormalizeCursor);
        }
        UserCommand::InsertByte(byte) => {
            editor
                .editor_queue
                .write(EditorCommand::InsertSymbol(Symbol(byte)));
        }
        UserCommand::ExecuteCommand(line) => {
            command_table::execute(editor, &line);
        }
    }
}
