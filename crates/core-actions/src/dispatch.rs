//! Applies one `EditorCommand` to the focused window, per `spec.md` §4.6.

use core_events::{EditorCommand, ScrollDir};
use core_model::Window;
use core_nav::MoveKind;
use core_state::Editor;
use core_text::TextModel;

fn clamp_count(count: usize) -> usize {
    count.max(1)
}

/// Disjoint-field split: the focused window's text model and the window
/// itself, borrowed independently so navigation can mutate the cursor
/// while reading the buffer it walks. Safe because `buffers` and `tabs`
/// are separate fields of `Editor` — no aliasing, no unsafe needed.
fn focused_parts(editor: &mut Editor) -> (&mut TextModel, &mut Window) {
    let current_tab = editor.current_tab;
    let buffer_id = editor.tabs[current_tab].focused_window().buffer;
    let window = editor.tabs[current_tab].focused_window_mut();
    let text = &mut editor.buffers.get_mut(buffer_id).text;
    (text, window)
}

fn apply_move(model: &TextModel, cursor: &mut core_nav::Cursor, kind: MoveKind, count: usize, y_offset: usize) {
    match kind {
        MoveKind::Left => {
            core_nav::move_left(model, cursor, clamp_count(count));
        }
        MoveKind::Right => {
            core_nav::move_right(model, cursor, clamp_count(count));
        }
        MoveKind::Up => {
            core_nav::move_up(model, cursor, clamp_count(count));
        }
        MoveKind::Down => {
            core_nav::move_down(model, cursor, clamp_count(count));
        }
        MoveKind::LineStart => {
            core_nav::to_start_of_line(model, cursor);
        }
        MoveKind::LineEnd => {
            core_nav::to_end_of_line(model, cursor);
        }
        MoveKind::WordForward => core_nav::word_forward(model, cursor),
        MoveKind::WordEnd => core_nav::word_end(model, cursor),
        MoveKind::WordBackward => core_nav::word_backward(model, cursor),
        MoveKind::ViewTop | MoveKind::ViewMiddle | MoveKind::ViewBottom => {
            unreachable!("view-relative moves are resolved in dispatch(), which knows view_rows")
        }
        MoveKind::GotoTop => {
            // spec.md §4.2: "move to absolute line max(N,1)-1; with no count, to line 0."
            let target = count.saturating_sub(1);
            core_nav::goto_line(model, cursor, target, y_offset);
        }
        MoveKind::GotoBottom => {
            // spec.md §4.2: "to line N-1; with no count, to the last line."
            let target = if count == 0 {
                model.line_index(model.last_line())
            } else {
                count - 1
            };
            core_nav::goto_line(model, cursor, target, y_offset);
        }
    }
}

/// Consume one `EditorCommand` against the editor's focused window.
pub fn dispatch(editor: &mut Editor, cmd: EditorCommand) {
    tracing::trace!(target: "dispatch", ?cmd, "dispatch");
    match cmd {
        EditorCommand::MoveCursor { kind, count } => {
            let (model, window) = focused_parts(editor);
            let total_lines = model.line_count();
            match kind {
                MoveKind::ViewTop | MoveKind::ViewMiddle | MoveKind::ViewBottom => {
                    let view_rows = window.source.rows() as usize;
                    let target_row = match kind {
                        MoveKind::ViewTop => 0,
                        MoveKind::ViewMiddle => view_rows / 2,
                        MoveKind::ViewBottom => view_rows.saturating_sub(1),
                        _ => unreachable!(),
                    } as i64;
                    let delta = target_row - window.cursor.pos.y;
                    if delta > 0 {
                        core_nav::move_down(model, &mut window.cursor, delta as usize);
                    } else if delta < 0 {
                        core_nav::move_up(model, &mut window.cursor, (-delta) as usize);
                    }
                }
                _ => apply_move(model, &mut window.cursor, kind, count, window.y_offset),
            }
            window.viewport_sync(total_lines);
        }
        EditorCommand::Scroll { dir, amount } => {
            let current_tab = editor.current_tab;
            let view_rows = editor.tabs[current_tab].focused_window().source.rows() as usize;
            let n = if amount > 0 {
                amount
            } else {
                editor.config.half_page(view_rows)
            };
            let (model, window) = focused_parts(editor);
            let total_lines = model.line_count();
            match dir {
                ScrollDir::Down => {
                    core_nav::move_down(model, &mut window.cursor, n);
                    window.offset_down(n, total_lines);
                }
                ScrollDir::Up => {
                    core_nav::move_up(model, &mut window.cursor, n);
                    window.offset_up(n);
                }
            }
        }
        EditorCommand::InsertSymbol(symbol) => {
            let (model, window) = focused_parts(editor);
            let cursor = &mut window.cursor;
            if symbol.byte() == 0x7F {
                let shift = model.delete_before(cursor.line, cursor.item);
                if shift > 0 {
                    cursor.pos.x -= shift;
                } else if cursor.pos.x == 0 {
                    if let Some(prev_line) = model.prev_line(cursor.line) {
                        let join_x = model.line(prev_line).content_width();
                        let join_point = model
                            .join_line_after(prev_line)
                            .expect("prev_line has a next line (cursor.line) to join");
                        cursor.line = prev_line;
                        cursor.item = join_point;
                        cursor.pos.x = join_x;
                        cursor.pos.y -= 1;
                    }
                }
            } else if symbol.is_newline() {
                let new_line = model.split_line_at(cursor.line, cursor.item);
                cursor.line = new_line;
                cursor.item = model.line(new_line).head();
                cursor.pos.x = 0;
                cursor.pos.y += 1;
            } else if symbol.is_insertable() {
                let shift = model.insert(cursor.line, cursor.item, symbol);
                cursor.pos.x += shift;
            }
        }
        EditorCommand::NormalizeCursor => {
            let (model, window) = focused_parts(editor);
            if model.line(window.cursor.line).is_newline(window.cursor.item) {
                core_nav::backward(model, &mut window.cursor);
            }
        }
        EditorCommand::SwitchWindow(dir) => {
            editor.current_tab_mut().switch_window(dir);
        }
    }
}
