//! `UserCommand` and `EditorCommand`: the two tagged-union families the
//! input pipeline and dispatcher exchange, in place of the original
//! source's embedded-`char[256]`-payload structs.

use core_model::Direction;
use core_nav::MoveKind;
use core_text::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDir {
    Up,
    Down,
}

/// How `i`/`I`/`a`/`A` position the cursor before entering Insert mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertEntry {
    /// `i`: insert before the current item.
    Before,
    /// `a`: insert after the current item (cursor steps right first).
    After,
    /// `I`: move to the start of the line, then insert.
    LineStart,
    /// `A`: move to the end of the line, then insert.
    LineEnd,
}

/// A fully parsed Normal/Command-mode command, or a raw Insert-mode byte,
/// produced by `core-input` and consumed by the dispatcher in `core-actions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Move { kind: MoveKind, count: usize },
    Scroll { dir: ScrollDir, amount: usize },
    SwitchWindow(Direction),
    EnterCommandMode,
    EnterInsert(InsertEntry),
    Escape,
    /// A byte typed in Insert mode: printable, tab, backspace (0x7F), or
    /// Enter (0x0A). The dispatcher classifies it (spec.md §4.6).
    InsertByte(u8),
    /// The line accumulated in Command mode, dispatched on Enter.
    ExecuteCommand(String),
}

/// What the dispatcher applies to the focused window. Unlike `UserCommand`,
/// every variant here acts directly on buffer/window state with no further
/// interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    MoveCursor { kind: MoveKind, count: usize },
    Scroll { dir: ScrollDir, amount: usize },
    InsertSymbol(Symbol),
    NormalizeCursor,
    SwitchWindow(Direction),
}
