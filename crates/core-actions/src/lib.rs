//! `UserCommand` → `EditorCommand` translation and the dispatcher that
//! applies an `EditorCommand` to the focused window.

mod command_table;
mod dispatch;
mod translate;

pub use dispatch::dispatch;
pub use translate::translate;
