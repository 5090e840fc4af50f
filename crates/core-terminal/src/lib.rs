//! Terminal backend (spec.md §6): raw-mode/alternate-screen setup via
//! `crossterm`, blocking raw-byte input, OS terminal-size query, and a
//! differential cell-grid renderer that emits the literal ANSI sequences
//! the spec names rather than a typed drawing API.

mod backend;
mod input;
mod render;
mod size;

pub use backend::{CrosstermBackend, TerminalBackend, TerminalGuard};
pub use input::RawReader;
pub use render::{Renderer, Style};
pub use size::query_size;
