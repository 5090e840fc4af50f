//! Windows, tabs, buffers, and the rectangular regions they render into —
//! everything above the text model and navigation primitives that still
//! has no notion of input parsing or dispatch.

mod buffer;
mod rect;
mod tab;
mod window;

pub use buffer::{Buffer, BufferId, BufferRegistry};
pub use rect::{Point, Rect};
pub use tab::{Direction, Tab, TabItemId};
pub use window::Window;
