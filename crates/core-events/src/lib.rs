//! The event vocabulary between the input pipeline and the dispatcher, and
//! the bounded queues that carry it.

mod commands;
mod ring_queue;

pub use commands::{EditorCommand, InsertEntry, ScrollDir, UserCommand};
pub use ring_queue::RingQueue;
