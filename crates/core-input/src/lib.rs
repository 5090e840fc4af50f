//! The input pipeline: raw bytes in, `UserCommand`s out, one per-mode byte
//! at a time.

mod command;
mod mode;
mod normal;
mod pipeline;

pub use command::CommandState;
pub use mode::Mode;
pub use normal::NormalState;
pub use pipeline::InputPipeline;
