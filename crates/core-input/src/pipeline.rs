//! Ties `Mode` to the per-mode state machines: one byte in, at most one
//! `UserCommand` out. Escape is handled uniformly before any per-mode
//! logic runs, regardless of which mode is active.

use core_events::UserCommand;

use crate::command::CommandState;
use crate::mode::Mode;
use crate::normal::NormalState;

#[derive(Debug, Default)]
pub struct InputPipeline {
    mode: Mode,
    normal: NormalState,
    command: CommandState,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

impl InputPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn command_buffer(&self) -> &str {
        self.command.buffer()
    }

    /// Feed one raw input byte, returning a `UserCommand` if one was
    /// completed. Mode transitions implied by the produced command (`:`,
    /// `i`/`I`/`a`/`A`, Escape, Enter in Command mode) are applied here so
    /// the next byte is interpreted in the right mode.
    pub fn feed(&mut self, byte: u8) -> Option<UserCommand> {
        if byte == 0x1B {
            self.normal.clear();
            self.command.clear();
            self.mode = Mode::Normal;
            tracing::trace!(target: "input", "escape_resets_to_normal");
            return Some(UserCommand::Escape);
        }

        let cmd = match self.mode {
            Mode::Normal => self.normal.feed(byte),
            Mode::Command => self.command.feed(byte),
            Mode::Insert => Some(UserCommand::InsertByte(byte)),
        };

        match &cmd {
            Some(UserCommand::EnterCommandMode) => self.mode = Mode::Command,
            Some(UserCommand::EnterInsert(_)) => self.mode = Mode::Insert,
            Some(UserCommand::ExecuteCommand(_)) => self.mode = Mode::Normal,
            _ => {}
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_nav::MoveKind;

    #[test]
    fn insert_mode_round_trip_via_i_and_escape() {
        let mut pipeline = InputPipeline::new();
        let cmd = pipeline.feed(b'i').unwrap();
        assert!(matches!(cmd, UserCommand::EnterInsert(_)));
        assert_eq!(pipeline.mode(), Mode::Insert);

        for &b in b"abc" {
            let cmd = pipeline.feed(b).unwrap();
            assert_eq!(cmd, UserCommand::InsertByte(b));
        }

        let cmd = pipeline.feed(0x1B).unwrap();
        assert_eq!(cmd, UserCommand::Escape);
        assert_eq!(pipeline.mode(), Mode::Normal);
    }

    #[test]
    fn colon_quit_round_trip() {
        let mut pipeline = InputPipeline::new();
        assert!(matches!(pipeline.feed(b':').unwrap(), UserCommand::EnterCommandMode));
        assert_eq!(pipeline.mode(), Mode::Command);
        for &b in b"quit" {
            assert!(pipeline.feed(b).is_none());
        }
        let cmd = pipeline.feed(0x0A).unwrap();
        assert_eq!(cmd, UserCommand::ExecuteCommand("quit".to_string()));
        assert_eq!(pipeline.mode(), Mode::Normal);
    }

    #[test]
    fn normal_mode_move_passes_through() {
        let mut pipeline = InputPipeline::new();
        let cmd = pipeline.feed(b'l').unwrap();
        assert_eq!(cmd, UserCommand::Move { kind: MoveKind::Right, count: 0 });
    }
}
