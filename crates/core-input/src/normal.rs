//! Normal-mode state machine: accumulate bytes until they exactly match a
//! valid command, are no longer a prefix of one, or a leading count digit
//! run updates the pending count.

use smallvec::SmallVec;

use core_events::{InsertEntry, ScrollDir, UserCommand};
use core_model::Direction;
use core_nav::MoveKind;

/// One recognized Normal-mode action. `MoveKind`/`ScrollDir` carry the
/// command's recorded count at commit time; the rest don't use a count.
#[derive(Debug, Clone, Copy)]
enum NormalAction {
    Move(MoveKind),
    Scroll(ScrollDir),
    SwitchWindow(Direction),
    EnterCommandMode,
    EnterInsert(InsertEntry),
}

/// The valid-command table from `spec.md` §4.4, expressed as explicit byte
/// sequences rather than a flat list the parser would have to re-split.
/// Note `g` alone is deliberately absent: it is accepted as a *prefix*
/// because `gg` is in the table, but produces no action on its own.
const TABLE: &[(&[u8], NormalAction)] = &[
    (b"h", NormalAction::Move(MoveKind::Left)),
    (b"j", NormalAction::Move(MoveKind::Down)),
    (b"k", NormalAction::Move(MoveKind::Up)),
    (b"l", NormalAction::Move(MoveKind::Right)),
    (b"^", NormalAction::Move(MoveKind::LineStart)),
    (b"$", NormalAction::Move(MoveKind::LineEnd)),
    (b"w", NormalAction::Move(MoveKind::WordForward)),
    (b"e", NormalAction::Move(MoveKind::WordEnd)),
    (b"b", NormalAction::Move(MoveKind::WordBackward)),
    (b"H", NormalAction::Move(MoveKind::ViewTop)),
    (b"M", NormalAction::Move(MoveKind::ViewMiddle)),
    (b"L", NormalAction::Move(MoveKind::ViewBottom)),
    (b"gg", NormalAction::Move(MoveKind::GotoTop)),
    (b"G", NormalAction::Move(MoveKind::GotoBottom)),
    (b":", NormalAction::EnterCommandMode),
    (b"i", NormalAction::EnterInsert(InsertEntry::Before)),
    (b"I", NormalAction::EnterInsert(InsertEntry::LineStart)),
    (b"a", NormalAction::EnterInsert(InsertEntry::After)),
    (b"A", NormalAction::EnterInsert(InsertEntry::LineEnd)),
    (&[0x04], NormalAction::Scroll(ScrollDir::Down)),
    (&[0x15], NormalAction::Scroll(ScrollDir::Up)),
    (&[0x17, 0x6C], NormalAction::SwitchWindow(Direction::Right)),
    (&[0x17, 0x68], NormalAction::SwitchWindow(Direction::Left)),
    (&[0x17, 0x6A], NormalAction::SwitchWindow(Direction::Down)),
    (&[0x17, 0x6B], NormalAction::SwitchWindow(Direction::Up)),
];

fn is_known_prefix(acc: &[u8]) -> bool {
    TABLE.iter().any(|(seq, _)| seq.starts_with(acc))
}

fn exact_match(acc: &[u8]) -> Option<NormalAction> {
    TABLE
        .iter()
        .find(|(seq, _)| *seq == acc)
        .map(|(_, action)| *action)
}

/// A partial Normal-mode command: the accumulated byte string plus an
/// optional numeric count. `count == 0` means "unspecified".
#[derive(Debug, Default)]
pub struct NormalState {
    accumulator: SmallVec<[u8; 2]>,
    count: usize,
}

impl NormalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn reset(&mut self) {
        self.accumulator.clear();
        self.count = 0;
    }

    /// Clear accumulated state without producing a command (Escape).
    pub fn clear(&mut self) {
        self.reset();
    }

    fn to_user_command(&self, action: NormalAction) -> UserCommand {
        match action {
            NormalAction::Move(kind) => UserCommand::Move {
                kind,
                count: self.count,
            },
            NormalAction::Scroll(dir) => UserCommand::Scroll {
                dir,
                amount: self.count,
            },
            NormalAction::SwitchWindow(dir) => UserCommand::SwitchWindow(dir),
            NormalAction::EnterCommandMode => UserCommand::EnterCommandMode,
            NormalAction::EnterInsert(entry) => UserCommand::EnterInsert(entry),
        }
    }

    /// Feed one byte. Returns the produced command on an exact match.
    pub fn feed(&mut self, byte: u8) -> Option<UserCommand> {
        if self.accumulator.is_empty() && byte.is_ascii_digit() {
            self.count = self.count.saturating_mul(10).saturating_add((byte - b'0') as usize);
            tracing::trace!(target: "input", count = self.count, "normal_state_count_digit");
            return None;
        }

        self.accumulator.push(byte);

        if !is_known_prefix(&self.accumulator) {
            tracing::trace!(target: "input", acc = ?self.accumulator, "normal_state_reset_unknown_prefix");
            self.reset();
            return None;
        }

        if let Some(action) = exact_match(&self.accumulator) {
            let cmd = self.to_user_command(action);
            tracing::trace!(target: "input", ?cmd, "normal_state_commit");
            self.reset();
            return Some(cmd);
        }

        None
    }
}
