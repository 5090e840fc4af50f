//! Cursor navigation: primitive moves that never cross a line boundary,
//! line moves, and the composed moves the dispatcher calls directly.
//!
//! Every function here is free of window/viewport state — it takes a
//! `TextModel` and a `Cursor` (line id + item id + screen `Pos`) and returns
//! the distance moved, so callers can compose counts without caring how
//! any one step was implemented. Boundary conditions never panic; they
//! return `0` and leave the cursor where it was (see `spec.md` §7).

use core_text::{ItemId, LineId, TextModel};

/// Cursor position in screen space. `y` is signed because the composed
/// moves (absolute line jumps, scroll) produce a transient out-of-viewport
/// value that `Window::viewport_sync` (in `core-model`) pulls back in range
/// as the *last* step of any move — never the navigation primitives
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: i64,
}

impl Pos {
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub line: LineId,
    pub item: ItemId,
    pub pos: Pos,
}

impl Cursor {
    pub fn at_head(model: &TextModel) -> Self {
        let line = model.head();
        let item = model.line(line).head();
        Self {
            line,
            item,
            pos: Pos::origin(),
        }
    }
}

/// Selects which composed move a `MoveCursor` editor command applies. Pure
/// tag — the dispatcher matches on it and calls the matching function in
/// this module with the command's count (and, for `H`/`M`/`L`/`GotoTop`/
/// `GotoBottom`, the window's current viewport state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    WordForward,
    WordEnd,
    WordBackward,
    ViewTop,
    ViewMiddle,
    ViewBottom,
    GotoTop,
    GotoBottom,
}

/// Apply `step` up to `count` times, stopping early (and not counting the
/// failed attempt) once it returns 0. Returns the summed distance.
pub fn repeat_step(mut step: impl FnMut(&mut Cursor) -> usize, cursor: &mut Cursor, count: usize) -> usize {
    let mut total = 0;
    for _ in 0..count {
        let d = step(cursor);
        if d == 0 {
            break;
        }
        total += d;
    }
    total
}

/// Apply `step` until it returns 0 (a fixpoint — e.g. "to end of line").
pub fn run_to_fixpoint(mut step: impl FnMut(&mut Cursor) -> usize, cursor: &mut Cursor) -> usize {
    let mut total = 0;
    loop {
        let d = step(cursor);
        if d == 0 {
            break;
        }
        total += d;
    }
    total
}

/// Step to the next item on the same line, unless it would land on the
/// newline sentinel. Returns the screen-column shift consumed, or 0.
pub fn forward(model: &TextModel, cursor: &mut Cursor) -> usize {
    let line = model.line(cursor.line);
    let Some(next) = line.next(cursor.item) else {
        return 0;
    };
    if line.is_newline(next) {
        return 0;
    }
    let shift = line.symbol(cursor.item).screen_width();
    cursor.item = next;
    cursor.pos.x += shift;
    shift
}

/// Step to the previous item on the same line. Returns the shift consumed,
/// or 0 if already at the line's head.
pub fn backward(model: &TextModel, cursor: &mut Cursor) -> usize {
    let line = model.line(cursor.line);
    let Some(prev) = line.prev(cursor.item) else {
        return 0;
    };
    let shift = line.symbol(prev).screen_width();
    cursor.item = prev;
    cursor.pos.x = cursor.pos.x.saturating_sub(shift);
    shift
}

/// Move to the next line, resetting the item pointer to its head and `x`
/// to 0. Returns 1 on success, 0 at the last line.
pub fn to_next_line(model: &TextModel, cursor: &mut Cursor) -> usize {
    let Some(next) = model.next_line(cursor.line) else {
        return 0;
    };
    cursor.line = next;
    cursor.item = model.line(next).head();
    cursor.pos.x = 0;
    cursor.pos.y += 1;
    1
}

/// Symmetric to [`to_next_line`].
pub fn to_prev_line(model: &TextModel, cursor: &mut Cursor) -> usize {
    let Some(prev) = model.prev_line(cursor.line) else {
        return 0;
    };
    cursor.line = prev;
    cursor.item = model.line(prev).head();
    cursor.pos.x = 0;
    cursor.pos.y -= 1;
    1
}

pub fn to_end_of_line(model: &TextModel, cursor: &mut Cursor) -> usize {
    run_to_fixpoint(|c| forward(model, c), cursor)
}

pub fn to_start_of_line(model: &TextModel, cursor: &mut Cursor) -> usize {
    run_to_fixpoint(|c| backward(model, c), cursor)
}

/// Cross the line boundary (landing at the next line's head) if an inline
/// `forward` would no-op.
pub fn forward_or_next_line(model: &TextModel, cursor: &mut Cursor) -> usize {
    let d = forward(model, cursor);
    if d > 0 { d } else { to_next_line(model, cursor) }
}

/// Cross the line boundary (landing at the previous line's head) if an
/// inline `backward` would no-op.
pub fn backward_or_prev_line(model: &TextModel, cursor: &mut Cursor) -> usize {
    let d = backward(model, cursor);
    if d > 0 { d } else { to_prev_line(model, cursor) }
}

/// `h`/`l`: `count` single-column steps.
pub fn move_left(model: &TextModel, cursor: &mut Cursor, count: usize) -> usize {
    repeat_step(|c| backward(model, c), cursor, count)
}

pub fn move_right(model: &TextModel, cursor: &mut Cursor, count: usize) -> usize {
    repeat_step(|c| forward(model, c), cursor, count)
}

fn restore_x(model: &TextModel, cursor: &mut Cursor, target_x: usize) {
    loop {
        let line = model.line(cursor.line);
        let sym = line.symbol(cursor.item);
        if sym.is_newline() {
            break;
        }
        if cursor.pos.x + sym.screen_width() > target_x {
            break;
        }
        forward(model, cursor);
    }
}

/// `k`: move up `count` lines, restoring (clamped) the original screen
/// column on the destination line. Returns the number of lines moved.
pub fn move_up(model: &TextModel, cursor: &mut Cursor, count: usize) -> usize {
    let target_x = cursor.pos.x;
    let moved = repeat_step(|c| to_prev_line(model, c), cursor, count);
    if moved > 0 {
        restore_x(model, cursor, target_x);
    }
    moved
}

/// `j`: symmetric to [`move_up`].
pub fn move_down(model: &TextModel, cursor: &mut Cursor, count: usize) -> usize {
    let target_x = cursor.pos.x;
    let moved = repeat_step(|c| to_next_line(model, c), cursor, count);
    if moved > 0 {
        restore_x(model, cursor, target_x);
    }
    moved
}

fn peek_same_line(model: &TextModel, cursor: &Cursor, id: Option<ItemId>) -> Option<core_text::Symbol> {
    id.map(|i| model.line(cursor.line).symbol(i))
}

fn at_word_end(model: &TextModel, cursor: &Cursor) -> bool {
    let line = model.line(cursor.line);
    let sym = line.symbol(cursor.item);
    if !sym.is_word() {
        return false;
    }
    !peek_same_line(model, cursor, line.next(cursor.item))
        .map(|s| s.is_word())
        .unwrap_or(false)
}

/// Advance while the current and next item (on the same line) are both
/// word symbols. Returns whether any step was taken.
fn advance_through_word(model: &TextModel, cursor: &mut Cursor) -> bool {
    let mut moved = false;
    loop {
        let line = model.line(cursor.line);
        let sym = line.symbol(cursor.item);
        if !sym.is_word() {
            break;
        }
        let next_is_word = peek_same_line(model, cursor, line.next(cursor.item))
            .map(|s| s.is_word())
            .unwrap_or(false);
        if !next_is_word {
            break;
        }
        forward(model, cursor);
        moved = true;
    }
    moved
}

fn retreat_through_word(model: &TextModel, cursor: &mut Cursor) -> bool {
    let mut moved = false;
    loop {
        let line = model.line(cursor.line);
        let sym = line.symbol(cursor.item);
        if !sym.is_word() {
            break;
        }
        let prev_is_word = peek_same_line(model, cursor, line.prev(cursor.item))
            .map(|s| s.is_word())
            .unwrap_or(false);
        if !prev_is_word {
            break;
        }
        backward(model, cursor);
        moved = true;
    }
    moved
}

fn skip_blanks_forward(model: &TextModel, cursor: &mut Cursor) {
    loop {
        let sym = model.line(cursor.line).symbol(cursor.item);
        if sym.is_word() {
            break;
        }
        if forward_or_next_line(model, cursor) == 0 {
            break;
        }
    }
}

fn skip_blanks_backward(model: &TextModel, cursor: &mut Cursor) {
    loop {
        let sym = model.line(cursor.line).symbol(cursor.item);
        if sym.is_word() {
            break;
        }
        if backward_or_prev_line(model, cursor) == 0 {
            break;
        }
    }
}

/// `w`: advance to the end of the current word, step once, then advance
/// until landing on a word symbol.
pub fn word_forward(model: &TextModel, cursor: &mut Cursor) {
    advance_through_word(model, cursor);
    forward_or_next_line(model, cursor);
    skip_blanks_forward(model, cursor);
}

/// `e`: advance while current and next are word symbols; if already at the
/// end of a word (or not on one at all), step once and re-enter the next
/// word, then advance to its end.
pub fn word_end(model: &TextModel, cursor: &mut Cursor) {
    let line = model.line(cursor.line);
    let on_word = line.symbol(cursor.item).is_word();
    if on_word && !at_word_end(model, cursor) {
        advance_through_word(model, cursor);
        return;
    }
    forward_or_next_line(model, cursor);
    skip_blanks_forward(model, cursor);
    advance_through_word(model, cursor);
}

/// `b`: symmetric to [`word_forward`] using backward line-crossing.
pub fn word_backward(model: &TextModel, cursor: &mut Cursor) {
    retreat_through_word(model, cursor);
    backward_or_prev_line(model, cursor);
    skip_blanks_backward(model, cursor);
    retreat_through_word(model, cursor);
}

/// `gg`/`G`: jump to absolute line `target_abs` (clamped to the buffer),
/// landing on its head item with `x = 0`. The caller (the dispatcher, via
/// `Window::viewport_sync`) is responsible for reconciling `pos.y` against
/// the current `y_offset`; this function sets `pos.y` to the signed,
/// possibly out-of-viewport delta so that reconciliation has what it needs.
pub fn goto_line(model: &TextModel, cursor: &mut Cursor, target_abs: usize, y_offset: usize) {
    let clamped = target_abs.min(model.line_count().saturating_sub(1));
    cursor.line = model.nth_line_clamped(clamped);
    cursor.item = model.line(cursor.line).head();
    cursor.pos.x = 0;
    cursor.pos.y = clamped as i64 - y_offset as i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(model: &TextModel, line_idx: usize, item_offset: usize) -> Cursor {
        let line_id = model.nth_line_clamped(line_idx);
        let mut item = model.line(line_id).head();
        for _ in 0..item_offset {
            item = model.line(line_id).next(item).unwrap();
        }
        Cursor {
            line: line_id,
            item,
            pos: Pos { x: item_offset, y: line_idx as i64 },
        }
    }

    #[test]
    fn h_at_column_zero_is_noop() {
        let model = TextModel::from_bytes(b"abc\n");
        let mut cursor = cursor_at(&model, 0, 0);
        let before = (cursor.item, cursor.pos);
        let d = backward(&model, &mut cursor);
        assert_eq!(d, 0);
        assert_eq!((cursor.item, cursor.pos), before);
    }

    #[test]
    fn l_on_last_content_item_is_noop() {
        let model = TextModel::from_bytes(b"abc\n");
        let mut cursor = cursor_at(&model, 0, 2); // on 'c'
        let before = (cursor.item, cursor.pos);
        let d = forward(&model, &mut cursor);
        assert_eq!(d, 0);
        assert_eq!((cursor.item, cursor.pos), before);
    }

    #[test]
    fn k_on_first_line_and_j_on_last_line_are_noops() {
        let model = TextModel::from_bytes(b"a\nb\n");
        let mut top = cursor_at(&model, 0, 0);
        assert_eq!(move_up(&model, &mut top, 3), 0);
        let mut bottom = cursor_at(&model, 1, 0);
        assert_eq!(move_down(&model, &mut bottom, 3), 0);
    }

    #[test]
    fn tab_moves_four_columns_one_item() {
        let model = TextModel::from_bytes(b"\tx\n");
        let mut cursor = cursor_at(&model, 0, 0);
        let d = forward(&model, &mut cursor);
        assert_eq!(d, 4);
        assert_eq!(cursor.pos.x, 4);
        let d = backward(&model, &mut cursor);
        assert_eq!(d, 4);
        assert_eq!(cursor.pos.x, 0);
    }

    #[test]
    fn left_right_round_trip_within_line() {
        let model = TextModel::from_bytes(b"hello\n");
        let mut cursor = cursor_at(&model, 0, 0);
        for n in 1..=4 {
            let start = (cursor.item, cursor.pos);
            move_right(&model, &mut cursor, n);
            move_left(&model, &mut cursor, n);
            assert_eq!((cursor.item, cursor.pos), start);
        }
    }

    #[test]
    fn word_motions_match_scenario() {
        let model = TextModel::from_bytes(b"  hello world\n");
        let mut cursor = cursor_at(&model, 0, 0); // first space
        word_forward(&model, &mut cursor);
        assert_eq!(cursor.pos.x, 2); // 'h'
        word_forward(&model, &mut cursor);
        assert_eq!(cursor.pos.x, 8); // 'w' of world
        word_backward(&model, &mut cursor);
        assert_eq!(cursor.pos.x, 2); // 'h' of hello
    }

    #[test]
    fn goto_line_jumps_and_reports_signed_y() {
        let model = TextModel::from_bytes(b"foo\nbar\nbaz\n");
        let mut cursor = cursor_at(&model, 0, 0);
        goto_line(&model, &mut cursor, 2, 0);
        assert_eq!(model.line_index(cursor.line), 2);
        assert_eq!(cursor.pos.y, 2);
        goto_line(&model, &mut cursor, 0, 0);
        assert_eq!(model.line_index(cursor.line), 0);
        assert_eq!(cursor.pos.x, 0);
    }
}
