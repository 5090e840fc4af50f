//! The text model: lines and line items, and the primitives that mutate
//! them (insert, delete, split, join) while preserving the invariants every
//! other subsystem (navigation, viewport, dispatcher) assumes.
//!
//! Deliberately *not* a rope or an owned pointer-linked graph — see the
//! module docs on [`line::Line`] for why this crate uses arena + index
//! storage instead.

mod line;
mod model;
mod symbol;

pub use line::ItemId;
pub use model::{LineId, TextModel};
pub use symbol::Symbol;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_has_one_line_one_sentinel() {
        let m = TextModel::empty();
        assert_eq!(m.line_count(), 1);
        let head = m.head();
        let line = m.line(head);
        assert!(line.is_newline(line.head()));
        assert!(m.check_invariants());
    }

    #[test]
    fn insert_then_delete_round_trip_is_identity() {
        let mut m = TextModel::empty();
        let line = m.head();
        let newline = m.line(line).newline_item();
        let word = b"abc";
        let mut cursor = newline;
        for &b in word {
            m.insert(line, cursor, Symbol(b));
            // cursor stays pointing at the (still) trailing newline, so
            // repeated inserts append in order, matching insert-mode typing.
            cursor = newline;
        }
        assert_eq!(m.to_bytes(), b"abc\n");
        for _ in 0..word.len() {
            m.delete_before(line, newline);
        }
        assert_eq!(m.to_bytes(), b"\n");
        assert!(m.check_invariants());
    }

    #[test]
    fn split_then_join_is_identity() {
        let mut m = TextModel::from_bytes(b"hello world\n");
        let line = m.head();
        // find the item right after "hello " (index 6)
        let l = m.line(line);
        let mut item = l.head();
        for _ in 0..6 {
            item = l.next(item).unwrap();
        }
        let before_bytes = m.to_bytes();
        let new_line = m.split_line_at(line, item);
        assert_eq!(m.line_count(), 2);
        assert_eq!(m.line(new_line).iter().count() > 0, true);
        m.join_line_after(line);
        assert_eq!(m.line_count(), 1);
        assert_eq!(m.to_bytes(), before_bytes);
        assert!(m.check_invariants());
    }

    #[test]
    fn join_line_after_is_noop_on_last_line() {
        let mut m = TextModel::from_bytes(b"only\n");
        let line = m.head();
        assert_eq!(m.join_line_after(line), None);
        assert_eq!(m.line_count(), 1);
    }

    #[test]
    fn tab_counts_four_columns_one_item() {
        let mut m = TextModel::empty();
        let line = m.head();
        let newline = m.line(line).newline_item();
        let shift = m.insert(line, newline, Symbol::TAB);
        assert_eq!(shift, 4);
        assert_eq!(m.line(line).iter().count(), 2); // tab + sentinel
        assert_eq!(m.line(line).content_width(), 4);
    }

    #[test]
    fn from_bytes_splits_multiple_lines() {
        let m = TextModel::from_bytes(b"foo\nbar\nbaz\n");
        assert_eq!(m.line_count(), 3);
        assert_eq!(m.to_bytes(), b"foo\nbar\nbaz\n");
    }

    #[test]
    fn from_bytes_drops_non_symbol_bytes() {
        let m = TextModel::from_bytes(&[b'a', 0x01, b'b', b'\n']);
        assert_eq!(m.to_bytes(), b"ab\n");
    }

    #[test]
    fn nth_line_clamped_saturates_at_last() {
        let m = TextModel::from_bytes(b"a\nb\nc\n");
        let last = m.last_line();
        assert_eq!(m.nth_line_clamped(100), last);
        assert_eq!(m.nth_line_clamped(0), m.head());
    }
}
