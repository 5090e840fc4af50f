//! The buffer-wide text model: a doubly linked arena of [`Line`]s.

use crate::line::{ItemId, Line};
use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u32);

#[derive(Debug)]
struct LineSlot {
    line: Line,
    prev: Option<LineId>,
    next: Option<LineId>,
}

/// Lines and items; insertion, deletion, split, join, and iteration. Holds
/// no filename and no cursor — those belong to `core-model`'s `Buffer` and
/// `Window` respectively.
#[derive(Debug)]
pub struct TextModel {
    slots: Vec<Option<LineSlot>>,
    free: Vec<u32>,
    head: LineId,
}

impl TextModel {
    /// A single empty line (just a newline sentinel).
    pub fn empty() -> Self {
        let mut slots = Vec::with_capacity(8);
        slots.push(Some(LineSlot {
            line: Line::empty(),
            prev: None,
            next: None,
        }));
        Self {
            slots,
            free: Vec::new(),
            head: LineId(0),
        }
    }

    /// Build a model from raw bytes, splitting on `\n` and dropping any byte
    /// that is not newline, tab, or printable ASCII (this core has no
    /// unicode or control-character support; see `spec.md` Non-goals).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut model = Self::empty();
        let head = model.head();
        let mut cur_line = head;
        let mut cur_item = model.line(cur_line).newline_item();
        for &b in bytes {
            let sym = Symbol(b);
            if sym.is_newline() {
                let new_line = model.split_line_at(cur_line, cur_item);
                cur_line = new_line;
                cur_item = model.line(cur_line).newline_item();
            } else if sym.is_insertable() {
                model.insert(cur_line, cur_item, sym);
            }
            // Any other byte is silently dropped (see doc comment).
        }
        model
    }

    pub fn head(&self) -> LineId {
        self.head
    }

    fn slot(&self, id: LineId) -> &LineSlot {
        self.slots[id.0 as usize]
            .as_ref()
            .expect("LineId must reference a live slot")
    }

    fn slot_mut(&mut self, id: LineId) -> &mut LineSlot {
        self.slots[id.0 as usize]
            .as_mut()
            .expect("LineId must reference a live slot")
    }

    pub fn line(&self, id: LineId) -> &Line {
        &self.slot(id).line
    }

    pub fn next_line(&self, id: LineId) -> Option<LineId> {
        self.slot(id).next
    }

    pub fn prev_line(&self, id: LineId) -> Option<LineId> {
        self.slot(id).prev
    }

    fn alloc(&mut self, slot: LineSlot) -> LineId {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(slot);
            LineId(idx)
        } else {
            self.slots.push(Some(slot));
            LineId((self.slots.len() - 1) as u32)
        }
    }

    /// Insert `symbol` before `before_item` in `line`. Returns the screen
    /// column shift consumed.
    pub fn insert(&mut self, line: LineId, before_item: ItemId, symbol: Symbol) -> usize {
        self.slot_mut(line).line.insert(before_item, symbol)
    }

    /// Remove `item.prev` in `line`. Returns 0 if there was none, else its
    /// screen shift. Never crosses a line boundary.
    pub fn delete_before(&mut self, line: LineId, item: ItemId) -> usize {
        self.slot_mut(line).line.delete_before(item)
    }

    /// Split `line` at `at_item`, inserting the new tail line immediately
    /// after `line` in the buffer's line list. Returns the new line's id.
    pub fn split_line_at(&mut self, line: LineId, at_item: ItemId) -> LineId {
        let tail = self.slot_mut(line).line.split_at(at_item);
        let old_next = self.slot(line).next;
        let new_id = self.alloc(LineSlot {
            line: tail,
            prev: Some(line),
            next: old_next,
        });
        if let Some(n) = old_next {
            self.slot_mut(n).prev = Some(new_id);
        }
        self.slot_mut(line).next = Some(new_id);
        new_id
    }

    /// Concatenate `line.next` into `line`, removing the newline sentinel
    /// between them. No-op (returns `None`) when there is no next line.
    /// On success returns the join point item id in `line`'s arena.
    pub fn join_line_after(&mut self, line: LineId) -> Option<ItemId> {
        let next_id = self.slot(line).next?;
        let removed = self.slots[next_id.0 as usize]
            .take()
            .expect("next_id must reference a live slot");
        self.free.push(next_id.0);

        let join_point = self.slot_mut(line).line.join_with(removed.line);
        self.slot_mut(line).next = removed.next;
        if let Some(after) = removed.next {
            self.slot_mut(after).prev = Some(line);
        }
        Some(join_point)
    }

    /// Restartable, finite iteration over line ids starting at `head`.
    pub fn iterate_from(&self, head: LineId) -> impl Iterator<Item = LineId> + '_ {
        let mut cur = Some(head);
        std::iter::from_fn(move || {
            let id = cur?;
            cur = self.next_line(id);
            Some(id)
        })
    }

    pub fn line_count(&self) -> usize {
        self.iterate_from(self.head).count()
    }

    /// Zero-based absolute line index of `id`, counted from `head`.
    pub fn line_index(&self, id: LineId) -> usize {
        self.iterate_from(self.head)
            .position(|candidate| candidate == id)
            .expect("id must belong to this model's line list")
    }

    /// The line at absolute index `n`, or the last line if `n` is beyond
    /// the end.
    pub fn nth_line_clamped(&self, n: usize) -> LineId {
        self.iterate_from(self.head)
            .nth(n)
            .unwrap_or_else(|| self.last_line())
    }

    pub fn last_line(&self) -> LineId {
        self.iterate_from(self.head)
            .last()
            .expect("a TextModel always has at least one line")
    }

    /// Serialize to raw bytes (each line's content followed by `\n`), for
    /// round-trip tests and the (out-of-core-scope) save path.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for line_id in self.iterate_from(self.head) {
            let line = self.line(line_id);
            for item in line.iter() {
                out.push(line.symbol(item).byte());
            }
        }
        out
    }

    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> bool {
        let ids: Vec<_> = self.iterate_from(self.head).collect();
        if ids.is_empty() {
            return false;
        }
        for &id in &ids {
            if !self.line(id).check_invariants() {
                return false;
            }
            if let Some(p) = self.prev_line(id)
                && self.next_line(p) != Some(id)
            {
                return false;
            }
            if let Some(n) = self.next_line(id)
                && self.prev_line(n) != Some(id)
            {
                return false;
            }
        }
        true
    }
}
