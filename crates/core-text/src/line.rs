//! A single line: an arena of `LineItem`s ending in a newline sentinel.
//!
//! Rather than an owned, pointer-linked chain (the source material's `Line`
//! was exactly that — malloc'd nodes with raw `next`/`prev` pointers), items
//! live in a slab (`Vec<Option<ItemSlot>>` plus a free list) and are
//! addressed by a small `ItemId`. `prev`/`next` are `Option<ItemId>` fields
//! on the slot. This keeps the doubly-linked mutation API — insert before an
//! item, delete the item before another, walk forward/backward — without
//! cyclic ownership, and lets a whole line be freed in one `Vec` drop.
//!
//! `ItemId`s are scoped to the `Line` that allocated them; they are not
//! meaningful across lines (`split_at`/`join_with` rebuild ids when content
//! moves between lines).

use crate::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u32);

#[derive(Debug, Clone)]
struct ItemSlot {
    symbol: Symbol,
    prev: Option<ItemId>,
    next: Option<ItemId>,
}

/// An ordered, non-empty sequence of items, the last of which is always a
/// newline sentinel.
#[derive(Debug, Clone)]
pub struct Line {
    slots: Vec<Option<ItemSlot>>,
    free: Vec<u32>,
    head: ItemId,
    /// Cached screen-column width of the line's content, excluding the
    /// trailing newline sentinel. Kept in step by every mutator so callers
    /// (gutter width, `H`/`M`/`L`, `to_end_of_line`) never re-walk the chain
    /// just to learn it.
    content_width: usize,
}

impl Line {
    /// A line holding only the newline sentinel.
    pub fn empty() -> Self {
        let mut slots = Vec::with_capacity(4);
        slots.push(Some(ItemSlot {
            symbol: Symbol::NEWLINE,
            prev: None,
            next: None,
        }));
        Self {
            slots,
            free: Vec::new(),
            head: ItemId(0),
            content_width: 0,
        }
    }

    /// Build a line from symbols that do not include the trailing newline;
    /// the sentinel is appended automatically.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut line = Self::empty();
        let newline = line.head_of_tail();
        for s in symbols {
            line.insert(newline, s);
        }
        line
    }

    fn head_of_tail(&self) -> ItemId {
        // The sentinel is always the sole item in a freshly-built empty line.
        self.head
    }

    pub fn head(&self) -> ItemId {
        self.head
    }

    fn slot(&self, id: ItemId) -> &ItemSlot {
        self.slots[id.0 as usize]
            .as_ref()
            .expect("ItemId must reference a live slot")
    }

    fn slot_mut(&mut self, id: ItemId) -> &mut ItemSlot {
        self.slots[id.0 as usize]
            .as_mut()
            .expect("ItemId must reference a live slot")
    }

    pub fn symbol(&self, id: ItemId) -> Symbol {
        self.slot(id).symbol
    }

    pub fn next(&self, id: ItemId) -> Option<ItemId> {
        self.slot(id).next
    }

    pub fn prev(&self, id: ItemId) -> Option<ItemId> {
        self.slot(id).prev
    }

    pub fn is_newline(&self, id: ItemId) -> bool {
        self.symbol(id).is_newline()
    }

    /// Identity of the trailing newline sentinel (the only item with no
    /// `next`).
    pub fn newline_item(&self) -> ItemId {
        let mut id = self.head;
        while let Some(n) = self.next(id) {
            id = n;
        }
        id
    }

    pub fn content_width(&self) -> usize {
        self.content_width
    }

    fn alloc(&mut self, slot: ItemSlot) -> ItemId {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(slot);
            ItemId(idx)
        } else {
            self.slots.push(Some(slot));
            ItemId((self.slots.len() - 1) as u32)
        }
    }

    fn free_slot(&mut self, id: ItemId) -> ItemSlot {
        let slot = self.slots[id.0 as usize]
            .take()
            .expect("freeing a live slot");
        self.free.push(id.0);
        slot
    }

    /// Insert `symbol` immediately before `before_item`. Returns the screen
    /// column shift consumed (4 for a tab, 1 otherwise).
    pub fn insert(&mut self, before_item: ItemId, symbol: Symbol) -> usize {
        let shift = symbol.screen_width();
        let prev = self.prev(before_item);
        let new_id = self.alloc(ItemSlot {
            symbol,
            prev,
            next: Some(before_item),
        });
        if let Some(p) = prev {
            self.slot_mut(p).next = Some(new_id);
        } else {
            self.head = new_id;
        }
        self.slot_mut(before_item).prev = Some(new_id);
        self.content_width += shift;
        shift
    }

    /// Remove `item.prev` if it exists, relinking neighbors. Returns 0 if
    /// there was no previous item, else its screen-column shift. Never
    /// removes the newline sentinel itself (it has no valid `prev` target
    /// beyond real content, and `item` is never the head when there is
    /// nothing before it).
    pub fn delete_before(&mut self, item: ItemId) -> usize {
        let Some(target) = self.prev(item) else {
            return 0;
        };
        let removed = self.free_slot(target);
        match removed.prev {
            Some(p) => self.slot_mut(p).next = Some(item),
            None => self.head = item,
        }
        self.slot_mut(item).prev = removed.prev;
        let shift = removed.symbol.screen_width();
        self.content_width -= shift;
        shift
    }

    /// Split this line at `at_item`: the returned `Line` begins with
    /// `at_item` and everything after it (including the old trailing
    /// newline, which becomes the new line's sentinel); this line keeps
    /// everything before `at_item` and gains a fresh newline sentinel.
    pub fn split_at(&mut self, at_item: ItemId) -> Line {
        let mut tail_symbols = Vec::new();
        let mut cur = Some(at_item);
        while let Some(id) = cur {
            let sym = self.symbol(id);
            if !sym.is_newline() {
                tail_symbols.push(sym);
            }
            cur = self.next(id);
        }

        // Truncate self: cut the link just before at_item, free everything
        // from at_item onward, then append a fresh sentinel.
        let before = self.prev(at_item);
        let mut to_free = Some(at_item);
        while let Some(id) = to_free {
            to_free = self.next(id);
            self.free_slot(id);
        }
        match before {
            Some(p) => {
                let new_tail = self.alloc(ItemSlot {
                    symbol: Symbol::NEWLINE,
                    prev: Some(p),
                    next: None,
                });
                self.slot_mut(p).next = Some(new_tail);
            }
            None => {
                // at_item was the head: this line becomes empty.
                let new_tail = self.alloc(ItemSlot {
                    symbol: Symbol::NEWLINE,
                    prev: None,
                    next: None,
                });
                self.head = new_tail;
            }
        }
        self.content_width = self.recompute_width();
        Line::from_symbols(tail_symbols)
    }

    /// Append `next`'s entire content onto this line, removing this line's
    /// own trailing newline sentinel so the two runs of text become one.
    /// Returns the id (in this line's arena) of the first appended item —
    /// the join point a cursor should land on.
    pub fn join_with(&mut self, next: Line) -> ItemId {
        let own_newline = self.newline_item();
        let before = self.prev(own_newline);
        self.free_slot(own_newline);

        let mut join_point = None;
        let mut cursor = before;
        for (i, slot) in next.slots.iter().enumerate() {
            let Some(slot) = slot else { continue };
            let _ = i;
            let new_id = self.alloc(ItemSlot {
                symbol: slot.symbol,
                prev: cursor,
                next: None,
            });
            match cursor {
                Some(p) => self.slot_mut(p).next = Some(new_id),
                None => self.head = new_id,
            }
            if join_point.is_none() {
                join_point = Some(new_id);
            }
            cursor = Some(new_id);
        }
        self.content_width = self.recompute_width();
        join_point.expect("a Line always has at least the newline sentinel")
    }

    fn recompute_width(&self) -> usize {
        let mut id = self.head;
        let mut width = 0;
        while !self.is_newline(id) {
            width += self.symbol(id).screen_width();
            id = self.next(id).expect("non-newline item always has a next");
        }
        width
    }

    /// Restartable, finite forward iteration over this line's items.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        let mut cur = Some(self.head);
        std::iter::from_fn(move || {
            let id = cur?;
            cur = self.next(id);
            Some(id)
        })
    }

    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> bool {
        if self.slots.iter().flatten().count() == 0 {
            return false;
        }
        let mut id = self.head;
        let mut seen_newline = false;
        loop {
            let sym = self.symbol(id);
            if let Some(p) = self.prev(id)
                && self.next(p) != Some(id)
            {
                return false;
            }
            if let Some(n) = self.next(id)
                && self.prev(n) != Some(id)
            {
                return false;
            }
            if sym.is_newline() {
                seen_newline = self.next(id).is_none();
                break;
            }
            match self.next(id) {
                Some(n) => id = n,
                None => return false,
            }
        }
        seen_newline
    }
}
