//! The 8-bit symbol alphabet the text model stores.

/// One byte held by a `LineItem`.
///
/// Three classes matter to the rest of the core: [`Symbol::is_newline`]
/// (the in-band end-of-line sentinel every line ends with),
/// [`Symbol::is_tab`] (occupies four screen columns but one item), and
/// [`Symbol::is_printable`] (0x20–0x7E). Anything else is accepted by the
/// arena but is never produced by insert mode, which drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub u8);

impl Symbol {
    pub const NEWLINE: Symbol = Symbol(0x0A);
    pub const TAB: Symbol = Symbol(0x09);

    pub const fn is_newline(self) -> bool {
        self.0 == 0x0A
    }

    pub const fn is_tab(self) -> bool {
        self.0 == 0x09
    }

    pub const fn is_printable(self) -> bool {
        self.0 >= 0x20 && self.0 <= 0x7E
    }

    /// Whether insert mode accepts this byte at all.
    pub const fn is_insertable(self) -> bool {
        self.is_tab() || self.is_printable()
    }

    /// A "word symbol" per the `w`/`e`/`b` motions: anything that is not
    /// space, tab, or newline.
    pub const fn is_word(self) -> bool {
        !self.is_newline() && !self.is_tab() && self.0 != b' '
    }

    /// Screen columns this item occupies: 4 for a tab, 1 otherwise.
    pub const fn screen_width(self) -> usize {
        if self.is_tab() { 4 } else { 1 }
    }

    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol(b)
    }
}
