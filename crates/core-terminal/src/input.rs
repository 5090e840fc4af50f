//! Blocking raw-byte input, per spec.md §6: the terminal is placed in
//! `crossterm`'s raw mode (no canonical buffering, no local echo — the same
//! `VMIN=1, VTIME=0` behavior as the original termios setup), and input is
//! read as 8-bit bytes, never parsed into key events here.

use std::io::{self, Read, Stdin};

pub struct RawReader {
    stdin: Stdin,
}

impl Default for RawReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RawReader {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// Block until at least one byte is available, returning every byte
    /// the read picked up (the single read may hold more than one, e.g. a
    /// pasted `Ctrl-W l` sequence). Bytes come back in arrival order.
    pub fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        let mut chunk = [0u8; 64];
        let n = self.stdin.read(&mut chunk)?;
        Ok(chunk[..n].to_vec())
    }
}
