//! A `Buffer` pairs a text model with the filename it was loaded from, and
//! the registry that keys buffer identity by filename so multiple windows
//! opened on the same path share one buffer.

use core_text::TextModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u32);

#[derive(Debug)]
pub struct Buffer {
    pub text: TextModel,
    pub filename: String,
}

impl Buffer {
    pub fn empty() -> Self {
        Self {
            text: TextModel::empty(),
            filename: String::new(),
        }
    }

    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            text: TextModel::from_bytes(bytes),
            filename: filename.into(),
        }
    }
}

/// Keyed by filename: reusing a buffer for a filename already open is how
/// two windows end up sharing edits to the same file. An empty filename
/// never matches an existing entry — every window on "no file" gets its
/// own fresh empty buffer.
#[derive(Debug, Default)]
pub struct BufferRegistry {
    slots: Vec<Buffer>,
}

impl BufferRegistry {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn get(&self, id: BufferId) -> &Buffer {
        &self.slots[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: BufferId) -> &mut Buffer {
        &mut self.slots[id.0 as usize]
    }

    fn push(&mut self, buffer: Buffer) -> BufferId {
        self.slots.push(buffer);
        BufferId((self.slots.len() - 1) as u32)
    }

    /// Fresh empty buffer, never reused across calls.
    pub fn fresh_empty(&mut self) -> BufferId {
        self.push(Buffer::empty())
    }

    /// Reuse the buffer already registered for `filename`, or load `bytes`
    /// into a new one. Calling with an empty `filename` always allocates a
    /// fresh empty buffer (per `spec.md` §4.7).
    pub fn get_or_create(&mut self, filename: &str, bytes: &[u8]) -> BufferId {
        if filename.is_empty() {
            return self.fresh_empty();
        }
        if let Some(existing) = self
            .slots
            .iter()
            .position(|b| b.filename == filename)
        {
            return BufferId(existing as u32);
        }
        self.push(Buffer::from_bytes(filename, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_filename_reuses_buffer() {
        let mut reg = BufferRegistry::new();
        let a = reg.get_or_create("notes.txt", b"hi\n");
        let b = reg.get_or_create("notes.txt", b"ignored\n");
        assert_eq!(a, b);
        assert_eq!(reg.get(a).text.to_bytes(), b"hi\n");
    }

    #[test]
    fn empty_filename_always_fresh() {
        let mut reg = BufferRegistry::new();
        let a = reg.get_or_create("", b"");
        let b = reg.get_or_create("", b"");
        assert_ne!(a, b);
    }
}
