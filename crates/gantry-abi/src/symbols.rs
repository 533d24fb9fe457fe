//! Symbol table: length-prefixed byte strings the other sections point into.

use std::borrow::Cow;

use gantry_core::{Cursor, Result, Seq};
use serde::{Serialize, Serializer};

/// One symbol: a varint length followed by that many raw bytes.
///
/// The bytes are arbitrary — not null-terminated and never validated as any
/// text encoding during decode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Symbol {
    pub text: Seq<u8>,
}

impl Symbol {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let length = cursor.read_vu32()?;
        let mut text = Seq::new();
        text.grow_by(length as usize);
        cursor.read_exact(text.as_mut_slice())?;
        Ok(Self { text })
    }

    /// UTF-8 view of the bytes, when they happen to be valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    /// Lossy UTF-8 rendering for display purposes.
    pub fn display(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

// Rendered as a (lossy) string: symbol bytes are names in practice, and the
// JSON output is for humans and scripts, not for re-encoding.
impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display())
    }
}

/// The symbol table section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Symbols {
    /// Declared encoded size of the section; advisory only, never checked
    /// against the bytes actually consumed.
    pub byte_size: u64,
    pub symbols: Seq<Symbol>,
}

impl Symbols {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let byte_size = cursor.read_u64()?;
        let count = cursor.read_u32()?;
        let mut symbols = Seq::with_capacity(count as usize);
        for _ in 0..count {
            symbols.push(Symbol::read(cursor)?);
        }
        Ok(Self { byte_size, symbols })
    }

    /// Resolve a 1-based symbol index; 0 means unnamed and resolves to
    /// `None`, as does an index past the table.
    pub fn get(&self, index: u32) -> Option<&Symbol> {
        index
            .checked_sub(1)
            .and_then(|i| self.symbols.as_slice().get(i as usize))
    }

    pub fn count(&self) -> usize {
        self.symbols.len()
    }
}
