//! Whole-module decode: header, then the three tables, front to back.

use gantry_core::{Cursor, Result};
use serde::Serialize;

use crate::functions::Functions;
use crate::header::Header;
use crate::symbols::Symbols;
use crate::types::Types;

/// A fully decoded ABI module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Abi {
    pub header: Header,
    pub symbols: Symbols,
    pub types: Types,
    pub functions: Functions,
}

impl Abi {
    /// Decode every section from the cursor, in fixed order.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let header = Header::read(cursor)?;
        let symbols = Symbols::read(cursor)?;
        let types = Types::read(cursor)?;
        let functions = Functions::read(cursor)?;
        Ok(Self {
            header,
            symbols,
            types,
            functions,
        })
    }

    /// Decode a whole module from one contiguous buffer.
    ///
    /// Bytes past the encoded module are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        Self::read(&mut cursor)
    }
}
