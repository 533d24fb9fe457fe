//! Module header: the fixed 16 bytes in front of every section.

use gantry_core::{Cursor, Result};
use serde::Serialize;

/// Fixed-layout module header.
///
/// The `crc` covers the payload after the header but is only decoded here;
/// verifying it is the caller's job, as is rejecting unexpected `magic` or
/// `version` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub major: u16,
    pub magic: u16,
    pub version: u32,
    pub crc: u64,
}

impl Header {
    /// Encoded size of the header.
    pub const BYTE_LEN: usize = 16;

    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let major = cursor.read_u16()?;
        let magic = cursor.read_u16()?;
        let version = cursor.read_u32()?;
        let crc = cursor.read_u64()?;
        Ok(Self {
            major,
            magic,
            version,
            crc,
        })
    }
}
