//! Type table: one record per declared type, each carrying its attributes.

use gantry_core::{Cursor, DecodeError, Result, Seq};
use serde::Serialize;

/// Raw flag byte stored on a [`Type`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeFlags(pub u8);

impl TypeFlags {
    pub const NATIVE: u8 = 1 << 0;
    pub const ABSTRACT: u8 = 1 << 1;
    pub const ENUM: u8 = 1 << 2;
    pub const MASKED: u8 = 1 << 3;
    pub const AMBIGUOUS: u8 = 1 << 4;

    pub fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// Decode the byte as a validated bit set.
    ///
    /// Reserved: the format gives no stability guarantee for the unnamed
    /// bits, so validated decoding is not implemented and this fails with
    /// [`DecodeError::Unsupported`] without consuming input. Record decoders
    /// take the byte as-is via [`Cursor::read_u8`].
    pub fn read_validated(_cursor: &mut Cursor<'_>) -> Result<Self> {
        Err(DecodeError::Unsupported)
    }
}

/// Raw flag byte stored on a [`TypeAttr`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeAttrFlags(pub u8);

impl TypeAttrFlags {
    pub const NULLABLE: u8 = 1 << 0;
    pub const MAPPED: u8 = 1 << 1;

    pub fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// See [`TypeFlags::read_validated`].
    pub fn read_validated(_cursor: &mut Cursor<'_>) -> Result<Self> {
        Err(DecodeError::Unsupported)
    }
}

/// One attribute of a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TypeAttr {
    /// 1-based symbol index of the attribute name; 0 means unnamed.
    pub name: u32,
    pub abi_type: u32,
    pub prog_type_off: u32,
    pub mapped_any_off: u32,
    pub mapped_att_off: u32,
    pub sbi_type: u8,
    pub precision: u8,
    pub flags: TypeAttrFlags,
}

impl TypeAttr {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let name = cursor.read_vu32()?;
        let abi_type = cursor.read_vu32()?;
        let prog_type_off = cursor.read_vu32()?;
        let mapped_any_off = cursor.read_vu32()?;
        let mapped_att_off = cursor.read_vu32()?;
        let sbi_type = cursor.read_u8()?;
        let precision = cursor.read_u8()?;
        let flags = TypeAttrFlags(cursor.read_u8()?);
        Ok(Self {
            name,
            abi_type,
            prog_type_off,
            mapped_any_off,
            mapped_att_off,
            sbi_type,
            precision,
            flags,
        })
    }
}

/// One declared type.
///
/// The attribute count sits in the middle of the record: seven leading
/// varints, then the count, then five more varints and the flag byte, and
/// only then the attribute records themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Type {
    /// 1-based symbol index of the owning module; 0 means unnamed.
    pub module: u32,
    /// 1-based symbol index of the type name; 0 means unnamed.
    pub name: u32,
    /// 1-based symbol index of the owning library; 0 means unnamed.
    pub lib: u32,
    pub generic_abi_type: u32,
    pub g1: u32,
    pub g2: u32,
    pub super_type: u32,
    pub attrs_off: u32,
    pub mapped_prog_type_off: u32,
    pub mapped_abi_type_off: u32,
    pub masked_abi_type_off: u32,
    pub nullable_nb_bytes: u32,
    pub flags: TypeFlags,
    pub attrs: Seq<TypeAttr>,
}

impl Type {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let module = cursor.read_vu32()?;
        let name = cursor.read_vu32()?;
        let lib = cursor.read_vu32()?;
        let generic_abi_type = cursor.read_vu32()?;
        let g1 = cursor.read_vu32()?;
        let g2 = cursor.read_vu32()?;
        let super_type = cursor.read_vu32()?;
        let attr_count = cursor.read_vu32()?;
        let attrs_off = cursor.read_vu32()?;
        let mapped_prog_type_off = cursor.read_vu32()?;
        let mapped_abi_type_off = cursor.read_vu32()?;
        let masked_abi_type_off = cursor.read_vu32()?;
        let nullable_nb_bytes = cursor.read_vu32()?;
        let flags = TypeFlags(cursor.read_u8()?);
        let mut attrs = Seq::with_capacity(attr_count as usize);
        for _ in 0..attr_count {
            attrs.push(TypeAttr::read(cursor)?);
        }
        Ok(Self {
            module,
            name,
            lib,
            generic_abi_type,
            g1,
            g2,
            super_type,
            attrs_off,
            mapped_prog_type_off,
            mapped_abi_type_off,
            masked_abi_type_off,
            nullable_nb_bytes,
            flags,
            attrs,
        })
    }
}

/// The type table section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Types {
    /// Declared encoded size of the section; advisory only.
    pub byte_size: u64,
    /// Declared attribute total across all types; advisory only, never
    /// reconciled with the decoded attribute arrays.
    pub nb_attrs: u32,
    pub types: Seq<Type>,
}

impl Types {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let byte_size = cursor.read_u64()?;
        let count = cursor.read_u32()?;
        let nb_attrs = cursor.read_u32()?;
        let mut types = Seq::with_capacity(count as usize);
        for _ in 0..count {
            types.push(Type::read(cursor)?);
        }
        Ok(Self {
            byte_size,
            nb_attrs,
            types,
        })
    }

    pub fn count(&self) -> usize {
        self.types.len()
    }
}
