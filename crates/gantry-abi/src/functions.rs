//! Function table: exported functions with their parameter lists.

use gantry_core::{Cursor, DecodeError, Result, Seq};
use serde::Serialize;

/// Raw flag byte stored on a [`Function`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FunctionFlags(pub u8);

impl FunctionFlags {
    pub const RETURN_NULLABLE: u8 = 1 << 0;

    pub fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// See [`crate::TypeFlags::read_validated`].
    pub fn read_validated(_cursor: &mut Cursor<'_>) -> Result<Self> {
        Err(DecodeError::Unsupported)
    }
}

/// One function parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FnParam {
    pub nullable: u8,
    #[serde(rename = "type")]
    pub ty: u32,
    /// 1-based symbol index of the parameter name; 0 means unnamed.
    pub name: u32,
}

impl FnParam {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let nullable = cursor.read_u8()?;
        let ty = cursor.read_vu32()?;
        let name = cursor.read_vu32()?;
        Ok(Self { nullable, ty, name })
    }
}

/// One exported function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Function {
    /// 1-based symbol index of the owning module; 0 means unnamed.
    pub module: u32,
    #[serde(rename = "type")]
    pub ty: u32,
    /// 1-based symbol index of the function name; 0 means unnamed.
    pub name: u32,
    /// 1-based symbol index of the owning library; 0 means unnamed.
    pub lib: u32,
    pub params: Seq<FnParam>,
    pub return_type: u32,
    pub flags: FunctionFlags,
}

impl Function {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let module = cursor.read_vu32()?;
        let ty = cursor.read_vu32()?;
        let name = cursor.read_vu32()?;
        let lib = cursor.read_vu32()?;
        let param_count = cursor.read_vu32()?;
        let mut params = Seq::with_capacity(param_count as usize);
        for _ in 0..param_count {
            params.push(FnParam::read(cursor)?);
        }
        let return_type = cursor.read_vu32()?;
        let flags = FunctionFlags(cursor.read_u8()?);
        Ok(Self {
            module,
            ty,
            name,
            lib,
            params,
            return_type,
            flags,
        })
    }
}

/// The function table section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Functions {
    /// Declared encoded size of the section; advisory only.
    pub byte_size: u64,
    pub functions: Seq<Function>,
}

impl Functions {
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let byte_size = cursor.read_u64()?;
        let count = cursor.read_u32()?;
        let mut functions = Seq::with_capacity(count as usize);
        for _ in 0..count {
            functions.push(Function::read(cursor)?);
        }
        Ok(Self {
            byte_size,
            functions,
        })
    }

    pub fn count(&self) -> usize {
        self.functions.len()
    }
}
