#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Record decoders for gantry ABI modules.
//!
//! An ABI module is one contiguous little-endian buffer holding four
//! sections in fixed order: header, symbol table, type table, function
//! table. Decoding is a single front-to-back pass over a
//! [`Cursor`](gantry_core::Cursor) with no seeking and no branching on
//! content beyond the stored counts; the result is an owned [`Abi`] tree or
//! the first failure, unchanged, from whichever read hit it.
//!
//! Name fields on types and functions are 1-based indices into the symbol
//! table (0 means unnamed). They are decoded as raw integers; resolving and
//! validating them is up to the caller — see [`Symbols::get`] and the
//! [`dump()`] rendering for the reference treatment.

mod abi;
mod colors;
mod dump;
mod functions;
mod header;
mod symbols;
mod types;

#[cfg(test)]
mod testutil;

pub use abi::Abi;
pub use colors::Colors;
pub use dump::dump;
pub use functions::{FnParam, Function, FunctionFlags, Functions};
pub use header::Header;
pub use symbols::{Symbol, Symbols};
pub use types::{Type, TypeAttr, TypeAttrFlags, TypeFlags, Types};
