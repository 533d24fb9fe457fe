#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Decode primitives for gantry ABI modules.
//!
//! Two leaf components that everything else composes:
//! - [`Cursor`]: a bounds-checked, forward-only read head over a borrowed
//!   byte buffer, yielding little-endian fixed-width integers and LEB128
//!   varints.
//! - [`Seq`]: the growable contiguous sequence backing every repeated field
//!   of a decoded module.
//!
//! Decoding is single-threaded and synchronous, and the whole input buffer
//! is assumed resident in memory. File I/O belongs to callers.

mod cursor;
mod error;
mod seq;

#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod seq_tests;

pub use cursor::{Cursor, MAX_VARINT32_BYTES, MAX_VARINT64_BYTES};
pub use error::{DecodeError, Result};
pub use seq::Seq;
