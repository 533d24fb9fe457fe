//! Decode failure taxonomy shared by the cursor and the record decoders.

/// Why a decode step could not complete.
///
/// Failures carry no position or partial value: the first read that fails
/// bubbles unchanged through every record decoder above it, and whatever was
/// written into caller structures before the failure is unspecified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Not enough bytes remained to complete the read.
    ///
    /// A varint with no terminating byte within its length cap is reported
    /// as this variant too; truncated input and overlong encodings are not
    /// distinguished.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// The requested field encoding exists in the format but is not
    /// implemented by this runtime.
    #[error("unsupported field encoding")]
    Unsupported,
}

/// Result alias used across the decode path.
pub type Result<T> = std::result::Result<T, DecodeError>;
