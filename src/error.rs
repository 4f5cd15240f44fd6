//! Error kinds surfaced by the sponge, curve, and scheme layers.

use thiserror::Error;

/// Errors raised by the sponge, curve, and scheme layers.
///
/// `AuthFail` is the only variant that is an expected outcome rather than a
/// programmer error: callers must treat it as "no plaintext is available",
/// never as "probably fine".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// `pad10x1` was asked to pad with a `0x00` suffix.
    #[error("pad10*1 suffix byte must be non-zero")]
    InvalidSuffix,

    /// Two byte buffers that must be XORed together have different lengths.
    #[error("length mismatch: {a} vs {b}")]
    LengthMismatch { a: usize, b: usize },

    /// A point constructor was given coordinates that fail the curve equation.
    #[error("point is not on the E-521 curve")]
    NotOnCurve,

    /// Decompression found no square root for the given x-coordinate.
    #[error("no point on the curve has this x-coordinate")]
    NoSuchPoint,

    /// A fixed-width byte decoder (point or signature) was given the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    BadLength { expected: usize, actual: usize },

    /// Decryption's recomputed tag did not match the stored tag.
    #[error("authentication failed")]
    AuthFail,
}
