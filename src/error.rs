//! Error types for sentmark.
//!
//! Encode and decode are separate fallible surfaces with disjoint failure
//! sets, so each gets its own error enum. Callers match on the variant
//! rather than downcasting.

use thiserror::Error;

/// Error produced while packing records or injecting markers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// An annotation's anchor does not address any token in the input.
    #[error("anchor index {anchor} is out of bounds for {bound} tokens")]
    AnchorOutOfBounds {
        /// The offending anchor index.
        anchor: usize,
        /// Number of tokens in the input (valid anchors are `0..bound`).
        bound: usize,
    },

    /// A span value exceeds the 3-bit storage width.
    #[error("span must be between 0 and 7 when a span is present, got {0}")]
    SpanOutOfRange(u8),

    /// The span flag is set but no span value was supplied.
    #[error("span value required when the span flag is set")]
    MissingSpan,

    /// A span value was supplied while the span flag is clear.
    #[error("span must be absent when the span flag is clear, got {0}")]
    UnexpectedSpan(u8),
}

/// Error produced while scanning markers or unpacking records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A marker payload is not valid hexadecimal.
    #[error("invalid hex payload: {0:?}")]
    InvalidHexPayload(String),

    /// A marker prefix sentinel was found with no matching suffix in the
    /// remainder of the token.
    #[error("marker prefix without matching suffix in token {0:?}")]
    UnterminatedMarker(String),
}
