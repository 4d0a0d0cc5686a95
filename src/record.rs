//! The 14-bit sentiment record and its hex codec.
//!
//! # Bit Layout
//!
//! A record occupies the low 14 bits of a `u16`, rendered as 4 lowercase
//! hex digits (the top 2 bits are always zero):
//!
//! ```text
//! MSB                                                         LSB
//! ┌──────────┬──────┬──────────┬───────────┬─────────┬─────────┬──────────┐
//! │ has_span │ span │ polarity │ intensity │ context │ emotion │ reserved │
//! │  1 bit   │ 3    │ 2        │ 3         │ 1       │ 3       │ 1        │
//! │  bit 13  │10-12 │ 8-9      │ 5-7       │ 4       │ 1-3     │ 0        │
//! └──────────┴──────┴──────────┴───────────┴─────────┴─────────┴──────────┘
//! ```
//!
//! # Validation vs. Truncation
//!
//! The span field is hard-validated: packing fails when a span is present
//! but out of `0..=7`, present while `has_span` is clear, or missing while
//! `has_span` is set. Every other field is masked to its declared width
//! instead of validated, so `polarity = 7` packs as `7 & 0b11 = 3`. The two
//! policies are intentional and distinct.
//!
//! # Foreign Input
//!
//! Decoders must not trust the stored span bits when the `has_span` bit is
//! clear: a foreign encoder may have left garbage there. [`SentimentRecord::unpack`]
//! reports the span as `None` in that case regardless of storage.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError};

// Shift positions of each field within the packed value, MSB first.
const HAS_SPAN_SHIFT: u16 = 13;
const SPAN_SHIFT: u16 = 10;
const POLARITY_SHIFT: u16 = 8;
const INTENSITY_SHIFT: u16 = 5;
const CONTEXT_SHIFT: u16 = 4;
const EMOTION_SHIFT: u16 = 1;

const SPAN_MASK: u16 = 0b111;
const POLARITY_MASK: u16 = 0b11;
const INTENSITY_MASK: u16 = 0b111;
const CONTEXT_MASK: u16 = 0b1;
const EMOTION_MASK: u16 = 0b111;
const RESERVED_MASK: u16 = 0b1;

/// Largest span value storable in 3 bits.
pub const SPAN_MAX: u8 = 7;

/// A 14-bit sentiment metadata record.
///
/// Immutable value type. `span` is `Some` iff `has_span` is set; the pair
/// is checked at pack time, not construction time, mirroring the
/// truncation-over-rejection policy of the remaining fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Whether the annotation covers more than one token.
    pub has_span: bool,
    /// Extra tokens beyond the anchor (covered tokens = span + 1).
    /// Conceptually absent when `has_span` is false.
    pub span: Option<u8>,
    /// Sentiment polarity class, 2 bits.
    pub polarity: u8,
    /// Magnitude, 3 bits.
    pub intensity: u8,
    /// Static/literal (0) vs. dynamic/contextual (1), e.g. irony.
    pub context: u8,
    /// Emotion class, 3 bits.
    pub emotion: u8,
    /// Reserved for future use, 1 bit.
    pub reserved: u8,
}

impl SentimentRecord {
    /// Pack the record into its 14-bit integer form.
    ///
    /// Span is validated; all other fields are masked to width.
    pub fn pack(&self) -> Result<u16, EncodeError> {
        let span_bits = match (self.has_span, self.span) {
            (true, Some(span)) if span <= SPAN_MAX => u16::from(span),
            (true, Some(span)) => return Err(EncodeError::SpanOutOfRange(span)),
            (true, None) => return Err(EncodeError::MissingSpan),
            (false, Some(span)) => return Err(EncodeError::UnexpectedSpan(span)),
            (false, None) => 0,
        };

        let mut value = 0u16;
        value |= u16::from(self.has_span) << HAS_SPAN_SHIFT;
        value |= span_bits << SPAN_SHIFT;
        value |= (u16::from(self.polarity) & POLARITY_MASK) << POLARITY_SHIFT;
        value |= (u16::from(self.intensity) & INTENSITY_MASK) << INTENSITY_SHIFT;
        value |= (u16::from(self.context) & CONTEXT_MASK) << CONTEXT_SHIFT;
        value |= (u16::from(self.emotion) & EMOTION_MASK) << EMOTION_SHIFT;
        value |= u16::from(self.reserved) & RESERVED_MASK;

        Ok(value)
    }

    /// Render the packed record as 4 lowercase hex digits, zero padded.
    pub fn to_hex(&self) -> Result<String, EncodeError> {
        Ok(format!("{:04x}", self.pack()?))
    }

    /// Extract a record from a packed integer.
    ///
    /// When the `has_span` bit is clear the span is reported as `None`
    /// regardless of the stored span bits.
    #[must_use]
    pub fn unpack(value: u16) -> Self {
        let has_span = (value >> HAS_SPAN_SHIFT) & 0b1 == 1;
        let span = if has_span {
            Some(((value >> SPAN_SHIFT) & SPAN_MASK) as u8)
        } else {
            None
        };

        Self {
            has_span,
            span,
            polarity: ((value >> POLARITY_SHIFT) & POLARITY_MASK) as u8,
            intensity: ((value >> INTENSITY_SHIFT) & INTENSITY_MASK) as u8,
            context: ((value >> CONTEXT_SHIFT) & CONTEXT_MASK) as u8,
            emotion: ((value >> EMOTION_SHIFT) & EMOTION_MASK) as u8,
            reserved: (value & RESERVED_MASK) as u8,
        }
    }

    /// Parse a record from its hex rendering.
    pub fn from_hex(hex: &str) -> Result<Self, DecodeError> {
        let value = u16::from_str_radix(hex, 16)
            .map_err(|_| DecodeError::InvalidHexPayload(hex.to_string()))?;
        Ok(Self::unpack(value))
    }

    /// Number of tokens this record covers (absent span ⇒ 1).
    #[must_use]
    pub fn covered_tokens(&self) -> usize {
        self.span.map_or(1, |span| usize::from(span) + 1)
    }
}
