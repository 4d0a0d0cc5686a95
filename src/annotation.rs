//! User-facing annotations and their span bookkeeping.
//!
//! An [`Annotation`] is what the analyzer hands to the encoder: a token
//! anchor, a covered-token count, and the five scalar sentiment fields.
//! The adapter derives the record-level span encoding from the length
//! (`has_span = length > 1`, stored span = `length - 1`), so producers
//! never touch the bit layout directly.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::marker::MarkerConfig;
use crate::record::SentimentRecord;

/// A contiguous run of tokens addressed by an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpan {
    /// Index of the first covered token.
    pub anchor: usize,
    /// Number of tokens covered (≥ 1).
    pub length: usize,
}

impl TokenSpan {
    /// Create a span.
    #[must_use]
    pub const fn new(anchor: usize, length: usize) -> Self {
        Self { anchor, length }
    }
}

/// A structured sentiment annotation produced by an external analyzer.
///
/// The core validates only the anchor bound (at encode time) and the span
/// bit width; the scalar fields are masked to width when packed, never
/// rejected. `length` must be ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Token index the annotation is attached to.
    pub anchor: usize,
    /// Number of tokens covered (1 = single token).
    pub length: usize,
    /// Sentiment polarity class, 0–3.
    pub polarity: u8,
    /// Magnitude, 0–7.
    pub intensity: u8,
    /// Static/literal (0) vs. dynamic/contextual (1).
    pub context: u8,
    /// Emotion class, 0–7.
    pub emotion: u8,
    /// Reserved bit, normally 0.
    pub reserved: u8,
}

impl Annotation {
    /// Create an annotation with the reserved bit cleared.
    #[must_use]
    pub const fn new(
        anchor: usize,
        length: usize,
        polarity: u8,
        intensity: u8,
        context: u8,
        emotion: u8,
    ) -> Self {
        Self {
            anchor,
            length,
            polarity,
            intensity,
            context,
            emotion,
            reserved: 0,
        }
    }

    /// Set the reserved bit.
    #[must_use]
    pub const fn with_reserved(mut self, reserved: u8) -> Self {
        self.reserved = reserved;
        self
    }

    /// Derive the compact record representation.
    ///
    /// Coverage beyond the storable range still derives a record; packing
    /// it fails span validation.
    #[must_use]
    pub fn to_record(&self) -> SentimentRecord {
        let has_span = self.length > 1;
        SentimentRecord {
            has_span,
            span: if has_span {
                Some(u8::try_from(self.length - 1).unwrap_or(u8::MAX))
            } else {
                None
            },
            polarity: self.polarity,
            intensity: self.intensity,
            context: self.context,
            emotion: self.emotion,
            reserved: self.reserved,
        }
    }

    /// Build the inline pairing of record, span, and rendered marker.
    pub fn to_inline(&self, config: &MarkerConfig) -> Result<InlineRecord, EncodeError> {
        let record = self.to_record();
        let marker = config.format_marker(&record.to_hex()?);
        Ok(InlineRecord {
            record,
            span: TokenSpan::new(self.anchor, self.length),
            marker,
        })
    }
}

/// A record paired with its token span and rendered marker string.
///
/// Ephemeral: constructed during encode and reconstructed independently
/// during decode, owned solely by the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRecord {
    /// The packed metadata record.
    pub record: SentimentRecord,
    /// The tokens the record covers.
    pub span: TokenSpan,
    /// The sentinel-delimited marker as it appears in encoded text.
    pub marker: String,
}
