//! # sentmark
//!
//! Inline sentiment metadata for plain text.
//!
//! sentmark embeds compact, machine-readable sentiment records directly
//! inside text, so structured annotations survive any text-based channel
//! without disturbing the human-readable content. Each record is 14 bits,
//! rendered as 4 hex digits and wrapped in private-use sentinel characters
//! that never occur in ordinary text.
//!
//! ## Record Layout
//!
//! | field     | bits | range | meaning                                    |
//! |-----------|------|-------|--------------------------------------------|
//! | has_span  | 1    | 0–1   | annotation covers more than one token      |
//! | span      | 3    | 0–7   | extra tokens beyond the anchor             |
//! | polarity  | 2    | 0–3   | sentiment polarity class                   |
//! | intensity | 3    | 0–7   | magnitude                                  |
//! | context   | 1    | 0–1   | literal vs. contextual (e.g. irony)        |
//! | emotion   | 3    | 0–7   | emotion class                              |
//! | reserved  | 1    | 0–1   | future use                                 |
//!
//! ## Quick Start
//!
//! ```
//! use sentmark::{Annotation, InlineDecoder, InlineEncoder};
//!
//! let encoder = InlineEncoder::new();
//! let decoder = InlineDecoder::new();
//!
//! // "great" is token 3: positive, intensity 4, joy.
//! let annotation = Annotation::new(3, 1, 2, 4, 0, 1);
//! let encoded = encoder.encode("The movie was great", &[annotation])?;
//!
//! // The marker is invisible to whitespace tokenization and strips cleanly.
//! let decoded = decoder.decode(&encoded)?;
//! assert_eq!(decoded.clean_text, "The movie was great");
//! assert_eq!(decoded.records.len(), 1);
//! assert_eq!(decoded.records[0].record.polarity, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Design Notes
//!
//! - **Truncation over rejection**: scalar fields are masked to their bit
//!   width when packed; only the span field is hard-validated. Producers
//!   that hand in `polarity = 7` get `3` stored, deterministically.
//! - **Compacted anchors**: decoded anchors index the *marker-stripped*
//!   token stream. A token fully consumed by markers is dropped from the
//!   clean sequence and shifts subsequent anchors left.
//! - **Strict failures**: a malformed marker or non-hex payload aborts the
//!   decode; callers decide whether to retry with the offending text
//!   removed. The library never silently preserves a broken token.
//! - **Whitespace normalization**: detokenization joins with single
//!   spaces; original inter-token spacing is not preserved.
//!
//! Encode and decode are synchronous, allocation-light, and free of shared
//! mutable state; independent calls may run on separate threads without
//! coordination.

#![warn(missing_docs)]

mod annotation;
mod decode;
mod encode;
mod error;
mod marker;
mod record;
mod tokenize;

pub use annotation::{Annotation, InlineRecord, TokenSpan};
pub use decode::{DecodedText, InlineDecoder};
pub use encode::InlineEncoder;
pub use error::{DecodeError, EncodeError};
pub use marker::{MarkerConfig, DEFAULT_PREFIX, DEFAULT_SUFFIX};
pub use record::{SentimentRecord, SPAN_MAX};
pub use tokenize::{Tokenizer, WhitespaceTokenizer};
