//! Inline marker extraction.
//!
//! Decoding walks the token stream in original order and runs a small
//! two-state scan over each token: `ScanningPrefix` looks for the prefix
//! sentinel at the front of the remaining text, `SeekingSuffix` consumes
//! one marker payload. A token may shed zero, one, or several markers
//! before its clean remainder (possibly empty) is reached.
//!
//! # Anchor Reconstruction
//!
//! Anchors are reported against the *marker-stripped* token stream. A
//! running offset counts prior tokens whose clean remainder was empty;
//! a record found at original token index `i` gets anchor `i - offset`.
//! Tokens left empty by marker removal contribute nothing to the clean
//! sequence and shift every subsequent anchor left by one. Under this
//! contract decoded anchors are always valid indices into
//! [`DecodedText::clean_tokens`].
//!
//! Decode failures abort the whole call; no token is silently preserved.

use serde::{Deserialize, Serialize};

use crate::annotation::{InlineRecord, TokenSpan};
use crate::error::DecodeError;
use crate::marker::MarkerConfig;
use crate::record::SentimentRecord;
use crate::tokenize::{Tokenizer, WhitespaceTokenizer};

/// Output of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedText {
    /// The text with every marker stripped, single-space joined.
    pub clean_text: String,
    /// The marker-stripped token sequence (empty remainders dropped).
    pub clean_tokens: Vec<String>,
    /// Extracted records in discovery order: token order, then marker
    /// order within a token.
    pub records: Vec<InlineRecord>,
}

/// Per-token scan state.
enum ScanState {
    /// Looking for a prefix sentinel at the front of the remainder.
    ScanningPrefix,
    /// Prefix consumed; looking for the matching suffix sentinel.
    SeekingSuffix,
}

/// Extracts sentiment markers from encoded text.
///
/// Pure function of its inputs plus the immutable marker configuration;
/// independent calls may run concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct InlineDecoder<T: Tokenizer = WhitespaceTokenizer> {
    tokenizer: T,
    config: MarkerConfig,
}

impl InlineDecoder {
    /// Create a decoder with whitespace tokenization and PUA sentinels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Tokenizer> InlineDecoder<T> {
    /// Create a decoder over a custom tokenizer.
    #[must_use]
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            config: MarkerConfig::default(),
        }
    }

    /// Replace the marker sentinel configuration.
    #[must_use]
    pub fn with_config(mut self, config: MarkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Strip markers from the text and reconstruct their records.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnterminatedMarker`] when a prefix sentinel has no
    /// matching suffix in its token; [`DecodeError::InvalidHexPayload`]
    /// when a payload is not valid hexadecimal.
    pub fn decode(&self, text: &str) -> Result<DecodedText, DecodeError> {
        let tokens = self.tokenizer.tokenize(text);

        let mut clean_tokens: Vec<String> = Vec::new();
        let mut records: Vec<InlineRecord> = Vec::new();
        let mut anchor_offset = 0usize;

        for (index, &token) in tokens.iter().enumerate() {
            let (found, clean) = self.scan_token(token)?;
            let anchor = index - anchor_offset;

            for (payload, record) in found {
                records.push(InlineRecord {
                    record,
                    span: TokenSpan::new(anchor, record.covered_tokens()),
                    marker: self.config.format_marker(payload),
                });
            }

            if clean.is_empty() {
                anchor_offset += 1;
            } else {
                clean_tokens.push(clean.to_string());
            }
        }

        log::debug!(
            "extracted {} records from {} tokens ({} marker-only)",
            records.len(),
            tokens.len(),
            anchor_offset
        );

        Ok(DecodedText {
            clean_text: self.tokenizer.detokenize(&clean_tokens),
            clean_tokens,
            records,
        })
    }

    /// Run the marker scan over one token.
    ///
    /// Returns the extracted `(payload, record)` pairs in marker order and
    /// the clean remainder.
    fn scan_token<'t>(
        &self,
        token: &'t str,
    ) -> Result<(Vec<(&'t str, SentimentRecord)>, &'t str), DecodeError> {
        let mut remainder = token;
        let mut found = Vec::new();
        let mut state = ScanState::ScanningPrefix;

        loop {
            state = match state {
                ScanState::ScanningPrefix => match remainder.strip_prefix(self.config.prefix) {
                    Some(after_prefix) => {
                        remainder = after_prefix;
                        ScanState::SeekingSuffix
                    }
                    None => return Ok((found, remainder)),
                },
                ScanState::SeekingSuffix => match remainder.find(self.config.suffix) {
                    None => return Err(DecodeError::UnterminatedMarker(token.to_string())),
                    Some(end) => {
                        let payload = &remainder[..end];
                        found.push((payload, SentimentRecord::from_hex(payload)?));
                        remainder = &remainder[end + self.config.suffix.len_utf8()..];
                        ScanState::ScanningPrefix
                    }
                },
            };
        }
    }
}
