//! Inline marker injection.
//!
//! The encoder turns a batch of annotations into markers and prefixes each
//! marker onto the token slot its anchor addresses. Injection never
//! displaces a slot index (it only prepends text to an existing slot), so
//! anchors stay valid throughout the pass regardless of processing order;
//! the descending-anchor order only fixes the stacking order of markers
//! that share an anchor.

use crate::annotation::{Annotation, InlineRecord};
use crate::error::EncodeError;
use crate::marker::MarkerConfig;
use crate::tokenize::{Tokenizer, WhitespaceTokenizer};

/// Injects sentiment markers into a token stream.
///
/// Pure function of its inputs plus the immutable marker configuration;
/// independent calls may run concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct InlineEncoder<T: Tokenizer = WhitespaceTokenizer> {
    tokenizer: T,
    config: MarkerConfig,
}

impl InlineEncoder {
    /// Create an encoder with whitespace tokenization and PUA sentinels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Tokenizer> InlineEncoder<T> {
    /// Create an encoder over a custom tokenizer.
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

    /// Embed the annotations into the text as inline markers.
    ///
    /// Every annotation's record and marker is built eagerly (surfacing
    /// span errors first), every anchor is validated against the token
    /// count, then markers are prefixed onto their anchor slots and the
    /// result is re-joined with single spaces.
    ///
    /// # Errors
    ///
    /// [`EncodeError::AnchorOutOfBounds`] when an anchor does not address a
    /// token; [`EncodeError::SpanOutOfRange`] when an annotation covers
    /// more tokens than the span field can store.
    pub fn encode(&self, text: &str, annotations: &[Annotation]) -> Result<String, EncodeError> {
        let tokens = self.tokenizer.tokenize(text);

        let mut inline: Vec<InlineRecord> = annotations
            .iter()
            .map(|annotation| annotation.to_inline(&self.config))
            .collect::<Result<_, _>>()?;

        for record in &inline {
            if record.span.anchor >= tokens.len() {
                return Err(EncodeError::AnchorOutOfBounds {
                    anchor: record.span.anchor,
                    bound: tokens.len(),
                });
            }
        }

        // Stable sort: annotations sharing an anchor keep their input
        // order, so the first-listed marker ends up adjacent to the word.
        inline.sort_by(|a, b| b.span.anchor.cmp(&a.span.anchor));

        let mut slots: Vec<String> = tokens.iter().map(|token| (*token).to_string()).collect();
        for record in &inline {
            let slot = &mut slots[record.span.anchor];
            slot.insert_str(0, &record.marker);
        }

        log::debug!(
            "injected {} markers into {} tokens",
            inline.len(),
            slots.len()
        );

        Ok(self.tokenizer.detokenize(&slots))
    }
}
