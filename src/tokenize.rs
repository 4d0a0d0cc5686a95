//! Whitespace tokenization contract.
//!
//! The codec consumes a tokenizer rather than owning one. The contract is
//! deliberately narrow: split on whitespace (markers stay attached as a
//! prefix of whichever token follows them), and join with exactly one
//! space. Original inter-token spacing is not preserved; detokenization
//! normalizes any run of whitespace to a single space.

/// Tokenizer seam consumed by the encoder and decoder.
pub trait Tokenizer {
    /// Split text into an ordered sequence of tokens.
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Join tokens back into text with single-space separation.
    fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String;
}

/// The default tokenizer: plain whitespace splitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_whitespace().collect()
    }

    fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
