//! Sentinel-delimited marker formatting.
//!
//! A marker is a hex payload wrapped between two fixed sentinel characters:
//! `prefix + hex + suffix`. The defaults come from the Unicode Private Use
//! Area, a code-point range never produced by ordinary text input, so no
//! escaping is needed anywhere in the protocol. Markers are always prefixed
//! onto the token they annotate, never appended.

use serde::{Deserialize, Serialize};

/// Default marker prefix sentinel (U+E000, private use area).
pub const DEFAULT_PREFIX: char = '\u{E000}';

/// Default marker suffix sentinel (U+E001, private use area).
pub const DEFAULT_SUFFIX: char = '\u{E001}';

/// Marker delimiter configuration.
///
/// The two sentinels must differ from each other and must never occur in
/// the text being annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Character opening a marker.
    pub prefix: char,
    /// Character closing a marker.
    pub suffix: char,
}

impl MarkerConfig {
    /// Create a configuration with custom sentinels.
    #[must_use]
    pub const fn new(prefix: char, suffix: char) -> Self {
        Self { prefix, suffix }
    }

    /// Wrap a hex payload in the sentinel delimiters.
    #[must_use]
    pub fn format_marker(&self, hex: &str) -> String {
        format!("{}{}{}", self.prefix, hex, self.suffix)
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sentinels_are_private_use_and_distinct() {
        let config = MarkerConfig::default();
        assert_eq!(config.prefix, '\u{E000}');
        assert_eq!(config.suffix, '\u{E001}');
        assert_ne!(config.prefix, config.suffix);
    }

    #[test]
    fn format_wraps_payload() {
        let config = MarkerConfig::default();
        assert_eq!(config.format_marker("2c82"), "\u{E000}2c82\u{E001}");
    }

    #[test]
    fn custom_sentinels() {
        let config = MarkerConfig::new('\u{F000}', '\u{F001}');
        assert_eq!(config.format_marker("0000"), "\u{F000}0000\u{F001}");
    }
}
