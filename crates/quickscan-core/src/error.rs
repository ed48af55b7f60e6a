//! # Error Module
//!
//! The three failure kinds of a scan. Every failure anywhere in the
//! pipeline — payload parsing, raster loading, decoder backends — maps
//! into one of these, so callers of the report surfaces never see
//! backend-internal error types.
//!
//! Display strings are host-visible: they travel verbatim in the report's
//! `error` field.

use thiserror::Error;

/// A scan failure, normalized to one of three kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The payload could not be turned into a raster: malformed data URL,
    /// invalid base64 body, or bytes no image codec recognizes.
    #[error("Failed to load image data: {0}")]
    ImageLoad(String),

    /// The decoders ran and found nothing recognizable.
    #[error("No code detected")]
    NoCode,

    /// A decoder backend raised an unexpected error.
    #[error("Decoder error: {0}")]
    Decoder(String),
}

impl ScanError {
    /// Stable kind tag, used as a structured logging field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ImageLoad(_) => "image-load",
            Self::NoCode => "no-code",
            Self::Decoder(_) => "decoder",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_are_host_visible() {
        assert_eq!(
            ScanError::ImageLoad("bad header".into()).to_string(),
            "Failed to load image data: bad header"
        );
        assert_eq!(ScanError::NoCode.to_string(), "No code detected");
        assert_eq!(
            ScanError::Decoder("truncated symbol".into()).to_string(),
            "Decoder error: truncated symbol"
        );
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ScanError::ImageLoad(String::new()).kind(), "image-load");
        assert_eq!(ScanError::NoCode.kind(), "no-code");
        assert_eq!(ScanError::Decoder(String::new()).kind(), "decoder");
    }
}
