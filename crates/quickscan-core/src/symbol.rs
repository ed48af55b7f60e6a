//! # Symbol Module
//!
//! The symbology label space and the decoder seam's success value.
//!
//! Labels follow the conventional upper-snake wire names (`QR_CODE`,
//! `EAN_13`, ...). Which labels a given deployment can actually produce
//! depends on the decoder backends registered with the scanner; the label
//! space itself is fixed here so every backend reports through the same
//! vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbology of a decoded optical code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolFormat {
    #[serde(rename = "QR_CODE")]
    QrCode,
    #[serde(rename = "MICRO_QR")]
    MicroQr,
    #[serde(rename = "EAN_13")]
    Ean13,
    #[serde(rename = "UPC_A")]
    UpcA,
    #[serde(rename = "CODE_128")]
    Code128,
    /// Backend reported a symbology outside the known label space.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SymbolFormat {
    /// The wire label, as it appears in the report's `format` field.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::QrCode => "QR_CODE",
            Self::MicroQr => "MICRO_QR",
            Self::Ean13 => "EAN_13",
            Self::UpcA => "UPC_A",
            Self::Code128 => "CODE_128",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SymbolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A decoded symbol: the payload text plus its symbology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The decoded text content.
    pub text: String,
    /// Symbology of the detected code.
    pub format: SymbolFormat,
}

impl Detection {
    /// Create a new detection.
    #[must_use]
    pub fn new(text: impl Into<String>, format: SymbolFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
