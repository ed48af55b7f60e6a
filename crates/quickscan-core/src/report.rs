//! # Report Module
//!
//! The completion record. Every scan surface — library, CLI, HTTP —
//! resolves to exactly one of these, on success and on failure alike.
//!
//! Invariant: exactly one of `data` / `error` is populated. `success` is
//! true iff `data` is present, and `format` accompanies `data`. The
//! constructors are the only way reports are built, so the invariant holds
//! on every path.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::symbol::{Detection, SymbolFormat};

/// Outcome of a single scan invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Whether a symbol was decoded.
    pub success: bool,
    /// Decoded text; present iff `success`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Symbology label; present iff `success`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SymbolFormat>,
    /// Normalized failure message; present iff `!success`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanReport {
    /// Successful completion.
    #[must_use]
    pub fn detected(detection: Detection) -> Self {
        Self {
            success: true,
            data: Some(detection.text),
            format: Some(detection.format),
            error: None,
        }
    }

    /// Failed completion. The error's display string is host-visible.
    #[must_use]
    pub fn failed(error: &ScanError) -> Self {
        Self {
            success: false,
            data: None,
            format: None,
            error: Some(error.to_string()),
        }
    }

    /// Check the record shape: exactly one of `data` / `error` populated,
    /// `success` and `format` consistent with which.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match (self.success, &self.data, &self.error) {
            (true, Some(_), None) => self.format.is_some(),
            (false, None, Some(_)) => self.format.is_none(),
            _ => false,
        }
    }

    /// One-line human rendering, used by the CLI's text mode.
    #[must_use]
    pub fn to_text(&self) -> String {
        if self.success {
            let format = self.format.map_or("UNKNOWN", |f| f.label());
            let data = self.data.as_deref().unwrap_or_default();
            format!("DETECTED [{format}] {data}")
        } else {
            let error = self.error.as_deref().unwrap_or("unspecified failure");
            format!("FAILED {error}")
        }
    }
}

impl From<Result<Detection, ScanError>> for ScanReport {
    fn from(outcome: Result<Detection, ScanError>) -> Self {
        match outcome {
            Ok(detection) => Self::detected(detection),
            Err(err) => Self::failed(&err),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn detected_populates_data_and_format() {
        let report = ScanReport::detected(Detection::new("HELLO", SymbolFormat::QrCode));
        assert!(report.success);
        assert_eq!(report.data.as_deref(), Some("HELLO"));
        assert_eq!(report.format, Some(SymbolFormat::QrCode));
        assert_eq!(report.error, None);
        assert!(report.is_well_formed());
    }

    #[test]
    fn failed_populates_error_only() {
        let report = ScanReport::failed(&ScanError::NoCode);
        assert!(!report.success);
        assert_eq!(report.data, None);
        assert_eq!(report.format, None);
        assert_eq!(report.error.as_deref(), Some("No code detected"));
        assert!(report.is_well_formed());
    }

    #[test]
    fn every_error_kind_is_well_formed() {
        for err in [
            ScanError::ImageLoad("broken".into()),
            ScanError::NoCode,
            ScanError::Decoder("ecc failure".into()),
        ] {
            assert!(ScanReport::failed(&err).is_well_formed());
        }
    }

    #[test]
    fn from_result_maps_both_arms() {
        let ok: Result<Detection, ScanError> =
            Ok(Detection::new("X", SymbolFormat::Code128));
        assert!(ScanReport::from(ok).success);

        let err: Result<Detection, ScanError> = Err(ScanError::NoCode);
        assert!(!ScanReport::from(err).success);
    }

    #[test]
    fn wire_shape_omits_absent_fields() {
        let report = ScanReport::failed(&ScanError::NoCode);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "No code detected" })
        );

        let report = ScanReport::detected(Detection::new("HELLO", SymbolFormat::QrCode));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "data": "HELLO", "format": "QR_CODE" })
        );
    }

    #[test]
    fn to_text_renders_both_outcomes() {
        let ok = ScanReport::detected(Detection::new("HELLO", SymbolFormat::QrCode));
        assert_eq!(ok.to_text(), "DETECTED [QR_CODE] HELLO");

        let bad = ScanReport::failed(&ScanError::NoCode);
        assert_eq!(bad.to_text(), "FAILED No code detected");
    }
}
