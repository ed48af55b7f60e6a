//! # Scanner Module
//!
//! The decoder seam and the pipeline orchestrator.
//!
//! [`SymbolDecoder`] is the boundary behind which all symbol recognition
//! lives. The default backend is [`QrDecoder`], wrapping `rqrr`; deployments
//! with other backends register them via [`Scanner::with_decoders`].
//!
//! [`Scanner::scan`] runs the full pipeline: payload → bytes → luma raster
//! → backends, first detection wins. [`Scanner::scan_report`] is the
//! normalized surface: it cannot fail and yields exactly one report.

use image::GrayImage;

use crate::error::ScanError;
use crate::payload::ImagePayload;
use crate::raster;
use crate::report::ScanReport;
use crate::symbol::{Detection, SymbolFormat};

/// A decoder backend for one or more symbologies.
///
/// Backends are opaque: the pipeline only sees the normalized outcome.
/// `Err(ScanError::NoCode)` means the backend ran cleanly and found
/// nothing; any other error means the backend itself failed.
pub trait SymbolDecoder: Send + Sync {
    /// Attempt to decode a symbol from the raster.
    fn decode(&self, image: &GrayImage) -> Result<Detection, ScanError>;
}

/// QR decoder backend, delegating to `rqrr`.
#[derive(Debug, Default)]
pub struct QrDecoder;

impl QrDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SymbolDecoder for QrDecoder {
    fn decode(&self, image: &GrayImage) -> Result<Detection, ScanError> {
        let mut prepared = rqrr::PreparedImage::prepare(image.clone());
        let grids = prepared.detect_grids();
        if grids.is_empty() {
            return Err(ScanError::NoCode);
        }

        // A grid was located but may still fail content decode; keep the
        // last such failure in case no grid decodes at all.
        let mut failure = None;
        for grid in &grids {
            match grid.decode() {
                Ok((_meta, content)) => {
                    return Ok(Detection::new(content, SymbolFormat::QrCode));
                }
                Err(err) => failure = Some(ScanError::Decoder(err.to_string())),
            }
        }
        Err(failure.unwrap_or(ScanError::NoCode))
    }
}

/// The scan pipeline: payload in, one detection or one error out.
pub struct Scanner {
    decoders: Vec<Box<dyn SymbolDecoder>>,
}

impl Scanner {
    /// Scanner with the default backend set (QR via `rqrr`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_decoders(vec![Box::new(QrDecoder::new())])
    }

    /// Scanner with an explicit backend set, tried in order.
    #[must_use]
    pub fn with_decoders(decoders: Vec<Box<dyn SymbolDecoder>>) -> Self {
        Self { decoders }
    }

    /// Run the pipeline and return the first detection.
    ///
    /// Backend precedence: the first `Ok` wins. If every backend reports
    /// `NoCode` the scan is `NoCode`; if at least one backend failed hard
    /// and none succeeded, the last hard failure is surfaced.
    pub fn scan(&self, payload: &ImagePayload) -> Result<Detection, ScanError> {
        let bytes = payload.bytes()?;
        let raster = raster::load_luma(&bytes)?;

        let mut failure = None;
        for decoder in &self.decoders {
            match decoder.decode(&raster) {
                Ok(detection) => return Ok(detection),
                Err(ScanError::NoCode) => {}
                Err(err) => failure = Some(err),
            }
        }
        Err(failure.unwrap_or(ScanError::NoCode))
    }

    /// Run the pipeline and normalize the outcome into a report.
    ///
    /// This surface cannot fail: every path, success or error, produces
    /// exactly one report.
    #[must_use]
    pub fn scan_report(&self, payload: &ImagePayload) -> ScanReport {
        self.scan(payload).into()
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use image::Luma;
    use qrcode::QrCode;

    fn qr_raster(text: &str) -> GrayImage {
        let code = QrCode::new(text.as_bytes()).unwrap();
        code.render::<Luma<u8>>().module_dimensions(6, 6).build()
    }

    fn png_bytes(raster: &GrayImage) -> Vec<u8> {
        let mut buf = Vec::new();
        raster
            .write_to(
                &mut std::io::Cursor::new(&mut buf),
                image::ImageFormat::Png,
            )
            .unwrap();
        buf
    }

    #[test]
    fn qr_decoder_reads_synthesized_code() {
        let detection = QrDecoder::new().decode(&qr_raster("HELLO")).unwrap();
        assert_eq!(detection.text, "HELLO");
        assert_eq!(detection.format, SymbolFormat::QrCode);
    }

    #[test]
    fn qr_decoder_reports_no_code_on_blank_raster() {
        let blank = GrayImage::from_pixel(64, 64, Luma([255u8]));
        let err = QrDecoder::new().decode(&blank).unwrap_err();
        assert_eq!(err, ScanError::NoCode);
    }

    #[test]
    fn scan_decodes_png_payload() {
        let payload = ImagePayload::from_bytes(png_bytes(&qr_raster("HELLO")));
        let detection = Scanner::new().scan(&payload).unwrap();
        assert_eq!(detection.text, "HELLO");
        assert_eq!(detection.format, SymbolFormat::QrCode);
    }

    #[test]
    fn scan_surfaces_image_load_failures() {
        let payload = ImagePayload::from_bytes(b"not an image".to_vec());
        let err = Scanner::new().scan(&payload).unwrap_err();
        assert_eq!(err.kind(), "image-load");
    }

    #[test]
    fn scan_without_decoders_is_no_code() {
        let payload = ImagePayload::from_bytes(png_bytes(&qr_raster("HELLO")));
        let scanner = Scanner::with_decoders(Vec::new());
        assert_eq!(scanner.scan(&payload).unwrap_err(), ScanError::NoCode);
    }

    #[test]
    fn hard_backend_failure_outranks_no_code() {
        struct Failing;
        impl SymbolDecoder for Failing {
            fn decode(&self, _image: &GrayImage) -> Result<Detection, ScanError> {
                Err(ScanError::Decoder("backend exploded".into()))
            }
        }

        let blank = GrayImage::from_pixel(32, 32, Luma([255u8]));
        let payload = ImagePayload::from_bytes(png_bytes(&blank));
        let decoders: Vec<Box<dyn SymbolDecoder>> =
            vec![Box::new(Failing), Box::new(QrDecoder::new())];
        let scanner = Scanner::with_decoders(decoders);
        let err = scanner.scan(&payload).unwrap_err();
        assert_eq!(err.kind(), "decoder");
    }

    #[test]
    fn scan_report_is_infallible() {
        let scanner = Scanner::new();

        let good = ImagePayload::from_bytes(png_bytes(&qr_raster("HELLO")));
        assert!(scanner.scan_report(&good).success);

        let bad = ImagePayload::from_data_url("data:nope");
        let report = scanner.scan_report(&bad);
        assert!(!report.success);
        assert!(report.error.is_some());
    }
}
