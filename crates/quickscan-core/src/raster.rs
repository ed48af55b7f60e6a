//! # Raster Module
//!
//! Loads encoded image bytes into the 8-bit luma raster the decoder
//! backends consume. Format sniffing and pixel decoding are delegated to
//! the `image` crate; any failure there is an [`ScanError::ImageLoad`].

use std::io::Cursor;

use image::{GrayImage, ImageReader};

use crate::error::ScanError;

/// Upper bound on total pixels, checked before full decode.
/// Decompression bombs otherwise pass a cheap header sniff.
const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Decode image bytes into a luma raster.
pub fn load_luma(bytes: &[u8]) -> Result<GrayImage, ScanError> {
    if bytes.is_empty() {
        return Err(ScanError::ImageLoad("empty image payload".into()));
    }

    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| ScanError::ImageLoad(err.to_string()))?
        .into_dimensions()
        .map_err(|err| ScanError::ImageLoad(err.to_string()))?;

    let pixels = u64::from(width) * u64::from(height);
    if pixels == 0 || pixels > MAX_PIXELS {
        return Err(ScanError::ImageLoad(format!(
            "unsupported image dimensions {width}x{height}"
        )));
    }

    let dynamic = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| ScanError::ImageLoad(err.to_string()))?
        .decode()
        .map_err(|err| ScanError::ImageLoad(err.to_string()))?;

    Ok(dynamic.to_luma8())
}

// =============================================================================
// TESTS
// =============================================================================
