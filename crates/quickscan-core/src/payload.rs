//! # Payload Module
//!
//! Input resolution: turn whatever the host handed us — raw encoded image
//! bytes or an RFC 2397 `data:` URL — into the byte buffer the raster
//! loader consumes.
//!
//! Only base64-encoded data URLs are accepted. Embedded ASCII whitespace in
//! the base64 body is tolerated, since hosts line-wrap long URLs.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::ScanError;

/// Data URLs in the wild are frequently emitted without trailing padding.
const DATA_URL_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// An image payload as supplied by a host caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// An RFC 2397 `data:` URL, e.g. `data:image/png;base64,iVBOR...`.
    DataUrl(String),
    /// Raw encoded image bytes (PNG, JPEG, ...).
    Bytes(Vec<u8>),
}

impl ImagePayload {
    /// Wrap a `data:` URL string.
    #[must_use]
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self::DataUrl(url.into())
    }

    /// Wrap raw encoded image bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Resolve the payload into encoded image bytes.
    ///
    /// `Bytes` payloads are borrowed as-is; data URLs are parsed and their
    /// base64 body decoded. Malformed data URLs surface as
    /// [`ScanError::ImageLoad`].
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>, ScanError> {
        match self {
            Self::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Self::DataUrl(url) => parse_data_url(url).map(|data| Cow::Owned(data.bytes)),
        }
    }
}

/// A parsed `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Declared media type, e.g. `image/png`. Informational only: the
    /// raster loader sniffs the real format from the bytes.
    pub media_type: String,
    /// The decoded body.
    pub bytes: Vec<u8>,
}

/// Parse an RFC 2397 `data:` URL with a base64-encoded body.
pub fn parse_data_url(input: &str) -> Result<DataUrl, ScanError> {
    let rest = input
        .strip_prefix("data:")
        .ok_or_else(|| ScanError::ImageLoad("not a data URL".into()))?;

    let (header, body) = rest
        .split_once(',')
        .ok_or_else(|| ScanError::ImageLoad("data URL has no payload separator".into()))?;

    let Some(media_type) = header.strip_suffix(";base64") else {
        return Err(ScanError::ImageLoad(
            "data URL body is not base64-encoded".into(),
        ));
    };

    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = DATA_URL_B64
        .decode(compact.as_bytes())
        .map_err(|err| ScanError::ImageLoad(format!("invalid base64 body: {err}")))?;

    Ok(DataUrl {
        // RFC 2397 default when the header omits the media type.
        media_type: if media_type.is_empty() {
            String::from("text/plain")
        } else {
            media_type.to_string()
        },
        bytes,
    })
}

// =============================================================================
// TESTS
// =============================================================================
