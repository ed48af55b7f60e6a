//! # Quickscan Core
//!
//! Deterministic scan pipeline: an image payload in, exactly one report out.
//!
//! The pipeline has three stages, each a module of this crate:
//! 1. [`payload`] — resolve the input (raw bytes or an RFC 2397 data URL)
//!    into encoded image bytes.
//! 2. [`raster`] — load the bytes into an 8-bit luma raster.
//! 3. [`scanner`] — hand the raster to the registered decoder backends and
//!    collect the first detection.
//!
//! [`report::ScanReport`] is the completion record every surface hands back:
//! exactly one of `data` / `error` is populated, and `success` tells which.
//!
//! Architectural constraints:
//! - Pure Rust: no async, no network, no file I/O
//! - All symbol recognition is delegated to decoder backends
//! - Every failure normalizes into one of the three [`error::ScanError`] kinds

pub mod error;
pub mod payload;
pub mod raster;
pub mod report;
pub mod scanner;
pub mod symbol;

pub use error::ScanError;
pub use payload::{parse_data_url, DataUrl, ImagePayload};
pub use report::ScanReport;
pub use scanner::{QrDecoder, Scanner, SymbolDecoder};
pub use symbol::{Detection, SymbolFormat};
