//! # qrpng
//!
//! Render text as a QR code PNG image.
//!
//! `qrpng` is a thin front end: the QR symbol is produced by the [`qrcode`] crate and the PNG
//! bytes by the [`image`] crate. What lives here is input validation, the rasterization of the
//! module grid into a bitmap, and the glue between the two.
//!
//! ## Features
//!
//! - One call from text to PNG bytes: [`generate`].
//! - Four error correction levels, Medium by default.
//! - Configurable scale, quiet-zone border and colors through [`QrCodeGenerator::builder`].
//! - In-memory RGBA buffers via [`QrCodeGenerator::generate_image_buffer`].
//! - Pluggable [`SymbolEncoder`] and [`ImageCodec`] seams.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Example
//!
//! ```rust
//! let png = qrpng::generate("HELLO").unwrap();
//!
//! let img = image::load_from_memory(&png).unwrap();
//! // "HELLO" fits a version 1 symbol (21 modules), plus 4 modules of border each side,
//! // at 10 pixels per module.
//! assert_eq!((img.width(), img.height()), (290, 290));
//! ```
//!
//! ## Modules
//!
//! - [`encoder`]: Symbol encoding into a [`ModuleGrid`].
//! - [`raster`]: Module grid to bitmap.
//! - [`codec`]: Bitmap to encoded image bytes.
//! - [`generator`]: The full pipeline.
#![forbid(unsafe_code)]

pub mod codec;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod raster;

pub use codec::{ImageCodec, PngCodec};
pub use encoder::{EccLevel, ModuleGrid, QrcodeEncoder, SymbolEncoder};
pub use error::{Error, Result};
pub use generator::{QrCodeGenerator, QrCodeGeneratorBuilder};
pub use raster::RenderOptions;

/// Generates a PNG image of the QR code for `text`.
///
/// Uses Medium error correction, 10 pixels per module and a 4 module white border.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `text` is empty, and passes encoder and PNG
/// codec failures through unchanged.
///
/// # Example
///
/// ```
/// assert!(qrpng::generate("Hello, World!").is_ok());
/// assert!(matches!(qrpng::generate(""), Err(qrpng::Error::InvalidArgument { .. })));
/// ```
pub fn generate(text: &str) -> Result<Vec<u8>> {
    QrCodeGenerator::new().generate(text)
}

/// [`generate`] for input that may be absent; `None` is rejected like an empty string.
pub fn generate_opt(text: Option<&str>) -> Result<Vec<u8>> {
    QrCodeGenerator::new().generate_opt(text)
}
