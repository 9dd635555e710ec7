//! Image serialization.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use log::trace;

use crate::error::Result;

/// Serializes a finished bitmap into an encoded image byte sequence.
pub trait ImageCodec {
    fn encode(&self, bitmap: &RgbaImage) -> Result<Vec<u8>>;
}

/// PNG [`ImageCodec`] using the `image` crate's encoder.
///
/// Output is deterministic: the same bitmap always yields the same bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn encode(&self, bitmap: &RgbaImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        bitmap.write_to(&mut buffer, ImageFormat::Png)?;
        let bytes = buffer.into_inner();
        trace!("png encoded {}x{} -> {} bytes", bitmap.width(), bitmap.height(), bytes.len());
        Ok(bytes)
    }
}
