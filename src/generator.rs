//! Text to PNG pipeline: validate, encode, render.

use image::RgbaImage;
use log::trace;

use crate::codec::{ImageCodec, PngCodec};
use crate::encoder::{EccLevel, ModuleGrid, QrcodeEncoder, SymbolEncoder};
use crate::error::{Error, Result};
use crate::raster::{self, RenderOptions};

/// Generates QR code images from text.
///
/// Holds only configuration, so one instance can serve any number of calls.
///
/// # Example
///
/// ```
/// use qrpng::{EccLevel, QrCodeGenerator};
///
/// let generator = QrCodeGenerator::builder()
///     .ecc(EccLevel::High)
///     .scale(4)
///     .border(2)
///     .build();
/// let png = generator.generate("https://example.com").unwrap();
/// assert!(!png.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct QrCodeGenerator<E = QrcodeEncoder, C = PngCodec> {
    encoder: E,
    codec: C,
    ecc: EccLevel,
    options: RenderOptions,
}

impl QrCodeGenerator {
    /// A generator with the default encoder, PNG codec, Medium ECC, scale 10 and border 4.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> QrCodeGeneratorBuilder {
        QrCodeGeneratorBuilder::default()
    }
}

impl<E: SymbolEncoder, C: ImageCodec> QrCodeGenerator<E, C> {
    /// A generator using caller-supplied encoder and codec with default settings.
    pub fn with_parts(encoder: E, codec: C) -> Self {
        QrCodeGenerator {
            encoder,
            codec,
            ecc: EccLevel::default(),
            options: RenderOptions::default(),
        }
    }

    /// Error correction level passed to the encoder.
    pub fn ecc(&self) -> EccLevel {
        self.ecc
    }

    /// Layout and colors used when rasterizing.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Encodes `text` and returns the image bytes produced by the codec.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if `text` is empty. Nothing is encoded in that case.
    /// * [`Error::Encoding`] if the symbol encoder rejects the text, e.g. it is too long.
    /// * [`Error::Codec`] if the image codec fails.
    pub fn generate(&self, text: &str) -> Result<Vec<u8>> {
        let grid = self.encode(text)?;
        raster::render(&grid, &self.options, &self.codec)
    }

    /// Like [`generate`](Self::generate), treating `None` as missing input.
    pub fn generate_opt(&self, text: Option<&str>) -> Result<Vec<u8>> {
        match text {
            Some(text) => self.generate(text),
            None => Err(Error::invalid("text", "must not be null or empty")),
        }
    }

    /// Encodes `text` and returns the bitmap without serializing it.
    pub fn generate_image_buffer(&self, text: &str) -> Result<RgbaImage> {
        let grid = self.encode(text)?;
        raster::rasterize(&grid, &self.options)
    }

    fn encode(&self, text: &str) -> Result<ModuleGrid> {
        if text.is_empty() {
            return Err(Error::invalid("text", "must not be null or empty"));
        }
        trace!("generating QR code for {} bytes of text", text.len());
        self.encoder.encode(text, self.ecc)
    }
}

/// Builder for [`QrCodeGenerator`].
#[derive(Clone, Debug, Default)]
pub struct QrCodeGeneratorBuilder {
    ecc: EccLevel,
    options: RenderOptions,
}

impl QrCodeGeneratorBuilder {
    pub fn ecc(mut self, ecc: EccLevel) -> Self {
        self.ecc = ecc;
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.options = self.options.scale(scale);
        self
    }

    pub fn border(mut self, border: u32) -> Self {
        self.options = self.options.border(border);
        self
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> QrCodeGenerator {
        self.build_with(QrcodeEncoder, PngCodec)
    }

    pub fn build_with<E: SymbolEncoder, C: ImageCodec>(
        self,
        encoder: E,
        codec: C,
    ) -> QrCodeGenerator<E, C> {
        QrCodeGenerator {
            encoder,
            codec,
            ecc: self.ecc,
            options: self.options,
        }
    }
}
