//! Rasterization of a module grid into a pixel bitmap.

use image::{Rgba, RgbaImage};
use log::debug;

use crate::codec::ImageCodec;
use crate::encoder::ModuleGrid;
use crate::error::{Error, Result};

/// Pixels per module used when no scale is given.
pub const DEFAULT_SCALE: u32 = 10;
/// Quiet-zone width in modules used when no border is given.
pub const DEFAULT_BORDER: u32 = 4;
/// Largest RGBA bitmap, in bytes, a render may allocate.
pub const MAX_BITMAP_BYTES: u64 = 1 << 28;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// How a module grid is laid out in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module along each axis.
    pub scale: u32,
    /// Light modules of padding on each side.
    pub border: u32,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            scale: DEFAULT_SCALE,
            border: DEFAULT_BORDER,
            foreground: BLACK,
            background: WHITE,
        }
    }
}

impl RenderOptions {
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn foreground(mut self, color: [u8; 4]) -> Self {
        self.foreground = Rgba(color);
        self
    }

    pub fn background(mut self, color: [u8; 4]) -> Self {
        self.background = Rgba(color);
        self
    }

    /// Side length in pixels of the image for a grid of `size` modules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `scale` is zero, the result does not
    /// fit in a `u32`, or the RGBA bitmap would exceed [`MAX_BITMAP_BYTES`].
    pub fn image_size(&self, size: u32) -> Result<u32> {
        if self.scale == 0 {
            return Err(Error::invalid("scale", "must be at least 1"));
        }
        let total = self
            .border
            .checked_mul(2)
            .and_then(|b| b.checked_add(size))
            .and_then(|modules| modules.checked_mul(self.scale))
            .ok_or_else(|| Error::invalid("scale", "image dimensions overflow"))?;

        let side = u64::from(total);
        match side.checked_mul(side).and_then(|pixels| pixels.checked_mul(4)) {
            Some(bytes) if bytes <= MAX_BITMAP_BYTES => Ok(total),
            _ => Err(Error::invalid("scale", "image too large")),
        }
    }
}

/// Draws `grid` into a new bitmap.
///
/// The canvas starts out filled with the background color; each dark module then
/// gets a solid `scale`x`scale` block of the foreground color, offset by the border.
///
/// # Example
///
/// ```
/// use qrpng::encoder::ModuleGrid;
/// use qrpng::raster::{rasterize, RenderOptions};
///
/// let grid = ModuleGrid::from_modules(1, vec![true]).unwrap();
/// let img = rasterize(&grid, &RenderOptions::default()).unwrap();
/// assert_eq!(img.dimensions(), (90, 90));
/// ```
pub fn rasterize(grid: &ModuleGrid, options: &RenderOptions) -> Result<RgbaImage> {
    let total = options.image_size(grid.size())?;
    let scale = options.scale;
    let mut img = RgbaImage::from_pixel(total, total, options.background);

    for (x, y) in grid.dark_modules() {
        let left = (x + options.border) * scale;
        let top = (y + options.border) * scale;
        for py in top..top + scale {
            for px in left..left + scale {
                img.put_pixel(px, py, options.foreground);
            }
        }
    }

    Ok(img)
}

/// Rasterizes `grid` and serializes the bitmap with `codec`.
///
/// Codec failures are returned as-is.
pub fn render<C: ImageCodec + ?Sized>(
    grid: &ModuleGrid,
    options: &RenderOptions,
    codec: &C,
) -> Result<Vec<u8>> {
    let img = rasterize(grid, options)?;
    let bytes = codec.encode(&img)?;
    debug!(
        "rendered {}x{} module grid to {}x{} image ({} bytes)",
        grid.size(),
        grid.size(),
        img.width(),
        img.height(),
        bytes.len()
    );
    Ok(bytes)
}
