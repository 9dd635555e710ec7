//! Symbol encoding.
//!
//! The QR symbol itself (segmentation, error correction, masking) is produced by the
//! [`qrcode`] crate. This module wraps it behind [`SymbolEncoder`] and hands the result
//! on as a plain [`ModuleGrid`] so the rasterizer never sees encoder types.

use core::fmt;
use core::str::FromStr;

use log::{debug, trace};
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

use crate::error::{Error, Result};

/// The error correction level in a QR code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum EccLevel {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl EccLevel {
    fn to_qrcode(self) -> EcLevel {
        match self {
            EccLevel::Low => EcLevel::L,
            EccLevel::Medium => EcLevel::M,
            EccLevel::Quartile => EcLevel::Q,
            EccLevel::High => EcLevel::H,
        }
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            EccLevel::Low => "L",
            EccLevel::Medium => "M",
            EccLevel::Quartile => "Q",
            EccLevel::High => "H",
        };
        f.write_str(s)
    }
}

/// Returned when a string names no error correction level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error correction level `{0}` (expected L, M, Q or H)")]
pub struct ParseEccLevelError(String);

impl FromStr for EccLevel {
    type Err = ParseEccLevelError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(EccLevel::Low),
            "m" | "medium" => Ok(EccLevel::Medium),
            "q" | "quartile" => Ok(EccLevel::Quartile),
            "h" | "high" => Ok(EccLevel::High),
            _ => Err(ParseEccLevelError(s.to_string())),
        }
    }
}

/// A square grid of dark and light modules.
///
/// Immutable once built. `size` is the side length in modules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleGrid {
    size: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Builds a grid from row-major module values (`true` = dark).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is zero or `modules.len()` is not
    /// `size * size`.
    pub fn from_modules(size: u32, modules: Vec<bool>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid("size", "must be at least 1"));
        }
        let expected = (size as usize).checked_mul(size as usize);
        if expected != Some(modules.len()) {
            return Err(Error::invalid("modules", "length must equal size * size"));
        }
        Ok(ModuleGrid { size, modules })
    }

    /// Returns this grid's side length in modules.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the color of the module at the given coordinates, which is `false`
    /// for light or `true` for dark. The top left corner has the coordinates (x=0, y=0).
    /// If the given coordinates are out of bounds, then `false` (light) is returned.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let size = self.size as i64;
        let (x, y) = (x as i64, y as i64);
        (0..size).contains(&x)
            && (0..size).contains(&y)
            && self.modules[(y * size + x) as usize]
    }

    /// Iterates over the coordinates of every dark module, row by row.
    pub fn dark_modules(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let size = self.size;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i as u32 % size, i as u32 / size))
    }
}

/// Turns text into a module grid.
pub trait SymbolEncoder {
    fn encode(&self, text: &str, ecc: EccLevel) -> Result<ModuleGrid>;
}

/// [`SymbolEncoder`] backed by the `qrcode` crate.
///
/// Picks the smallest QR version that fits the data at the requested level.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeEncoder;

impl SymbolEncoder for QrcodeEncoder {
    fn encode(&self, text: &str, ecc: EccLevel) -> Result<ModuleGrid> {
        trace!("encoding {} bytes at ECC level {}", text.len(), ecc);
        let code = QrCode::with_error_correction_level(text.as_bytes(), ecc.to_qrcode())?;
        let size = code.width() as u32;
        debug!("encoded symbol {:?}, {}x{} modules", code.version(), size, size);

        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        ModuleGrid::from_modules(size, modules)
    }
}
