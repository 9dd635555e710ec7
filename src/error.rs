//! Error types for QR rendering

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning text into a QR image
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied argument was rejected before any encoding work
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// The symbol encoder could not encode the data
    #[error(transparent)]
    Encoding(#[from] qrcode::types::QrError),

    /// The image codec could not serialize the bitmap
    #[error(transparent)]
    Codec(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { name, reason }
    }
}
