//! Unified error type for shelfgen.

use thiserror::Error;

/// Errors that can occur while generating the fixture image.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image encoder rejected the canvas or failed to write.
    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A color literal could not be parsed.
    #[error("Invalid color: {0}")]
    Color(String),

    /// The embedded fallback font could not be parsed.
    #[error("Font error: {0}")]
    Font(String),
}
