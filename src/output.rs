//! JPEG encoding and quality validation.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::FixtureError;

/// Filename written when no `--output` override is given.
pub const DEFAULT_OUTPUT: &str = "test-bookshelf.jpg";

/// Validate the JPEG quality factor.
///
/// # Errors
///
/// Returns an error if the quality is outside 1-100.
pub fn validate_quality(quality: u8) -> Result<(), String> {
    if (1..=100).contains(&quality) {
        Ok(())
    } else {
        Err(format!("Unsupported quality '{quality}'. Valid: 1-100"))
    }
}

/// Encode the canvas as a baseline JPEG at the given quality and write it to
/// `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<(), FixtureError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.encode_image(canvas)?;
    Ok(())
}
