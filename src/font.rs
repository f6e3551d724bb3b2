//! Spine label font resolution with best-effort fallback.
//!
//! The preferred platform font is tried first; any failure (missing file,
//! unreadable file, unparseable font data) falls back to the bundled
//! DejaVu Sans. This is the only recovered failure in the generator.

use std::path::Path;

use ab_glyph::FontArc;

use crate::error::FixtureError;

/// Platform font tried first for spine labels.
pub const PREFERRED_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Bundled fallback font, always available.
static BUILTIN_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Which font ended up being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSource {
    /// The preferred platform font loaded successfully.
    Preferred,
    /// The bundled DejaVu Sans fallback.
    Builtin,
}

/// Load the spine label font, falling back to the bundled font when the
/// preferred path cannot be read or parsed.
///
/// # Errors
///
/// Returns an error only if the bundled fallback font itself fails to
/// parse, which cannot happen with the shipped bytes.
pub fn resolve_font(preferred: &Path) -> Result<(FontArc, FontSource), FixtureError> {
    if let Ok(bytes) = std::fs::read(preferred) {
        if let Ok(font) = FontArc::try_from_vec(bytes) {
            return Ok((font, FontSource::Preferred));
        }
    }

    let font = FontArc::try_from_slice(BUILTIN_FONT)
        .map_err(|e| FixtureError::Font(format!("bundled font is unusable: {e}")))?;
    Ok((font, FontSource::Builtin))
}
