//! Hex color literal parsing.

use image::Rgb;

/// Parse a strict `#RRGGBB` literal into an RGB pixel.
///
/// # Errors
///
/// Returns an error if the literal is not `#` followed by exactly six hex
/// digits.
pub fn parse_hex(literal: &str) -> Result<Rgb<u8>, String> {
    let digits = literal
        .strip_prefix('#')
        .ok_or_else(|| format!("'{literal}' is missing the leading '#'"))?;

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{literal}' is not a #RRGGBB literal"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| format!("'{literal}': {e}"))
    };

    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}
