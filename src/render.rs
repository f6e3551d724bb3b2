//! Canvas allocation and spine drawing.

use ab_glyph::{FontArc, PxScale};
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::color::parse_hex;
use crate::error::FixtureError;
use crate::shelf::{
    AUTHOR_Y, BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, CENTERING_NUDGE, SHELF, SHELF_BOTTOM,
    SHELF_TOP, SPINE_FONT_SIZE, TEXT_COLOR, TITLE_Y,
};

/// Render the bookshelf: background fill, then one filled rectangle and two
/// text lines per spine, in shelf order.
///
/// # Errors
///
/// Returns an error if any built-in color literal fails to parse.
pub fn render_shelf(font: &FontArc) -> Result<RgbImage, FixtureError> {
    let background = parse_hex(BACKGROUND).map_err(FixtureError::Color)?;
    let text_color = parse_hex(TEXT_COLOR).map_err(FixtureError::Color)?;

    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, background);
    let scale = PxScale::from(SPINE_FONT_SIZE);

    #[allow(clippy::cast_sign_loss)]
    let band_height = (SHELF_BOTTOM - SHELF_TOP) as u32;

    for spine in &SHELF {
        let fill = parse_hex(spine.color).map_err(FixtureError::Color)?;
        let rect = Rect::at(spine.x, SHELF_TOP).of_size(spine.width, band_height);
        draw_filled_rect_mut(&mut canvas, rect, fill);

        // Approximate centering: midpoint minus a fixed nudge, no text
        // measurement.
        #[allow(clippy::cast_possible_wrap)]
        let text_x = spine.x + (spine.width / 2) as i32 - CENTERING_NUDGE;
        draw_text_mut(&mut canvas, text_color, text_x, TITLE_Y, scale, font, spine.title);
        draw_text_mut(&mut canvas, text_color, text_x, AUTHOR_Y, scale, font, spine.author);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{resolve_font, FontSource};
    use std::path::Path;

    fn builtin_font() -> FontArc {
        let (font, source) = resolve_font(Path::new("/nonexistent/font.ttc")).unwrap();
        assert_eq!(source, FontSource::Builtin);
        font
    }

    #[test]
    fn canvas_has_fixed_dimensions() {
        let canvas = render_shelf(&builtin_font()).unwrap();
        assert_eq!(canvas.dimensions(), (1200, 800));
    }

    #[test]
    fn corners_keep_the_background_color() {
        let canvas = render_shelf(&builtin_font()).unwrap();
        let background = parse_hex(BACKGROUND).unwrap();
        assert_eq!(*canvas.get_pixel(0, 0), background);
        assert_eq!(*canvas.get_pixel(1199, 0), background);
        assert_eq!(*canvas.get_pixel(1199, 799), background);
        assert_eq!(*canvas.get_pixel(0, 799), background);
    }

    #[test]
    fn spine_interiors_carry_their_fill_color() {
        let canvas = render_shelf(&builtin_font()).unwrap();
        // Sample near the left edge, below the author row, clear of any text.
        for spine in &SHELF {
            let fill = parse_hex(spine.color).unwrap();
            #[allow(clippy::cast_sign_loss)]
            let x = (spine.x + 2) as u32;
            assert_eq!(*canvas.get_pixel(x, 650), fill, "spine '{}'", spine.title);
        }
    }

    #[test]
    fn area_above_the_shelf_is_background() {
        let canvas = render_shelf(&builtin_font()).unwrap();
        let background = parse_hex(BACKGROUND).unwrap();
        assert_eq!(*canvas.get_pixel(90, 50), background);
        assert_eq!(*canvas.get_pixel(90, 750), background);
    }

    #[test]
    fn titles_leave_non_fill_pixels_on_the_spine() {
        let canvas = render_shelf(&builtin_font()).unwrap();
        let spine = &SHELF[1];
        let fill = parse_hex(spine.color).unwrap();

        // Somewhere in the title row a glyph must have altered the fill.
        #[allow(clippy::cast_sign_loss)]
        let (x0, x1) = (spine.x as u32, spine.x as u32 + spine.width);
        #[allow(clippy::cast_sign_loss)]
        let (y0, y1) = (TITLE_Y as u32, TITLE_Y as u32 + 20);
        let touched = (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .any(|(x, y)| *canvas.get_pixel(x, y) != fill);
        assert!(touched, "no text rendered on spine '{}'", spine.title);
    }
}
