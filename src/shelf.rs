//! The hardcoded shelf: spine descriptors and layout constants.

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1200;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 800;
/// Background fill for the shelf area.
pub const BACKGROUND: &str = "#F5E6D3";

/// Top edge of every spine rectangle.
pub const SHELF_TOP: i32 = 100;
/// Bottom edge of every spine rectangle.
pub const SHELF_BOTTOM: i32 = 700;
/// Vertical position of the title line.
pub const TITLE_Y: i32 = 150;
/// Vertical position of the author line.
pub const AUTHOR_Y: i32 = 400;
/// Text color used on every spine.
pub const TEXT_COLOR: &str = "#FFFFFF";
/// Spine label font size in pixels.
pub const SPINE_FONT_SIZE: f32 = 16.0;
/// Fixed offset subtracted from the spine midpoint to fake centering;
/// text width is never measured.
pub const CENTERING_NUDGE: i32 = 5;

/// One drawn book: a filled rectangle plus two text overlays.
#[derive(Debug, Clone, Copy)]
pub struct SpineDescriptor {
    /// Title text drawn on the upper part of the spine.
    pub title: &'static str,
    /// Author text drawn below the title.
    pub author: &'static str,
    /// Spine fill color as a `#RRGGBB` literal.
    pub color: &'static str,
    /// Left edge of the spine rectangle in pixels.
    pub x: i32,
    /// Width of the spine rectangle in pixels.
    pub width: u32,
}

/// The five books on the shelf, in drawing order.
pub const SHELF: [SpineDescriptor; 5] = [
    SpineDescriptor {
        title: "1984",
        author: "George Orwell",
        color: "#8B4513",
        x: 50,
        width: 80,
    },
    SpineDescriptor {
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        color: "#4169E1",
        x: 140,
        width: 100,
    },
    SpineDescriptor {
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        color: "#228B22",
        x: 250,
        width: 90,
    },
    SpineDescriptor {
        title: "Pride and Prejudice",
        author: "Jane Austen",
        color: "#DC143C",
        x: 350,
        width: 95,
    },
    SpineDescriptor {
        title: "The Catcher in the Rye",
        author: "J.D. Salinger",
        color: "#FF8C00",
        x: 455,
        width: 85,
    },
];
