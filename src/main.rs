//! Shelfgen - synthetic bookshelf test-image generator.
//!
//! Draws five labeled book spines onto a fixed 1200x800 canvas and writes
//! the result as a quality-85 JPEG, for use as a fixture in downstream
//! image-recognition and cataloging tests.

mod cli;
mod color;
mod error;
mod font;
mod output;
mod render;
mod shelf;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::error::FixtureError;
use crate::font::FontSource;
use crate::output::{save_jpeg, validate_quality};
use crate::render::render_shelf;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), FixtureError> {
    validate_quality(cli.quality).map_err(FixtureError::InvalidArgument)?;

    let (font, source) = font::resolve_font(Path::new(&cli.font))?;
    if cli.verbose {
        match source {
            FontSource::Preferred => eprintln!("Font: {}", cli.font),
            FontSource::Builtin => eprintln!("Font: bundled DejaVu Sans (fallback)"),
        }
    }

    let canvas = render_shelf(&font)?;

    let path = Path::new(&cli.output);
    save_jpeg(&canvas, path, cli.quality)?;

    println!("Created {}", cli.output);
    Ok(())
}
