//! CLI argument parsing with clap.
//!
//! Every default matches the embedded constants, so a zero-argument run
//! produces the canonical fixture.

use clap::Parser;

use crate::font::PREFERRED_FONT_PATH;
use crate::output::DEFAULT_OUTPUT;

/// Synthetic bookshelf test-image generator.
#[derive(Parser, Debug)]
#[command(name = "shelfgen", version, about)]
pub struct Cli {
    /// Output file path.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// JPEG quality factor (1-100).
    #[arg(short, long, default_value_t = 85)]
    pub quality: u8,

    /// Preferred spine font; falls back to the bundled font when unreadable.
    #[arg(long, default_value = PREFERRED_FONT_PATH)]
    pub font: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["shelfgen"]);
        assert_eq!(cli.output, "test-bookshelf.jpg");
        assert_eq!(cli.quality, 85);
        assert_eq!(cli.font, "/System/Library/Fonts/Helvetica.ttc");
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "shelfgen",
            "-o",
            "shelf.jpg",
            "-q",
            "70",
            "--font",
            "/tmp/other.ttf",
            "-v",
        ]);
        assert_eq!(cli.output, "shelf.jpg");
        assert_eq!(cli.quality, 70);
        assert_eq!(cli.font, "/tmp/other.ttf");
        assert!(cli.verbose);
    }

    #[test]
    fn non_numeric_quality_rejected_by_parser() {
        assert!(Cli::try_parse_from(["shelfgen", "-q", "best"]).is_err());
    }
}
