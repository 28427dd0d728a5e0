//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::{CharacterSet, Mapping, OutputColor};

/// Parse and validate the horizontal character repeat (1-4)
fn parse_repeat(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(1..=4).contains(&n) {
        return Err(format!("Repeat must be between 1 and 4, got {}", n));
    }
    Ok(n)
}

/// Render images as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciiview")]
#[command(version, about = "Render images as ASCII art in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render a photo with the default 65-level ramp
    asciiview photo.png

    # Perceptual brightness, colorized with the image's own pixels
    asciiview photo.png --mapping luminosity --color truecolor

    # Green-on-black, inverted, on a light terminal
    asciiview logo.jpg --color matrix --invert

    # Fit a narrow terminal
    asciiview photo.png --width 120 --height 40")]
pub struct Args {
    /// Path to the image file to render
    pub image: PathBuf,

    /// Brightness mapping (defaults to average)
    #[arg(long, short = 'm')]
    pub mapping: Option<Mapping>,

    /// Output color mode (defaults to plain)
    #[arg(long)]
    pub color: Option<OutputColor>,

    /// Character ramp (defaults to detailed)
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Invert the image (photographic negative)
    #[arg(long)]
    pub invert: bool,

    /// Apply perceptual gamma correction before mapping
    #[arg(long)]
    pub gamma: bool,

    /// Maximum output width in characters (defaults to 317)
    #[arg(long, short = 'W')]
    pub width: Option<u16>,

    /// Maximum output height in rows (defaults to 168)
    #[arg(long, short = 'H')]
    pub height: Option<u16>,

    /// Characters printed per pixel horizontally, 1-4 (defaults to 3)
    #[arg(long, short = 'r', value_parser = parse_repeat)]
    pub repeat: Option<u8>,

    /// Config file path
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}
