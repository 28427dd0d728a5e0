//! Colorized terminal output for character grids.
//!
//! Writes the mapped characters to any `io::Write` sink, one line per pixel
//! row, with the color mode deciding which ANSI escapes wrap them.

use std::io::{self, Write};

use image::RgbImage;

/// ANSI reset, emitted after the grid so the terminal keeps no attributes.
const RESET: &str = "\x1b[0m";

/// Escape prefix for matrix mode: near-black background, phosphor green
/// foreground, set once for the whole image.
const MATRIX_PREFIX: &str = "\x1b[48;2;13;2;8m\x1b[38;2;0;143;17m";

/// Output color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Characters only, no escape codes inside the grid
    #[default]
    Plain,
    /// Single green-on-black palette for the whole image
    MatrixGreen,
    /// 24-bit foreground color per pixel, sampled from the source image
    Truecolor,
}

impl ColorMode {
    /// Human-readable name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Plain => "plain",
            ColorMode::MatrixGreen => "matrix",
            ColorMode::Truecolor => "truecolor",
        }
    }
}

/// Write a character grid to the sink with the requested coloring.
///
/// `chars` holds one character per pixel of `img` in row-major order; each
/// is repeated `repeat` times horizontally to compensate for tall terminal
/// cells. Rows are newline-terminated and a reset escape closes the output.
///
/// # Arguments
/// * `img` - The prepared RGB image (color source for truecolor mode)
/// * `chars` - Mapped characters, `img.width() * img.height()` of them
/// * `mode` - Color mode
/// * `repeat` - Horizontal repeat per pixel (at least 1)
/// * `out` - Destination sink
pub fn write_ascii<W: Write>(
    img: &RgbImage,
    chars: &[char],
    mode: ColorMode,
    repeat: u8,
    out: &mut W,
) -> io::Result<()> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let repeat = repeat.max(1) as usize;

    if chars.len() != width * height {
        log::warn!(
            "character grid is {} cells, image has {} pixels",
            chars.len(),
            width * height
        );
    }

    if mode == ColorMode::MatrixGreen {
        out.write_all(MATRIX_PREFIX.as_bytes())?;
    }

    let mut line = String::with_capacity(width * (repeat + 16));
    for (y, row) in chars.chunks(width.max(1)).take(height).enumerate() {
        line.clear();
        for (x, &c) in row.iter().enumerate() {
            if mode == ColorMode::Truecolor {
                let p = img.get_pixel(x as u32, y as u32);
                line.push_str(&format!("\x1b[38;2;{};{};{}m", p[0], p[1], p[2]));
            }
            for _ in 0..repeat {
                line.push(c);
            }
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }

    out.write_all(RESET.as_bytes())?;
    Ok(())
}
