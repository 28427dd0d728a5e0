//! RGB to brightness conversion with selectable photometric mappings.

use image::RgbImage;

/// Photometric mapping used to collapse an RGB pixel to one brightness value.
///
/// All three mappings produce values in 0-255 and use integer math, with
/// coefficients scaled the way the formulas are usually quoted for
/// normalized channels:
/// - `Average` - `(R + G + B) / 3`
/// - `Lightness` - `(max(R,G,B) + min(R,G,B)) / 2`
/// - `Luminosity` - `0.21*R + 0.72*G + 0.07*B`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// Plain channel average (default)
    #[default]
    Average,
    /// HSL-style lightness: midpoint of the brightest and darkest channel
    Lightness,
    /// Perceptual luminosity weighting (green dominates)
    Luminosity,
}

impl BrightnessMode {
    /// Collapse one RGB triplet to a brightness value.
    #[inline]
    pub fn apply(&self, r: u8, g: u8, b: u8) -> u8 {
        let (r, g, b) = (r as u32, g as u32, b as u32);
        match self {
            BrightnessMode::Average => ((r + g + b) / 3) as u8,
            BrightnessMode::Lightness => {
                let max = r.max(g).max(b);
                let min = r.min(g).min(b);
                ((max + min) / 2) as u8
            }
            // Coefficients scaled by 100: 21 + 72 + 7 = 100
            BrightnessMode::Luminosity => ((21 * r + 72 * g + 7 * b) / 100) as u8,
        }
    }

    /// Human-readable name for the mapping.
    pub fn name(&self) -> &'static str {
        match self {
            BrightnessMode::Average => "average",
            BrightnessMode::Lightness => "lightness",
            BrightnessMode::Luminosity => "luminosity",
        }
    }
}

/// Convert an RGB image to per-pixel brightness values.
///
/// # Arguments
/// * `img` - The decoded RGB image
/// * `mode` - Which photometric mapping to use
///
/// # Returns
/// A vector of brightness values (0-255), one per pixel, in row-major order.
pub fn brightness_map(img: &RgbImage, mode: BrightnessMode) -> Vec<u8> {
    let pixel_count = (img.width() * img.height()) as usize;
    let mut brightness = Vec::with_capacity(pixel_count);

    for rgb in img.as_raw().chunks_exact(3) {
        brightness.push(mode.apply(rgb[0], rgb[1], rgb[2]));
    }

    brightness
}
