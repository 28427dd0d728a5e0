//! Image loading and preparation.
//!
//! Decoding is delegated entirely to the `image` crate; this module only
//! clamps the decoded picture to the pixel budget and applies the optional
//! negative before the ASCII pipeline takes over.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbImage;

use crate::ascii::fit_within;

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open image '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Load an image, fit it to the pixel budget, and convert it to RGB.
///
/// If the decoded image exceeds `max_width x max_height` pixels it is
/// scaled down with Lanczos3 resampling, preserving aspect ratio. With
/// `invert` set, every channel is negated (a photographic negative) before
/// the image is returned, so both brightness extraction and truecolor
/// output see the inverted colors.
///
/// # Arguments
/// * `path` - Path to the image file
/// * `max_width` - Maximum width in pixels
/// * `max_height` - Maximum height in pixels
/// * `invert` - Negate all RGB channels
///
/// # Returns
/// The prepared RGB image, or a [`LoadError`] naming the offending path.
pub fn load(
    path: &Path,
    max_width: u32,
    max_height: u32,
    invert: bool,
) -> Result<RgbImage, LoadError> {
    let mut img = image::open(path).map_err(|source| LoadError::Decode {
        path: path.display().to_string(),
        source,
    })?;

    let (width, height) = (img.width(), img.height());
    log::info!("decoded '{}' at {}x{}", path.display(), width, height);

    let (target_w, target_h) = fit_within(width, height, max_width, max_height);
    if (target_w, target_h) != (width, height) {
        log::info!("resizing to {}x{}", target_w, target_h);
        img = img.resize_exact(target_w, target_h, FilterType::Lanczos3);
    }

    if invert {
        img.invert();
    }

    Ok(img.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn write_png(dir: &Path, name: &str, img: &RgbImage) -> std::path::PathBuf {
        let path = dir.join(name);
        img.save(&path).expect("failed to write test image");
        path
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = load(Path::new("/nonexistent/image.png"), 100, 100, false);
        let msg = err.unwrap_err().to_string();
        assert!(msg.contains("/nonexistent/image.png"));
    }

    #[test]
    fn test_load_small_image_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));
        let path = write_png(dir.path(), "small.png", &img);

        let loaded = load(&path, 100, 100, false).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 3));
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_load_resizes_oversized_image() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(200, 100, Rgb([128, 128, 128]));
        let path = write_png(dir.path(), "big.png", &img);

        let loaded = load(&path, 50, 50, false).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (50, 25));
    }

    #[test]
    fn test_load_invert_negates_channels() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let path = write_png(dir.path(), "neg.png", &img);

        let loaded = load(&path, 100, 100, true).unwrap();
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([245, 235, 225]));
    }
}
