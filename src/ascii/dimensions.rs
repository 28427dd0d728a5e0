//! Dimension fitting for terminal-sized output.

/// Translate a character budget into a pixel grid.
///
/// Each pixel renders as `repeat` characters wide and one character tall,
/// so a terminal budget of `max_width x max_height` characters holds
/// `max_width / repeat` pixel columns and `max_height` pixel rows.
///
/// # Arguments
/// * `max_width` - Maximum output width in characters
/// * `max_height` - Maximum output height in characters (rows)
/// * `repeat` - Horizontal character repeat per pixel
///
/// # Returns
/// A `(columns, rows)` pixel budget, at least 1x1.
pub fn pixel_grid(max_width: u16, max_height: u16, repeat: u8) -> (u32, u32) {
    let repeat = repeat.max(1) as u32;
    let cols = (max_width as u32 / repeat).max(1);
    let rows = (max_height as u32).max(1);
    (cols, rows)
}

/// Fit image dimensions within a pixel budget, preserving aspect ratio.
///
/// Images already inside the budget pass through unchanged; larger images
/// are scaled down so the longer relative side exactly fills its bound.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `max_width` - Maximum width in pixels
/// * `max_height` - Maximum height in pixels
///
/// # Returns
/// Target `(width, height)` in pixels, at least 1x1.
///
/// # Example
/// ```ignore
/// // A 640x480 image limited to 100x100 scales to 100x75
/// assert_eq!(fit_within(640, 480, 100, 100), (100, 75));
/// ```
pub fn fit_within(img_width: u32, img_height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if img_width == 0 || img_height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    if img_width <= max_width && img_height <= max_height {
        return (img_width, img_height);
    }

    let scale_w = max_width as f32 / img_width as f32;
    let scale_h = max_height as f32 / img_height as f32;
    let scale = scale_w.min(scale_h);

    let width = ((img_width as f32 * scale).round() as u32).clamp(1, max_width);
    let height = ((img_height as f32 * scale).round() as u32).clamp(1, max_height);
    (width, height)
}
