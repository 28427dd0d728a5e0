//! ASCII conversion module for turning decoded images into character grids.
//!
//! This module provides the pipeline for converting an RGB image to ASCII
//! art suitable for terminal display:
//!
//! 1. **Brightness extraction** - RGB to a 0-255 value per pixel, using one
//!    of three photometric mappings
//! 2. **Character mapping** - Map brightness to ramp characters, with
//!    optional gamma correction
//! 3. **Dimension fitting** - Clamp the source image to the character
//!    budget of the terminal
//!
//! # Character Sets
//!
//! Multiple character ramps are available via [`CharSet`]:
//! - `Detailed` - 65-level ASCII density ramp
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod brightness;
mod charset;
mod dimensions;
mod mapping;

pub use brightness::{brightness_map, BrightnessMode};
pub use charset::{
    CharSet, BLOCKS_CHARSET, DETAILED_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET,
};
pub use dimensions::{fit_within, pixel_grid};
pub use mapping::{gamma_correct, map_to_chars, GAMMA};
