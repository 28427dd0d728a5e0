//! CLI enum types for mapping, color, and charset options.

use clap::ValueEnum;

use crate::ascii;
use crate::render::ColorMode;

/// Brightness mapping selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mapping {
    #[default]
    Average,
    Lightness,
    Luminosity,
}

impl From<Mapping> for ascii::BrightnessMode {
    fn from(m: Mapping) -> Self {
        match m {
            Mapping::Average => ascii::BrightnessMode::Average,
            Mapping::Lightness => ascii::BrightnessMode::Lightness,
            Mapping::Luminosity => ascii::BrightnessMode::Luminosity,
        }
    }
}

/// Output color mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputColor {
    #[default]
    Plain,
    Matrix,
    Truecolor,
}

impl From<OutputColor> for ColorMode {
    fn from(c: OutputColor) -> Self {
        match c {
            OutputColor::Plain => ColorMode::Plain,
            OutputColor::Matrix => ColorMode::MatrixGreen,
            OutputColor::Truecolor => ColorMode::Truecolor,
        }
    }
}

/// Character ramp selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Detailed,
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}
