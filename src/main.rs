use std::io::{self, Write};

use clap::{Parser, ValueEnum};

use asciiview::ascii::{self, BrightnessMode, CharSet};
use asciiview::cli::{Args, CharacterSet, Mapping, OutputColor};
use asciiview::render::{self, ColorMode};
use asciiview::{config, loader};

/// Maximum output width in characters when nothing else is configured.
const DEFAULT_MAX_WIDTH: u16 = 317;
/// Maximum output height in rows when nothing else is configured.
const DEFAULT_MAX_HEIGHT: u16 = 168;
/// Horizontal character repeat per pixel when nothing else is configured.
const DEFAULT_REPEAT: u8 = 3;

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Load config file
    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if the default config is unreadable
    let cfg = if let Some(ref path) = args.config {
        config::Config::load_explicit(path)?
    } else {
        match config::Config::load() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("failed to load config file, using defaults: {}", e);
                config::Config::default()
            }
        }
    };

    // Merge settings: CLI args > config file > built-in defaults
    let mapping: BrightnessMode = args
        .mapping
        .or_else(|| from_config::<Mapping>(cfg.image.mapping.as_deref()))
        .unwrap_or_default()
        .into();

    let color: ColorMode = args
        .color
        .or_else(|| from_config::<OutputColor>(cfg.render.color.as_deref()))
        .unwrap_or_default()
        .into();

    let charset: CharSet = args
        .charset
        .or_else(|| from_config::<CharacterSet>(cfg.render.charset.as_deref()))
        .unwrap_or_default()
        .into();

    let invert = args.invert || cfg.render.invert.unwrap_or(false);
    let gamma = args.gamma || cfg.render.gamma.unwrap_or(false);

    let width = args.width.or(cfg.image.max_width).unwrap_or(DEFAULT_MAX_WIDTH);
    let height = args
        .height
        .or(cfg.image.max_height)
        .unwrap_or(DEFAULT_MAX_HEIGHT);
    let repeat = args
        .repeat
        .or(cfg.render.repeat)
        .unwrap_or(DEFAULT_REPEAT)
        .clamp(1, 4);

    let (cols, rows) = ascii::pixel_grid(width, height, repeat);
    let img = loader::load(&args.image, cols, rows, invert)?;

    let brightness = ascii::brightness_map(&img, mapping);
    let chars = ascii::map_to_chars(&brightness, charset.chars(), gamma);

    log::debug!(
        "rendering {}x{} cells (repeat {}), charset {}, mapping {}, color {}",
        img.width(),
        img.height(),
        repeat,
        charset.name(),
        mapping.name(),
        color.name()
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render::write_ascii(&img, &chars, color, repeat, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Parse an option enum from a config-file string, ignoring unknown values.
fn from_config<T: ValueEnum>(value: Option<&str>) -> Option<T> {
    value.and_then(|s| T::from_str(s, true).ok())
}
