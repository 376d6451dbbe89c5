// config.rs - Panel and run configuration
//
// A Config is fixed for the lifetime of the process. It is built either with
// `Config::new` or from the command line through `ConfigArgs`; both paths run
// the same validation.

use std::time::Duration;

use smart_leds::RGB8;

use crate::patterns::{self, Pattern};
use crate::{Error, Result};

/// How the physical LEDs are chained together.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Wiring {
    /// Even rows run left to right, odd rows right to left.
    #[default]
    Serpentine,
    /// Every row runs left to right.
    RowMajor,
}

/// How a cell's age is turned into a pixel color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorMode {
    /// Every live cell gets `alive`, every dead cell gets `dead`.
    Fixed { alive: RGB8, dead: RGB8 },
    /// Live cells cycle through the hue wheel as they age; dead cells are black.
    AgeHue { hue_step: u8 },
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::AgeHue { hue_step: 8 }
    }
}

/// Validated simulation settings.
#[derive(Clone, Debug)]
pub struct Config {
    width: usize,
    height: usize,
    pub wiring: Wiring,
    pub generation_delay: Duration,
    /// Consecutive generations with an identical change count tolerated before a reset.
    pub identical_limit: u32,
    /// Highest generation index allowed before a reset.
    pub generation_cap: u64,
    pub color_mode: ColorMode,
    pub brightness: u8,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Place this pattern instead of random seeding.
    pub seed_pattern: Option<&'static Pattern>,
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 16;
    pub const DEFAULT_HEIGHT: usize = 16;
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);
    pub const DEFAULT_IDENTICAL_LIMIT: u32 = 30;
    pub const DEFAULT_GENERATION_CAP: u64 = 5000;
    pub const DEFAULT_BRIGHTNESS: u8 = 32;

    /// Creates a configuration for a `width` x `height` panel with default run settings.
    pub fn new(width: usize, height: usize, wiring: Wiring) -> Result<Self> {
        let config = Self {
            width,
            height,
            wiring,
            generation_delay: Self::DEFAULT_DELAY,
            identical_limit: Self::DEFAULT_IDENTICAL_LIMIT,
            generation_cap: Self::DEFAULT_GENERATION_CAP,
            color_mode: ColorMode::default(),
            brightness: Self::DEFAULT_BRIGHTNESS,
            seed: None,
            seed_pattern: None,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of visible cells (and LEDs).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Re-checks every field. Public fields may have been edited after `new`.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        if self.generation_cap == 0 {
            return Err(Error::InvalidConfig("generation cap must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            wiring: Wiring::default(),
            generation_delay: Self::DEFAULT_DELAY,
            identical_limit: Self::DEFAULT_IDENTICAL_LIMIT,
            generation_cap: Self::DEFAULT_GENERATION_CAP,
            color_mode: ColorMode::default(),
            brightness: Self::DEFAULT_BRIGHTNESS,
            seed: None,
            seed_pattern: None,
        }
    }
}

/// Rejects empty grids and grids whose cell count (plus the guard cell) overflows.
pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    let fits = width
        .checked_mul(height)
        .and_then(|count| count.checked_add(1))
        .is_some();
    if width == 0 || height == 0 || !fits {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Color scheme selector on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Colors {
    #[default]
    Hue,
    Fixed,
}

/// Command-line form of [`Config`], meant to be `#[command(flatten)]`ed into a binary's CLI.
#[derive(Clone, Debug, clap::Args)]
pub struct ConfigArgs {
    /// Panel width in cells
    #[arg(long, default_value_t = Config::DEFAULT_WIDTH)]
    pub width: usize,

    /// Panel height in cells
    #[arg(long, default_value_t = Config::DEFAULT_HEIGHT)]
    pub height: usize,

    /// LED chain layout
    #[arg(long, value_enum, default_value_t = Wiring::Serpentine)]
    pub wiring: Wiring,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Generations with an identical change count tolerated before reseeding
    #[arg(long, default_value_t = Config::DEFAULT_IDENTICAL_LIMIT)]
    pub identical_limit: u32,

    /// Hard generation cap before reseeding
    #[arg(long, default_value_t = Config::DEFAULT_GENERATION_CAP)]
    pub generation_cap: u64,

    /// Color scheme
    #[arg(long, value_enum, default_value_t = Colors::Hue)]
    pub colors: Colors,

    /// Hue advance per generation of age (hue scheme)
    #[arg(long, default_value_t = 8)]
    pub hue_step: u8,

    /// Live cell color as RRGGBB (fixed scheme)
    #[arg(long, value_parser = parse_rgb, default_value = "00c800")]
    pub alive_color: RGB8,

    /// Global brightness, 0-255
    #[arg(long, default_value_t = Config::DEFAULT_BRIGHTNESS)]
    pub brightness: u8,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seed with a named pattern instead of random cells
    #[arg(long, value_parser = parse_pattern)]
    pub pattern: Option<&'static Pattern>,
}

impl TryFrom<ConfigArgs> for Config {
    type Error = Error;

    fn try_from(args: ConfigArgs) -> Result<Self> {
        let mut config = Config::new(args.width, args.height, args.wiring)?;
        config.generation_delay = Duration::from_millis(args.delay_ms);
        config.identical_limit = args.identical_limit;
        config.generation_cap = args.generation_cap;
        config.color_mode = match args.colors {
            Colors::Hue => ColorMode::AgeHue {
                hue_step: args.hue_step,
            },
            Colors::Fixed => ColorMode::Fixed {
                alive: args.alive_color,
                dead: RGB8::default(),
            },
        };
        config.brightness = args.brightness;
        config.seed = args.seed;
        config.seed_pattern = args.pattern;
        config.validate()?;
        Ok(config)
    }
}

fn parse_rgb(text: &str) -> std::result::Result<RGB8, String> {
    let hex = text.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected RRGGBB, got {text:?}"));
    }
    let value = u32::from_str_radix(hex, 16).map_err(|err| err.to_string())?;
    Ok(RGB8::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

fn parse_pattern(name: &str) -> std::result::Result<&'static Pattern, String> {
    patterns::find(name).ok_or_else(|| {
        let names: Vec<&str> = patterns::PATTERNS.iter().map(|pattern| pattern.name).collect();
        format!("unknown pattern {name:?}; expected one of {}", names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Config::new(0, 8, Wiring::Serpentine),
            Err(Error::InvalidDimensions { width: 0, height: 8 })
        ));
        assert!(matches!(
            Config::new(8, 0, Wiring::RowMajor),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(Config::new(usize::MAX, 2, Wiring::RowMajor).is_err());
        assert!(Config::new(usize::MAX, 1, Wiring::RowMajor).is_err());
    }

    #[test]
    fn zero_generation_cap_is_rejected() {
        let mut config = Config::new(4, 4, Wiring::RowMajor).unwrap();
        config.generation_cap = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn cli_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["conway"]).unwrap();
        let config = Config::try_from(cli.config).unwrap();
        let defaults = Config::default();
        assert_eq!(config.width(), defaults.width());
        assert_eq!(config.height(), defaults.height());
        assert_eq!(config.wiring, defaults.wiring);
        assert_eq!(config.generation_delay, defaults.generation_delay);
        assert_eq!(config.identical_limit, defaults.identical_limit);
        assert_eq!(config.generation_cap, defaults.generation_cap);
        assert_eq!(config.color_mode, defaults.color_mode);
    }

    #[test]
    fn cli_parses_fixed_colors_and_pattern() {
        let cli = Cli::try_parse_from([
            "conway",
            "--width",
            "12",
            "--height",
            "8",
            "--wiring",
            "row-major",
            "--colors",
            "fixed",
            "--alive-color",
            "#ff8000",
            "--pattern",
            "glider",
        ])
        .unwrap();
        let config = Config::try_from(cli.config).unwrap();
        assert_eq!(config.cell_count(), 96);
        assert_eq!(config.wiring, Wiring::RowMajor);
        assert_eq!(
            config.color_mode,
            ColorMode::Fixed {
                alive: RGB8::new(0xff, 0x80, 0x00),
                dead: RGB8::default(),
            }
        );
        assert_eq!(config.seed_pattern.map(|pattern| pattern.name), Some("glider"));
    }

    #[test]
    fn cli_rejects_unknown_pattern_and_bad_color() {
        assert!(Cli::try_parse_from(["conway", "--pattern", "spaceship"]).is_err());
        assert!(Cli::try_parse_from(["conway", "--alive-color", "fff"]).is_err());
    }

    #[test]
    fn cli_zero_width_fails_validation() {
        let cli = Cli::try_parse_from(["conway", "--width", "0"]).unwrap();
        assert!(Config::try_from(cli.config).is_err());
    }
}
