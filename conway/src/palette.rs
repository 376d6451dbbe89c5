// palette.rs - Cell age to LED color

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::ColorMode;
use crate::grid::Age;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    mode: ColorMode,
}

impl Palette {
    #[must_use]
    pub const fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    /// Color for a cell of the given age.
    #[must_use]
    pub fn color(&self, age: Age) -> RGB8 {
        match self.mode {
            ColorMode::Fixed { alive, dead } => {
                if age > 0 {
                    alive
                } else {
                    dead
                }
            }
            ColorMode::AgeHue { .. } if age == 0 => RGB8::default(),
            ColorMode::AgeHue { hue_step } => {
                // Hue is (age * hue_step) mod 256.
                let hue = age.wrapping_mul(u32::from(hue_step)) as u8;
                hsv2rgb(Hsv {
                    hue,
                    sat: 255,
                    val: 255,
                })
            }
        }
    }
}
