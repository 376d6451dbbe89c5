// mapper.rs - Logical (x, y) to physical LED index conversion
//
// LED panels are a single chain of pixels; how the chain snakes across the
// panel depends on the wiring. `map_safe` never produces an index outside the
// frame buffer: every out-of-range coordinate goes to one shared guard slot
// just past the visible pixels, so writes through it are invisible and a read
// returns whatever the last out-of-range write stored there.

use crate::Result;
use crate::config::{Wiring, validate_dimensions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMapper {
    width: usize,
    height: usize,
    wiring: Wiring,
}

impl CoordinateMapper {
    pub fn new(width: usize, height: usize, wiring: Wiring) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            wiring,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn wiring(&self) -> Wiring {
        self.wiring
    }

    /// Number of visible pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Index of the shared guard slot, one past the last visible pixel.
    #[must_use]
    pub fn guard_index(&self) -> usize {
        self.pixel_count()
    }

    /// Frame buffer length: every visible pixel plus the guard slot.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() + 1
    }

    /// LED index of `(x, y)`. Inputs must already be in range.
    #[inline]
    #[must_use]
    pub fn map(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside panel");
        let row_start = y * self.width;
        match self.wiring {
            Wiring::Serpentine if y % 2 == 1 => row_start + (self.width - 1 - x),
            Wiring::Serpentine | Wiring::RowMajor => row_start + x,
        }
    }

    /// Like [`map`](Self::map), but any out-of-range coordinate yields [`guard_index`](Self::guard_index).
    #[inline]
    #[must_use]
    pub fn map_safe(&self, x: isize, y: isize) -> usize {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => self.map(x, y),
            _ => self.guard_index(),
        }
    }
}
