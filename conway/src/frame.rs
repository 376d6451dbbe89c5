// frame.rs - Full-panel frame buffer in LED chain order

use core::ops::Deref;

use smart_leds::RGB8;

use crate::grid::WorldGrid;
use crate::mapper::CoordinateMapper;
use crate::palette::Palette;

/// One color per LED, indexed the way the chain is wired, plus a trailing guard slot.
///
/// Dereferences to the visible pixels only; the guard slot is reachable solely
/// through out-of-range [`set_xy`](Frame::set_xy) / [`get_xy`](Frame::get_xy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    mapper: CoordinateMapper,
    pixels: Vec<RGB8>,
}

impl Frame {
    /// Creates an all-black frame for the panel described by `mapper`.
    #[must_use]
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self {
            mapper,
            pixels: vec![RGB8::default(); mapper.buffer_len()],
        }
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Visible pixels in chain order.
    #[must_use]
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels[..self.mapper.pixel_count()]
    }

    /// Writes the color at `(x, y)`. Out-of-range writes land in the guard slot.
    pub fn set_xy(&mut self, x: isize, y: isize, color: RGB8) {
        let index = self.mapper.map_safe(x, y);
        self.pixels[index] = color;
    }

    /// Reads the color at `(x, y)`. Out-of-range reads return the guard slot.
    #[must_use]
    pub fn get_xy(&self, x: isize, y: isize) -> RGB8 {
        self.pixels[self.mapper.map_safe(x, y)]
    }

    /// Paints every cell of `grid` through `palette`.
    ///
    /// Panics if `grid` and the frame describe different panel sizes.
    pub fn render(&mut self, grid: &WorldGrid, palette: &Palette) {
        assert!(
            grid.width() == self.mapper.width() && grid.height() == self.mapper.height(),
            "grid is {}x{}, frame is {}x{}",
            grid.width(),
            grid.height(),
            self.mapper.width(),
            self.mapper.height()
        );
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                self.pixels[self.mapper.map(x, y)] = palette.color(grid.age(x, y));
            }
        }
    }
}

impl Deref for Frame {
    type Target = [RGB8];

    fn deref(&self) -> &Self::Target {
        self.pixels()
    }
}
