// grid.rs - Toroidal world grid of per-cell ages

use rand::Rng;

use crate::Result;
use crate::config::validate_dimensions;

/// Age of a cell: 0 is dead, otherwise the number of consecutive generations it has lived.
pub type Age = u32;

/// The `width` x `height` array of cell ages. Edges wrap on both axes.
///
/// Storage is row-major (`y * width + x`) regardless of how the panel is wired;
/// [`CoordinateMapper`](crate::mapper::CoordinateMapper) handles device order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    ages: Vec<Age>,
}

impl WorldGrid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            ages: vec![0; width * height],
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
    pub(crate) fn len(&self) -> usize {
        self.ages.len()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        y * self.width + x
    }

    /// Age of the cell at `(x, y)`. Panics if out of range.
    #[inline]
    #[must_use]
    pub fn age(&self, x: usize, y: usize) -> Age {
        self.ages[self.index(x, y)]
    }

    #[inline]
    #[must_use]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.age(x, y) > 0
    }

    /// Sets the age of the cell at `(x, y)`. Panics if out of range.
    pub fn set(&mut self, x: usize, y: usize, age: Age) {
        let index = self.index(x, y);
        self.ages[index] = age;
    }

    /// All ages in row-major order.
    #[must_use]
    pub fn ages(&self) -> &[Age] {
        &self.ages
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.ages.fill(0);
    }

    /// Number of cells with age > 0.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.ages.iter().filter(|&&age| age > 0).count()
    }

    /// Coordinates of every live cell, in row-major order.
    #[must_use]
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.ages
            .iter()
            .enumerate()
            .filter(|(_, age)| **age > 0)
            .map(|(index, _)| (index % self.width, index / self.width))
            .collect()
    }

    /// Sets each cell independently alive (age 1) or dead with probability ½.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for age in &mut self.ages {
            *age = Age::from(rng.gen_bool(0.5));
        }
    }

    /// Replaces the whole generation at once with `next`, leaving the old ages in `next`.
    ///
    /// Panics if `next` was sized for a different grid.
    pub fn swap_generation(&mut self, next: &mut Vec<Age>) {
        assert_eq!(next.len(), self.ages.len(), "next generation has the wrong size");
        std::mem::swap(&mut self.ages, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_dead() {
        let grid = WorldGrid::new(5, 3).unwrap();
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.alive_count(), 0);
        assert!(grid.alive_cells().is_empty());
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(WorldGrid::new(0, 3).is_err());
        assert!(WorldGrid::new(3, 0).is_err());
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut grid = WorldGrid::new(4, 2).unwrap();
        grid.set(3, 1, 9);
        assert_eq!(grid.age(3, 1), 9);
        assert!(grid.is_alive(3, 1));
        assert_eq!(grid.ages()[7], 9);
        assert_eq!(grid.alive_cells(), vec![(3, 1)]);
    }

    #[test]
    fn randomize_is_reproducible_and_binary() {
        let mut first = WorldGrid::new(16, 16).unwrap();
        let mut second = WorldGrid::new(16, 16).unwrap();
        first.randomize(&mut StdRng::seed_from_u64(7));
        second.randomize(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert!(first.ages().iter().all(|&age| age <= 1));
        let alive = first.alive_count();
        assert!(alive > 0 && alive < first.len(), "256 fair coin flips, got {alive} alive");
    }

    #[test]
    fn swap_generation_exchanges_buffers() {
        let mut grid = WorldGrid::new(2, 2).unwrap();
        grid.set(0, 0, 3);
        let mut next = vec![0, 1, 0, 1];
        grid.swap_generation(&mut next);
        assert_eq!(grid.ages(), &[0, 1, 0, 1]);
        assert_eq!(next, vec![3, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "wrong size")]
    fn swap_generation_rejects_mismatched_buffer() {
        let mut grid = WorldGrid::new(2, 2).unwrap();
        grid.swap_generation(&mut vec![0; 3]);
    }
}
