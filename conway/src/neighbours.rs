// neighbours.rs - Live neighbour counting with toroidal wraparound

use crate::grid::WorldGrid;

#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Counts live cells among the 8 neighbours of `(x, y)`, wrapping both axes.
///
/// Column 0's left neighbour is column `width - 1`, row 0's upper neighbour is
/// row `height - 1`, and so on. On grids narrower than 3 the same cell can be
/// counted more than once, but the result is always in `0..=8`.
#[must_use]
pub fn count_neighbours(grid: &WorldGrid, x: usize, y: usize) -> u8 {
    let width = grid.width() as isize;
    let height = grid.height() as isize;
    let mut count = 0;
    for (dx, dy) in OFFSETS {
        let nx = (x as isize + dx).rem_euclid(width) as usize;
        let ny = (y as isize + dy).rem_euclid(height) as usize;
        if grid.is_alive(nx, ny) {
            count += 1;
        }
    }
    count
}
