// engine.rs - Birth/survival rule and per-generation statistics

use crate::grid::{Age, WorldGrid};
use crate::neighbours::count_neighbours;

/// Counters updated by every [`GenerationEngine::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of steps since the last seeding.
    pub generation: u64,
    /// Cells with age > 0 after the latest step.
    pub cells_alive: usize,
    /// Cells whose age came out of the latest step identical to what went in.
    ///
    /// Despite the name this counts cells that did *not* change. Stagnation
    /// only compares it against the previous step's value, so a steady count
    /// still signals a settled world.
    pub changed_count: usize,
    /// `changed_count` from the step before.
    pub previous_changed_count: usize,
}

impl GenerationStats {
    /// Whether the latest two steps produced the same comparison count.
    #[must_use]
    pub fn changed_count_repeated(&self) -> bool {
        self.changed_count == self.previous_changed_count
    }
}

/// Applies Conway's B3/S23 rule to a whole grid at once.
///
/// Keeps a scratch buffer between steps so a run does not allocate per generation.
#[derive(Debug, Default)]
pub struct GenerationEngine {
    next: Vec<Age>,
}

/// Age of a cell after one step, given its current age and live neighbour count.
///
/// Survivors age by one (saturating at [`Age::MAX`]); births start at 1.
#[inline]
#[must_use]
pub fn next_age(age: Age, live_neighbours: u8) -> Age {
    match (age > 0, live_neighbours) {
        (true, 2) | (true, 3) => age.saturating_add(1), // Survival
        (false, 3) => 1,                                // Birth
        _ => 0,                                         // Death or stays dead
    }
}

impl GenerationEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances `grid` by one generation and refreshes `stats`.
    ///
    /// Every cell is judged against the grid as it was before the call; the
    /// new generation replaces the old one in a single swap at the end.
    pub fn step(&mut self, grid: &mut WorldGrid, stats: &mut GenerationStats) {
        self.next.clear();
        self.next.reserve(grid.len());

        let mut cells_alive = 0;
        let mut unchanged = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let age = grid.age(x, y);
                let next = next_age(age, count_neighbours(grid, x, y));
                if next == age {
                    unchanged += 1;
                }
                if next > 0 {
                    cells_alive += 1;
                }
                self.next.push(next);
            }
        }

        grid.swap_generation(&mut self.next);

        stats.generation = stats.generation.saturating_add(1);
        stats.cells_alive = cells_alive;
        stats.previous_changed_count = stats.changed_count;
        stats.changed_count = unchanged;
    }
}
