// patterns.rs - Named seed patterns for the world grid

use crate::grid::WorldGrid;

/// A set of live cells given as `(x, y)` offsets from the pattern's top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLOCK,
    BLINKER,
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Looks up a pattern by name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    #[must_use]
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(width, height), &(x, y)| {
            (width.max(x + 1), height.max(y + 1))
        })
    }
}

/// Clears the grid, then sets the pattern's cells alive (age 1) with its corner at
/// `(origin_x, origin_y)`. Cells past an edge wrap around.
pub fn apply_pattern(grid: &mut WorldGrid, pattern: &Pattern, origin_x: usize, origin_y: usize) {
    grid.clear();
    for &(dx, dy) in pattern.cells {
        let x = (origin_x + dx) % grid.width();
        let y = (origin_y + dy) % grid.height();
        grid.set(x, y, 1);
    }
}

/// Places the pattern so its bounding box is centered on the grid.
pub fn apply_centered(grid: &mut WorldGrid, pattern: &Pattern) {
    let (width, height) = pattern.extent();
    let origin_x = grid.width().saturating_sub(width) / 2;
    let origin_y = grid.height().saturating_sub(height) / 2;
    apply_pattern(grid, pattern, origin_x, origin_y);
}
