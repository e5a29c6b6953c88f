//! Named seed patterns.
//!
//! Classic still lifes, oscillators, and ships that can be stamped onto a
//! grid as a starting population. Cells are (x, y) offsets from the
//! pattern's top-left corner.

use crate::grid::Grid;
use crate::types::CellState;

/// A named cell pattern
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Bounding box of the pattern as (width, height)
    pub fn size(&self) -> (i32, i32) {
        let mut width = 0;
        let mut height = 0;
        for &(x, y) in self.cells {
            width = width.max(x + 1);
            height = height.max(y + 1);
        }
        (width, height)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (0, 0), (1, 0), (0, 1), (1, 1),
            (2, 2), (3, 2), (2, 3), (3, 3),
        ],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5),
            (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
            (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Look up a pattern by name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Stamp a pattern onto the grid, centered.
///
/// Cells falling outside the grid are clipped. The existing population is
/// left in place; callers wanting a clean board clear it first.
pub fn stamp(grid: &mut Grid, pattern: &Pattern) {
    let (width, height) = pattern.size();
    let offset_x = (grid.columns() - width) / 2;
    let offset_y = (grid.rows() - height) / 2;
    for &(x, y) in pattern.cells {
        grid.set(offset_x + x, offset_y + y, CellState::Alive);
    }
}
