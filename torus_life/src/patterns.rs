use crate::error::GridError;
use crate::grid::{Coordinates, Grid};

/// A named seed layout. Cells are `(col, row)` offsets from the pattern's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
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
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (35, 2), (34, 3), (35, 3),
        ],
    },
];

impl Pattern {
    /// Bounding box as `(width, height)`.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(col, row)| (w.max(col + 1), h.max(row + 1)))
    }

    /// Seeds the pattern with its top-left at `origin`. Cells running past an
    /// edge wrap around to the opposite one.
    pub fn place(&self, grid: &mut Grid, origin: Coordinates) -> Result<(), GridError> {
        grid.get_state(origin)?;
        let cells: Vec<Coordinates> = self
            .cells
            .iter()
            .map(|&(col, row)| grid.wrap_offset(origin, col as isize, row as isize))
            .collect();
        grid.set_alive(cells)
    }

    /// Seeds the pattern in the middle of the grid.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (w, h) = self.bounds();
        let origin = Coordinates::new(
            grid.width().saturating_sub(w) / 2,
            grid.height().saturating_sub(h) / 2,
        );
        self.place(grid, origin)
    }
}

/// Looks a pattern up by name, ignoring case, spaces and dashes.
pub fn find(name: &str) -> Result<&'static Pattern, GridError> {
    let key = normalize(name);
    PATTERNS
        .iter()
        .find(|pattern| normalize(pattern.name) == key)
        .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
