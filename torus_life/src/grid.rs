// grid.rs - Toroidal grid for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::error::GridError;
use crate::renderer::Renderer;

/// Generation counter; 0 for a freshly built grid.
pub type Generation = u64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Alive,
    #[default]
    Dead,
}

impl State {
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }

    pub fn toggled(self) -> State {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

/// A cell position; valid range is `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    pub col: usize,
    pub row: usize,
}

impl Coordinates {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

// Moore neighborhood as (dcol, drow): NW, N, NE, W, E, SW, S, SE
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Maps `value` into `[0, base)`, wrapping negatives around from the top.
/// `%` truncates toward zero, so `-1 % 5 == -1`; `rem_euclid` gives 4.
pub(crate) fn wrap(value: isize, base: usize) -> usize {
    debug_assert!(base > 0, "wrap base must be non-zero");
    value.rem_euclid(base as isize) as usize
}

/// B3/S23 transition for one cell given its live neighbor count.
fn next_state(current: State, live: usize) -> State {
    match (current, live) {
        (State::Alive, 2) | (State::Alive, 3) => State::Alive, // Survival
        (State::Dead, 3)                      => State::Alive, // Birth
        _                                     => State::Dead,  // Death or stays dead
    }
}

/// Fixed-size W x H toroidal grid stored densely in row-major order.
///
/// Seeding mutates in place; [`Grid::advance`] never does and instead
/// returns the next generation as a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<State>,
    generation: Generation,
}

impl Grid {
    /// Builds an all-dead grid. Zero-sized grids are rejected since
    /// wraparound is undefined modulo zero; grids whose cells cannot be
    /// allocated fail with `TooLarge` instead of aborting.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::TooLarge { width, height })?;
        cells.resize(len, State::Dead);

        Ok(Self {
            width,
            height,
            cells,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of cells, `width * height`; never zero.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, coor: Coordinates) -> Result<usize, GridError> {
        if coor.col >= self.width || coor.row >= self.height {
            return Err(GridError::OutOfBounds {
                col: coor.col,
                row: coor.row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(coor.row * self.width + coor.col)
    }

    pub fn set_alive<I>(&mut self, coords: I) -> Result<(), GridError>
    where
        I: IntoIterator,
        I::Item: Into<Coordinates>,
    {
        self.set_state(coords, State::Alive)
    }

    pub fn set_dead<I>(&mut self, coords: I) -> Result<(), GridError>
    where
        I: IntoIterator,
        I::Item: Into<Coordinates>,
    {
        self.set_state(coords, State::Dead)
    }

    /// Sets every listed cell to `state`.
    ///
    /// The whole batch is validated first: if any coordinate is out of
    /// range nothing is written and `OutOfBounds` names the first offender.
    pub fn set_state<I>(&mut self, coords: I, state: State) -> Result<(), GridError>
    where
        I: IntoIterator,
        I::Item: Into<Coordinates>,
    {
        let indices = coords
            .into_iter()
            .map(|coor| self.index(coor.into()))
            .collect::<Result<Vec<_>, _>>()?;

        for &index in &indices {
            self.cells[index] = state;
        }
        debug!(count = indices.len(), ?state, "seeded cells");
        Ok(())
    }

    pub fn get_state(&self, coor: Coordinates) -> Result<State, GridError> {
        self.index(coor).map(|index| self.cells[index])
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, coor: Coordinates) -> Result<State, GridError> {
        let index = self.index(coor)?;
        self.cells[index] = self.cells[index].toggled();
        Ok(self.cells[index])
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.cells.fill(State::Dead);
        self.generation = 0;
    }

    /// Refills the grid pseudo-randomly (about one cell in three alive) and
    /// restarts the generation count. Same seed, same layout.
    pub fn randomize(&mut self, seed: u64) {
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        let mut state = hasher.finish();

        for cell in &mut self.cells {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            *cell = if (state >> 16) % 3 == 0 { State::Alive } else { State::Dead };
        }
        self.generation = 0;
        debug!(seed, population = self.population(), "randomized grid");
    }

    /// `origin` shifted by `(dcol, drow)` and wrapped onto the torus.
    pub fn wrap_offset(&self, origin: Coordinates, dcol: isize, drow: isize) -> Coordinates {
        Coordinates::new(
            wrap(origin.col as isize + dcol, self.width),
            wrap(origin.row as isize + drow, self.height),
        )
    }

    /// The 8 Moore neighbors of `coor` in NW, N, NE, W, E, SW, S, SE order,
    /// wrapping around both edges.
    pub fn neighbors(&self, coor: Coordinates) -> Result<[Coordinates; 8], GridError> {
        self.index(coor)?;
        Ok(NEIGHBOR_OFFSETS.map(|(dcol, drow)| self.wrap_offset(coor, dcol, drow)))
    }

    pub fn live_neighbors(&self, coor: Coordinates) -> Result<usize, GridError> {
        self.index(coor)?;
        Ok(self.count_live(coor))
    }

    // Caller guarantees `coor` is in range; wrapped neighbors always are.
    fn count_live(&self, coor: Coordinates) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dcol, drow)| self.wrap_offset(coor, dcol, drow))
            .filter(|n| self.cells[n.row * self.width + n.col].is_alive())
            .count()
    }

    /// Next generation under B3/S23. Every cell is computed from `self`
    /// only, so the update is simultaneous.
    pub fn advance(&self) -> Grid {
        self.advance_with(|_, _, _| {})
    }

    /// Like [`Grid::advance`], and calls `on_change` once per cell whose
    /// state differs between the two generations, in row-major order, with
    /// the new state and the new generation number.
    pub fn advance_with<F>(&self, mut on_change: F) -> Grid
    where
        F: FnMut(Coordinates, State, Generation),
    {
        let generation = self.generation + 1;
        let mut cells = Vec::with_capacity(self.cells.len());

        for (coor, &current) in self.coordinates().zip(&self.cells) {
            let state = next_state(current, self.count_live(coor));
            if state != current {
                on_change(coor, state, generation);
            }
            cells.push(state);
        }

        let next = Grid {
            width: self.width,
            height: self.height,
            cells,
            generation,
        };
        trace!(generation, population = next.population(), "advanced grid");
        next
    }

    /// Every valid coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinates> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Coordinates::new(col, row)))
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> {
        self.cells.chunks(self.width)
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.coordinates()
            .zip(&self.cells)
            .filter(|(_, state)| state.is_alive())
            .map(|(coor, _)| coor)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().format(self))
    }
}
