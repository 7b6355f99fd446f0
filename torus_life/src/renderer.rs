// renderer.rs - Text rendering of a grid, one line per row

use crate::error::GridError;
use crate::grid::{Grid, State};

/// The two characters used to draw cells. Classic convention is `x` / `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    alive: char,
    dead: char,
}

impl Glyphs {
    pub const CLASSIC: Glyphs = Glyphs { alive: 'x', dead: '.' };

    pub fn new(alive: char, dead: char) -> Result<Self, GridError> {
        if alive == dead {
            return Err(GridError::AmbiguousGlyphs(alive));
        }
        Ok(Self { alive, dead })
    }

    pub fn alive(&self) -> char {
        self.alive
    }

    pub fn dead(&self) -> char {
        self.dead
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Stateless formatter: H lines of exactly W glyphs, each ending in `\n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    pub fn glyph(&self, state: State) -> char {
        match state {
            State::Alive => self.glyphs.alive,
            State::Dead => self.glyphs.dead,
        }
    }

    /// One row without the trailing line break.
    pub fn format_row(&self, row: &[State]) -> String {
        row.iter().map(|&state| self.glyph(state)).collect()
    }

    pub fn format(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for row in grid.rows() {
            out.extend(row.iter().map(|&state| self.glyph(state)));
            out.push('\n');
        }
        out
    }
}
