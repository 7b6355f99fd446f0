//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`Grid`] holds one generation and produces the next through
//! [`Grid::advance`]; [`Renderer`] turns a grid into a text block of
//! `height` lines with `width` glyphs each.
//!
//! ```
//! use torus_life::{Coordinates, Grid, Renderer};
//!
//! let mut grid = Grid::new(5, 5)?;
//! grid.set_alive([Coordinates::new(1, 2), Coordinates::new(2, 2), Coordinates::new(3, 2)])?;
//! let next = grid.advance();
//! assert_eq!(
//!     Renderer::default().format(&next),
//!     ".....\n..x..\n..x..\n..x..\n.....\n"
//! );
//! # Ok::<(), torus_life::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod renderer;

pub use error::GridError;
pub use grid::{Coordinates, Generation, Grid, State};
pub use history::History;
pub use patterns::Pattern;
pub use renderer::{Glyphs, Renderer};
