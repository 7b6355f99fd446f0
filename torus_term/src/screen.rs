// screen.rs - ANSI drawing of a grid onto a terminal-like writer

use std::io::{self, Write};

use torus_life::{Coordinates, Grid, Renderer, State};

/// Draws grids through ANSI escape sequences. Rows and columns on the
/// terminal are 1-based; grid coordinates are shifted accordingly.
pub struct Screen<W: Write> {
    out: W,
    renderer: Renderer,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, renderer: Renderer) -> Self {
        Self { out, renderer }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[2J")
    }

    fn move_to(&mut self, row: usize, col: usize) -> io::Result<()> {
        write!(self.out, "\x1b[{};{}f", row + 1, col + 1)
    }

    /// Prints the whole field from the top-left corner.
    pub fn draw_full(&mut self, grid: &Grid) -> io::Result<()> {
        for (row, cells) in grid.rows().enumerate() {
            self.move_to(row, 0)?;
            self.out.write_all(self.renderer.format_row(cells).as_bytes())?;
        }
        Ok(())
    }

    /// Redraws one cell in place.
    pub fn draw_cell(&mut self, coor: Coordinates, state: State) -> io::Result<()> {
        self.move_to(coor.row, coor.col)?;
        write!(self.out, "{}", self.renderer.glyph(state))
    }

    /// Status line just below the field.
    pub fn draw_status(&mut self, grid: &Grid) -> io::Result<()> {
        self.move_to(grid.height(), 0)?;
        write!(
            self.out,
            "\x1b[2Kgeneration {} | population {}",
            grid.generation(),
            grid.population()
        )?;
        self.out.flush()
    }

    /// Leaves the cursor on a fresh line under the status line.
    pub fn park(&mut self, grid: &Grid) -> io::Result<()> {
        self.move_to(grid.height() + 1, 0)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Advances `grid`, drawing either every changed cell or the whole field.
    pub fn step(&mut self, grid: &Grid, full_redraw: bool) -> io::Result<Grid> {
        let next = if full_redraw {
            let next = grid.advance();
            self.draw_full(&next)?;
            next
        } else {
            let mut drawn = Ok(());
            let next = grid.advance_with(|coor, state, _| {
                if drawn.is_ok() {
                    drawn = self.draw_cell(coor, state);
                }
            });
            drawn?;
            next
        };
        self.draw_status(&next)?;
        Ok(next)
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
