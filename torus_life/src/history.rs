// history.rs - Repeat detection over the last few generations

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

pub const DEFAULT_WINDOW: usize = 10;

/// Ring buffer of recent cell-layout hashes.
///
/// Only the cells and dimensions are hashed, not the generation number, so a
/// still life or an oscillator with period up to the window size is caught.
#[derive(Debug, Clone)]
pub struct History {
    hashes: Vec<u64>,
    window: usize,
    count: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl History {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            hashes: Vec::with_capacity(window),
            window,
            count: 0,
        }
    }

    /// Returns true if this layout was seen within the window; otherwise
    /// records it, evicting the oldest entry once full.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = layout_hash(grid);
        if self.hashes.contains(&hash) {
            return true;
        }

        if self.hashes.len() < self.window {
            self.hashes.push(hash);
        } else {
            self.hashes[self.count % self.window] = hash;
        }
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
        self.count = 0;
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

fn layout_hash(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.width().hash(&mut hasher);
    grid.height().hash(&mut hasher);
    for row in grid.rows() {
        row.hash(&mut hasher);
    }
    hasher.finish()
}
