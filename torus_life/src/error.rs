// error.rs - Error type shared by the grid, renderer and pattern modules

/// Everything that can go wrong when building, seeding or rendering a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("coordinates ({col}, {row}) are outside the {width}x{height} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid grid dimensions {width}x{height}: both sides must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("a {width}x{height} grid is too large to allocate")]
    TooLarge { width: usize, height: usize },

    #[error("alive and dead glyphs must differ, both are {0:?}")]
    AmbiguousGlyphs(char),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
