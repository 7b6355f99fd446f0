// args.rs - Command-line options for the terminal driver

use std::time::Duration;

use clap::Parser;

/// Conway's Game of Life on a toroidal field, drawn in the terminal.
#[derive(Debug, Parser)]
#[command(name = "torus-term", version, about)]
pub struct Args {
    /// Field size, used for both sides unless --width/--height override it.
    #[arg(short = 'S', long, default_value_t = 20)]
    pub size: usize,

    /// Field width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Field height in cells.
    #[arg(long)]
    pub height: Option<usize>,

    /// Seed pattern (see --list-patterns), or `random`.
    #[arg(short, long, default_value = "glider")]
    pub pattern: String,

    /// Place the pattern in the middle of the field instead of at (1, 1).
    #[arg(long)]
    pub center: bool,

    /// Seed for the `random` pattern.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Delay between generations in milliseconds.
    #[arg(short, long = "delay-ms", default_value_t = 500)]
    pub delay_ms: u64,

    /// Stop after this many generations (runs until Ctrl-C otherwise).
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Reprint the whole field every generation instead of only the cells
    /// that changed.
    #[arg(long)]
    pub full_redraw: bool,

    /// Stop once the field repeats a recent layout.
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Glyph for live cells.
    #[arg(long, default_value_t = 'x')]
    pub alive: char,

    /// Glyph for dead cells.
    #[arg(long, default_value_t = ' ')]
    pub dead: char,

    /// Print the available pattern names and exit.
    #[arg(long)]
    pub list_patterns: bool,
}

impl Args {
    /// `(width, height)` after applying overrides.
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.width.unwrap_or(self.size),
            self.height.unwrap_or(self.size),
        )
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn is_random(&self) -> bool {
        self.pattern.eq_ignore_ascii_case("random")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["torus-term"]).unwrap();
        assert_eq!(args.dimensions(), (20, 20));
        assert_eq!(args.delay(), Duration::from_millis(500));
        assert_eq!(args.pattern, "glider");
        assert_eq!(args.generations, None);
        assert_eq!((args.alive, args.dead), ('x', ' '));
        assert!(!args.full_redraw);
        assert!(!args.is_random());
    }

    #[test]
    fn size_and_overrides() {
        let args = Args::try_parse_from(["torus-term", "-S", "8", "--height", "3"]).unwrap();
        assert_eq!(args.dimensions(), (8, 3));

        let args = Args::try_parse_from(["torus-term", "--size", "8", "--width", "30"]).unwrap();
        assert_eq!(args.dimensions(), (30, 8));
    }

    #[test]
    fn run_options() {
        let args = Args::try_parse_from([
            "torus-term", "-p", "Random", "--seed", "9", "-d", "50", "-g", "12",
            "--full-redraw", "--stop-on-cycle",
        ])
        .unwrap();
        assert!(args.is_random());
        assert_eq!(args.seed, 9);
        assert_eq!(args.delay(), Duration::from_millis(50));
        assert_eq!(args.generations, Some(12));
        assert!(args.full_redraw && args.stop_on_cycle);
    }

    #[test]
    fn rejects_bad_size() {
        assert!(Args::try_parse_from(["torus-term", "--size", "-4"]).is_err());
        assert!(Args::try_parse_from(["torus-term", "--size", "big"]).is_err());
    }
}
