// main.rs - Terminal Game of Life on a toroidal field
// Draws the initial field, then redraws changed cells once per tick.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::MissedTickBehavior;
use torus_life::patterns::{self, PATTERNS};
use torus_life::{Coordinates, Glyphs, Grid, History, Renderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
mod screen;

use args::Args;
use screen::Screen;

/// Top-left corner for seeded patterns unless `--center` is given.
const SEED_ORIGIN: Coordinates = Coordinates::new(1, 1);

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "torus_life=info,torus_term=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so the field on stdout stays intact.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.list_patterns {
        for pattern in PATTERNS {
            println!("{}", pattern.name);
        }
        return Ok(());
    }

    let grid = seeded_grid(&args)?;
    let glyphs = Glyphs::new(args.alive, args.dead).context("invalid glyphs")?;

    info!(
        width = grid.width(),
        height = grid.height(),
        pattern = %args.pattern,
        population = grid.population(),
        "Starting simulation"
    );

    let stdout = io::stdout();
    let mut screen = Screen::new(BufWriter::new(stdout.lock()), Renderer::new(glyphs));
    let last = run(grid, &mut screen, &args).await?;
    screen.park(&last).context("failed to write to the terminal")?;

    info!(
        generation = last.generation(),
        population = last.population(),
        "Simulation stopped"
    );
    Ok(())
}

fn seeded_grid(args: &Args) -> Result<Grid> {
    let (width, height) = args.dimensions();
    let mut grid = Grid::new(width, height).context("cannot build the field")?;

    if args.is_random() {
        grid.randomize(args.seed);
        return Ok(grid);
    }

    let pattern = patterns::find(&args.pattern)
        .with_context(|| format!("try one of: random, {}", pattern_names()))?;
    let placed = if args.center {
        pattern.place_centered(&mut grid)
    } else {
        pattern.place(&mut grid, SEED_ORIGIN)
    };
    placed.with_context(|| format!("cannot place {} on a {width}x{height} field", pattern.name))?;

    Ok(grid)
}

fn pattern_names() -> String {
    PATTERNS
        .iter()
        .map(|pattern| pattern.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render, advance, wait; until Ctrl-C, the generation limit or a repeat.
async fn run<W: Write>(mut grid: Grid, screen: &mut Screen<W>, args: &Args) -> Result<Grid> {
    let mut history = History::default();
    history.observe(&grid);

    screen.clear()?;
    screen.draw_full(&grid)?;
    screen.draw_status(&grid)?;

    let mut ticker = tokio::time::interval(args.delay());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        if args.generations.is_some_and(|limit| grid.generation() >= limit) {
            info!(generation = grid.generation(), "Generation limit reached");
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            signal = &mut ctrl_c => {
                signal.context("failed to listen for Ctrl-C")?;
                info!(generation = grid.generation(), "Interrupted");
                break;
            }
        }

        grid = screen
            .step(&grid, args.full_redraw)
            .context("failed to write to the terminal")?;

        if history.observe(&grid) && args.stop_on_cycle {
            info!(generation = grid.generation(), "Field repeats a recent layout");
            break;
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("torus-term").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn default_log_filter_parses() {
        assert!(DEFAULT_LOG_FILTER.starts_with("torus_life=info,"));
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn default_seed_is_glider_at_one_one() {
        let grid = seeded_grid(&args(&[])).unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(
            alive,
            [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)].map(|(c, r)| Coordinates::new(c, r))
        );
    }

    #[test]
    fn unknown_pattern_lists_choices() {
        let err = seeded_grid(&args(&["-p", "spaceship"])).unwrap_err();
        assert!(format!("{err:#}").contains("Gosper Glider Gun"));
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(seeded_grid(&args(&["--width", "0"])).is_err());
    }

    #[test]
    fn oversized_field_is_an_error() {
        let err = seeded_grid(&args(&["-S", "3000000000"])).unwrap_err();
        assert!(format!("{err:#}").contains("too large"));
    }

    #[test]
    fn random_seed_is_reproducible() {
        let a = seeded_grid(&args(&["-p", "random", "--seed", "3"])).unwrap();
        let b = seeded_grid(&args(&["-p", "random", "--seed", "3"])).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_generation_limit() {
        let args = args(&["-S", "6", "-p", "blinker", "-g", "3", "-d", "10"]);
        let grid = seeded_grid(&args).unwrap();
        let mut screen = Screen::new(Vec::new(), Renderer::default());

        let last = run(grid, &mut screen, &args).await.unwrap();
        assert_eq!(last.generation(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_on_cycle() {
        let args = args(&["-S", "6", "-p", "blinker", "--stop-on-cycle", "-d", "10"]);
        let grid = seeded_grid(&args).unwrap();
        let mut screen = Screen::new(Vec::new(), Renderer::default());

        let last = run(grid, &mut screen, &args).await.unwrap();
        assert_eq!(last.generation(), 2);
    }
}
