// main.rs - Desktop Game of Life on a toroidal field
// The field wraps at every edge: gliders leaving on the right come back on the left.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::egui;
use egui::Color32;
use torus_life::patterns::PATTERNS;
use torus_life::{Coordinates, Grid, GridError, History, State};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config; // Field size and display settings
mod ui;     // eframe::App implementation

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "torus_life=info,torus_gui=info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let app = GameOfLife::new()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config::WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}

pub struct GameOfLife {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u64,
    history: History,
}

impl GameOfLife {
    pub fn new() -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config::GRID_WIDTH, config::GRID_HEIGHT)?,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config::UPDATE_INTERVAL,
            live_color: config::LIVE_COLOR,
            dead_color: config::DEAD_COLOR,
            selected_pattern: 0,
            random_seed: 0,
            history: History::default(),
        })
    }
}

/// Controls the UI drives the simulation through.
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self) -> Result<(), GridError>;
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, coor: Coordinates) -> Result<State, GridError>;
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        self.grid = self.grid.advance();

        if self.check_for_cycle() {
            info!(generation = self.grid.generation(), "Cycle detected, pausing");
            self.is_running = false;
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        self.history.observe(&self.grid)
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.history.clear();
    }

    fn apply_selected_pattern(&mut self) -> Result<(), GridError> {
        let pattern = PATTERNS
            .get(self.selected_pattern)
            .ok_or_else(|| GridError::UnknownPattern(self.selected_pattern.to_string()))?;

        self.clear_grid();
        pattern.place_centered(&mut self.grid)?;
        self.history.observe(&self.grid);
        info!(pattern = pattern.name, "Applied pattern");
        Ok(())
    }

    fn apply_random_pattern(&mut self) {
        self.grid.randomize(self.random_seed);
        self.random_seed = self.random_seed.wrapping_add(1);
        self.history.clear();
        self.history.observe(&self.grid);
    }

    fn toggle_cell(&mut self, coor: Coordinates) -> Result<State, GridError> {
        let state = self.grid.toggle(coor)?;
        self.history.clear();
        Ok(state)
    }
}

impl GameOfLife {
    /// Toggles a clicked cell, logging rather than failing on a stray click.
    fn toggle_clicked(&mut self, coor: Coordinates) {
        if let Err(err) = self.toggle_cell(coor) {
            warn!(%err, "Ignoring click");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GameOfLife {
        GameOfLife::new().unwrap()
    }

    #[test]
    fn default_log_filter_parses() {
        assert!(DEFAULT_LOG_FILTER.starts_with("torus_life=info,"));
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn starts_empty_and_paused() {
        let app = app();
        assert!(!app.is_running);
        assert_eq!(app.grid.population(), 0);
        assert_eq!((app.grid.width(), app.grid.height()), (config::GRID_WIDTH, config::GRID_HEIGHT));
    }

    #[test]
    fn still_life_pauses_the_run() {
        let mut app = app();
        app.grid
            .set_alive([
                Coordinates::new(10, 10),
                Coordinates::new(11, 10),
                Coordinates::new(10, 11),
                Coordinates::new(11, 11),
            ])
            .unwrap();
        app.history.observe(&app.grid);
        app.is_running = true;

        app.update_generation();
        assert!(!app.is_running);
        assert_eq!(app.grid.generation(), 1);
    }

    #[test]
    fn glider_keeps_running() {
        let mut app = app();
        app.selected_pattern = 0;
        app.apply_selected_pattern().unwrap();
        app.is_running = true;

        for _ in 0..12 {
            app.update_generation();
        }
        assert!(app.is_running);
        assert_eq!(app.grid.population(), 5);
    }

    #[test]
    fn pattern_replaces_previous_cells() {
        let mut app = app();
        app.apply_random_pattern();
        assert!(app.grid.population() > 0);

        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Pulsar").unwrap();
        app.apply_selected_pattern().unwrap();
        assert_eq!(app.grid.population(), 48);
        assert_eq!(app.grid.generation(), 0);
    }

    #[test]
    fn bad_selection_is_reported() {
        let mut app = app();
        app.selected_pattern = PATTERNS.len();
        assert!(matches!(
            app.apply_selected_pattern(),
            Err(GridError::UnknownPattern(_))
        ));
    }

    #[test]
    fn toggling_cells() {
        let mut app = app();
        let coor = Coordinates::new(3, 4);
        assert_eq!(app.toggle_cell(coor), Ok(State::Alive));
        assert_eq!(app.toggle_cell(coor), Ok(State::Dead));
        assert!(app.toggle_cell(Coordinates::new(config::GRID_WIDTH, 0)).is_err());

        app.toggle_clicked(Coordinates::new(0, config::GRID_HEIGHT));
        assert_eq!(app.grid.population(), 0);
    }

    #[test]
    fn random_patterns_differ_between_clicks() {
        let mut app = app();
        app.apply_random_pattern();
        let first = app.grid.clone();
        app.apply_random_pattern();
        assert_ne!(first, app.grid);
    }
}
