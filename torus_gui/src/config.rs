// config.rs - Field size and display settings for the desktop driver

use std::ops::RangeInclusive;
use std::time::Duration;

use egui::Color32;

pub const GRID_WIDTH: usize = 50;                       // Playing field columns
pub const GRID_HEIGHT: usize = 50;                      // Playing field rows

pub const CELL_SIZE: f32 = 15.0;                        // Cell edge in points
pub const CELL_SPACING: f32 = 0.5;                      // Gap between cells
pub const CELL_ROUNDING: f32 = 1.0;
pub const CELL_OUTLINE_WIDTH: f32 = 0.2;
pub const CELL_OUTLINE_GRAY: u8 = 60;
pub const FIELD_BACKGROUND: Color32 = Color32::BLACK;

pub const UPDATE_INTERVAL: Duration = Duration::from_millis(200);
pub const SPEED_RANGE: RangeInclusive<f32> = 0.5..=90.0;  // Generations per second

pub const LIVE_COLOR: Color32 = Color32::from_rgb(0, 200, 0);
pub const DEAD_COLOR: Color32 = Color32::from_rgb(40, 40, 40);

pub const WINDOW_TITLE: &str = "Toroidal Game of Life";
pub const WINDOW_SIZE: [f32; 2] = [800.0, 950.0];
pub const HELP_LINES: [&str; 2] = [
    "Edges wrap around: the field is a torus.",
    "Click cells while paused to toggle them; Step advances one generation.",
];
