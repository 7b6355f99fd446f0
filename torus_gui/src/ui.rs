// ui.rs - egui front end: controls, clickable field and statistics

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use torus_life::Coordinates;
use torus_life::patterns::PATTERNS;
use tracing::warn;

use crate::config;
use crate::{GameOfLife, GameOfLifeInterface};

/// Distance between the top-left corners of neighboring cells.
const PITCH: f32 = config::CELL_SIZE + config::CELL_SPACING;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(config::WINDOW_TITLE);
            self.control_bar(ui);
            ui.separator();
            self.speed_and_colors(ui);
            ui.separator();
            for line in config::HELP_LINES {
                ui.label(line);
            }
            ui.separator();
            self.field(ui);
            ui.separator();
            self.statistics(ui);
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl GameOfLife {
    fn control_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let run_label = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(run_label).clicked() {
                self.is_running = !self.is_running;
                self.last_update = Instant::now();
            }
            if ui.button("⏭ Step").clicked() {
                self.is_running = false;
                self.update_generation();
            }
            if ui.button("⏹ Clear").clicked() {
                self.is_running = false;
                self.clear_grid();
            }
            if ui.button("🎲 Random").clicked() {
                self.is_running = false;
                self.apply_random_pattern();
            }

            ui.separator();

            let current = PATTERNS.get(self.selected_pattern).map_or("", |p| p.name);
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (index, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, index, pattern.name);
                    }
                });
            if ui.button("Seed").clicked() {
                self.is_running = false;
                if let Err(err) = self.apply_selected_pattern() {
                    warn!(%err, "Could not seed pattern");
                }
            }

            ui.separator();
            ui.label(format!("Gen {}", self.grid.generation()));
        });
    }

    fn speed_and_colors(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut per_second = 1.0 / self.update_interval.as_secs_f32().max(0.001);
            let slider = egui::Slider::new(&mut per_second, config::SPEED_RANGE)
                .text("gen/sec")
                .logarithmic(true);
            if ui.add(slider).changed() {
                self.update_interval = Duration::from_secs_f32(1.0 / per_second);
            }

            ui.separator();
            for (label, color) in [("Alive", &mut self.live_color), ("Dead", &mut self.dead_color)] {
                ui.label(label);
                ui.color_edit_button_srgba(color);
            }
        });
    }

    /// Paints every cell and toggles the one under a click while paused.
    fn field(&mut self, ui: &mut egui::Ui) {
        let (cols, rows) = (self.grid.width(), self.grid.height());
        let size = Vec2::new(
            PITCH * cols as f32 - config::CELL_SPACING,
            PITCH * rows as f32 - config::CELL_SPACING,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, config::FIELD_BACKGROUND);
        let outline = Stroke::new(
            config::CELL_OUTLINE_WIDTH,
            Color32::from_gray(config::CELL_OUTLINE_GRAY),
        );

        for (coor, state) in self.grid.coordinates().zip(self.grid.rows().flatten()) {
            let rect = cell_rect(origin, coor);
            let fill = if state.is_alive() { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, config::CELL_ROUNDING, fill);
            painter.rect_stroke(rect, config::CELL_ROUNDING, outline);
        }

        if self.is_running || !response.clicked() {
            return;
        }
        if let Some(coor) = response
            .interact_pointer_pos()
            .and_then(|pos| cell_at(origin, pos, cols, rows))
        {
            self.toggle_clicked(coor);
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let alive = self.grid.population();
        let total = self.grid.cell_count();
        ui.horizontal(|ui| {
            ui.label(format!("Alive: {alive}"));
            ui.label(format!("Dead: {}", total - alive));
            ui.label(format!("Density: {:.1}%", alive as f32 * 100.0 / total as f32));
        });
    }
}

fn cell_rect(origin: Pos2, coor: Coordinates) -> Rect {
    let min = origin + Vec2::new(coor.col as f32 * PITCH, coor.row as f32 * PITCH);
    Rect::from_min_size(min, Vec2::splat(config::CELL_SIZE))
}

/// Cell under `pos`, or `None` outside the field or in the gap between cells.
fn cell_at(origin: Pos2, pos: Pos2, cols: usize, rows: usize) -> Option<Coordinates> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let coor = Coordinates::new((offset.x / PITCH) as usize, (offset.y / PITCH) as usize);
    let inside = coor.col < cols && coor.row < rows && cell_rect(origin, coor).contains(pos);
    inside.then_some(coor)
}
