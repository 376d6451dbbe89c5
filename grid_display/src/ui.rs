// ui.rs - Draws the latched LED frame and the run controls

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::GridDisplay;

impl eframe::App for GridDisplay {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let delay = self.sim.config().generation_delay;
        if self.is_running && self.last_update.elapsed() >= delay {
            self.advance();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Run" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.advance();
                }

                ui.separator();

                let state = self.sim.state();
                ui.label(format!("Generation: {}", state.stats.generation));
                ui.label(format!("Alive: {}", state.stats.cells_alive));
                ui.label(format!("Repeats: {}", state.stagnation.streak));
            });

            ui.separator();

            let config = self.sim.config();
            let mapper = *self.sink.mapper();
            let box_size = self.led_size;
            let spacing = box_size * 0.15;
            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * config.width() as f32 - spacing,
                (box_size + spacing) * config.height() as f32 - spacing,
            );

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            // Read each LED back through the wiring so the window shows the physical layout.
            let pixels = self.sink.pixels();
            for y in 0..config.height() {
                for x in 0..config.width() {
                    let pixel = pixels[mapper.map(x, y)];
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * (box_size + spacing),
                            start_pos.y + y as f32 * (box_size + spacing),
                        ),
                        Vec2::splat(box_size),
                    );
                    painter.rect_filled(rect, box_size * 0.5, Color32::from_rgb(pixel.r, pixel.g, pixel.b));
                    painter.rect_stroke(rect, box_size * 0.5, Stroke::new(0.5, Color32::from_gray(40)));
                }
            }

            ui.separator();
            ui.label(format!(
                "{}x{} panel, {:?} wiring, brightness {}",
                config.width(),
                config.height(),
                mapper.wiring(),
                config.brightness
            ));
        });

        if self.is_running {
            ctx.request_repaint_after(delay.saturating_sub(self.last_update.elapsed()));
        }
    }
}
