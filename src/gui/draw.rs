use super::{App, Config};
use crate::{Coord, NiceInt, PATTERNS};
use eframe::egui::{
    vec2, Button, CentralPanel, Color32, Context, Frame, Margin, Rect, RichText, Sense, SidePanel,
    Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let can_retreat = self.history.generation_index() > 0;
            if ui
                .add_enabled(can_retreat, Self::new_button("Previous"))
                .clicked()
            {
                self.step_back();
            }

            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.add(Self::new_button(text)).clicked() {
                self.toggle_pause();
            }

            let can_advance = !self.history.current().is_empty();
            if ui
                .add_enabled(can_advance, Self::new_button("Next"))
                .clicked()
            {
                self.step_forward();
            }
        });

        if ui.add(Self::new_button("Clear")).clicked() {
            self.clear();
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Tick: "));
            ui.add(
                Slider::new(&mut self.tick_interval_ms, 10.0..=2000.0)
                    .logarithmic(true)
                    .suffix(" ms"),
            );
        });
    }

    fn draw_pattern_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text("Patterns:"));
        ui.horizontal_wrapped(|ui| {
            for pattern in PATTERNS {
                if ui.add(Self::new_button(pattern.name)).clicked() {
                    self.load_pattern(pattern);
                }
            }
        });

        if ui.add(Self::new_button("Random soup")).clicked() {
            self.load_random_soup();
        }

        if let Some(err) = &self.load_error {
            ui.label(RichText::new(err).color(Color32::DARK_RED));
        }
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Cell size: "));
            ui.add(Slider::new(
                &mut self.viewport.cell_size,
                Config::MIN_CELL_SIZE..=Config::MAX_CELL_SIZE,
            ));
        });

        if ui.add(Self::new_button("Reset config")).clicked() {
            self.reset_config();
        }
    }

    fn draw_stats(&self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            NiceInt::from_usize(self.history.generation_index())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            NiceInt::from_usize(self.history.population())
        )));
        ui.label(Self::new_text(&format!(
            "Stored generations: {}",
            NiceInt::from_usize(self.history.len())
        )));
        ui.label(Self::new_text(&format!(
            "Last update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
        if let Some(cell) = self.hovered_cell {
            ui.label(Self::new_text(&format!("Cell: ({}, {})", cell.x, cell.y)));
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let (width, height) = (rect.width() as f64, rect.height() as f64);

        if self.center_pending {
            if let Some(bounds) = self.history.current().bounding_box() {
                self.viewport.center_on(bounds.center(), width, height);
            }
            self.center_pending = false;
        }

        let visible = self.viewport.visible_cells(width, height);
        let cell_size = self.viewport.cell_size as f32;

        if self.viewport.cell_size >= Config::GRID_LINES_MIN_CELL_SIZE {
            let stroke = Stroke::new(1., Config::GRID_LINE_COLOR);
            for x in visible.min.x..=visible.max.x {
                let (sx, _) = self.viewport.cell_origin(Coord::new(x, 0));
                painter.vline(rect.left() + sx as f32, rect.y_range(), stroke);
            }
            for y in visible.min.y..=visible.max.y {
                let (_, sy) = self.viewport.cell_origin(Coord::new(0, y));
                painter.hline(rect.x_range(), rect.top() + sy as f32, stroke);
            }
        }

        for cell in self.history.current().live_coordinates() {
            if !visible.contains(cell) {
                continue;
            }
            let (x, y) = self.viewport.cell_origin(cell);
            let min = rect.left_top() + vec2(x as f32, y as f32);
            painter.rect_filled(
                Rect::from_min_size(min, Vec2::splat(cell_size)),
                0.,
                Config::CELL_COLOR,
            );
        }

        self.life_rect.replace(rect);
    }

    pub fn draw(&mut self, ctx: &Context) {
        SidePanel::left("controls")
            .exact_width(Config::CONTROL_PANEL_WIDTH)
            .resizable(false)
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.group(|ui| {
                        ui.vertical(|ui| self.draw_simulation_controls(ui));
                    });
                    ui.add_space(Config::WIDGET_GAP);
                    ui.group(|ui| {
                        ui.vertical(|ui| self.draw_pattern_controls(ui));
                    });
                    ui.add_space(Config::WIDGET_GAP);
                    ui.group(|ui| {
                        ui.vertical(|ui| self.draw_appearance_controls(ui));
                    });
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_stats(ui);
                });
            });

        CentralPanel::default()
            .frame(Frame::default().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}
