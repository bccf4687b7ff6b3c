use super::{Config, FpsLimiter, Viewport};
use crate::{random_soup, Coord, GenerationHistory, Pattern};
use eframe::egui::{Context, Key, PointerButton, Rect};
use std::time::Instant;
use tracing::{error, info};

pub struct App {
    pub(super) history: GenerationHistory, // Generations of the field, owned by the viewer.
    pub(super) viewport: Viewport,         // Pan offset and zoom of the canvas.
    pub(super) is_paused: bool,            // Flag indicating whether the play loop is stopped.
    pub(super) last_tick: Instant,         // Time of the last automatic advance.
    pub(super) tick_interval_ms: f64,      // Delay between automatic advances.
    pub(super) max_fps: f64,
    pub(super) last_update_duration: f64, // Duration of the last advance in seconds.
    pub(super) life_rect: Option<Rect>,   // Part of the window displaying the canvas.
    pub(super) hovered_cell: Option<Coord>,
    pub(super) center_pending: bool, // Center the view on the pattern at the next frame.
    pub(super) fps_limiter: FpsLimiter,
    pub(super) load_error: Option<String>,
}

impl App {
    pub fn new(history: GenerationHistory) -> Self {
        info!(
            generations = history.len(),
            population = history.population(),
            "viewer started"
        );
        Self {
            history,
            viewport: Viewport::default(),
            is_paused: true,
            last_tick: Instant::now(),
            tick_interval_ms: Config::TICK_INTERVAL_MS,
            max_fps: Config::MAX_FPS,
            last_update_duration: 0.,
            life_rect: None,
            hovered_cell: None,
            center_pending: true,
            fps_limiter: FpsLimiter::default(),
            load_error: None,
        }
    }

    pub fn reset_config(&mut self) {
        self.tick_interval_ms = Config::TICK_INTERVAL_MS;
        self.max_fps = Config::MAX_FPS;
        self.viewport.cell_size = Config::CELL_SIZE;
    }

    pub(super) fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        self.last_tick = Instant::now();
        info!(paused = self.is_paused, "play loop toggled");
    }

    pub(super) fn step_forward(&mut self) {
        let timer = Instant::now();
        self.history.advance();
        self.last_update_duration = timer.elapsed().as_secs_f64();
    }

    pub(super) fn step_back(&mut self) {
        self.history.retreat();
    }

    pub(super) fn clear(&mut self) {
        info!("field cleared");
        self.history.reset();
        self.load_error = None;
    }

    pub(super) fn load_pattern(&mut self, pattern: &Pattern) {
        match pattern.grid() {
            Ok(grid) => {
                info!(
                    name = pattern.name,
                    population = grid.population(),
                    "pattern loaded"
                );
                self.history.seed(grid);
                self.center_pending = true;
                self.load_error = None;
            }
            Err(err) => {
                error!(name = pattern.name, %err, "failed to load pattern");
                self.load_error = Some(format!("{}: {}", pattern.name, err));
            }
        }
    }

    pub(super) fn load_random_soup(&mut self) {
        let grid = random_soup(Config::SOUP_HALF_EXTENT, Config::SOUP_FILL_RATE, None);
        info!(population = grid.population(), "random soup loaded");
        self.history.seed(grid);
        self.center_pending = true;
        self.load_error = None;
    }

    fn update_history(&mut self) {
        if self.is_paused {
            return;
        }
        if self.last_tick.elapsed().as_secs_f64() * 1e3 < self.tick_interval_ms {
            return;
        }
        self.last_tick = Instant::now();
        self.step_forward();
    }

    fn handle_input(&mut self, ctx: &Context, life_rect: Rect) {
        ctx.input(|input| {
            self.hovered_cell = None;
            if let Some(pos) = input.pointer.latest_pos() {
                if life_rect.contains(pos) {
                    let p = pos - life_rect.left_top();
                    let (px, py) = (p.x as f64, p.y as f64);
                    let cell = self.viewport.cell_at(px, py);
                    self.hovered_cell = Some(cell);

                    if input.pointer.button_down(PointerButton::Middle) {
                        let delta = input.pointer.delta();
                        self.viewport.pan(delta.x as f64, delta.y as f64);
                    } else if input.pointer.button_down(PointerButton::Primary) {
                        self.history.paint_cell(cell.x, cell.y);
                    } else if input.pointer.button_down(PointerButton::Secondary) {
                        self.history.erase_cell(cell.x, cell.y);
                    }

                    if input.raw_scroll_delta.y != 0. {
                        let factor = Config::ZOOM_STEP
                            .powf(input.raw_scroll_delta.y as f64 / Config::SCROLL_SCALE);
                        self.viewport.zoom_at(factor, px, py);
                    }
                }
            }
            if input.key_pressed(Key::Space) {
                self.toggle_pause();
            }
            if input.key_pressed(Key::ArrowRight) {
                self.step_forward();
            }
            if input.key_pressed(Key::ArrowLeft) {
                self.step_back();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if let Some(life_rect) = self.life_rect {
            self.handle_input(ctx, life_rect);
        }
        self.update_history();
        self.draw(ctx);

        self.fps_limiter.sleep(self.max_fps);
    }
}
