use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const MAX_FPS: f64 = 60.;
    /// Delay between two generations while playing.
    pub const TICK_INTERVAL_MS: f64 = 100.;

    pub const CELL_SIZE: f64 = 16.;
    pub const MIN_CELL_SIZE: f64 = 2.;
    pub const MAX_CELL_SIZE: f64 = 128.;
    pub const ZOOM_STEP: f64 = 1.1;
    pub const SCROLL_SCALE: f64 = 50.;
    /// Grid lines are drawn only when cells are at least this large.
    pub const GRID_LINES_MIN_CELL_SIZE: f64 = 8.;

    pub const SOUP_HALF_EXTENT: i64 = 24;
    pub const SOUP_FILL_RATE: f64 = 0.35;

    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const FRAME_MARGIN: f32 = 12.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 16.;

    pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(12, 10, 9);
    pub const CELL_COLOR: Color32 = Color32::WHITE;
    pub const GRID_LINE_COLOR: Color32 = Color32::from_gray(40);
}
