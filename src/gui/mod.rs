mod app;
mod config;
mod draw;
mod fps_limit;
mod viewport;

pub use app::App;
pub use config::Config;
use fps_limit::FpsLimiter;
pub use viewport::Viewport;
