//! Terminal front end: config, message loop, effect execution and rendering.
mod app;
mod config;
mod effects;
mod input;
mod ui;

pub use app::run_app;
