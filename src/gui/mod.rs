// src/gui/mod.rs
pub mod app;
pub mod progress;
pub mod view;

pub use app::run;
