// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod display;
pub mod export;
pub mod graph;
pub mod gui;
pub mod layout;
pub mod progress;
pub mod runner;
pub mod scrape;
