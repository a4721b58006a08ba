// src/scrape/mod.rs
mod collect;

pub use collect::{collect_players, collect_teammates, Collected, LoopStop};
