// src/specs/mod.rs
//! Page-specific scraping specifications.
//!
//! Each spec encodes *where the ground truth lives in the HTML* for one
//! kind of page and how to extract it tolerantly with the `core::html`
//! scanners. Every assumption about the remote markup (row classes,
//! attribute names, the teammate-row stride) lives here or in
//! `config::consts`, so a site relayout touches exactly one small layer.
//!
//! Specs only extract. Fetching, pacing, retries and accumulation are
//! the collection loops' business (`src/scrape/`), and presentation is
//! the GUI's. Everything here is testable offline against captured or
//! inline HTML fixtures.

pub mod listing;
pub mod pagination;
pub mod row;
pub mod teammates;
