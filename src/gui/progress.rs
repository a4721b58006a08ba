// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Forwards pipeline progress into the shared status line that the
/// UI thread polls every frame. The worker owns this; the UI only
/// ever reads.
pub struct StatusProgress {
    status: Arc<Mutex<String>>,
    total: usize,
}

impl StatusProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, total: 0 }
    }

    fn set(&self, msg: String) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg;
        }
    }
}

impl Progress for StatusProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set(format!("Collecting teammates for {total} players…"));
    }
    fn log(&mut self, msg: &str) {
        self.set(s!(msg));
    }
    fn item_done(&mut self, index: usize, label: &str) {
        self.set(format!("[{}/{}] {}", index + 1, self.total, label));
    }
    fn item_failed(&mut self, index: usize, label: &str) {
        self.set(format!("[{}/{}] {}: failed", index + 1, self.total, label));
    }
    fn finish(&mut self) {
        self.set(s!("Scrape complete"));
    }
}
