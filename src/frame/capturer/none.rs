use crate::analyzer::LuminosityAnalyzer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::{thread, time::Duration};

/// Placeholder source for setups without a capture device; produces no
/// frames and just waits for shutdown.
pub struct Capturer {
    stop: Arc<AtomicBool>,
}

impl Capturer {
    pub fn new(stop: Arc<AtomicBool>) -> Self {
        Self { stop }
    }
}

impl super::Capturer for Capturer {
    fn run(&mut self, _analyzer: LuminosityAnalyzer) {
        while !self.stop.load(Ordering::Relaxed) {
            thread::sleep(Duration::from_secs(1));
        }
    }
}
