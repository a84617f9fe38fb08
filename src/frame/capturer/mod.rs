use crate::analyzer::LuminosityAnalyzer;

pub mod none;
pub mod v4l;

/// A frame source. `run` drives the capture loop on its caller's thread,
/// feeding the analyzer strictly one frame at a time: the next frame is not
/// fetched until the previous one has been consumed and released.
pub trait Capturer {
    fn run(&mut self, analyzer: LuminosityAnalyzer);
}
