use crate::frame::object::{Frame, Plane};
use crate::listener::LumaListener;
use crate::ErrorBox;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("frame's first plane contains no samples")]
    EmptyPlane,
    #[error("luma listener failed: {0}")]
    Listener(#[source] ErrorBox),
}

/// Turns one frame into one scalar brightness estimate: the arithmetic mean
/// of the first plane's bytes, each read as an unsigned 8-bit sample. The
/// result is handed to the listener before the frame is released; the frame
/// is consumed by value, so it is released on every exit path, including
/// the error ones.
pub struct LuminosityAnalyzer {
    listener: Box<dyn LumaListener + Send>,
}

impl LuminosityAnalyzer {
    pub fn new(listener: Box<dyn LumaListener + Send>) -> Self {
        Self { listener }
    }

    pub fn analyze(&self, frame: Frame) -> Result<(), AnalyzerError> {
        let samples = frame
            .planes()
            .first()
            .map(Plane::bytes)
            .filter(|bytes| !bytes.is_empty())
            .ok_or(AnalyzerError::EmptyPlane)?;

        let sum: u64 = samples.iter().map(|&sample| u64::from(sample)).sum();
        let luma = sum as f64 / samples.len() as f64;

        self.listener.update(luma).map_err(AnalyzerError::Listener)
    }
}
