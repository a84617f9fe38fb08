use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Capturer {
    V4l { video: usize, interval: Duration },
    None,
}

#[derive(Debug, Clone)]
pub struct Capture {
    pub directory: PathBuf,
    pub every: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub capturer: Capturer,
    pub capture: Option<Capture>,
}
