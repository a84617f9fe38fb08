use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum Capturer {
    V4l,
    None,
}

#[derive(Deserialize, Debug)]
pub struct Frame {
    pub capturer: Capturer,
    #[serde(default)]
    pub video: usize,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

#[derive(Deserialize, Debug)]
pub struct Capture {
    pub directory: String,
    #[serde(default = "default_every_secs")]
    pub every_secs: u64,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub frame: Frame,
    pub capture: Option<Capture>,
}

fn default_interval_ms() -> u64 {
    500
}

fn default_every_secs() -> u64 {
    60
}
