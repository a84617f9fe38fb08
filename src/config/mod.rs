use crate::ErrorBox;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub mod app;
pub mod file;

pub fn load() -> Result<app::Config, ErrorBox> {
    let content = xdg::BaseDirectories::with_prefix("lumacam")?
        .find_config_file("config.toml")
        .and_then(|path| fs::read_to_string(path).ok())
        .unwrap_or_else(|| include_str!("../../config.toml").to_string());

    let cfg: file::Config = toml::from_str(&content)?;

    Ok(app::Config {
        capturer: match cfg.frame.capturer {
            file::Capturer::V4l => app::Capturer::V4l {
                video: cfg.frame.video,
                interval: Duration::from_millis(cfg.frame.interval_ms),
            },
            file::Capturer::None => app::Capturer::None,
        },
        capture: cfg.capture.map(|capture| app::Capture {
            directory: PathBuf::from(capture.directory),
            every: Duration::from_secs(capture.every_secs),
        }),
    })
}
