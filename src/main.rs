use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod analyzer;
mod capture;
mod config;
mod frame;
mod listener;

pub type ErrorBox = Box<dyn Error + Send + Sync>;

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        std::process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => panic!("Unable to load config: {}", err),
    };

    log::debug!("Using {:#?}", config);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
            .expect("Unable to install signal handler");
    }

    let analyzer =
        analyzer::LuminosityAnalyzer::new(Box::new(listener::console::Listener::default()));

    let mut capturer: Box<dyn frame::capturer::Capturer + Send> = match config.capturer {
        config::app::Capturer::V4l { video, interval } => {
            let photo = config
                .capture
                .map(|capture| capture::PhotoCapture::new(&capture.directory, capture.every))
                .transpose()
                .unwrap_or_else(|err| panic!("Unable to prepare photo output directory: {}", err));

            Box::new(frame::capturer::v4l::Capturer::new(
                video,
                interval,
                photo,
                stop.clone(),
            ))
        }
        config::app::Capturer::None => Box::new(frame::capturer::none::Capturer::new(stop.clone())),
    };

    let handle = spawn("frame-capturer".to_string(), move || {
        capturer.run(analyzer)
    });

    if handle.join().is_err() {
        log::error!("Frame capturer thread panicked");
    }

    log::info!("Shutting down");
}

fn spawn<F, T>(thread_name: String, handler: F) -> std::thread::JoinHandle<T>
where
    F: FnOnce() -> T,
    F: Send + 'static,
    T: Send + 'static,
{
    std::thread::Builder::new()
        .name(thread_name.clone())
        .spawn(handler)
        .unwrap_or_else(|_| panic!("Unable to start thread: {}", thread_name))
}
