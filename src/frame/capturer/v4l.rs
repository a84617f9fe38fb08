use crate::analyzer::LuminosityAnalyzer;
use crate::capture::PhotoCapture;
use crate::frame::object::{Frame, PixelFormat, Plane};
use crate::ErrorBox;
use itertools::Itertools;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, FourCC};

const SUPPORTED_FORMATS: [(&[u8; 4], PixelFormat); 2] =
    [(b"GREY", PixelFormat::Gray), (b"RGB3", PixelFormat::Rgb)];

pub struct Capturer {
    video: usize,
    interval: Duration,
    photo: Option<PhotoCapture>,
    stop: Arc<AtomicBool>,
}

impl Capturer {
    pub fn new(
        video: usize,
        interval: Duration,
        photo: Option<PhotoCapture>,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            video,
            interval,
            photo,
            stop,
        }
    }

    fn capture_loop(&mut self, analyzer: &LuminosityAnalyzer) -> Result<(), ErrorBox> {
        let (device, width, height, format) = Self::setup(self.video)?;
        let mut stream = Stream::new(&device, Type::VideoCapture)?;

        log::info!(
            "Capturing {}x{} {:?} frames from /dev/video{}",
            width,
            height,
            format,
            self.video
        );

        while !self.stop.load(Ordering::Relaxed) {
            let (buf, _) = stream.next()?;
            let frame = Frame::new(width, height, format, vec![Plane::new(buf.to_vec())]);

            if let Some(photo) = self.photo.as_mut() {
                match photo.maybe_save(&frame) {
                    Ok(Some(path)) => log::info!("Photo capture succeeded: {}", path.display()),
                    Ok(None) => {}
                    Err(err) => log::error!("Photo capture failed: {}", err),
                }
            }

            if let Err(err) = analyzer.analyze(frame) {
                log::error!("Unable to analyze frame: {}", err);
            }

            thread::sleep(self.interval);
        }

        Ok(())
    }

    fn setup(video: usize) -> Result<(Device, u32, u32, PixelFormat), ErrorBox> {
        let device = Device::new(video)?;

        for (fourcc, pixel_format) in SUPPORTED_FORMATS {
            let mut format = device.format()?;
            format.fourcc = FourCC::new(fourcc);

            // Analysis doesn't need many pixels, pick the smallest resolution
            // the device advertises for this format.
            let Some((width, height)) = device
                .enum_framesizes(format.fourcc)
                .unwrap_or_default()
                .into_iter()
                .flat_map(|f| {
                    f.size
                        .to_discrete()
                        .into_iter()
                        .map(|d| (d.width, d.height))
                        .collect_vec()
                })
                .min_by(|&(w1, h1), &(w2, h2)| h1.cmp(&h2).then(w1.cmp(&w2)))
            else {
                continue;
            };

            format.width = width;
            format.height = height;

            match device.set_format(&format) {
                Ok(applied) if applied.fourcc == format.fourcc => {
                    return Ok((device, applied.width, applied.height, pixel_format));
                }
                _ => continue,
            }
        }

        Err(format!("/dev/video{} supports neither GREY nor RGB3 capture", video).into())
    }
}

impl super::Capturer for Capturer {
    fn run(&mut self, analyzer: LuminosityAnalyzer) {
        if let Err(err) = self.capture_loop(&analyzer) {
            log::error!(
                "Unable to capture frames from /dev/video{}: {}",
                self.video,
                err
            );
        }
    }
}
