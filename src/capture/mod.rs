use crate::frame::object::{Frame, PixelFormat};
use crate::ErrorBox;
use chrono::Local;
use image::{GrayImage, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const FILENAME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S-%3f";

/// Saves still photos of analyzed frames to a local directory, at most one
/// per configured period. Filenames are local timestamps, so rapid captures
/// within the same millisecond overwrite each other.
pub struct PhotoCapture {
    directory: PathBuf,
    every: Duration,
    last: Option<Instant>,
}

impl PhotoCapture {
    pub fn new(directory: &Path, every: Duration) -> Result<Self, ErrorBox> {
        fs::create_dir_all(directory)?;

        Ok(Self {
            directory: directory.to_path_buf(),
            every,
            last: None,
        })
    }

    /// Saves the frame as a JPEG if the configured period has elapsed since
    /// the previous photo, returning the path of the saved file.
    pub fn maybe_save(&mut self, frame: &Frame) -> Result<Option<PathBuf>, ErrorBox> {
        if self.last.is_some_and(|last| last.elapsed() < self.every) {
            return Ok(None);
        }

        let path = self.save(frame)?;
        self.last = Some(Instant::now());

        Ok(Some(path))
    }

    fn save(&self, frame: &Frame) -> Result<PathBuf, ErrorBox> {
        let path = self
            .directory
            .join(format!("{}.jpg", Local::now().format(FILENAME_FORMAT)));

        let plane = frame
            .planes()
            .first()
            .ok_or("frame has no sample planes")?
            .bytes()
            .to_vec();

        match frame.format() {
            PixelFormat::Gray => GrayImage::from_raw(frame.width(), frame.height(), plane)
                .ok_or("frame buffer does not match its dimensions")?
                .save(&path)?,
            PixelFormat::Rgb => RgbImage::from_raw(frame.width(), frame.height(), plane)
                .ok_or("frame buffer does not match its dimensions")?
                .save(&path)?,
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::object::Plane;

    fn gray_frame(width: u32, height: u32, bytes: Vec<u8>) -> Frame {
        Frame::new(width, height, PixelFormat::Gray, vec![Plane::new(bytes)])
    }

    #[test]
    fn test_saves_frame_as_jpeg_with_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut photo = PhotoCapture::new(dir.path(), Duration::ZERO).unwrap();

        let path = photo
            .maybe_save(&gray_frame(2, 2, vec![0, 64, 128, 255]))
            .unwrap()
            .expect("first frame should be saved");

        assert_eq!(Some("jpg"), path.extension().and_then(|e| e.to_str()));

        let saved = image::open(&path).unwrap();
        assert_eq!((2, 2), (saved.width(), saved.height()));
    }

    #[test]
    fn test_throttles_captures_within_the_period() {
        let dir = tempfile::tempdir().unwrap();
        let mut photo = PhotoCapture::new(dir.path(), Duration::from_secs(3600)).unwrap();
        let frame = gray_frame(1, 1, vec![42]);

        assert!(photo.maybe_save(&frame).unwrap().is_some());
        assert!(photo.maybe_save(&frame).unwrap().is_none());
    }

    #[test]
    fn test_zero_period_saves_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        let mut photo = PhotoCapture::new(dir.path(), Duration::ZERO).unwrap();
        let frame = gray_frame(1, 1, vec![42]);

        assert!(photo.maybe_save(&frame).unwrap().is_some());
        assert!(photo.maybe_save(&frame).unwrap().is_some());
    }

    #[test]
    fn test_rejects_frame_buffer_not_matching_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let mut photo = PhotoCapture::new(dir.path(), Duration::ZERO).unwrap();

        assert!(photo.maybe_save(&gray_frame(2, 2, vec![1, 2, 3])).is_err());
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("photos/2026");

        PhotoCapture::new(&nested, Duration::ZERO).unwrap();

        assert!(nested.is_dir());
    }
}
