#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Gray,
    Rgb,
}

/// One raw sample buffer within a frame, e.g. the luma plane of a
/// YUV-like format or a packed RGB buffer.
pub struct Plane {
    bytes: Vec<u8>,
}

impl Plane {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// One captured image, owned by whoever currently holds it. The frame moves
/// into the analyzer by value, so it is released (dropped) exactly once per
/// capture and cannot be touched afterwards; the source must not hand out
/// the next frame until the previous one has been consumed.
pub struct Frame {
    width: u32,
    height: u32,
    format: PixelFormat,
    planes: Vec<Plane>,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Frame {
    pub fn new(width: u32, height: u32, format: PixelFormat, planes: Vec<Plane>) -> Self {
        Self {
            width,
            height,
            format,
            planes,
            release: None,
        }
    }

    /// Same as [`Frame::new`], but notifies the given hook when the frame is
    /// released, letting tests observe the release contract.
    #[cfg(test)]
    pub fn with_release(
        width: u32,
        height: u32,
        format: PixelFormat,
        planes: Vec<Plane>,
        release: Box<dyn FnOnce() + Send>,
    ) -> Self {
        Self {
            width,
            height,
            format,
            planes,
            release: Some(release),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
