use async_trait::async_trait;
use thiserror::Error;

use crate::Frame;

#[derive(Debug, Error)]
pub enum CameraError {
    /// The device could not be opened or has nothing to read.
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// A video input device the capture loop grabs still frames from.
#[async_trait]
pub trait FrameSource: Send {
    /// Capture the current frame as a JPEG still.
    async fn grab(&mut self) -> Result<Frame, CameraError>;

    /// Human-readable description of the device.
    fn describe(&self) -> String;
}
