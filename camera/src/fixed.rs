use async_trait::async_trait;

use crate::{CameraConfig, CameraError, Frame, FrameSource};

/// Serves a fixed set of pre-encoded frames, cycling forever. Lets tests
/// and demos run the capture loop without a device or disk access.
pub struct StaticCamera {
    frames: Vec<Vec<u8>>,
    index: usize,
    config: CameraConfig,
}

impl StaticCamera {
    pub fn new(frames: Vec<Vec<u8>>, config: CameraConfig) -> Result<Self, CameraError> {
        if frames.is_empty() {
            return Err(CameraError::Unavailable("no frames supplied".into()));
        }
        Ok(Self {
            frames,
            index: 0,
            config,
        })
    }
}

#[async_trait]
impl FrameSource for StaticCamera {
    async fn grab(&mut self) -> Result<Frame, CameraError> {
        if self.index >= self.frames.len() {
            self.index = 0;
        }
        let bytes = self.frames[self.index].clone();
        self.index += 1;
        Ok(Frame::new(bytes, self.config.width, self.config.height))
    }

    fn describe(&self) -> String {
        format!("static camera with {} frames", self.frames.len())
    }
}
