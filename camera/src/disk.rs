use async_trait::async_trait;
use std::io::Cursor;
use std::path::PathBuf;
use tokio::fs;

use crate::{CameraConfig, CameraError, Frame, FrameSource};

/// Reads JPEG files from disk as simulated webcam frames, cycling through
/// everything the pattern matched.
#[derive(Debug)]
pub struct GlobCamera {
    paths: Vec<PathBuf>,
    index: usize,
    config: CameraConfig,
}

impl GlobCamera {
    /// Open a camera over the files matching `pattern`.
    ///
    /// Fails with [`CameraError::Unavailable`] when the pattern is invalid
    /// or matches nothing, the file-backed analog of a denied device.
    pub fn open(pattern: &str, config: CameraConfig) -> Result<Self, CameraError> {
        let paths: Vec<PathBuf> = glob::glob(pattern)
            .map_err(|e| CameraError::Unavailable(e.msg.to_string()))?
            .filter_map(Result::ok)
            .collect();
        if paths.is_empty() {
            return Err(CameraError::Unavailable(format!(
                "no frames match {pattern}"
            )));
        }
        Ok(Self {
            paths,
            index: 0,
            config,
        })
    }
}

#[async_trait]
impl FrameSource for GlobCamera {
    async fn grab(&mut self) -> Result<Frame, CameraError> {
        if self.index >= self.paths.len() {
            self.index = 0;
        }
        let path = self.paths[self.index].clone();
        self.index += 1;
        let bytes = fs::read(&path).await?;
        let img = image::io::Reader::new(Cursor::new(&bytes))
            .with_guessed_format()?
            .decode()?;
        let resized = img
            .resize_exact(
                self.config.width,
                self.config.height,
                image::imageops::FilterType::Triangle,
            )
            .to_rgb8();
        let mut buf = Vec::new();
        image::codecs::jpeg::JpegEncoder::new(&mut buf).encode_image(&resized)?;
        Ok(Frame::new(buf, self.config.width, self.config.height))
    }

    fn describe(&self) -> String {
        format!("file camera over {} frames", self.paths.len())
    }
}
