use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};

/// Target capture resolution for a video input device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// A single still grabbed from a video input device.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// JPEG-encoded image data.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// When the frame was grabbed.
    pub at: DateTime<Utc>,
}

impl Frame {
    /// Wrap already-encoded JPEG bytes with the current timestamp.
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
            at: Utc::now(),
        }
    }

    /// Encode the frame as a `data:image/jpeg;base64,...` URL, the form the
    /// backend expects for captured images.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}
