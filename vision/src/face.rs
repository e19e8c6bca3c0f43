use image::GrayImage;
use image::io::Reader as ImageReader;
use rustface::{Detector, ImageData, create_detector_with_model, read_model};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Length of the vector produced by [`FaceExtractor::embedding`]: a 32x32
/// grayscale crop of the detected face, row-major, scaled to [0, 1].
pub const EMBEDDING_LEN: usize = 32 * 32;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("face model failed to load: {0}")]
    Model(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Extracts face embeddings from JPEG frames.
///
/// The model bytes are cached once and a detector is built per call, so a
/// shared extractor stays `Send + Sync` without locking.
#[derive(Debug)]
pub struct FaceExtractor {
    model: Vec<u8>,
    min_face_size: u32,
}

impl FaceExtractor {
    /// Load a SeetaFace frontal detection model from `path`.
    ///
    /// A missing or corrupt model fails here rather than on the first frame.
    pub fn from_model_file(path: impl AsRef<Path>) -> Result<Self, VisionError> {
        let model = std::fs::read(path)?;
        read_model(Cursor::new(&model)).map_err(|e| VisionError::Model(e.to_string()))?;
        Ok(Self {
            model,
            min_face_size: 40,
        })
    }

    /// Smallest face the detector will report, in pixels.
    pub fn with_min_face_size(mut self, pixels: u32) -> Self {
        self.min_face_size = pixels;
        self
    }

    fn detector(&self) -> Result<Box<dyn Detector>, VisionError> {
        let model =
            read_model(Cursor::new(&self.model)).map_err(|e| VisionError::Model(e.to_string()))?;
        let mut det = create_detector_with_model(model);
        det.set_min_face_size(self.min_face_size);
        det.set_score_thresh(2.0);
        det.set_pyramid_scale_factor(0.8);
        det.set_slide_window_step(4, 4);
        Ok(det)
    }

    /// Compute the embedding of the largest face in a JPEG frame.
    ///
    /// Returns `Ok(None)` when no face is detected. Decode and detector
    /// failures surface as errors; callers treat both outcomes as
    /// recoverable.
    pub fn embedding(&self, jpeg: &[u8]) -> Result<Option<Vec<f32>>, VisionError> {
        let img = ImageReader::new(Cursor::new(jpeg))
            .with_guessed_format()?
            .decode()?;
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        let mut data = ImageData::new(&gray, w, h);
        let mut det = self.detector()?;
        let faces = det.detect(&mut data);
        let Some(best) = faces.iter().max_by_key(|f| {
            let b = f.bbox();
            b.width() * b.height()
        }) else {
            return Ok(None);
        };
        let b = best.bbox();
        let crop = image::imageops::crop_imm(
            &gray,
            b.x().max(0) as u32,
            b.y().max(0) as u32,
            b.width(),
            b.height(),
        )
        .to_image();
        Ok(Some(embed_crop(&crop)))
    }
}

/// Reduce a grayscale face crop to the fixed-length embedding vector.
pub fn embed_crop(crop: &GrayImage) -> Vec<f32> {
    use image::imageops::FilterType;
    let resized = image::imageops::resize(crop, 32, 32, FilterType::Triangle);
    resized
        .into_raw()
        .into_iter()
        .map(|b| b as f32 / 255.0)
        .collect()
}

/// Similarity between two embeddings as `1 / (1 + euclidean distance)`,
/// the same measure the backend matcher applies. 0.0 on length mismatch.
pub fn similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let sum: f32 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
    1.0 / (1.0 + sum.sqrt())
}
