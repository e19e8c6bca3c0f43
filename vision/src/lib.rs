//! Client-side face embedding extraction.
//!
//! Detection runs on a SeetaFace frontal model via [`rustface`]; the
//! resulting crop is reduced to a fixed-length grayscale vector that the
//! backend matcher compares against enrolled embeddings.

pub mod face;

pub use face::{EMBEDDING_LEN, FaceExtractor, VisionError, embed_crop, similarity};
