//! Video input for the access-watch engine.
//!
//! Sources produce JPEG [`Frame`]s on demand. The capture loop owns exactly
//! one source at a time and drops it to release the device.

pub mod disk;
pub mod fixed;
pub mod frame;
pub mod source;

pub use disk::GlobCamera;
pub use fixed::StaticCamera;
pub use frame::{CameraConfig, Frame};
pub use source::{CameraError, FrameSource};
