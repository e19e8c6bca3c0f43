//! Command-line entrance watcher for the Smart Condominium backend.
//!
//! Wires a camera, the local face extractor and the backend gate client
//! into a [`monitor::CaptureSession`] and logs every access event.

pub mod adapters;
pub mod settings;

pub use adapters::{GateMatcher, SeetaEmbedder};
pub use settings::{WatchMode, monitor_config};
