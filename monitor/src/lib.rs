//! The capture-match loop behind the condominium entrance screens.
//!
//! A [`CaptureSession`] owns one camera, periodically grabs a frame, asks an
//! [`Embedder`] for a face embedding, submits it to a remote [`Matcher`] and
//! publishes the outcome over a broadcast channel. The automatic access
//! monitor and the live recognition panel are the same loop with different
//! [`MonitorConfig`]s: cadence, endpoint and what an empty frame means.

pub mod config;
pub mod event;
pub mod session;
pub mod traits;

pub use config::{MatchMode, MonitorConfig, NoFaceBehavior};
pub use event::{
    AccessEvent, AccessKind, AccessVerdict, EventKind, Identity, MatchOutcome, StatsSnapshot,
};
pub use session::{CaptureSession, SessionState};
pub use traits::{Embedder, Matcher};
