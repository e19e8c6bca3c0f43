use async_trait::async_trait;
use camera::Frame;

use crate::event::{AccessKind, MatchOutcome, StatsSnapshot};

/// Produces a face embedding from a captured frame.
///
/// `Ok(None)` means no face was found. Errors are folded into the same
/// path by the loop; neither may kill it.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, frame: &Frame) -> anyhow::Result<Option<Vec<f32>>>;
}

/// Remote matcher the loop submits embeddings to.
#[async_trait]
pub trait Matcher: Send + Sync {
    /// Access-decision endpoint: the backend decides and logs the access.
    async fn decide_access(&self, embedding: &[f32], imagen: &str) -> anyhow::Result<MatchOutcome>;

    /// Similarity-only endpoint with a confidence threshold.
    async fn recognize(&self, embedding: &[f32], threshold: f32) -> anyhow::Result<MatchOutcome>;

    /// Record a manually confirmed entry/exit.
    async fn register(
        &self,
        usuario_id: i64,
        kind: AccessKind,
        confianza: f32,
        imagen: &str,
    ) -> anyhow::Result<()>;

    /// Aggregate counters for display.
    async fn stats(&self) -> anyhow::Result<StatsSnapshot>;
}
