use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::types::{AccessDecision, AccessStats, Recognition, RegisteredAccess};

#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("embedding could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, GateError>;

/// Typed client for the backend matcher service.
///
/// Embeddings travel as a JSON-encoded string and captured images as
/// base64 data URLs, exactly as the backend expects them.
#[derive(Clone)]
pub struct GateClient {
    base: String,
    client: Client,
}

impl GateClient {
    /// Create a new client targeting `base` (e.g. `http://localhost:8000/api`).
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            client: Client::new(),
        }
    }

    /// Submit an embedding plus the captured still to the automatic
    /// access-decision endpoint.
    pub async fn decide_access(&self, embedding: &[f32], imagen: &str) -> Result<AccessDecision> {
        #[derive(serde::Serialize)]
        struct Payload<'a> {
            embedding: String,
            imagen: &'a str,
        }
        let payload = Payload {
            embedding: serde_json::to_string(embedding)?,
            imagen,
        };
        debug!(endpoint = "procesar_acceso_automatico", "submitting embedding");
        let resp = self
            .client
            .post(format!("{}/rostros/procesar_acceso_automatico/", self.base))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Ask the matcher for the closest enrolled identity with confidence at
    /// least `umbral`.
    pub async fn recognize(&self, embedding: &[f32], umbral: f32) -> Result<Recognition> {
        #[derive(serde::Serialize)]
        struct Payload {
            embedding: String,
            umbral: f32,
        }
        let payload = Payload {
            embedding: serde_json::to_string(embedding)?,
            umbral,
        };
        debug!(endpoint = "reconocer_rostro", umbral, "submitting embedding");
        let resp = self
            .client
            .post(format!("{}/rostros/reconocer_rostro/", self.base))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Record an entry/exit event for a recognized user.
    pub async fn register_access(
        &self,
        usuario_id: i64,
        tipo_acceso: &str,
        confianza: f32,
        imagen: &str,
    ) -> Result<RegisteredAccess> {
        #[derive(serde::Serialize)]
        struct Payload<'a> {
            usuario_id: i64,
            tipo_acceso: &'a str,
            confianza: f32,
            imagen: &'a str,
        }
        let payload = Payload {
            usuario_id,
            tipo_acceso,
            confianza,
            imagen,
        };
        let resp = self
            .client
            .post(format!("{}/accesos/registrar_acceso/", self.base))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Aggregate counters shown next to the live feed.
    pub async fn stats(&self) -> Result<AccessStats> {
        let resp = self
            .client
            .get(format!("{}/rostros/estadisticas/", self.base))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}
