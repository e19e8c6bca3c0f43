use async_trait::async_trait;
use camera::Frame;
use gate::GateClient;
use monitor::{
    AccessKind, AccessVerdict, Embedder, Identity, MatchOutcome, Matcher, StatsSnapshot,
};
use vision::FaceExtractor;

/// [`Embedder`] backed by the local SeetaFace extractor.
pub struct SeetaEmbedder(pub FaceExtractor);

#[async_trait]
impl Embedder for SeetaEmbedder {
    async fn embed(&self, frame: &Frame) -> anyhow::Result<Option<Vec<f32>>> {
        Ok(self.0.embedding(&frame.bytes)?)
    }
}

/// [`Matcher`] backed by the backend HTTP client.
pub struct GateMatcher(pub GateClient);

#[async_trait]
impl Matcher for GateMatcher {
    async fn decide_access(&self, embedding: &[f32], imagen: &str) -> anyhow::Result<MatchOutcome> {
        let reply = self.0.decide_access(embedding, imagen).await?;
        Ok(decision_outcome(reply))
    }

    async fn recognize(&self, embedding: &[f32], threshold: f32) -> anyhow::Result<MatchOutcome> {
        let reply = self.0.recognize(embedding, threshold).await?;
        Ok(recognition_outcome(reply))
    }

    async fn register(
        &self,
        usuario_id: i64,
        kind: AccessKind,
        confianza: f32,
        imagen: &str,
    ) -> anyhow::Result<()> {
        self.0
            .register_access(usuario_id, kind.as_str(), confianza, imagen)
            .await?;
        Ok(())
    }

    async fn stats(&self) -> anyhow::Result<StatsSnapshot> {
        let stats = self.0.stats().await?;
        Ok(StatsSnapshot {
            enrolled_faces: stats.total_rostros_registrados,
            total_accesses: stats.total_accesos_registrados,
            accesses_today: stats.accesos_hoy,
        })
    }
}

fn decision_outcome(reply: gate::AccessDecision) -> MatchOutcome {
    let verdict = if reply.acceso_permitido {
        AccessVerdict::Granted
    } else {
        AccessVerdict::Denied
    };
    MatchOutcome {
        recognized: reply.usuario.is_some(),
        identity: reply.usuario.map(identity),
        confidence: reply.confianza,
        verdict: Some(verdict),
        message: reply.mensaje,
    }
}

fn recognition_outcome(reply: gate::Recognition) -> MatchOutcome {
    let message = if reply.reconocido {
        "user recognized"
    } else {
        "user not recognized"
    };
    MatchOutcome {
        recognized: reply.reconocido,
        identity: reply.usuario.map(identity),
        confidence: reply.confianza,
        verdict: None,
        message: message.into(),
    }
}

fn identity(usuario: gate::Usuario) -> Identity {
    Identity {
        id: usuario.id,
        display_name: usuario.display_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gate::{AccessDecision, Recognition, Usuario};

    #[test]
    fn denied_decision_maps_to_denied_verdict() {
        let outcome = decision_outcome(AccessDecision {
            acceso_permitido: false,
            usuario: None,
            tipo_acceso: None,
            confianza: 0.4,
            mensaje: "Acceso denegado".into(),
        });
        assert_eq!(outcome.verdict, Some(AccessVerdict::Denied));
        assert!(!outcome.recognized);
        assert_eq!(outcome.message, "Acceso denegado");
    }

    #[test]
    fn granted_decision_keeps_the_backend_message() {
        let outcome = decision_outcome(AccessDecision {
            acceso_permitido: true,
            usuario: Some(Usuario {
                id: 3,
                first_name: "Luis".into(),
                last_name: "Mamani".into(),
            }),
            tipo_acceso: Some("entrada".into()),
            confianza: 0.875,
            mensaje: "Bienvenido Luis".into(),
        });
        assert_eq!(outcome.verdict, Some(AccessVerdict::Granted));
        assert!(outcome.recognized);
        assert_eq!(outcome.identity.unwrap().display_name, "Luis Mamani");
        assert_eq!(outcome.message, "Bienvenido Luis");
    }

    #[test]
    fn recognition_reply_maps_identity() {
        let outcome = recognition_outcome(Recognition {
            reconocido: true,
            usuario: Some(Usuario {
                id: 7,
                first_name: "Ana".into(),
                last_name: "Paredes".into(),
            }),
            confianza: 0.95,
        });
        assert!(outcome.recognized);
        assert_eq!(outcome.identity.unwrap().display_name, "Ana Paredes");
        assert_eq!(outcome.verdict, None);
        assert_eq!(outcome.confidence, 0.95);
    }
}
