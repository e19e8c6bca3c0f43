use serde::{Deserialize, Serialize};

/// User details attached to a positive match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Usuario {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Usuario {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Reply from the automatic access-decision endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AccessDecision {
    pub acceso_permitido: bool,
    #[serde(default)]
    pub usuario: Option<Usuario>,
    #[serde(default)]
    pub tipo_acceso: Option<String>,
    pub confianza: f32,
    #[serde(default)]
    pub mensaje: String,
}

/// Reply from the similarity-only recognition endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Recognition {
    pub reconocido: bool,
    #[serde(default)]
    pub usuario: Option<Usuario>,
    pub confianza: f32,
}

/// Acknowledgement for a manually registered access event.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RegisteredAccess {
    pub success: bool,
    pub registro_id: i64,
    #[serde(default)]
    pub mensaje: String,
}

/// Aggregate counters, used for display only.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AccessStats {
    pub total_rostros_registrados: u64,
    pub total_accesos_registrados: u64,
    pub accesos_hoy: u64,
    /// Recent access records; rendered verbatim, never interpreted.
    #[serde(default)]
    pub ultimos_accesos: Vec<serde_json::Value>,
}
