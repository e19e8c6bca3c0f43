use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a matched user as the backend reports it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: i64,
    pub display_name: String,
}

/// Access verdict attached to a decision-endpoint reply.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccessVerdict {
    Granted,
    Denied,
}

/// Normalized reply from the remote matcher, whichever endpoint produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    pub recognized: bool,
    pub identity: Option<Identity>,
    /// Confidence in [0, 1] as reported by the matcher.
    pub confidence: f32,
    /// Present only for decision-endpoint replies.
    pub verdict: Option<AccessVerdict>,
    pub message: String,
}

/// What kind of event a cycle produced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    Granted,
    Denied,
    Recognized,
    Unrecognized,
}

/// The last match outcome, stored on the session and broadcast to
/// subscribers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessEvent {
    pub kind: EventKind,
    pub identity: Option<Identity>,
    pub confidence: f32,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl AccessEvent {
    pub(crate) fn from_outcome(outcome: MatchOutcome) -> Self {
        let kind = match (outcome.verdict, outcome.recognized) {
            (Some(AccessVerdict::Granted), _) => EventKind::Granted,
            (Some(AccessVerdict::Denied), _) => EventKind::Denied,
            (None, true) => EventKind::Recognized,
            (None, false) => EventKind::Unrecognized,
        };
        Self {
            kind,
            identity: outcome.identity,
            confidence: outcome.confidence,
            message: outcome.message,
            at: Utc::now(),
        }
    }

    pub(crate) fn no_face() -> Self {
        Self {
            kind: EventKind::Unrecognized,
            identity: None,
            confidence: 0.0,
            message: "no face recognized".into(),
            at: Utc::now(),
        }
    }
}

/// Direction of a manually confirmed access event.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    Entrada,
    Salida,
}

impl AccessKind {
    /// Wire value for the register endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKind::Entrada => "entrada",
            AccessKind::Salida => "salida",
        }
    }
}

/// Aggregate counters mirrored from the backend for display.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub enrolled_faces: u64,
    pub total_accesses: u64,
    pub accesses_today: u64,
}
