//! Participant (team) data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a participant (fixtures reference this, never the name).
pub type ParticipantId = Uuid;

/// A team taking part in the league.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Opaque display token (e.g. "#3b82f6"); never interpreted by the core.
    pub color: String,
}

impl Participant {
    /// Create a new participant with a fresh id. The name is trimmed.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            color: color.into(),
        }
    }

    /// Identity used for uniqueness checks: the lowercase name.
    pub fn identity(&self) -> String {
        self.name.to_lowercase()
    }

    /// True if both participants collapse to the same identity.
    pub fn same_identity(&self, other: &Participant) -> bool {
        self.identity() == other.identity()
    }
}
