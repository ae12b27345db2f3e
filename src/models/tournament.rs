//! Tournament record, setup settings, and TournamentError.

use crate::models::fixture::{Fixture, FixtureId, Format};
use crate::models::participant::{Participant, ParticipantId};
use crate::models::standings::StandingsRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament name is empty (after trimming).
    EmptyTournamentName,
    /// Fewer than 2 participants.
    NotEnoughParticipants,
    /// A participant name is empty (after trimming).
    EmptyParticipantName,
    /// Two participants share a name (names are unique, case-insensitive).
    DuplicateParticipantName(String),
    /// Result entered for a fixture id that is not in the list.
    FixtureNotFound(FixtureId),
    /// A fixture references a participant that is not in the tournament.
    UnknownParticipant(ParticipantId),
    /// Participant id not found (rename).
    ParticipantNotFound(ParticipantId),
    /// Writing the standings export failed.
    Export(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyTournamentName => write!(f, "Tournament name is required"),
            TournamentError::NotEnoughParticipants => write!(f, "Need at least 2 teams"),
            TournamentError::EmptyParticipantName => write!(f, "Team name must not be empty"),
            TournamentError::DuplicateParticipantName(name) => {
                write!(f, "A team named \"{}\" already exists", name)
            }
            TournamentError::FixtureNotFound(id) => write!(f, "Fixture {} not found", id),
            TournamentError::UnknownParticipant(id) => {
                write!(f, "Fixture references unknown team {}", id)
            }
            TournamentError::ParticipantNotFound(_) => write!(f, "Team not found"),
            TournamentError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Participant as entered on the setup form (no id yet).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl ParticipantEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Everything the organizer chooses on the setup form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    pub name: String,
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub shuffle_rounds: bool,
    pub participants: Vec<ParticipantEntry>,
}

/// Full tournament record: settings, generated fixtures, and current standings.
///
/// Fixtures are regenerated only when the settings change; a result entry
/// replaces `fixtures` and `standings` with freshly derived values.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub format: Format,
    pub shuffle_rounds: bool,
    pub participants: Vec<Participant>,
    pub fixtures: Vec<Fixture>,
    pub standings: Vec<StandingsRow>,
}

/// Short listing view of a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub format: Format,
    pub participant_count: usize,
    pub completed_fixtures: usize,
    pub total_fixtures: usize,
}

impl Tournament {
    /// Look up a participant by id.
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Look up a fixture by id.
    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    /// (completed, total) fixture counts.
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.fixtures.iter().filter(|f| f.is_completed()).count();
        (completed, self.fixtures.len())
    }

    /// True once every fixture has a result.
    pub fn is_finished(&self) -> bool {
        let (completed, total) = self.progress();
        total > 0 && completed == total
    }

    pub fn summary(&self) -> TournamentSummary {
        let (completed_fixtures, total_fixtures) = self.progress();
        TournamentSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            format: self.format,
            participant_count: self.participants.len(),
            completed_fixtures,
            total_fixtures,
        }
    }
}
