//! Fixture (one scheduled match), its status, and the league format.

use crate::models::participant::ParticipantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixture ids are 1-based and assigned in emission order.
pub type FixtureId = u32;

/// Single or double round-robin.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Every participant meets every other participant once.
    #[default]
    Single,
    /// Every participant meets every other participant twice.
    Double,
}

impl Format {
    /// Number of full round-robin passes.
    pub fn cycles(self) -> u32 {
        match self {
            Format::Single => 1,
            Format::Double => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Pending,
    Completed,
}

/// A single match between two participants.
///
/// `status == Completed` iff both scores are set; only [`Fixture::complete`]
/// changes either, so the invariant holds for every value built through this type.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub round: u32,
    pub home: ParticipantId,
    pub away: ParticipantId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: FixtureStatus,
    /// Kickoff time; never set by the generator.
    pub date: Option<DateTime<Utc>>,
}

impl Fixture {
    pub fn new(id: FixtureId, round: u32, home: ParticipantId, away: ParticipantId) -> Self {
        Self {
            id,
            round,
            home,
            away,
            home_score: None,
            away_score: None,
            status: FixtureStatus::Pending,
            date: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    /// Both scores when the fixture has been played.
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.status, self.home_score, self.away_score) {
            (FixtureStatus::Completed, Some(h), Some(a)) => Some((h, a)),
            _ => None,
        }
    }

    /// Copy of this fixture with the given result recorded.
    pub fn complete(&self, home_score: u32, away_score: u32) -> Self {
        Self {
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: FixtureStatus::Completed,
            ..self.clone()
        }
    }

    /// True if the participant plays in this fixture (either side).
    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.home == participant || self.away == participant
    }
}

/// Fixtures sharing one round number (schedule view).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub fixtures: Vec<Fixture>,
}
