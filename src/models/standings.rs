//! Standings row: aggregated record of one participant.

use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};

/// Points awarded for a win.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points awarded to each side for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub participant: Participant,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Totals are u64 so many u32 scores can be summed without overflow.
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    /// All-zero row for a participant that has not played yet.
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Fold one completed match into this row, seen from this participant's side.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            std::cmp::Ordering::Less => self.losses += 1,
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }
    }
}
