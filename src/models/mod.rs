//! Data structures for the league: participants, fixtures, standings, tournament record.

mod fixture;
mod participant;
mod standings;
mod tournament;

pub use fixture::{Fixture, FixtureId, FixtureStatus, Format, Round};
pub use participant::{Participant, ParticipantId};
pub use standings::{StandingsRow, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use tournament::{
    ParticipantEntry, Tournament, TournamentError, TournamentId, TournamentSettings,
    TournamentSummary,
};
