//! League tournament web app: library with models, round-robin scheduling and standings.

pub mod config;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    compute_standings, create_tournament, default_participants, enter_result, generate_fixtures,
    generate_schedule, group_by_round, record_result, rename_participant, rounds_per_cycle,
    standings_to_csv, total_fixtures, update_tournament, validate_settings, DEFAULT_TEAMS,
};
pub use models::{
    Fixture, FixtureId, FixtureStatus, Format, Participant, ParticipantEntry, ParticipantId,
    Round, StandingsRow, Tournament, TournamentError, TournamentId, TournamentSettings,
    TournamentSummary, POINTS_FOR_DRAW, POINTS_FOR_WIN,
};
