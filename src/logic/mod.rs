//! League business logic: setup, schedule generation, result entry, standings, export.

mod export;
mod results;
mod schedule;
mod setup;
mod standings;

pub use export::standings_to_csv;
pub use results::{enter_result, record_result};
pub use schedule::{
    generate_fixtures, generate_schedule, group_by_round, rounds_per_cycle, total_fixtures,
};
pub use setup::{
    create_tournament, default_participants, rename_participant, update_tournament,
    validate_settings, DEFAULT_TEAMS,
};
pub use standings::compute_standings;
