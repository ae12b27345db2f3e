//! Result entry: record a score for one fixture and re-derive the table.

use crate::logic::standings::compute_standings;
use crate::models::{Fixture, FixtureId, Tournament, TournamentError};

/// Return a new fixture list where fixture `fixture_id` is completed with the given score.
///
/// All other fixtures are copied unchanged. Entering a result for an already
/// completed fixture overwrites the previous score.
pub fn record_result(
    fixtures: &[Fixture],
    fixture_id: FixtureId,
    home_score: u32,
    away_score: u32,
) -> Result<Vec<Fixture>, TournamentError> {
    if !fixtures.iter().any(|f| f.id == fixture_id) {
        return Err(TournamentError::FixtureNotFound(fixture_id));
    }
    Ok(fixtures
        .iter()
        .map(|f| {
            if f.id == fixture_id {
                f.complete(home_score, away_score)
            } else {
                f.clone()
            }
        })
        .collect())
}

/// Record a result on the tournament and recompute its standings.
///
/// Both the new fixtures and the new table are built before either is stored,
/// so on error the tournament is left exactly as it was.
pub fn enter_result(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    home_score: u32,
    away_score: u32,
) -> Result<(), TournamentError> {
    let fixtures = record_result(&tournament.fixtures, fixture_id, home_score, away_score)?;
    let standings = compute_standings(&fixtures, &tournament.participants)?;
    tournament.fixtures = fixtures;
    tournament.standings = standings;
    log::info!(
        "Tournament {}: fixture {} recorded as {}-{}",
        tournament.id,
        fixture_id,
        home_score,
        away_score
    );
    Ok(())
}
