//! CSV export of the league table.

use crate::models::{StandingsRow, TournamentError};

const HEADER: [&str; 10] = [
    "position",
    "name",
    "played",
    "wins",
    "draws",
    "losses",
    "goals_for",
    "goals_against",
    "goal_difference",
    "points",
];

/// Write the ranked rows as CSV (header + one line per team, positions from 1).
pub fn standings_to_csv(rows: &[StandingsRow]) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    for (i, row) in rows.iter().enumerate() {
        writer
            .write_record([
                (i + 1).to_string(),
                row.participant.name.clone(),
                row.played.to_string(),
                row.wins.to_string(),
                row.draws.to_string(),
                row.losses.to_string(),
                row.goals_for.to_string(),
                row.goals_against.to_string(),
                row.goal_difference.to_string(),
                row.points.to_string(),
            ])
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}
