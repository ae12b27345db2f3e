//! Standings: fold completed fixtures into per-team rows and rank them.

use crate::models::{Fixture, Participant, ParticipantId, StandingsRow, TournamentError};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compute the league table from scratch.
///
/// Rows come out sorted by points, then goal difference, then goals for (all descending).
/// The sort is stable, so teams level on all three keep participant order.
/// Fails with `UnknownParticipant` if any fixture names a team not in `participants`.
pub fn compute_standings(
    fixtures: &[Fixture],
    participants: &[Participant],
) -> Result<Vec<StandingsRow>, TournamentError> {
    let mut rows: Vec<StandingsRow> = participants.iter().cloned().map(StandingsRow::new).collect();
    let index: HashMap<ParticipantId, usize> = participants
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    let lookup = |id: ParticipantId| {
        index
            .get(&id)
            .copied()
            .ok_or(TournamentError::UnknownParticipant(id))
    };

    for fixture in fixtures {
        let home = lookup(fixture.home)?;
        let away = lookup(fixture.away)?;
        if let Some((home_score, away_score)) = fixture.score() {
            rows[home].record(home_score, away_score);
            rows[away].record(away_score, home_score);
        }
    }

    for row in &mut rows {
        row.goal_difference = to_signed(row.goals_for) - to_signed(row.goals_against);
    }

    rows.sort_by(rank_order);
    Ok(rows)
}

/// Goal totals as i64; both operands are non-negative, so their difference can't overflow.
fn to_signed(goals: u64) -> i64 {
    i64::try_from(goals).unwrap_or(i64::MAX)
}

/// Ranking comparator: points, goal difference, goals for; higher first.
fn rank_order(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}
