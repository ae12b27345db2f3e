//! Round-robin fixture generation (circle method) with optional round shuffling.

use crate::models::{Fixture, FixtureId, Format, Participant, Round, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// (home, away) participant indices for every fixture of one round.
type RoundPairs = Vec<(usize, usize)>;

/// Rounds needed for one full cycle: N - 1 for even N, N for odd N (one sits out each round).
pub fn rounds_per_cycle(participant_count: usize) -> usize {
    if participant_count % 2 == 0 {
        participant_count.saturating_sub(1)
    } else {
        participant_count
    }
}

/// Expected number of fixtures: N(N-1)/2 per cycle.
pub fn total_fixtures(participant_count: usize, format: Format) -> usize {
    participant_count * participant_count.saturating_sub(1) / 2 * format.cycles() as usize
}

/// Pairings of one cycle, by round, as indices into the participant list.
///
/// Even N: index 0 stays put and indices 1..N rotate past it.
/// Odd N: index `r` sits out round `r` and the other N - 1 are paired around the circle.
fn circle_rounds(n: usize) -> Vec<RoundPairs> {
    let m = n - 1;
    if n % 2 == 0 {
        let rotating = |k: usize| k + 1;
        (0..m)
            .map(|r| {
                let mut pairs = Vec::with_capacity(n / 2);
                pairs.push((0, rotating(r % m)));
                for i in 1..=(m - 1) / 2 {
                    pairs.push((rotating((r + i) % m), rotating((r + m - i) % m)));
                }
                pairs
            })
            .collect()
    } else {
        (0..n)
            .map(|r| {
                let sitting_out = r % n;
                let playing: Vec<usize> = (0..n).filter(|&k| k != sitting_out).collect();
                let mut pairs = Vec::with_capacity(m / 2);
                for i in 0..m / 2 {
                    let home = (r + i) % m;
                    let away = (r + m - i - 1) % m;
                    // Never true for a valid i; kept so a self-pairing can't slip through.
                    if home != away {
                        pairs.push((playing[home], playing[away]));
                    }
                }
                pairs
            })
            .collect()
    }
}

/// Generate the full fixture list.
///
/// 1. Build one cycle of rounds with the circle method.
/// 2. Per cycle (1 for single, 2 for double): optionally shuffle whole rounds with `rng`,
///    then number them from `1 + cycle * rounds_per_cycle`.
/// 3. Emit fixtures in round order with ids 1, 2, 3, ...
///
/// Duplicate names are not checked here; setup rejects them before generation.
pub fn generate_fixtures<R: Rng + ?Sized>(
    participants: &[Participant],
    format: Format,
    shuffle: bool,
    rng: &mut R,
) -> Result<Vec<Fixture>, TournamentError> {
    let n = participants.len();
    if n < 2 {
        return Err(TournamentError::NotEnoughParticipants);
    }

    let cycle_rounds = circle_rounds(n);
    let round_count = cycle_rounds.len();
    let mut fixtures = Vec::with_capacity(total_fixtures(n, format));
    let mut next_id: FixtureId = 1;

    for cycle in 0..format.cycles() as usize {
        let mut rounds = cycle_rounds.clone();
        if shuffle {
            rounds.shuffle(&mut *rng);
        }
        for (offset, pairs) in rounds.iter().enumerate() {
            let round = (1 + offset + cycle * round_count) as u32;
            for &(home, away) in pairs {
                fixtures.push(Fixture::new(
                    next_id,
                    round,
                    participants[home].id,
                    participants[away].id,
                ));
                next_id += 1;
            }
        }
    }

    log::debug!(
        "Generated {} fixtures over {} rounds for {} teams ({:?}, shuffle={})",
        fixtures.len(),
        round_count * format.cycles() as usize,
        n,
        format,
        shuffle
    );
    Ok(fixtures)
}

/// [`generate_fixtures`] with the thread-local RNG.
pub fn generate_schedule(
    participants: &[Participant],
    format: Format,
    shuffle: bool,
) -> Result<Vec<Fixture>, TournamentError> {
    generate_fixtures(participants, format, shuffle, &mut rand::thread_rng())
}

/// Fixtures grouped by round number, rounds ascending, fixture order kept within a round.
pub fn group_by_round(fixtures: &[Fixture]) -> Vec<Round> {
    let mut by_round: BTreeMap<u32, Vec<Fixture>> = BTreeMap::new();
    for f in fixtures {
        by_round.entry(f.round).or_default().push(f.clone());
    }
    by_round
        .into_iter()
        .map(|(number, fixtures)| Round { number, fixtures })
        .collect()
}
