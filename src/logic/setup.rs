//! Setup phase: validate the organizer's settings, create or reconfigure a tournament.

use crate::logic::schedule::generate_fixtures;
use crate::logic::standings::compute_standings;
use crate::models::{
    Participant, ParticipantEntry, ParticipantId, Tournament, TournamentError, TournamentSettings,
};
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Palette offered on a fresh setup form.
pub const DEFAULT_TEAMS: [(&str, &str); 6] = [
    ("Orange", "#f97316"),
    ("Blue", "#3b82f6"),
    ("Green", "#22c55e"),
    ("Grey", "#6b7280"),
    ("Team 5", "#8b5cf6"),
    ("Team 6", "#f59e0b"),
];

/// First `count` default teams (capped at the palette size).
pub fn default_participants(count: usize) -> Vec<ParticipantEntry> {
    DEFAULT_TEAMS
        .iter()
        .take(count)
        .map(|(name, color)| ParticipantEntry::new(*name, *color))
        .collect()
}

/// Check the settings before anything is generated.
///
/// Rejects an empty tournament name, fewer than 2 teams, empty team names,
/// and team names that collide case-insensitively.
pub fn validate_settings(settings: &TournamentSettings) -> Result<(), TournamentError> {
    if settings.name.trim().is_empty() {
        return Err(TournamentError::EmptyTournamentName);
    }
    if settings.participants.len() < 2 {
        return Err(TournamentError::NotEnoughParticipants);
    }
    let mut seen = HashSet::new();
    for entry in &settings.participants {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyParticipantName);
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(TournamentError::DuplicateParticipantName(name.to_string()));
        }
    }
    Ok(())
}

/// Create a tournament: validate, build participants, generate fixtures, zeroed table.
pub fn create_tournament<R: Rng + ?Sized>(
    settings: &TournamentSettings,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    validate_settings(settings)?;
    let participants: Vec<Participant> = settings
        .participants
        .iter()
        .map(|e| Participant::new(e.name.as_str(), e.color.as_str()))
        .collect();
    let fixtures = generate_fixtures(&participants, settings.format, settings.shuffle_rounds, rng)?;
    let standings = compute_standings(&fixtures, &participants)?;
    let tournament = Tournament {
        id: Uuid::new_v4(),
        name: settings.name.trim().to_string(),
        created_at: Utc::now(),
        format: settings.format,
        shuffle_rounds: settings.shuffle_rounds,
        participants,
        fixtures,
        standings,
    };
    log::info!(
        "Created tournament {} \"{}\" with {} teams, {} fixtures",
        tournament.id,
        tournament.name,
        tournament.participants.len(),
        tournament.fixtures.len()
    );
    Ok(tournament)
}

/// Apply edited settings to an existing tournament.
///
/// Fixtures are regenerated and all results are discarded. Teams whose name
/// matches an existing team (case-insensitive) keep their id.
pub fn update_tournament<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    settings: &TournamentSettings,
    rng: &mut R,
) -> Result<(), TournamentError> {
    validate_settings(settings)?;
    let participants: Vec<Participant> = settings
        .participants
        .iter()
        .map(|e| {
            let mut p = Participant::new(e.name.as_str(), e.color.as_str());
            if let Some(existing) = tournament.participants.iter().find(|x| x.same_identity(&p)) {
                p.id = existing.id;
            }
            p
        })
        .collect();
    let fixtures = generate_fixtures(&participants, settings.format, settings.shuffle_rounds, rng)?;
    let standings = compute_standings(&fixtures, &participants)?;

    tournament.name = settings.name.trim().to_string();
    tournament.format = settings.format;
    tournament.shuffle_rounds = settings.shuffle_rounds;
    tournament.participants = participants;
    tournament.fixtures = fixtures;
    tournament.standings = standings;
    log::info!(
        "Tournament {} reconfigured: {} teams, {} fixtures (results cleared)",
        tournament.id,
        tournament.participants.len(),
        tournament.fixtures.len()
    );
    Ok(())
}

/// Rename one team. Fixtures reference the stable id, so results are kept.
pub fn rename_participant(
    tournament: &mut Tournament,
    participant_id: ParticipantId,
    new_name: &str,
) -> Result<(), TournamentError> {
    let name = new_name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyParticipantName);
    }
    let identity = name.to_lowercase();
    if tournament
        .participants
        .iter()
        .any(|p| p.id != participant_id && p.identity() == identity)
    {
        return Err(TournamentError::DuplicateParticipantName(name.to_string()));
    }
    let mut participants = tournament.participants.clone();
    participants
        .iter_mut()
        .find(|p| p.id == participant_id)
        .ok_or(TournamentError::ParticipantNotFound(participant_id))?
        .name = name.to_string();
    let standings = compute_standings(&tournament.fixtures, &participants)?;
    tournament.participants = participants;
    tournament.standings = standings;
    Ok(())
}
