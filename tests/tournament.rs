//! Integration tests for setup, result entry, rename, export and JSON round trip.

use league_tournament_web::{
    create_tournament, default_participants, enter_result, record_result, rename_participant,
    standings_to_csv, update_tournament, validate_settings, FixtureStatus, Format,
    ParticipantEntry, Tournament, TournamentError, TournamentSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn settings(names: &[&str], format: Format) -> TournamentSettings {
    TournamentSettings {
        name: "Sunday League".to_string(),
        format,
        shuffle_rounds: false,
        participants: names
            .iter()
            .map(|n| ParticipantEntry::new(*n, "#3b82f6"))
            .collect(),
    }
}

fn tournament(names: &[&str]) -> Tournament {
    create_tournament(&settings(names, Format::Single), &mut StdRng::seed_from_u64(1)).unwrap()
}

#[test]
fn validation_rejects_bad_setup() {
    let mut s = settings(&["A", "B"], Format::Single);
    s.name = "   ".to_string();
    assert_eq!(validate_settings(&s), Err(TournamentError::EmptyTournamentName));

    let s = settings(&["A"], Format::Single);
    assert_eq!(validate_settings(&s), Err(TournamentError::NotEnoughParticipants));

    let s = settings(&["A", " "], Format::Single);
    assert_eq!(validate_settings(&s), Err(TournamentError::EmptyParticipantName));

    let s = settings(&["Blue", "Red", "blue"], Format::Single);
    assert!(matches!(
        validate_settings(&s),
        Err(TournamentError::DuplicateParticipantName(_))
    ));

    assert_eq!(validate_settings(&settings(&["A", "B"], Format::Double)), Ok(()));
}

#[test]
fn create_generates_fixtures_and_zero_table() {
    let t = tournament(&["Orange", "Blue", "Green", "Grey"]);
    assert_eq!(t.name, "Sunday League");
    assert_eq!(t.participants.len(), 4);
    assert_eq!(t.fixtures.len(), 6);
    assert_eq!(t.standings.len(), 4);
    assert!(t.standings.iter().all(|r| r.points == 0));
    assert_eq!(t.progress(), (0, 6));
    assert!(!t.is_finished());
}

#[test]
fn create_fails_on_invalid_settings() {
    let s = settings(&["A", "a"], Format::Single);
    assert!(create_tournament(&s, &mut StdRng::seed_from_u64(1)).is_err());
}

#[test]
fn record_result_changes_exactly_one_fixture() {
    let t = tournament(&["A", "B", "C", "D"]);
    let updated = record_result(&t.fixtures, 4, 2, 1).unwrap();
    assert_eq!(updated.len(), t.fixtures.len());
    for (before, after) in t.fixtures.iter().zip(&updated) {
        if after.id == 4 {
            assert_eq!(after.status, FixtureStatus::Completed);
            assert_eq!(after.score(), Some((2, 1)));
            assert_eq!((after.home, after.away, after.round), (before.home, before.away, before.round));
        } else {
            assert_eq!(before, after);
        }
    }
    // Input snapshot untouched.
    assert!(t.fixtures.iter().all(|f| f.status == FixtureStatus::Pending));
}

#[test]
fn record_result_rejects_unknown_fixture() {
    let t = tournament(&["A", "B", "C"]);
    assert_eq!(
        record_result(&t.fixtures, 99, 1, 0),
        Err(TournamentError::FixtureNotFound(99))
    );
}

#[test]
fn re_entering_a_result_overwrites_it() {
    let mut t = tournament(&["A", "B"]);
    enter_result(&mut t, 1, 3, 0).unwrap();
    enter_result(&mut t, 1, 0, 0).unwrap();
    assert_eq!(t.fixture(1).unwrap().score(), Some((0, 0)));
    assert!(t.standings.iter().all(|r| r.draws == 1 && r.points == 1));
}

#[test]
fn enter_result_recomputes_standings() {
    let mut t = tournament(&["A", "B", "C", "D"]);
    let first = t.fixtures[0].clone();
    enter_result(&mut t, first.id, 2, 1).unwrap();

    let home = t.participant(first.home).unwrap().name.clone();
    assert_eq!(t.standings[0].participant.name, home);
    assert_eq!(t.standings[0].points, 3);
    assert_eq!(t.progress(), (1, 6));
}

#[test]
fn failed_entry_leaves_tournament_unchanged() {
    let mut t = tournament(&["A", "B", "C"]);
    enter_result(&mut t, 1, 1, 0).unwrap();
    let before = t.clone();
    assert_eq!(enter_result(&mut t, 42, 1, 1), Err(TournamentError::FixtureNotFound(42)));
    assert_eq!(t, before);
}

#[test]
fn maximum_scores_can_be_entered_for_every_fixture() {
    let mut t = tournament(&["A", "B", "C"]);
    for id in 1..=3 {
        enter_result(&mut t, id, u32::MAX, 0).unwrap();
    }
    let scored: u64 = t.standings.iter().map(|r| r.goals_for).sum();
    assert_eq!(scored, 3 * u64::from(u32::MAX));
    let points: u32 = t.standings.iter().map(|r| r.points).sum();
    assert_eq!(points, 9);
    assert!(t.is_finished());
}

#[test]
fn finished_once_every_fixture_has_a_result() {
    let mut t = tournament(&["A", "B", "C"]);
    for id in 1..=3 {
        enter_result(&mut t, id, 1, 0).unwrap();
    }
    assert!(t.is_finished());
}

#[test]
fn rename_keeps_fixtures_and_results() {
    let mut t = tournament(&["A", "B", "C"]);
    enter_result(&mut t, 1, 2, 0).unwrap();
    let winner = t.fixture(1).unwrap().home;
    let fixtures_before = t.fixtures.clone();

    rename_participant(&mut t, winner, "  Champions ").unwrap();

    assert_eq!(t.fixtures, fixtures_before);
    assert_eq!(t.participant(winner).unwrap().name, "Champions");
    assert_eq!(t.standings[0].participant.name, "Champions");
    assert_eq!(t.standings[0].points, 3);
}

#[test]
fn rename_rejects_duplicates_and_unknown_ids() {
    let mut t = tournament(&["A", "B"]);
    let a = t.participants[0].id;
    assert!(matches!(
        rename_participant(&mut t, a, "b"),
        Err(TournamentError::DuplicateParticipantName(_))
    ));
    assert_eq!(
        rename_participant(&mut t, a, ""),
        Err(TournamentError::EmptyParticipantName)
    );
    let stranger = Uuid::new_v4();
    assert_eq!(
        rename_participant(&mut t, stranger, "Z"),
        Err(TournamentError::ParticipantNotFound(stranger))
    );
    // Changing only the case of your own name is allowed.
    rename_participant(&mut t, a, "a").unwrap();
    assert_eq!(t.participants[0].name, "a");
}

#[test]
fn update_regenerates_and_keeps_ids_for_same_names() {
    let mut t = tournament(&["A", "B", "C"]);
    enter_result(&mut t, 1, 1, 0).unwrap();
    let id_a = t.participants[0].id;
    let created_at = t.created_at;
    let tournament_id = t.id;

    let new_settings = settings(&["a", "B", "C", "D"], Format::Double);
    update_tournament(&mut t, &new_settings, &mut StdRng::seed_from_u64(2)).unwrap();

    assert_eq!(t.id, tournament_id);
    assert_eq!(t.created_at, created_at);
    assert_eq!(t.format, Format::Double);
    assert_eq!(t.participants[0].id, id_a);
    assert_eq!(t.participants[0].name, "a");
    assert_eq!(t.fixtures.len(), 12);
    assert_eq!(t.progress(), (0, 12));
    assert!(t.standings.iter().all(|r| r.played == 0));
}

#[test]
fn update_with_invalid_settings_changes_nothing() {
    let mut t = tournament(&["A", "B", "C"]);
    let before = t.clone();
    let bad = settings(&["A"], Format::Single);
    assert_eq!(
        update_tournament(&mut t, &bad, &mut StdRng::seed_from_u64(2)),
        Err(TournamentError::NotEnoughParticipants)
    );
    assert_eq!(t, before);
}

#[test]
fn json_round_trip_is_lossless() {
    let mut t = tournament(&["A", "B", "C", "D"]);
    enter_result(&mut t, 2, 3, 3).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: Tournament = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[test]
fn settings_deserialize_with_defaults() {
    let json = r##"{"name":"Cup","participants":[{"name":"A"},{"name":"B","color":"#fff"}]}"##;
    let s: TournamentSettings = serde_json::from_str(json).unwrap();
    assert_eq!(s.format, Format::Single);
    assert!(!s.shuffle_rounds);
    assert_eq!(s.participants[0].color, "");
    assert_eq!(s.participants[1].color, "#fff");
}

#[test]
fn negative_score_is_rejected_by_deserialization() {
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct Body {
        home_score: u32,
        away_score: u32,
    }
    assert!(serde_json::from_str::<Body>(r#"{"home_score":-1,"away_score":0}"#).is_err());
    assert!(serde_json::from_str::<Body>(r#"{"home_score":1.5,"away_score":0}"#).is_err());
}

#[test]
fn csv_export_has_header_and_ranked_rows() {
    let mut t = tournament(&["A", "B", "C"]);
    let first = t.fixtures[0].clone();
    enter_result(&mut t, first.id, 0, 2).unwrap();
    let csv = standings_to_csv(&t.standings).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "position,name,played,wins,draws,losses,goals_for,goals_against,goal_difference,points"
    );
    let away = &t.participant(first.away).unwrap().name;
    assert_eq!(lines[1], format!("1,{away},1,1,0,0,2,0,2,3"));
}

#[test]
fn default_participants_come_from_palette() {
    let teams = default_participants(4);
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Orange", "Blue", "Green", "Grey"]);
    assert_eq!(default_participants(10).len(), 6);
}

#[test]
fn summary_reports_progress() {
    let mut t = tournament(&["A", "B", "C", "D"]);
    enter_result(&mut t, 1, 1, 0).unwrap();
    let s = t.summary();
    assert_eq!(s.participant_count, 4);
    assert_eq!((s.completed_fixtures, s.total_fixtures), (1, 6));
}
