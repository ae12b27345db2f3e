//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! INACTIVITY_TIMEOUT_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use league_tournament_web::{
    create_tournament, enter_result, group_by_round, rename_participant, standings_to_csv,
    update_tournament, FixtureId, ParticipantId, ServerConfig, Tournament, TournamentId,
    TournamentSettings, TournamentSummary,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after the inactivity timeout.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ResultBody {
    home_score: u32,
    away_score: u32,
}

#[derive(Deserialize)]
struct RenameBody {
    name: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and fixture id (e.g. /api/tournaments/{id}/fixtures/{fixture_id})
#[derive(Deserialize)]
struct TournamentFixturePath {
    id: TournamentId,
    fixture_id: FixtureId,
}

/// Path segments: tournament id and participant id.
#[derive(Deserialize)]
struct TournamentParticipantPath {
    id: TournamentId,
    participant_id: ParticipantId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List all tournaments (summaries, oldest first).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut summaries: Vec<TournamentSummary> =
        g.values().map(|e| e.tournament.summary()).collect();
    summaries.sort_by_key(|s| s.created_at);
    HttpResponse::Ok().json(summaries)
}

/// Create a tournament from the setup form; fixtures are generated immediately.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<TournamentSettings>) -> HttpResponse {
    let tournament = match create_tournament(&body, &mut rand::thread_rng()) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => not_found(),
    }
}

/// Replace the settings (name, format, shuffle, teams). Regenerates fixtures and clears results.
#[put("/api/tournaments/{id}")]
async fn api_update_tournament(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TournamentSettings>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match update_tournament(t, &body, &mut rand::thread_rng()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Delete a tournament.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.remove(&path.id) {
        Some(entry) => {
            log::info!("Deleted tournament {} \"{}\"", path.id, entry.tournament.name);
            HttpResponse::NoContent().finish()
        }
        None => not_found(),
    }
}

/// Fixtures grouped by round.
#[get("/api/tournaments/{id}/rounds")]
async fn api_rounds(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(group_by_round(&entry.tournament.fixtures))
        }
        None => not_found(),
    }
}

/// Enter (or overwrite) the score of one fixture; standings are recomputed.
#[put("/api/tournaments/{id}/fixtures/{fixture_id}/result")]
async fn api_enter_result(
    state: AppState,
    path: Path<TournamentFixturePath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match enter_result(t, path.fixture_id, body.home_score, body.away_score) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Rename a team without touching fixtures or results.
#[put("/api/tournaments/{id}/participants/{participant_id}/name")]
async fn api_rename_participant(
    state: AppState,
    path: Path<TournamentParticipantPath>,
    body: Json<RenameBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match rename_participant(t, path.participant_id, &body.name) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Current league table.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament.standings)
        }
        None => not_found(),
    }
}

/// League table as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match standings_to_csv(&entry.tournament.standings) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"standings-{}.csv\"", path.id),
            ))
            .body(csv),
        Err(e) => {
            log::warn!("Standings export for {} failed: {}", path.id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: periodically remove tournaments that have been inactive too long
    let state_cleanup = state.clone();
    let inactivity_timeout = config.inactivity_timeout;
    let cleanup_interval = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive tournament(s) (no activity for {}h)",
                    removed,
                    inactivity_timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_rounds)
            .service(api_get_tournament)
            .service(api_update_tournament)
            .service(api_delete_tournament)
            .service(api_enter_result)
            .service(api_rename_participant)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

