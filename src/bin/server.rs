use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coordle_engine::engine::{GameStatus, GuessResult, SecretReveal, Suggestion};
use coordle_engine::{EngineConfig, GuessOutcome, PuzzleEngine};

#[derive(Clone)]
struct AppState {
    engine: Arc<PuzzleEngine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuessRequest {
    #[serde(default)]
    guess: String,
    #[serde(default = "default_guess_count")]
    guess_count: u32,
}

fn default_guess_count() -> u32 { 1 }

#[derive(Debug, Deserialize)]
struct SuggestionsParams {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    timestamp: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coordle_server=debug,coordle_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env();
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    tracing::info!("🚀 Starting Coordle Server");
    tracing::info!("📦 Cities: {}", config.cities_path.display());
    tracing::info!("🔌 Port: {}", port);
    if config.debug_enabled {
        tracing::warn!("⚠️ Debug endpoint enabled, today's secret is public");
    }

    let engine = PuzzleEngine::new(config);

    // Fail fast on a broken seed file instead of on the first guess
    let catalog = engine.catalog().await?;
    tracing::info!("🌍 {} cities ready", catalog.len());

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/status", get(status_handler))
        .route("/api/guess", post(guess_handler))
        .route("/api/suggestions", get(suggestions_handler))
        .route("/api/debug", get(debug_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: coordle_engine::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn status_handler(State(state): State<AppState>) -> Json<GameStatus> {
    Json(state.engine.status(today()))
}

async fn guess_handler(
    State(state): State<AppState>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<GuessResult>, AppError> {
    tracing::debug!("Guess request: {:?}", req);

    if req.guess.trim().is_empty() {
        return Err(AppError::BadRequest("Guess is required".to_string()));
    }

    match state.engine.guess(&req.guess, req.guess_count, today()).await? {
        GuessOutcome::Scored(result) => Ok(Json(result)),
        GuessOutcome::NotFound { query } => Err(AppError::NotFound(format!("City not found: {}", query))),
    }
}

async fn suggestions_handler(
    State(state): State<AppState>,
    Query(params): Query<SuggestionsParams>,
) -> Result<Json<Vec<Suggestion>>, AppError> {
    let suggestions = state.engine.suggestions(&params.q, params.limit).await?;
    Ok(Json(suggestions))
}

async fn debug_handler(State(state): State<AppState>) -> Result<Json<SecretReveal>, AppError> {
    if !state.engine.config().debug_enabled {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    Ok(Json(state.engine.reveal(today()).await?))
}

// Error handling
enum AppError {
    BadRequest(String),
    NotFound(String),
    Engine(coordle_engine::CoordleError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Engine(coordle_engine::CoordleError::EmptyCatalog) => {
                (StatusCode::SERVICE_UNAVAILABLE, "No cities available".to_string())
            }
            AppError::Engine(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<coordle_engine::CoordleError> for AppError {
    fn from(err: coordle_engine::CoordleError) -> Self {
        AppError::Engine(err)
    }
}
