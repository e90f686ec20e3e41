use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use mobilityx::catalog;
use mobilityx::config::AppConfig;
use mobilityx::handlers;
use mobilityx::services::ai::openai::OpenAiProvider;
use mobilityx::services::ai::LlmProvider;
use mobilityx::services::places::google::GooglePlacesProvider;
use mobilityx::services::places::PlacesProvider;
use mobilityx::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let routes = catalog::load_routes(config.routes_path.as_deref())?;
    let gazetteer = catalog::load_locations(config.locations_path.as_deref())?;
    tracing::info!(
        routes = routes.len(),
        locations = gazetteer.len(),
        "catalog loaded"
    );

    let llm: Option<Box<dyn LlmProvider>> = if config.openai_api_key.is_empty() {
        tracing::info!("OPENAI_API_KEY not set, query parsing uses the local parser");
        None
    } else {
        tracing::info!("using OpenAI for query parsing (model: {})", config.openai_model);
        Some(Box::new(OpenAiProvider::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )))
    };

    let places: Option<Box<dyn PlacesProvider>> = match config.places_backend.as_str() {
        "google" => {
            anyhow::ensure!(
                !config.google_maps_api_key.is_empty(),
                "GOOGLE_MAPS_API_KEY must be set when PLACES_BACKEND=google"
            );
            tracing::info!("using Google Places for location search");
            Some(Box::new(GooglePlacesProvider::new(
                config.google_maps_api_key.clone(),
            )))
        }
        _ => {
            tracing::info!("using local gazetteer for location search");
            None
        }
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        llm,
        places,
        routes,
        gazetteer,
        started_at: Instant::now(),
    });

    let app = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/query", post(handlers::query::parse_query))
        .route("/recommend", post(handlers::recommend::get_recommendations))
        .route("/locations/search", get(handlers::locations::search))
        .route("/locations/:id", get(handlers::locations::details))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
