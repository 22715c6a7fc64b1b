// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, routing::post, Router};
use tower_http::compression::predicate::{DefaultPredicate, NotForContentType, Predicate};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::edit_service::EditService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::in_memory_repository::InMemoryDashboardRepository;
use crate::infrastructure::mock_review_generator::{MockReviewGenerator, FETCH_DELAY};
use crate::infrastructure::ndjson_stream::NDJSON_CONTENT_TYPE;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_form_action, create_dashboard, delete_dashboard, edit_dashboard_form, get_dashboard,
    health_check, list_dashboards, new_dashboard_form, stream_dashboard, update_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let app_config = load_app_config()?;

    // Initialize tracing; RUST_LOG overrides the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create repository and review source (infrastructure layer)
    let repository = Arc::new(InMemoryDashboardRepository::seeded());
    let review_source = Arc::new(match app_config.reviews.seed {
        Some(seed) => {
            tracing::info!("Generating reviews from fixed seed {}", seed);
            MockReviewGenerator::with_seed(seed, FETCH_DELAY)
        }
        None => MockReviewGenerator::from_entropy(FETCH_DELAY),
    });

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository.clone(), review_source);
    let streaming_service = StreamingDashboardService::new(dashboard_service.clone());
    let edit_service = EditService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
        edit_service,
    });

    // Streamed detail views must reach the client line by line, so they are
    // left uncompressed
    let compression = CompressionLayer::new().compress_when(
        DefaultPredicate::new().and(NotForContentType::const_new(NDJSON_CONTENT_TYPE)),
    );

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards", get(list_dashboards).post(create_dashboard))
        .route("/dashboards/new", get(new_dashboard_form))
        .route(
            "/dashboards/:id",
            get(get_dashboard).put(update_dashboard).delete(delete_dashboard),
        )
        .route("/dashboards/:id/stream", get(stream_dashboard))
        .route("/dashboards/:id/edit", get(edit_dashboard_form))
        .route("/forms/actions", post(apply_form_action))
        .layer(compression)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind_addr.parse()?;
    tracing::info!("Starting review-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
