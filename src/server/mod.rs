//! HTTP face of the scoring services.

pub mod error;
pub mod routes;

use crate::config::RegressionWeights;
use crate::error::LgResult;
use crate::protocol::{ENTROPY_PATH, MOVES_PATH, RUN_TEST_PATH, UPDATE_LINK_PATH};
use crate::scoring::LocalScorer;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AppState {
    pub scorer: LocalScorer,
}

impl AppState {
    pub fn new(weights: RegressionWeights) -> Self {
        Self {
            scorer: LocalScorer::new(weights),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route(MOVES_PATH, get(routes::linkography_data))
        .route(UPDATE_LINK_PATH, post(routes::update_link))
        .route(ENTROPY_PATH, post(routes::calculate_entropy))
        .route(RUN_TEST_PATH, post(routes::calculate_run_test))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves on an already bound listener until the task is dropped.
pub async fn serve_on(listener: TcpListener, weights: RegressionWeights) -> LgResult<()> {
    let app = router(Arc::new(AppState::new(weights)));
    info!("🚀 Scoring service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn serve(addr: SocketAddr, weights: RegressionWeights) -> LgResult<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, weights).await
}
