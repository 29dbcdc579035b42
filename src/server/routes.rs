use super::error::{AppError, AppResult};
use super::AppState;
use crate::catalog::{move_sequence, MAX_MOVE_COUNT};
use crate::protocol::{
    EntropyRequest, EntropyResponse, MovesResponse, RunTestRequest, RunTestResponse,
    SelectionSync, SyncAck,
};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

pub async fn root() -> &'static str {
    "Linkograph scoring API"
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Scoring services ready".to_string(),
    })
}

#[derive(Deserialize)]
pub struct MovesQuery {
    pub move_count: Option<usize>,
}

pub async fn linkography_data(
    query: Result<Query<MovesQuery>, QueryRejection>,
) -> AppResult<Json<MovesResponse>> {
    let Query(query) = query?;
    let move_count = query.move_count.ok_or_else(|| {
        AppError::BadRequest("The number of moves has not been set yet.".to_string())
    })?;
    if move_count > MAX_MOVE_COUNT {
        return Err(AppError::BadRequest(format!(
            "Move count {} exceeds the limit of {}",
            move_count, MAX_MOVE_COUNT
        )));
    }
    Ok(Json(MovesResponse {
        moves: move_sequence(move_count),
    }))
}

pub async fn update_link(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SelectionSync>, JsonRejection>,
) -> AppResult<Json<SyncAck>> {
    let Json(sync) = payload?;
    let ack = state.scorer.acknowledge(&sync)?;
    info!("🔗 Link {} -> {}", ack.link_id, ack.state);
    Ok(Json(ack))
}

pub async fn calculate_entropy(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EntropyRequest>, JsonRejection>,
) -> AppResult<Json<EntropyResponse>> {
    let Json(request) = payload?;
    Ok(Json(state.scorer.score_entropy(&request)?))
}

pub async fn calculate_run_test(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RunTestRequest>, JsonRejection>,
) -> AppResult<Json<RunTestResponse>> {
    let Json(request) = payload?;
    Ok(Json(state.scorer.score_run_test(&request)?))
}
