//! Wire shapes exchanged with the scoring service.
//!
//! Indices are 0-based throughout; only display text uses 1-based move numbers.

use crate::aggregate::{LinkRef, RunTestRow};
use crate::catalog::{LinkId, Move};
use crate::error::{LgResult, LinkographError};
use serde::{Deserialize, Serialize};

pub const ENTROPY_PATH: &str = "/api/calculate_entropy";
pub const RUN_TEST_PATH: &str = "/api/calculate_run_test";
pub const UPDATE_LINK_PATH: &str = "/api/update_link";
pub const MOVES_PATH: &str = "/api/linkography_data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyRequest {
    #[serde(default)]
    pub links: Vec<LinkRef>,
    #[serde(default)]
    pub move_count: Option<usize>,
}

impl EntropyRequest {
    pub fn new(links: Vec<LinkRef>, move_count: usize) -> Self {
        Self {
            links,
            move_count: Some(move_count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyResponse {
    pub creativity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTestRequest {
    #[serde(default)]
    pub rows: Vec<RunTestRow>,
    #[serde(default)]
    pub move_count: Option<usize>,
}

impl RunTestRequest {
    pub fn new(rows: Vec<RunTestRow>, move_count: usize) -> Self {
        Self {
            rows,
            move_count: Some(move_count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunTestResponse {
    pub p_value: f64,
    pub total_run_sum: usize,
    pub total_probability_sum: f64,
}

/// Fire-and-forget notice that a link's selection changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSync {
    pub link_id: String,
    pub state: bool,
}

impl SelectionSync {
    pub fn new(id: LinkId, state: bool) -> Self {
        Self {
            link_id: id.to_string(),
            state,
        }
    }

    pub fn link(&self) -> LgResult<LinkId> {
        self.link_id.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAck {
    pub message: String,
    pub link_id: String,
    pub state: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesResponse {
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Either a result payload or an `{ "error": .. }` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceReply<T> {
    Failure(ErrorBody),
    Success(T),
}

impl<T> ServiceReply<T> {
    pub fn into_result(self) -> LgResult<T> {
        match self {
            ServiceReply::Success(v) => Ok(v),
            ServiceReply::Failure(body) => Err(LinkographError::Scoring(body.error)),
        }
    }
}
