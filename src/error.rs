use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkographError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid move count '{0}': expected a non-negative integer")]
    InvalidMoveCount(String),

    #[error("Link {move1}-{move2} not found in the current catalog")]
    LinkNotFound { move1: usize, move2: usize },

    #[error("Invalid link id '{0}': expected '<move1>-<move2>'")]
    InvalidLinkId(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Scoring Service Error: {0}")]
    Scoring(String),
}

impl LinkographError {
    /// True for conditions the caller is expected to report and carry on from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LinkographError::LinkNotFound { .. })
    }
}

pub type LgResult<T> = Result<T, LinkographError>;
