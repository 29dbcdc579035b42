pub mod entropy;
pub mod runs;

use crate::config::RegressionWeights;
use crate::error::LgResult;
use crate::protocol::{
    EntropyRequest, EntropyResponse, RunTestRequest, RunTestResponse, SelectionSync, SyncAck,
};
use tracing::debug;

/// The two scoring exchanges plus the selection sync notice.
///
/// Implementations never retry; failures are returned as-is for the caller
/// to display.
#[allow(async_fn_in_trait)]
pub trait ScoringService {
    async fn entropy(&self, request: &EntropyRequest) -> LgResult<EntropyResponse>;

    async fn run_test(&self, request: &RunTestRequest) -> LgResult<RunTestResponse>;

    async fn sync_selection(&self, sync: &SelectionSync) -> LgResult<SyncAck>;
}

/// In-process scorer; the HTTP server delegates to the same functions.
#[derive(Debug, Clone, Default)]
pub struct LocalScorer {
    pub weights: RegressionWeights,
}

impl LocalScorer {
    pub fn new(weights: RegressionWeights) -> Self {
        Self { weights }
    }

    pub fn score_entropy(&self, request: &EntropyRequest) -> LgResult<EntropyResponse> {
        let move_count = request.move_count.unwrap_or(0);
        let creativity = entropy::creativity(&request.links, move_count)?;
        debug!(
            "Entropy over {} links / {} moves = {:.4}",
            request.links.len(),
            move_count,
            creativity
        );
        Ok(EntropyResponse { creativity })
    }

    pub fn score_run_test(&self, request: &RunTestRequest) -> LgResult<RunTestResponse> {
        let response = runs::evaluate(&request.rows, request.move_count, &self.weights)?;
        debug!(
            "Run test over {} rows: runs={} prob_sum={:.4} p={:.4}",
            request.rows.len(),
            response.total_run_sum,
            response.total_probability_sum,
            response.p_value
        );
        Ok(response)
    }

    pub fn acknowledge(&self, sync: &SelectionSync) -> LgResult<SyncAck> {
        sync.link()?;
        Ok(SyncAck {
            message: "Link state updated".to_string(),
            link_id: sync.link_id.clone(),
            state: sync.state,
        })
    }
}

impl ScoringService for LocalScorer {
    async fn entropy(&self, request: &EntropyRequest) -> LgResult<EntropyResponse> {
        self.score_entropy(request)
    }

    async fn run_test(&self, request: &RunTestRequest) -> LgResult<RunTestResponse> {
        self.score_run_test(request)
    }

    async fn sync_selection(&self, sync: &SelectionSync) -> LgResult<SyncAck> {
        self.acknowledge(sync)
    }
}
