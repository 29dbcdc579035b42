use crate::config::ServiceParams;
use crate::error::LgResult;
use crate::protocol::{
    EntropyRequest, EntropyResponse, RunTestRequest, RunTestResponse, SelectionSync, ServiceReply,
    SyncAck, ENTROPY_PATH, RUN_TEST_PATH, UPDATE_LINK_PATH,
};
use crate::scoring::ScoringService;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Talks to a remote scoring service over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    client: Client,
    base_url: String,
}

impl HttpScoringClient {
    pub fn new(params: &ServiceParams) -> LgResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: params.scoring_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> LgResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let reply: ServiceReply<T> = response.json().await?;
        if !status.is_success() {
            warn!("Scoring service answered {} for {}", status, path);
        }
        reply.into_result()
    }
}

impl ScoringService for HttpScoringClient {
    async fn entropy(&self, request: &EntropyRequest) -> LgResult<EntropyResponse> {
        self.post(ENTROPY_PATH, request).await
    }

    async fn run_test(&self, request: &RunTestRequest) -> LgResult<RunTestResponse> {
        self.post(RUN_TEST_PATH, request).await
    }

    async fn sync_selection(&self, sync: &SelectionSync) -> LgResult<SyncAck> {
        self.post(UPDATE_LINK_PATH, sync).await
    }
}
