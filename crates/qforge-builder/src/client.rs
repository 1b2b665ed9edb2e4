//! HTTP client for the simulation backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::BuilderConfig;
use crate::error::{ClientError, ClientResult};
use crate::service::{SimulationResults, SimulationService};
use crate::wire::SimulationRequest;

/// Backend endpoint of a locally running simulator.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/simulate";

/// `SimulationService` over HTTP: one JSON `POST` per simulation.
#[derive(Debug, Clone)]
pub struct HttpSimulationClient {
    /// HTTP client with timeouts configured.
    client: Client,
    /// Full URL of the simulate endpoint.
    endpoint: String,
}

impl HttpSimulationClient {
    /// Create a client with the default timeouts (60 s, 10 s to connect).
    pub fn new(endpoint: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeouts(endpoint, Duration::from_secs(60), Duration::from_secs(10))
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &BuilderConfig) -> ClientResult<Self> {
        Self::with_timeouts(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
            Duration::from_secs(config.connect_timeout_seconds),
        )
    }

    pub fn with_timeouts(
        endpoint: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Handle HTTP response: deserialize JSON or return an error.
    async fn handle_response(&self, response: reqwest::Response) -> ClientResult<SimulationResults> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl SimulationService for HttpSimulationClient {
    fn name(&self) -> &str {
        &self.endpoint
    }

    #[instrument(skip(self, request), fields(qubits = request.qubits, gates = request.gates.len()))]
    async fn simulate(&self, request: &SimulationRequest) -> ClientResult<SimulationResults> {
        debug!("POST {}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        self.handle_response(resp).await
    }
}
