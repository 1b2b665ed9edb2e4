//! The simulation backend seen from the builder.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::wire::SimulationRequest;

/// Raw backend response. The builder passes it on untouched.
pub type SimulationResults = serde_json::Value;

/// A service that runs a circuit and returns its results.
#[async_trait]
pub trait SimulationService: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Run one simulation.
    async fn simulate(&self, request: &SimulationRequest) -> ClientResult<SimulationResults>;
}
