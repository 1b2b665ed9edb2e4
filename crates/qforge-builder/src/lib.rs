//! Qforge circuit builder orchestration.
//!
//! [`CircuitBuilder`] owns the canonical [`qforge_ir::CircuitState`], routes
//! canvas input through [`qforge_canvas`], and runs simulations through a
//! [`SimulationService`]:
//!
//! ```text
//! CircuitBuilder ──SimulationRequest──▶ SimulationService ──JSON──▶ ResultsView
//!                                        └ HttpSimulationClient (POST /simulate)
//! ```
//!
//! Only one simulation is in flight at a time ([`RunTracker`]). Failures
//! never touch the circuit or earlier results; they surface as a
//! [`BuilderError`] plus a user [`Notification`].

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod run;
pub mod service;
pub mod wire;

pub use builder::{CircuitBuilder, QUBIT_SLOTS, ResultsView};
pub use client::{DEFAULT_ENDPOINT, HttpSimulationClient};
pub use config::{BuilderConfig, ConfigError};
pub use error::{BuilderError, BuilderResult, ClientError, ClientResult};
pub use notify::{Level, Notification};
pub use run::{RunStatus, RunTracker};
pub use service::{SimulationResults, SimulationService};
pub use wire::{DEFAULT_SHOTS, GateRecord, SimulationRequest};
