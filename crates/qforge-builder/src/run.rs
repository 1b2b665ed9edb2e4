//! Lifecycle of a simulation run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BuilderError, BuilderResult};

/// Status of the most recent simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No simulation has been started.
    #[default]
    Idle,
    /// A request is outstanding.
    Running,
    /// The last request returned results.
    Succeeded,
    /// The last request failed.
    Failed,
}

impl RunStatus {
    /// Whether a new run may start.
    pub fn can_start(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::Running => write!(f, "running"),
            RunStatus::Succeeded => write!(f, "succeeded"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Tracks the single in-flight simulation.
///
/// `start` moves to `Running`; `finish` always leaves it again, whatever
/// the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTracker {
    status: RunStatus,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Message of the last failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Enter `Running`.
    pub fn start(&mut self) -> BuilderResult<()> {
        if !self.status.can_start() {
            return Err(BuilderError::AlreadyRunning);
        }
        self.status = RunStatus::Running;
        self.started_at = Some(Utc::now());
        self.finished_at = None;
        Ok(())
    }

    /// Leave `Running` with the given outcome.
    pub fn finish(&mut self, outcome: Result<(), String>) -> BuilderResult<RunStatus> {
        if !self.is_running() {
            return Err(BuilderError::NotRunning);
        }
        self.finished_at = Some(Utc::now());
        self.status = match outcome {
            Ok(()) => {
                self.last_error = None;
                RunStatus::Succeeded
            }
            Err(message) => {
                self.last_error = Some(message);
                RunStatus::Failed
            }
        };
        Ok(self.status)
    }

    /// Duration of the last finished run.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        Some(self.finished_at? - self.started_at?)
    }
}
