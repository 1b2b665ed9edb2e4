//! User-facing notifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Info,
    Destructive,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: Level,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: Level::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: Level::Destructive,
        }
    }

    pub fn qubit_exists(index: u32) -> Self {
        Self::destructive("Qubit already exists", format!("q{index} is already in the circuit"))
    }

    pub fn qubit_added(index: u32) -> Self {
        Self::info("Qubit added", format!("q{index} added to circuit"))
    }

    pub fn no_qubits() -> Self {
        Self::destructive("No circuit to simulate", "Add at least one qubit to begin")
    }

    pub fn simulation_complete() -> Self {
        Self::info("Simulation complete", "Circuit simulation finished successfully")
    }

    pub fn simulation_failed() -> Self {
        Self::destructive("Simulation failed", "An error occurred during simulation")
    }

    pub fn code_exported() -> Self {
        Self::info("Code exported", "Circuit data logged to console")
    }

    pub fn is_destructive(&self) -> bool {
        self.level == Level::Destructive
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
