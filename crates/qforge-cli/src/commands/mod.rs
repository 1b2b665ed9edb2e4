//! CLI command implementations.

pub mod bloch;
pub mod common;
pub mod export;
pub mod run;
pub mod version;
