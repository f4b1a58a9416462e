//! Testing infrastructure for jurnal integration tests.
//!
//! - `MockGateway`: scripted gateway that records every request
//! - `fixtures`: entity builders and response envelopes
//! - `TestWorld`: isolated data directory for CLI process tests

pub mod fixtures;
pub mod gateway;
pub mod world;

pub use gateway::MockGateway;
pub use world::{CliResult, TestWorld};
