//! Testing infrastructure for llmram integration tests.
//!
//! - `TestWorld`: isolated workspace directory plus a configured CLI runner
//! - `assertions`: checks against the JSON envelope the CLI prints

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
