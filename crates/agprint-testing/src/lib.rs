//! Testing infrastructure for agprint integration tests.
//!
//! - `TestWorld`: isolated temp directory, input files, and a configured CLI
//! - `fixtures`: JSON builders for each record kind
//! - `assertions`: checks on rendered output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
