//! Testing infrastructure for msgcal integration tests.
//!
//! - `TestWorld`: builds a Discord-style data package in a temp directory
//!   and runs the `msgcal` binary against it

pub mod world;

pub use world::{CliResult, TestWorld};
