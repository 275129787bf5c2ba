//! # Rolegate Testkit
//!
//! Testing utilities for the Rolegate permission engine: canonical
//! registry fixtures and proptest generators for permission strings
//! and group definitions.

pub mod fixtures;
pub mod generators;

pub use fixtures::{engine_with_records, standard_records, TestRegistry};
