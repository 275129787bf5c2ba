//! # Rolegate Store
//!
//! Definition persistence for the Rolegate permission engine. Group
//! definitions live in a durable store behind the [`DefinitionStore`]
//! trait; the engine stays agnostic of where and how.
//!
//! ## Key Types
//!
//! - [`DefinitionStore`] - the trait for loading and saving definitions
//! - [`YamlStore`] - YAML file backend with idempotent bootstrap
//! - [`MemoryStore`] - in-memory backend for tests
//!
//! ## Design Notes
//!
//! - **Order is data**: the reverse-pass inheritance flattening and the
//!   default-group tie-break both depend on declaration order, so
//!   `load` returns records in authored order and `save` writes them in
//!   registry order.
//! - **Parse failures are hard errors**: a reload must either apply a
//!   fully parsed definition set or leave the previous one in effect.
//! - **Bootstrap is idempotent**: `ensure` installs built-in defaults
//!   only when the backing source is absent, and is safe to call on
//!   every startup.

pub mod defaults;
pub mod error;
pub mod memory;
pub mod traits;
pub mod yaml;

pub use defaults::builtin_definitions;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::DefinitionStore;
pub use yaml::YamlStore;
