//! # Rolegate
//!
//! A role-based permission engine: named groups with inheritance,
//! flattened into combined permission sets on reload, checked with
//! dot-segment wildcard matching per request.
//!
//! ## Overview
//!
//! The engine combines a definition store with an in-memory registry
//! snapshot:
//!
//! - **Create**: ensure a backing definition source exists (installing
//!   built-in defaults when absent). Never touches memory.
//! - **Reload**: parse definitions, flatten inheritance, and swap the
//!   registry snapshot atomically. Concurrent checks see either the old
//!   or the new registry in full, never a partial one.
//! - **Check**: evaluate a dotted permission string for a principal
//!   against the current snapshot. Pure, lock-free beyond one `Arc`
//!   clone, microseconds per call.
//! - **Save**: serialize the current registry back to the store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rolegate::{MemberIdentity, PermissionEngine, Principal, YamlStore};
//!
//! let engine = PermissionEngine::new(YamlStore::new("permissions.yaml"));
//! engine.create().unwrap();
//! engine.reload().unwrap();
//!
//! let sender = Principal::Member(MemberIdentity::new().with_current_group("admin"));
//! if engine.check_permission(&sender, "round.start") {
//!     // authorized
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `rolegate::core` - group model, registry, matcher, principals
//! - `rolegate::store` - definition store trait and backends

pub mod engine;
pub mod error;

// Re-export component crates
pub use rolegate_core as core;
pub use rolegate_store as store;

// Re-export main types for convenience
pub use engine::PermissionEngine;
pub use error::{EngineError, Result};

// Re-export commonly used component types
pub use rolegate_core::{
    Group, GroupRecord, GroupRegistry, MemberIdentity, Principal, ResolvePrincipal,
    UNIVERSAL_WILDCARD,
};
pub use rolegate_store::{DefinitionStore, MemoryStore, YamlStore};
