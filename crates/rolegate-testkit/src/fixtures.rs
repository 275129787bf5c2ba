//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use rolegate::PermissionEngine;
use rolegate_core::{GroupRecord, GroupRegistry, MemberIdentity, Principal};
use rolegate_store::MemoryStore;

/// The canonical three-group definition set used across tests:
/// `admin` inherits `mod`, `mod` grants `kick.*` and `mute.player`,
/// and `default` is the fallback with `chat.send` and `help`.
///
/// `mod` is declared after `admin` so the reverse inheritance pass
/// resolves it first.
pub fn standard_records() -> Vec<(String, GroupRecord)> {
    vec![
        (
            "admin".to_string(),
            GroupRecord {
                permissions: vec!["ban.player".to_string()],
                inheritance: vec!["mod".to_string()],
                is_default: false,
            },
        ),
        (
            "mod".to_string(),
            GroupRecord {
                permissions: vec!["kick.*".to_string(), "mute.player".to_string()],
                inheritance: vec!["default".to_string()],
                is_default: false,
            },
        ),
        (
            "default".to_string(),
            GroupRecord {
                permissions: vec!["chat.send".to_string(), "help".to_string()],
                inheritance: vec![],
                is_default: true,
            },
        ),
    ]
}

/// Build an engine over a seeded memory store and reload it.
pub fn engine_with_records(
    records: Vec<(String, GroupRecord)>,
) -> PermissionEngine<MemoryStore> {
    let engine = PermissionEngine::new(MemoryStore::with_records(records));
    engine
        .reload()
        .expect("memory store reload cannot fail on seeded records");
    engine
}

/// A resolved registry plus principal constructors, for tests that
/// poke the core directly.
pub struct TestRegistry {
    pub registry: GroupRegistry,
}

impl TestRegistry {
    /// Build and resolve a registry from the standard records.
    pub fn standard() -> Self {
        Self::from_records(standard_records())
    }

    /// Build and resolve a registry from the given records.
    pub fn from_records(records: Vec<(String, GroupRecord)>) -> Self {
        let mut registry = GroupRegistry::from_records(records);
        registry.resolve_inheritance();
        Self { registry }
    }

    /// A member principal assigned to the given group.
    pub fn member(group: &str) -> Principal {
        Principal::Member(MemberIdentity::new().with_current_group(group))
    }
}
