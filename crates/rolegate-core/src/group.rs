//! Group definitions and their runtime form.
//!
//! [`GroupRecord`] is the serde-facing shape of one group as authored in
//! the definition source. [`Group`] is the runtime form held by the
//! registry, carrying the derived combined permission set next to the
//! authored data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matcher::{self, UNIVERSAL_WILDCARD};

/// One group as it appears in the definition source.
///
/// Unknown extra fields in the source are ignored on read, including a
/// `combined_permissions` field some writers emit; the combined set is
/// always recomputed from scratch on reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Permission strings explicitly granted to this group.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Names of groups this group inherits from, in authored order.
    /// Names that match no group are ignored.
    #[serde(default)]
    pub inheritance: Vec<String>,

    /// Marks the fallback group for principals with no resolvable group.
    #[serde(default)]
    pub is_default: bool,
}

/// A named role held by the registry.
///
/// The authored fields round-trip through [`GroupRecord`] untouched; the
/// combined set is derived by [`crate::GroupRegistry::resolve_inheritance`]
/// and is the only thing the matcher reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    permissions: Vec<String>,
    inheritance: Vec<String>,
    is_default: bool,
    combined: HashSet<String>,
}

impl Group {
    /// Build a group from an authored record. The combined set starts
    /// empty until inheritance is resolved.
    pub fn from_record(name: impl Into<String>, record: GroupRecord) -> Self {
        Self {
            name: name.into(),
            permissions: record.permissions,
            inheritance: record.inheritance,
            is_default: record.is_default,
            combined: HashSet::new(),
        }
    }

    /// The group's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The explicitly granted permissions, as authored.
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// The inherited group names, in authored order.
    pub fn inheritance(&self) -> &[String] {
        &self.inheritance
    }

    /// Whether this group is the registry's fallback group.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// The flattened, lowercased permission set. Empty until
    /// [`crate::GroupRegistry::resolve_inheritance`] has run.
    pub fn combined(&self) -> &HashSet<String> {
        &self.combined
    }

    pub(crate) fn set_combined(&mut self, combined: HashSet<String>) {
        self.combined = combined;
    }

    /// Check a permission string against this group's combined set.
    ///
    /// The universal wildcard grants every non-empty permission;
    /// otherwise the segment-wildcard match decides. Case-insensitive.
    pub fn grants(&self, permission: &str) -> bool {
        if permission.is_empty() {
            return false;
        }
        if self.combined.contains(UNIVERSAL_WILDCARD) {
            return true;
        }
        matcher::matches(&self.combined, permission)
    }

    /// The authored record, for serialization back to the source.
    pub fn record(&self) -> GroupRecord {
        GroupRecord {
            permissions: self.permissions.clone(),
            inheritance: self.inheritance.clone(),
            is_default: self.is_default,
        }
    }
}
