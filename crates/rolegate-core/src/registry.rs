//! The group registry: an order-preserving mapping of name to group.
//!
//! Declaration order is semantic twice over: inheritance flattening
//! walks groups in reverse declaration order, and the first declared
//! group carrying the default flag is the registry's fallback group.
//! The registry is immutable once resolved; reloads build a fresh one
//! and swap it in wholesale.

use std::collections::{HashMap, HashSet};

use crate::group::{Group, GroupRecord};

/// An order-preserving registry of groups.
///
/// Backed by a `Vec` in declaration order with a name index for
/// lookups. A record re-using an existing name replaces the earlier
/// group in place, keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<Group>,
    by_name: HashMap<String, usize>,
}

impl GroupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from authored records, keeping their order.
    ///
    /// Combined sets are left empty; call [`resolve_inheritance`] before
    /// handing the registry to the matcher.
    ///
    /// [`resolve_inheritance`]: GroupRegistry::resolve_inheritance
    pub fn from_records(records: Vec<(String, GroupRecord)>) -> Self {
        let mut registry = Self {
            groups: Vec::with_capacity(records.len()),
            by_name: HashMap::with_capacity(records.len()),
        };
        for (name, record) in records {
            registry.insert(name, record);
        }
        registry
    }

    fn insert(&mut self, name: String, record: GroupRecord) {
        match self.by_name.get(&name) {
            Some(&index) => {
                self.groups[index] = Group::from_record(name, record);
            }
            None => {
                let index = self.groups.len();
                self.groups.push(Group::from_record(name.clone(), record));
                self.by_name.insert(name, index);
            }
        }
    }

    /// Flatten inheritance into every group's combined set.
    ///
    /// Groups are processed in reverse declaration order, exactly once.
    /// Each group's combined set becomes its own permissions
    /// (lowercased) unioned with the *current* combined set of every
    /// named parent that exists. A parent is therefore fully resolved
    /// when its child is processed only if the parent is declared
    /// *after* the child; multi-level chains authored in the opposite
    /// order yield a partial union. Unknown parent names are skipped.
    /// Cycles are not detected and likewise yield whatever partial
    /// union exists when each member is visited.
    pub fn resolve_inheritance(&mut self) {
        for index in (0..self.groups.len()).rev() {
            let mut combined: HashSet<String> = HashSet::new();

            let parents: Vec<usize> = self.groups[index]
                .inheritance()
                .iter()
                .filter_map(|name| self.by_name.get(name).copied())
                .collect();
            for parent in parents {
                combined.extend(self.groups[parent].combined().iter().cloned());
            }

            for permission in self.groups[index].permissions() {
                combined.insert(permission.to_lowercase());
            }

            self.groups[index].set_combined(combined);
        }
    }

    /// Look up a group by exact name.
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.by_name.get(name).map(|&index| &self.groups[index])
    }

    /// The fallback group: the first declared group with the default
    /// flag set, if any.
    pub fn default_group(&self) -> Option<&Group> {
        self.groups.iter().find(|g| g.is_default())
    }

    /// Iterate groups in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the registry holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
