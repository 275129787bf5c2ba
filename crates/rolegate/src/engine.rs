//! The permission engine: a definition store plus an atomically
//! swappable registry snapshot.

use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use rolegate_core::{Group, GroupRegistry, Principal, ResolvePrincipal};
use rolegate_store::DefinitionStore;

use crate::error::Result;

/// The main engine struct.
///
/// Provides a unified API for:
/// - Bootstrapping the definition source
/// - Reloading and flattening group definitions
/// - Checking permissions per request
/// - Saving the current registry back to the store
///
/// Checks read an immutable registry snapshot behind a single `Arc`;
/// `reload` builds the next registry fully off to the side and replaces
/// the `Arc` in one write. Readers never observe a registry with some
/// groups flattened and others not, and no check blocks on store I/O.
pub struct PermissionEngine<S> {
    /// The definition backend.
    store: S,
    /// Current registry snapshot, replaced wholesale on reload.
    registry: RwLock<Arc<GroupRegistry>>,
}

impl<S: DefinitionStore> PermissionEngine<S> {
    /// Create an engine over a store. The registry starts empty; call
    /// [`reload`](Self::reload) to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: RwLock::new(Arc::new(GroupRegistry::new())),
        }
    }

    /// Create an engine with an already-resolved registry, bypassing
    /// the store. Intended for tests and embedding.
    pub fn with_registry(store: S, registry: GroupRegistry) -> Self {
        Self {
            store,
            registry: RwLock::new(Arc::new(registry)),
        }
    }

    /// Ensure the backing definition source exists, installing built-in
    /// defaults when absent. Does not touch the in-memory registry.
    ///
    /// Idempotent. Returns `true` if anything was created.
    pub fn create(&self) -> Result<bool> {
        Ok(self.store.ensure()?)
    }

    /// Rebuild the registry from the store and swap it in atomically.
    ///
    /// On any load or parse failure the previous registry stays in
    /// effect and the error propagates, so the operator knows
    /// permissions did not update.
    pub fn reload(&self) -> Result<()> {
        let records = self.store.load()?;

        let mut next = GroupRegistry::from_records(records);
        next.resolve_inheritance();
        let groups = next.len();

        *self.registry.write().unwrap() = Arc::new(next);
        debug!(groups, "permission registry reloaded");
        Ok(())
    }

    /// Persist the current registry back to the store, verbatim, in
    /// registry order.
    pub fn save(&self) -> Result<()> {
        let snapshot = self.snapshot();
        self.store.save(&snapshot)?;
        debug!(groups = snapshot.len(), "permission registry saved");
        Ok(())
    }

    /// The current registry snapshot. Cheap: one `Arc` clone.
    pub fn snapshot(&self) -> Arc<GroupRegistry> {
        self.registry.read().unwrap().clone()
    }

    /// The current fallback group, if one is configured.
    pub fn default_group(&self) -> Option<Group> {
        self.snapshot().default_group().cloned()
    }

    /// Check whether a principal holds a permission.
    ///
    /// Evaluated in order: empty permission denies; a privileged
    /// console grants; an unresolvable sender or empty registry denies;
    /// a system actor grants; then the principal's group (current
    /// assignment, else stored attribute, else the registry default) is
    /// matched against the permission, universal wildcard first, then
    /// segment wildcards.
    pub fn check_permission(&self, principal: &Principal, permission: &str) -> bool {
        if permission.is_empty() {
            trace!("empty permission string, denied");
            return false;
        }

        if principal.is_privileged() {
            trace!(permission, "privileged sender, granted");
            return true;
        }

        let registry = self.snapshot();

        let member = match principal {
            Principal::Member(member) => member,
            Principal::Unknown => {
                trace!(permission, "sender did not resolve to a live identity, denied");
                return false;
            }
            Principal::System => {
                if registry.is_empty() {
                    return false;
                }
                trace!(permission, "system actor, granted");
                return true;
            }
            // Console is handled by the privileged bypass above.
            Principal::Console => return true,
        };

        if registry.is_empty() {
            trace!(permission, "permission registry is empty, denied");
            return false;
        }

        let key = match member.group_key() {
            Some(key) => key,
            None => {
                trace!(permission, "sender has no group key, denied");
                return false;
            }
        };

        let group = match registry.get(key).or_else(|| registry.default_group()) {
            Some(group) => group,
            None => {
                trace!(
                    permission,
                    group = key,
                    "unknown group and no default configured, denied"
                );
                return false;
            }
        };

        let granted = group.grants(permission);
        trace!(permission, group = group.name(), granted, "permission check");
        granted
    }

    /// Resolve a sender through the given resolver, then check.
    pub fn check_sender<R>(&self, resolver: &R, sender: &R::Sender, permission: &str) -> bool
    where
        R: ResolvePrincipal,
    {
        self.check_permission(&resolver.resolve(sender), permission)
    }

    /// The store backing this engine.
    pub fn store(&self) -> &S {
        &self.store
    }
}
