//! The DefinitionStore trait: the abstract interface for definition
//! persistence.
//!
//! This trait keeps the engine storage-agnostic. Implementations
//! include a YAML file (primary) and in-memory (for tests). All
//! operations are synchronous: persistence I/O is off the permission
//! check fast path and may block.

use rolegate_core::{GroupRecord, GroupRegistry};

use crate::error::Result;

/// Abstract interface for loading and saving group definitions.
///
/// # Design Notes
///
/// - **`ensure` bootstraps, `load` populates**: `ensure` only makes the
///   backing source exist (installing built-in defaults when absent);
///   it never touches any in-memory registry.
/// - **Order round-trips**: `load` yields records in authored order and
///   `save` writes registry order, so a load-save cycle preserves the
///   document's group order.
/// - **Tolerant reads, strict structure**: unknown extra fields on a
///   group entry are ignored, but an unreadable or structurally invalid
///   document is an error, never an empty result.
pub trait DefinitionStore: Send + Sync {
    /// Ensure a backing definition source exists, installing the
    /// built-in default definitions when it does not.
    ///
    /// Idempotent and safe to call on every startup. Returns `true` if
    /// anything was created.
    fn ensure(&self) -> Result<bool>;

    /// Load all group records in authored order.
    fn load(&self) -> Result<Vec<(String, GroupRecord)>>;

    /// Persist the registry's authored fields verbatim, in registry
    /// order.
    fn save(&self, registry: &GroupRegistry) -> Result<()>;
}
