//! YAML file implementation of the DefinitionStore trait.
//!
//! Definitions are a single YAML mapping of group name to group record:
//!
//! ```yaml
//! admin:
//!   permissions:
//!     - ".*"
//!   inheritance: []
//!   is_default: false
//! default:
//!   permissions:
//!     - chat.send
//!   inheritance: []
//!   is_default: true
//! ```
//!
//! Document order is preserved through load and save, since both the
//! inheritance pass and the default-group tie-break depend on it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use rolegate_core::{GroupRecord, GroupRegistry};

use crate::defaults::builtin_definitions;
use crate::error::{Result, StoreError};
use crate::traits::DefinitionStore;

/// File-backed definition store.
pub struct YamlStore {
    path: PathBuf,
}

impl YamlStore {
    /// Create a store over the given definitions file path. The file
    /// need not exist yet; call [`DefinitionStore::ensure`] to
    /// bootstrap it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefinitionStore for YamlStore {
    fn ensure(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let text = render_definitions(builtin_definitions().into_iter())?;
        fs::write(&self.path, text)?;
        info!(path = %self.path.display(), "installed default permission definitions");
        Ok(true)
    }

    fn load(&self) -> Result<Vec<(String, GroupRecord)>> {
        let text = fs::read_to_string(&self.path)?;
        let records = parse_definitions(&text)?;
        debug!(path = %self.path.display(), groups = records.len(), "loaded permission definitions");
        Ok(records)
    }

    fn save(&self, registry: &GroupRegistry) -> Result<()> {
        let text = render_definitions(
            registry.iter().map(|g| (g.name().to_string(), g.record())),
        )?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), groups = registry.len(), "saved permission definitions");
        Ok(())
    }
}

/// Parse a definitions document into ordered records.
///
/// An empty document yields an empty record list. Any other parse
/// failure is an error: a reload must not half-apply a broken file.
pub fn parse_definitions(text: &str) -> Result<Vec<(String, GroupRecord)>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    // Deserialize through Mapping to keep document order.
    let mapping: serde_yaml::Mapping = serde_yaml::from_str(text)?;

    let mut records = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| {
                StoreError::InvalidDocument(format!("group name is not a string: {key:?}"))
            })?
            .to_string();
        let record: GroupRecord = serde_yaml::from_value(value)?;
        records.push((name, record));
    }
    Ok(records)
}

/// Render ordered records back to a definitions document.
pub fn render_definitions(
    records: impl Iterator<Item = (String, GroupRecord)>,
) -> Result<String> {
    let mut mapping = serde_yaml::Mapping::new();
    for (name, record) in records {
        mapping.insert(
            serde_yaml::Value::String(name),
            serde_yaml::to_value(&record)?,
        );
    }
    Ok(serde_yaml::to_string(&mapping)?)
}
