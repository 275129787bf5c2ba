//! Built-in default definitions installed on first bootstrap.

use rolegate_core::GroupRecord;

/// The definition set installed when no backing source exists yet:
/// an `admin` group holding the universal wildcard and a fallback
/// `default` group with a handful of basic permissions.
pub fn builtin_definitions() -> Vec<(String, GroupRecord)> {
    vec![
        (
            "admin".to_string(),
            GroupRecord {
                permissions: vec![".*".to_string()],
                inheritance: vec![],
                is_default: false,
            },
        ),
        (
            "default".to_string(),
            GroupRecord {
                permissions: vec!["help".to_string(), "chat.send".to_string()],
                inheritance: vec![],
                is_default: true,
            },
        ),
    ]
}
