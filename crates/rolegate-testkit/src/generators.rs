//! Proptest generators for permission strings and group definitions.

use proptest::prelude::*;

use rolegate_core::GroupRecord;

/// One dot-free permission segment: lowercase alphanumerics.
pub fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

/// A dotted permission string of 1 to 4 segments.
pub fn permission() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("."))
}

/// A permission string with mixed casing, for case-insensitivity
/// checks.
pub fn mixed_case_permission() -> impl Strategy<Value = String> {
    permission().prop_flat_map(|p| {
        let len = p.len();
        (Just(p), prop::collection::vec(any::<bool>(), len)).prop_map(|(p, flips)| {
            p.chars()
                .zip(flips)
                .map(|(c, flip)| {
                    if flip {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect::<String>()
        })
    })
}

/// A group name.
pub fn group_name() -> impl Strategy<Value = String> {
    "[a-z]{3,10}"
}

/// An authored group record with random permissions and inheritance
/// references (which may dangle).
pub fn group_record() -> impl Strategy<Value = GroupRecord> {
    (
        prop::collection::vec(permission(), 0..6),
        prop::collection::vec(group_name(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(permissions, inheritance, is_default)| GroupRecord {
            permissions,
            inheritance,
            is_default,
        })
}

/// An ordered definition set of uniquely named groups.
pub fn definition_set() -> impl Strategy<Value = Vec<(String, GroupRecord)>> {
    prop::collection::btree_map(group_name(), group_record(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}
