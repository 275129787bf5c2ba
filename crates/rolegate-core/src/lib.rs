//! # Rolegate Core
//!
//! Core primitives for the Rolegate permission engine: the group data
//! model, the order-preserving group registry, inheritance flattening,
//! and the dot-segment wildcard matcher.
//!
//! ## Overview
//!
//! Permissions are dotted, hierarchical strings (`"round.start"`,
//! `"admin.kick"`). Named groups bundle explicitly granted permissions
//! and may inherit from other groups. After a registry is built from
//! raw definitions, [`GroupRegistry::resolve_inheritance`] flattens
//! inheritance into each group's combined permission set, and all
//! matching runs against those combined sets only.
//!
//! ## Key Concepts
//!
//! - **Group**: a named role with explicit permissions and an ordered
//!   inheritance list.
//! - **Combined set**: a group's own permissions unioned with everything
//!   inherited, lowercased, fully flattened at reload time.
//! - **Segment wildcard**: `"round.*"` grants every permission under the
//!   `round` namespace; the bare `".*"` grants everything.
//! - **Default group**: fallback for principals whose group cannot be
//!   resolved.
//!
//! This crate is pure data and algorithms: no I/O, no logging. Storage
//! and the engine facade live in the `rolegate-store` and `rolegate`
//! crates.

pub mod group;
pub mod matcher;
pub mod principal;
pub mod registry;

pub use group::{Group, GroupRecord};
pub use matcher::{matches, UNIVERSAL_WILDCARD};
pub use principal::{MemberIdentity, Principal, ResolvePrincipal};
pub use registry::GroupRegistry;
