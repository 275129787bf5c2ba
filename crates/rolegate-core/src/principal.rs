//! Principal (actor identity) types.
//!
//! The engine never inspects a host's sender type directly. The host
//! resolves each sender to a [`Principal`] once, through
//! [`ResolvePrincipal`], and the engine evaluates permission checks
//! against that closed set of variants.

/// The identity a permission check runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// A privileged sender: the console, or any identity the host
    /// flags as privileged. Bypasses all permission checks.
    Console,

    /// The dedicated server or another system actor. Bypasses group
    /// resolution but not the empty-registry guard.
    System,

    /// A regular member identity with group assignment data.
    Member(MemberIdentity),

    /// A sender that could not be resolved to a live identity.
    Unknown,
}

impl Principal {
    /// Returns `true` for identities that bypass all checks.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Console)
    }

    /// Returns `true` for the dedicated-server/system actor.
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }

    /// Returns the member identity, if this is a [`Principal::Member`].
    pub fn member(&self) -> Option<&MemberIdentity> {
        match self {
            Self::Member(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Group assignment data for a member principal.
///
/// A member may carry an explicit current-group assignment, a stored
/// group-name attribute, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberIdentity {
    /// The member's explicit current group, if assigned.
    pub current_group: Option<String>,

    /// A stored group-name attribute, used when no current assignment
    /// exists.
    pub stored_group: Option<String>,
}

impl MemberIdentity {
    /// A member with no group data at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit current group.
    pub fn with_current_group(mut self, name: impl Into<String>) -> Self {
        self.current_group = Some(name.into());
        self
    }

    /// Set the stored group-name attribute.
    pub fn with_stored_group(mut self, name: impl Into<String>) -> Self {
        self.stored_group = Some(name.into());
        self
    }

    /// The group key to check against: the current assignment if
    /// present, otherwise the stored attribute.
    pub fn group_key(&self) -> Option<&str> {
        self.current_group
            .as_deref()
            .or(self.stored_group.as_deref())
    }
}

/// Maps a host's opaque sender type to a [`Principal`].
///
/// Implemented by the host once, at the boundary; the engine stays
/// ignorant of session handling and sender subtypes.
pub trait ResolvePrincipal {
    /// The host's sender/session identifier type.
    type Sender;

    /// Resolve a sender to a principal. Unresolvable senders map to
    /// [`Principal::Unknown`], never to an error.
    fn resolve(&self, sender: &Self::Sender) -> Principal;
}
