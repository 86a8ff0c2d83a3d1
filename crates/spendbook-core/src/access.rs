//! Ownership checks applied before single-record reads and mutations.
//!
//! Listing and creation never consult this module; they scope the storage
//! query to the caller's identity from the start.

use uuid::Uuid;

use crate::CoreError;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

/// Grants access iff the caller is the owning account.
pub fn authorize(caller: Uuid, owner: Uuid) -> Access {
    if caller == owner {
        Access::Granted
    } else {
        Access::Denied
    }
}

/// Maps a denied check onto the core error type.
///
/// Denial stays distinct from "not found" inside the core so that audit
/// logs can tell the two apart; transports may still render both
/// identically to avoid leaking which expenses exist.
pub fn ensure_owner(caller: Uuid, owner: Uuid) -> Result<(), CoreError> {
    match authorize(caller, owner) {
        Access::Granted => Ok(()),
        Access::Denied => {
            tracing::warn!(%caller, "ownership check denied");
            Err(CoreError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_matching_owner_is_granted() {
        let id = Uuid::new_v4();
        assert_eq!(authorize(id, id), Access::Granted);
        assert!(ensure_owner(id, id).is_ok());
    }

    #[test]
    fn distinct_identities_are_denied() {
        let caller = Uuid::new_v4();
        let owner = Uuid::new_v4();
        assert_eq!(authorize(caller, owner), Access::Denied);
        assert!(matches!(
            ensure_owner(caller, owner),
            Err(CoreError::AccessDenied)
        ));
    }
}
