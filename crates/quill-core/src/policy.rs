//! The store-boundary access policy.
//!
//! Owner scoping is enforced twice: the backend's owner-filtered query is a
//! convenience/performance filter only, and this predicate is the
//! authoritative check. Backends must evaluate it for every create, every
//! row returned by a read, and every delete. There is no update action:
//! entries are immutable.

use crate::entry::PrincipalId;

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
  Allow,
  Deny,
}

impl Decision {
  pub fn is_allowed(self) -> bool { matches!(self, Decision::Allow) }
}

/// Allow iff the requesting principal owns the record.
pub fn owner_only(
  principal: &PrincipalId,
  record_owner: &PrincipalId,
) -> Decision {
  if principal == record_owner {
    Decision::Allow
  } else {
    Decision::Deny
  }
}
