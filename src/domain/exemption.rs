//! Allow-list of accounts that keep their literal home directory name.

use std::collections::HashSet;

use crate::config::RESERVED_ADMIN_UID;

/// Set of user identifiers that bypass the hashing transformation.
///
/// Matching is exact and case-sensitive: `Admin` is not `admin`. The default
/// set contains only the reserved `admin` account, which must keep its literal
/// home directory so existing installations stay reachable.
#[derive(Debug, Clone)]
pub struct ExemptionSet {
    names: HashSet<String>,
}

impl ExemptionSet {
    /// Build an exemption set from any collection of account names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// An exemption set with no entries; every account gets hashed.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Whether this identifier keeps its literal name.
    pub fn is_exempt(&self, uid: &str) -> bool {
        self.names.contains(uid)
    }
}

impl Default for ExemptionSet {
    fn default() -> Self {
        Self::new([RESERVED_ADMIN_UID])
    }
}
