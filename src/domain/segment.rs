//! Storage path segment derivation.

use md5::{Digest, Md5};

use super::ExemptionSet;

/// Derive the directory-name segment for a user identifier.
///
/// Exempt identifiers pass through unchanged; all others become the lowercase
/// hex MD5 digest of the identifier bytes. MD5 is used purely to obscure
/// account names in the storage layout, not as a security control, so its
/// cryptographic weaknesses are irrelevant here. The digest is fixed-width
/// (32 hex characters) and stable across calls and releases.
pub fn storage_segment(uid: &str, exemptions: &ExemptionSet) -> String {
    if exemptions.is_exempt(uid) {
        return uid.to_string();
    }
    hex::encode(Md5::digest(uid.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest_for_alice() {
        let segment = storage_segment("alice", &ExemptionSet::default());
        assert_eq!(segment, "6384e2b2184bcbf58eccf10ca7a6563c");
    }

    #[test]
    fn test_exempt_identifier_passes_through() {
        let segment = storage_segment("admin", &ExemptionSet::default());
        assert_eq!(segment, "admin");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let exemptions = ExemptionSet::default();
        assert_eq!(
            storage_segment("bob", &exemptions),
            storage_segment("bob", &exemptions)
        );
    }

    #[test]
    fn test_empty_identifier_is_hashed_like_any_other() {
        let segment = storage_segment("", &ExemptionSet::default());
        // md5 of the empty string
        assert_eq!(segment, "d41d8cd98f00b204e9800998ecf8427e");
    }
}
