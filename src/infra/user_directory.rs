//! User directory lookup abstraction.

use async_trait::async_trait;

use crate::errors::AppResult;

/// Answers whether a user account exists in the host system.
///
/// Identifier syntax validation is this collaborator's responsibility; the
/// resolver passes identifiers through untouched. Implementations are expected
/// to be fast local lookups, so no retry or timeout handling happens here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether an account with this identifier exists.
    ///
    /// A missing account is `Ok(false)`; `Err` means the lookup itself failed.
    async fn exists(&self, uid: &str) -> AppResult<bool>;
}
