//! User backend decoration.
//!
//! The host system exposes its account store as a polymorphic backend. Rather
//! than subclass-style overriding, the hashed-home behavior is layered on by
//! composition: [`HashedHomeBackend`] wraps any [`UserBackend`], delegates
//! every capability unchanged, and replaces only home resolution.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::domain::{storage_segment, ExemptionSet};
use crate::errors::AppResult;

/// Capability surface of a user backend, as consumed by the storage layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Whether an account with this identifier exists.
    async fn user_exists(&self, uid: &str) -> AppResult<bool>;

    /// The account's storage root, or `None` for an unknown account.
    async fn get_home(&self, uid: &str) -> AppResult<Option<String>>;

    /// The account's display name, or `None` for an unknown account.
    async fn get_display_name(&self, uid: &str) -> AppResult<Option<String>>;
}

/// Decorator that hashes home directory names.
///
/// All capabilities pass straight through to the wrapped backend except
/// `get_home`, which is recomputed from the wrapped backend's existence answer,
/// the exemption set, and the configured base directory. The wrapped backend's
/// own notion of a home directory is ignored entirely.
pub struct HashedHomeBackend<B: UserBackend, C: ConfigProvider> {
    inner: Arc<B>,
    config: Arc<C>,
    exemptions: ExemptionSet,
}

impl<B: UserBackend, C: ConfigProvider> HashedHomeBackend<B, C> {
    /// Wrap an existing backend.
    pub fn new(inner: Arc<B>, config: Arc<C>, exemptions: ExemptionSet) -> Self {
        Self {
            inner,
            config,
            exemptions,
        }
    }
}

#[async_trait]
impl<B: UserBackend, C: ConfigProvider> UserBackend for HashedHomeBackend<B, C> {
    async fn user_exists(&self, uid: &str) -> AppResult<bool> {
        self.inner.user_exists(uid).await
    }

    async fn get_home(&self, uid: &str) -> AppResult<Option<String>> {
        if !self.inner.user_exists(uid).await? {
            return Ok(None);
        }

        let segment = storage_segment(uid, &self.exemptions);
        let base = self.config.data_directory()?;

        Ok(Some(format!("{}/{}", base, segment)))
    }

    async fn get_display_name(&self, uid: &str) -> AppResult<Option<String>> {
        self.inner.get_display_name(uid).await
    }
}
