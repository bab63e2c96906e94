//! Path resolver service - computes a user's storage root.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::domain::{storage_segment, ExemptionSet};
use crate::errors::AppResult;
use crate::infra::UserDirectory;

/// Path resolver trait for dependency injection.
#[async_trait]
pub trait PathResolver: Send + Sync {
    /// Resolve the storage root for a user identifier.
    ///
    /// Returns `Ok(None)` when no such user exists; that is a normal negative
    /// result, not an error. The returned path is a string only - nothing is
    /// created or checked on storage media.
    async fn resolve(&self, uid: &str) -> AppResult<Option<String>>;
}

/// Concrete resolver over an injected user directory and configuration.
///
/// Stateless and safe to share across tasks: each call reads from the two
/// collaborators and computes the path from scratch, with no caching.
pub struct HomeResolver<D: UserDirectory, C: ConfigProvider> {
    directory: Arc<D>,
    config: Arc<C>,
    exemptions: ExemptionSet,
}

impl<D: UserDirectory, C: ConfigProvider> HomeResolver<D, C> {
    /// Create a new resolver instance.
    pub fn new(directory: Arc<D>, config: Arc<C>, exemptions: ExemptionSet) -> Self {
        Self {
            directory,
            config,
            exemptions,
        }
    }
}

#[async_trait]
impl<D: UserDirectory, C: ConfigProvider> PathResolver for HomeResolver<D, C> {
    async fn resolve(&self, uid: &str) -> AppResult<Option<String>> {
        if !self.directory.exists(uid).await? {
            tracing::debug!(uid, "no such user, nothing to resolve");
            return Ok(None);
        }

        let segment = storage_segment(uid, &self.exemptions);
        let base = self.config.data_directory()?;

        Ok(Some(format!("{}/{}", base, segment)))
    }
}
