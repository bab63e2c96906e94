//! Home Resolver - User storage path resolution.
//!
//! This crate decides the on-disk directory that represents a user's private
//! storage root. Non-exempt usernames are obfuscated with an MD5 digest so the
//! storage layout does not leak account names; exempted accounts (by default
//! only `admin`) keep their literal name.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Pure segment derivation and the exemption allow-list
//! - **infra**: Collaborator abstractions (user directory lookup)
//! - **services**: The path resolver and the decorating user backend
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use home_resolver::{Config, ExemptionSet, HomeResolver, PathResolver};
//! # use home_resolver::{AppResult, UserDirectory};
//! # use async_trait::async_trait;
//! # struct Users;
//! # #[async_trait]
//! # impl UserDirectory for Users {
//! #     async fn exists(&self, _uid: &str) -> AppResult<bool> { Ok(true) }
//! # }
//! # async fn demo() -> home_resolver::AppResult<()> {
//! let resolver = HomeResolver::new(
//!     Arc::new(Users),
//!     Arc::new(Config::from_env()),
//!     ExemptionSet::default(),
//! );
//! let home = resolver.resolve("alice").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{Config, ConfigProvider};
pub use domain::{storage_segment, ExemptionSet};
pub use errors::{AppError, AppResult};
pub use infra::UserDirectory;
pub use services::{HashedHomeBackend, HomeResolver, PathResolver, UserBackend};
