//! Application services layer.
//!
//! Services depend on abstractions (traits) for dependency inversion: the
//! resolver is constructed over an injected [`crate::UserDirectory`] and
//! [`crate::ConfigProvider`] rather than reaching for ambient state.

mod backend;
mod path_resolver;

pub use backend::{HashedHomeBackend, UserBackend};
pub use path_resolver::{HomeResolver, PathResolver};
