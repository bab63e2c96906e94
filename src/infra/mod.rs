//! Infrastructure abstractions.
//!
//! The crate never talks to a real account store; it consumes the
//! [`UserDirectory`] trait and leaves persistence to the host system.

mod user_directory;

pub use user_directory::UserDirectory;

#[cfg(test)]
pub use user_directory::MockUserDirectory;
