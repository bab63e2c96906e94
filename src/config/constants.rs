//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Storage
// =============================================================================

/// Default base data directory when DATA_DIRECTORY is not set
pub const DEFAULT_DATA_DIRECTORY: &str = "/var/lib/home-resolver/data";

/// Environment variable naming the base data directory
pub const ENV_DATA_DIRECTORY: &str = "DATA_DIRECTORY";

// =============================================================================
// Accounts
// =============================================================================

/// Account name that keeps its literal home directory by default
pub const RESERVED_ADMIN_UID: &str = "admin";
