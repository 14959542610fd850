//! Registry layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "metahub.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "METAHUB";

/// Environment variable consulted for log filtering before the config value
pub const LOG_ENV_VAR: &str = "METAHUB_LOG";

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default store backend name
pub const DEFAULT_STORE_PROVIDER: &str = "memory";

/// Default change-event channel capacity
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
