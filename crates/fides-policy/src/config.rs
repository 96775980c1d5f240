//! TOML loading for `LedgerConfig`.
//!
//! The config shape and its defaults live in `fides_core::config`; this
//! module only knows how to read it from TOML text or a file. Missing fields
//! fall back to their defaults, so an empty document is a valid config.
//!
//! Example:
//! ```toml
//! reward_unit = 100
//! max_duration_days = 365
//! ```

use std::path::Path;

use fides_contracts::error::{LedgerError, LedgerResult};
use fides_core::config::LedgerConfig;

/// Parse `s` as a TOML `LedgerConfig`.
///
/// Returns `LedgerError::ConfigError` if the TOML is malformed or does not
/// match the config schema.
pub fn from_toml_str(s: &str) -> LedgerResult<LedgerConfig> {
    toml::from_str(s).map_err(|e| LedgerError::ConfigError {
        reason: format!("failed to parse ledger config TOML: {}", e),
    })
}

/// Read the file at `path` and parse it as a TOML `LedgerConfig`.
///
/// Returns `LedgerError::ConfigError` if the file cannot be read or its
/// contents are not valid TOML matching the config schema.
pub fn from_file(path: &Path) -> LedgerResult<LedgerConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| LedgerError::ConfigError {
        reason: format!("failed to read config file '{}': {}", path.display(), e),
    })?;
    from_toml_str(&contents)
}
