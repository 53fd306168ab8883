//! Configuration module for playdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLAYDEPLOY_*)
//! 3. Config file (`--config`, `./playdeploy.toml`, or `~/.config/playdeploy/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    discover_config_path, load_or_default, load_with_warnings, with_env_overrides,
    with_env_overrides_from, ConfigError, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ApiConfig, ColorMode, Config, DeployConfig, OutputConfig};
