//! Configuration module.
//!
//! Session settings come from an optional TOML file merged over
//! hardcoded defaults, with environment overrides on top. See
//! [`loader`] for the precedence rules.

pub mod loader;

pub use loader::{
    apply_env_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, ConfigError, ConfigFile, ResolvedConfig,
};
