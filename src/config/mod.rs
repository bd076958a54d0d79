//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, QtrConfig,
    ResolveOptions, ResolvedConfig, resolve_config, validate_endpoint,
};
