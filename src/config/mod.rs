//! Configuration file management and CLI-over-file merging.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, TradConfig, resolve_config,
};
