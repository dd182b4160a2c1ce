//! Configuration for statebox stores
//!
//! This crate provides:
//! - Store configuration (StoreConfig) and where it was read from
//! - The directories searched for `.statebox.toml`
//! - The log directory used by binaries built on statebox

pub mod paths;
pub mod store_config;

pub use paths::{config_search_dirs, log_dir, CONFIG_FILE_NAME};
pub use store_config::{ConfigSource, StoreConfig};
