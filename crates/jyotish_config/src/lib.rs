//! Configuration for the jyotish workspace.
//!
//! [`ConfigLoader`] merges built-in defaults, an optional `jyotish.toml`
//! (or JSON) file and `JYOTISH_*` environment variables into an
//! [`AppConfig`].

pub mod config;
pub mod loader;

pub use config::AppConfig;
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
