//! Application glue module
//!
//! Configuration and the objects built from it.

mod config;

pub use config::{Config, ConfigError, GridConfig};
