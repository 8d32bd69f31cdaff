//! VectorCut Settings Crate
//!
//! Loads, validates and saves the G-Code and flattening configuration.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat};
pub use error::{SettingsError, SettingsResult};
