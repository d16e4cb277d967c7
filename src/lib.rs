//! Common functionality for AgriConnect.
#![warn(missing_docs)]
pub mod cli;
pub mod crop;
pub mod facility;
pub mod id;
pub mod input;
pub mod location;
pub mod log;
pub mod market;
pub mod model;
pub mod network;
pub mod settings;
pub mod units;
pub mod vehicle;

#[cfg(test)]
mod fixture;

use std::path::PathBuf;

/// Get the path to the AgriConnect configuration directory
pub fn get_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("agriconnect");

    path
}
