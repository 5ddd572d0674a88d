//! Waystones config loader (strict parsing).

pub mod schema;

use std::fs;

use waystones_core::error::{Result, WaystonesError};

pub use schema::{CommonSection, ServerSection, WaystonesConfig};

pub fn load_from_file(path: &str) -> Result<WaystonesConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WaystonesError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<WaystonesConfig> {
    let cfg: WaystonesConfig = serde_yaml::from_str(s)
        .map_err(|e| WaystonesError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
