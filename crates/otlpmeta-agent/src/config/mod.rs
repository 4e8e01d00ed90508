//! Agent config loader (strict parsing).

pub mod schema;

use std::fs;

use otlpmeta_core::error::{OtlpMetaError, Result};

pub use schema::{AgentConfig, AgentSection};

/// Default config path, used when no path is passed on the command line.
pub const DEFAULT_PATH: &str = "otlpmeta.yaml";

pub fn load_from_file(path: &str) -> Result<AgentConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OtlpMetaError::Io(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AgentConfig> {
    let cfg: AgentConfig = serde_yaml::from_str(s)
        .map_err(|e| OtlpMetaError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
