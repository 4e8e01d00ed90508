use std::collections::BTreeMap;
use std::net::SocketAddr;

use serde::Deserialize;
use otlpmeta_core::error::{OtlpMetaError, Result};
use otlpmeta_core::{MapConfigSource, OtlpConfig, ProcessEnv};

use crate::obs::Tags;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,

    /// Common tags for process gauges.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,

    /// Flat `otlp.*` properties backing [`OtlpConfig`].
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OtlpMetaError::UnsupportedVersion(self.version));
        }
        self.agent.validate()?;

        if self.tags.keys().any(|k| k.trim().is_empty()) {
            return Err(OtlpMetaError::BadConfig("tags: keys must not be empty".into()));
        }

        self.otlp().validate()?;
        Ok(())
    }

    pub fn tag_set(&self) -> Tags {
        Tags::from(self.tags.clone())
    }

    /// Exporter view: `properties` first, process environment second.
    pub fn otlp(&self) -> OtlpConfig<MapConfigSource, ProcessEnv> {
        OtlpConfig::new(MapConfigSource::new(self.properties.clone()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl AgentSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            OtlpMetaError::BadConfig(format!("agent.listen must be a socket address: {}", self.listen))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:9464".into()
}
