//! Shared application state for the otlpmeta agent.
//!
//! Built once at startup: the config is validated, the process gauges are
//! bound, and the exporter metadata becomes reachable through accessors that
//! re-resolve on every call.

use std::sync::Arc;

use serde::Serialize;
use otlpmeta_core::error::Result;
use otlpmeta_core::AttributeMap;

use crate::binder::{FileDescriptorMetrics, MeterBinder, OsIntrospection};
use crate::config::AgentConfig;
use crate::obs::GaugeRegistry;

/// Exporter settings as exposed by `/v1/exporter`. Header values are omitted.
#[derive(Debug, Serialize)]
pub struct ExporterView {
    pub url: String,
    pub step_secs: u64,
    pub header_keys: Vec<String>,
    pub resource_attributes: AttributeMap,
}

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<AgentConfig>,
    registry: Arc<GaugeRegistry>,
}

impl AppState {
    /// Bind against the platform's default introspection handle.
    pub fn new(cfg: AgentConfig) -> Result<Self> {
        let binder = FileDescriptorMetrics::new(cfg.tag_set());
        Self::build(cfg, binder)
    }

    /// Bind against an explicit host handle.
    pub fn with_host(cfg: AgentConfig, host: Arc<dyn OsIntrospection>) -> Result<Self> {
        let binder = FileDescriptorMetrics::with_host(host, cfg.tag_set());
        Self::build(cfg, binder)
    }

    fn build(cfg: AgentConfig, binder: FileDescriptorMetrics) -> Result<Self> {
        cfg.validate()?;

        let registry = Arc::new(GaugeRegistry::new());
        binder.bind_to(registry.as_ref());

        Ok(Self { cfg: Arc::new(cfg), registry })
    }

    pub fn cfg(&self) -> &AgentConfig {
        &self.cfg
    }

    pub fn registry(&self) -> Arc<GaugeRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn exporter_view(&self) -> Result<ExporterView> {
        let otlp = self.cfg.otlp();
        Ok(ExporterView {
            url: otlp.url(),
            step_secs: otlp.step()?.as_secs(),
            header_keys: otlp.headers().keys().map(str::to_string).collect(),
            resource_attributes: otlp.resource_attributes(),
        })
    }
}
