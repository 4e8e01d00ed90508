//! otlpmeta agent
//!
//! - Loads `otlpmeta.yaml` (or the path given as the first argument)
//! - Resolves exporter headers / resource attributes
//! - Binds process file-descriptor gauges when the host supports them
//! - Serves `/healthz`, `/metrics`, `/v1/exporter`

use tracing_subscriber::{fmt, EnvFilter};

use otlpmeta_agent::{app_state, config, router};
use otlpmeta_core::error::Result;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(code = e.code(), error = %e, "otlpmeta-agent failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| config::DEFAULT_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.agent.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let view = state.exporter_view()?;
    tracing::info!(
        url = %view.url,
        step_secs = view.step_secs,
        headers = view.header_keys.len(),
        resource_attributes = view.resource_attributes.len(),
        gauges = state.registry().len(),
        "exporter metadata resolved"
    );

    let app = router::build_router(state);

    tracing::info!(%listen, "otlpmeta-agent starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
