//! tumocc-exporter
//!
//! - Background task: scrape every library once per interval
//! - HTTP: `/metrics` (Prometheus text) and `/healthz`
//! - Optional `tumocc-exporter.yaml` in the working directory; defaults otherwise
//! - Log level via `RUST_LOG` (default `info`)

use tracing_subscriber::{fmt, EnvFilter};

use tumocc_core::error::{Result, TumOccError};
use tumocc_exporter::{app_state, config, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(kind = e.kind().as_str(), error = %e, "exporter stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(config::DEFAULT_CONFIG_PATH)?;
    let listen = cfg.exporter.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;

    // Never joined; the scrape loop runs until the process exits.
    let _scrape_task = state.http_scheduler()?.spawn();

    let app = router::build_router(state.clone());

    tracing::info!(
        "Exporter running on :{}{}",
        listen.port(),
        state.cfg().exporter.metrics_path
    );
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TumOccError::Bind(format!("bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TumOccError::Bind(format!("serve: {e}")))
}
