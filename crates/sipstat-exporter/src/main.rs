//! sipstat exporter
//!
//! Serves SIP proxy statistics as Prometheus metrics.
//! Usage: `sipstat-exporter [config.yaml]` (default `sipstat.yaml`).

use tracing_subscriber::{fmt, EnvFilter};

use sipstat_exporter::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "sipstat.yaml".to_string());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen = cfg.exporter.listen_addr().expect("exporter.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("processor registry setup failed");
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "sipstat-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
