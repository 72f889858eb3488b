//! BlockEvid gateway binary.
//!
//! - Strict config load + validate, then compile the policy runtime.
//! - WS wallet-event stream at /v1/ws, one-shot evaluation over HTTP.
//! - Tracing via `RUST_LOG`-style env filter.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use blockevid_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("blockevid.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .service
        .listen
        .parse()
        .expect("service.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("policy compile failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "blockevid-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
