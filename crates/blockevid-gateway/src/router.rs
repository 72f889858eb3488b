//! Axum router wiring.
//!
//! `/v1/ws` carries the wallet-event stream; `/v1/access/evaluate` and
//! `/v1/roles/{address}` serve one-shot lookups; ops endpoints round it out.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/ws", get(transport::ws::ws_upgrade))
        .route("/v1/access/evaluate", post(api::evaluate))
        .route("/v1/roles/:address", get(api::role))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
