//! One-shot HTTP API for the view layer.
//!
//! `POST /v1/access/evaluate` is the stateless twin of the WS decision
//! stream; `GET /v1/roles/{address}` exposes the resolved role record used
//! by dashboards to display name/role/badge.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use blockevid_core::error::ClientCode;
use blockevid_core::{AccessConstraint, RoleTag, WalletSnapshot};

use crate::app_state::AppState;

/// Evaluation request. Strict schema: unknown fields are rejected rather
/// than silently ignored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateRequest {
    pub connected: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub required_role: Option<RoleTag>,
    #[serde(default)]
    pub required_permission: Option<String>,
}

pub async fn evaluate(
    State(app): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Response {
    let snapshot = WalletSnapshot {
        connected: req.connected,
        address: req.address,
    };
    let constraint = AccessConstraint {
        required_role: req.required_role,
        required_permission: req.required_permission,
    };

    let decision = app.policy().evaluate(&snapshot, &constraint);
    app.metrics()
        .evaluations
        .inc(&[("decision", decision.status()), ("surface", "http")]);

    (StatusCode::OK, Json(decision)).into_response()
}

pub async fn role(State(app): State<AppState>, Path(address): Path<String>) -> Response {
    match app.policy().resolve(&address) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        // Unreachable with the directory provider (resolution is total),
        // kept for providers that do fail unknown addresses.
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "code": ClientCode::BadRequest.as_str(),
                "msg": format!("no identity for address: {address}")
            })),
        )
            .into_response(),
    }
}
