//! WebSocket wallet-session handler.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS and register the session.
//! - Decode-once: each Text frame becomes one wallet event.
//! - Hold the session's current `WalletSnapshot` + `AccessConstraint` and
//!   re-evaluate the guard after every event, pushing a decision frame.
//! - Lifecycle: ping interval + idle timeout from config.
//!
//! Ordering: the single session loop applies events in arrival order, so the
//! pushed decision always reflects the latest observed wallet state.

use axum::{
    extract::{ws::Message, ws::WebSocket, ws::WebSocketUpgrade, State},
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use blockevid_core::{AccessConstraint, AccessDecision, WalletSnapshot};

use crate::app_state::AppState;
use crate::session::Connection;
use crate::transport::codec::{decode, EventKind, Inbound, WalletEvent};

struct SessionState {
    snapshot: WalletSnapshot,
    constraint: AccessConstraint,
    last_activity: Instant,
}

impl SessionState {
    fn apply(&mut self, ev: WalletEvent) {
        match ev.kind {
            EventKind::Connect | EventKind::SwitchAccount => {
                self.snapshot = WalletSnapshot {
                    connected: true,
                    address: ev.address,
                };
            }
            EventKind::Disconnect => {
                self.snapshot = WalletSnapshot::disconnected();
            }
            EventKind::Evaluate => {
                self.constraint = AccessConstraint {
                    required_role: ev.required_role,
                    required_permission: ev.required_permission,
                };
            }
        }
    }
}

fn session_json(session_id: &str) -> String {
    json!({
        "v": 1,
        "type": "session",
        "session_id": session_id
    })
    .to_string()
}

fn decision_json(decision: &AccessDecision) -> String {
    json!({
        "v": 1,
        "type": "decision",
        "decision": decision
    })
    .to_string()
}

fn error_json(code: &str, msg: &str) -> String {
    json!({
        "v": 1,
        "type": "error",
        "code": code,
        "msg": msg
    })
    .to_string()
}

pub async fn ws_upgrade(State(app): State<AppState>, ws: WebSocketUpgrade) -> Response {
    app.metrics().ws_upgrades.inc(&[]);
    ws.on_upgrade(move |socket| async move {
        run_session(app, socket).await;
    })
}

async fn run_session(app: AppState, socket: WebSocket) {
    let session_id = app.registry().next_session_id();

    let (out_tx, mut out_rx) = mpsc::channel::<Message>(64);
    app.registry()
        .insert(session_id.clone(), Connection { tx: out_tx.clone() });
    app.metrics().sessions_active.inc();

    let (mut ws_tx, mut ws_rx) = socket.split();

    let svc = &app.cfg().service;
    let ping_every = Duration::from_millis(svc.ping_interval_ms);
    let idle_timeout = Duration::from_millis(svc.idle_timeout_ms);

    let mut ping_tick = tokio::time::interval(ping_every);
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut sess = SessionState {
        snapshot: WalletSnapshot::disconnected(),
        constraint: AccessConstraint::none(),
        last_activity: Instant::now(),
    };

    tracing::info!(session = %session_id, "wallet session opened");

    // Hello + the initial (unauthenticated) decision.
    let _ = out_tx.send(Message::Text(session_json(&session_id))).await;
    push_decision(&app, &sess, &out_tx).await;

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(m) => {
                        if ws_tx.send(m).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { break; };
                let Ok(msg) = incoming else { break; };

                sess.last_activity = Instant::now();

                match decode(msg) {
                    Ok(Inbound::Event(ev)) => {
                        sess.apply(ev);
                        push_decision(&app, &sess, &out_tx).await;
                    }
                    Ok(Inbound::Ping(payload)) => {
                        let _ = out_tx.send(Message::Pong(payload)).await;
                    }
                    Ok(Inbound::Pong(_)) => {}
                    Ok(Inbound::Close) => break,
                    Err(e) => {
                        app.metrics().decode_errors.inc(&[]);
                        let _ = out_tx
                            .send(Message::Text(error_json(
                                e.client_code().as_str(),
                                &e.to_string(),
                            )))
                            .await;
                    }
                }
            }

            // ping
            _ = ping_tick.tick() => {
                let _ = out_tx.send(Message::Ping(Vec::new())).await;
            }

            // idle timeout
            _ = tokio::time::sleep(Duration::from_millis(250)) => {
                if sess.last_activity.elapsed() >= idle_timeout {
                    let _ = out_tx.send(Message::Text(error_json("TIMEOUT", "idle timeout"))).await;
                    break;
                }
            }
        }
    }

    app.registry().remove(&session_id);
    app.metrics().sessions_active.dec();
    tracing::info!(session = %session_id, "wallet session closed");
}

async fn push_decision(app: &AppState, sess: &SessionState, out_tx: &mpsc::Sender<Message>) {
    let decision = app.policy().evaluate(&sess.snapshot, &sess.constraint);
    app.metrics()
        .evaluations
        .inc(&[("decision", decision.status()), ("surface", "ws")]);
    let _ = out_tx.send(Message::Text(decision_json(&decision))).await;
}
