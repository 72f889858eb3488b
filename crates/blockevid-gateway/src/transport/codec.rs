//! Decode-once codec for the wallet-event stream.
//!
//! Text frames carry a strict JSON envelope (`deny_unknown_fields`); binary
//! frames are rejected outright. Ping/Pong/Close are surfaced for lifecycle
//! management.

use axum::extract::ws::Message;
use serde::Deserialize;

use blockevid_core::error::{BlockEvidError, Result};
use blockevid_core::RoleTag;

/// Wire protocol version for wallet-event envelopes.
pub const PROTOCOL_VERSION: u8 = 1;

/// Inbound wallet-event kinds. `connect`/`switch_account` carry an address,
/// `evaluate` carries constraint fields, `disconnect` carries nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Connect,
    Disconnect,
    SwitchAccount,
    Evaluate,
}

/// Strict wallet-event envelope (Text frame).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletEvent {
    /// Protocol version.
    pub v: u8,
    /// Event kind (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Wallet address (connect / switch_account).
    #[serde(default)]
    pub address: Option<String>,
    /// Required role for subsequent evaluations.
    #[serde(default)]
    pub required_role: Option<RoleTag>,
    /// Required permission for subsequent evaluations.
    #[serde(default)]
    pub required_permission: Option<String>,
}

#[derive(Debug)]
pub enum Inbound {
    Event(WalletEvent),
    Ping(Vec<u8>),
    Pong(Vec<u8>),
    Close,
}

pub fn decode(msg: Message) -> Result<Inbound> {
    match msg {
        Message::Text(s) => {
            let ev: WalletEvent = serde_json::from_str(&s)
                .map_err(|e| BlockEvidError::BadRequest(format!("invalid event json: {e}")))?;
            if ev.v != PROTOCOL_VERSION {
                return Err(BlockEvidError::UnsupportedVersion);
            }
            Ok(Inbound::Event(ev))
        }
        Message::Binary(_) => Err(BlockEvidError::BadRequest(
            "binary frames not supported".into(),
        )),
        Message::Ping(v) => Ok(Inbound::Ping(v)),
        Message::Pong(v) => Ok(Inbound::Pong(v)),
        Message::Close(_) => Ok(Inbound::Close),
    }
}
