//! Transport layer (WebSocket).
//!
//! Exposes the WS upgrade handler and the decode-once codec that turns raw
//! frames into wallet events before they reach the guard.

pub mod codec;
pub mod ws;
