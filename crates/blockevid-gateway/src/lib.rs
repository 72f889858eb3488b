//! BlockEvid gateway library entry.
//!
//! Hosts the compiled policy runtime behind HTTP and WebSocket surfaces: the
//! wallet-connection collaborator feeds wallet events over `/v1/ws`, the view
//! layer consumes access decisions from the same socket or via one-shot
//! `POST /v1/access/evaluate` calls. Consumed by the binary (`main.rs`) and
//! by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
pub mod session;
pub mod transport;
