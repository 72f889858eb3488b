//! Wallet session tracking.

pub mod registry;

pub use registry::{Connection, SessionRegistry};
