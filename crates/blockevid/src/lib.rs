//! Top-level facade crate for BlockEvid.
//!
//! Re-exports the policy core and the gateway library so embedders can
//! depend on a single crate.

pub mod core {
    pub use blockevid_core::*;
}

pub mod gateway {
    pub use blockevid_gateway::*;
}
