//! Compiled policy runtime.
//!
//! Compiles roster/grants configuration into the core's lookup structures
//! once at startup, then shares them read-only with the HTTP and WS layers.

pub mod runtime;

pub use runtime::PolicyRuntime;
