//! Lightweight in-process metrics (dependency-free).
//!
//! Minimal Prometheus-compatible counters/gauges stored as atomics and
//! rendered by the `/metrics` handler.

pub mod metrics;

pub use metrics::PolicyMetrics;
