//! Minimal metrics registry for the gateway.
//!
//! Counters with dynamic labels are backed by `DashMap`; label sets are
//! flattened into sorted key vectors for deterministic rendering order.

use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};

use dashmap::DashMap;

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn render_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let _ = writeln!(
                out,
                "{}{{{}}} {}",
                name,
                render_labels(r.key()),
                r.value().load(Ordering::Relaxed)
            );
        }
    }
}

/// Single unlabeled gauge.
#[derive(Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }
    pub fn dec(&self) {
        self.value.fetch_sub(1, Ordering::Relaxed);
    }
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} gauge\n{name} {}", self.get());
    }
}

/// Gateway-wide metrics plus the draining flag consumed by `/readyz`.
#[derive(Default)]
pub struct PolicyMetrics {
    /// Guard evaluations, labeled by decision status and surface (http/ws).
    pub evaluations: CounterVec,
    /// WebSocket upgrades accepted.
    pub ws_upgrades: CounterVec,
    /// Inbound frames that failed envelope decoding.
    pub decode_errors: CounterVec,
    /// Currently connected wallet sessions.
    pub sessions_active: Gauge,
    draining: AtomicBool,
}

impl PolicyMetrics {
    /// Mark draining state.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }
    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all registered metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.evaluations
            .render("blockevid_evaluations_total", &mut out);
        self.ws_upgrades.render("blockevid_ws_upgrades_total", &mut out);
        self.decode_errors
            .render("blockevid_decode_errors_total", &mut out);
        self.sessions_active
            .render("blockevid_ws_sessions_active", &mut out);
        let _ = writeln!(
            out,
            "# TYPE blockevid_draining gauge\nblockevid_draining {}",
            if self.is_draining() { 1 } else { 0 }
        );
        out
    }
}
