//! Shared application state for the BlockEvid gateway.
//!
//! Compiles the policy runtime once at startup and shares it (plus the
//! session registry and metrics) across the HTTP and WS layers. Startup
//! errors are explicit (`Result`), never panics.

use std::sync::Arc;

use blockevid_core::error::Result;

use crate::config::PolicyConfig;
use crate::obs::PolicyMetrics;
use crate::policy::PolicyRuntime;
use crate::session::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: PolicyConfig,
    policy: PolicyRuntime,
    registry: SessionRegistry,
    metrics: PolicyMetrics,
}

impl AppState {
    /// Build application state from a validated config.
    pub fn new(cfg: PolicyConfig) -> Result<Self> {
        let policy = PolicyRuntime::new(&cfg)?;

        // Grants <-> roster sanity check: a role with no grants makes every
        // permission-constrained region deny. Legal, but worth a warning.
        for role in policy.roles_without_grants() {
            tracing::warn!(%role, "no grants configured for role; permission constraints will always deny it");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                policy,
                registry: SessionRegistry::new(),
                metrics: PolicyMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &PolicyConfig {
        &self.inner.cfg
    }

    pub fn policy(&self) -> &PolicyRuntime {
        &self.inner.policy
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> &PolicyMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
