use std::collections::HashSet;

use serde::Deserialize;

use blockevid_core::error::{BlockEvidError, Result};
use blockevid_core::RoleTag;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,

    /// Explicit address -> role records. Empty means "use the demo roster".
    #[serde(default)]
    pub roster: Vec<RosterEntry>,

    /// Role -> action grants. Empty means "use the demo grants".
    #[serde(default)]
    pub grants: Vec<GrantEntry>,
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BlockEvidError::UnsupportedVersion);
        }

        self.service.validate()?;

        let mut seen_addr: HashSet<&str> = HashSet::new();
        for entry in &self.roster {
            if entry.address.is_empty() {
                return Err(BlockEvidError::BadRequest(
                    "roster entry with empty address".into(),
                ));
            }
            if !seen_addr.insert(entry.address.as_str()) {
                return Err(BlockEvidError::BadRequest(format!(
                    "duplicate roster address: {}",
                    entry.address
                )));
            }
        }

        let mut seen_role: HashSet<RoleTag> = HashSet::new();
        for grant in &self.grants {
            if !seen_role.insert(grant.role) {
                return Err(BlockEvidError::BadRequest(format!(
                    "duplicate grants entry for role: {}",
                    grant.role
                )));
            }
            if grant.actions.iter().any(|a| a.is_empty()) {
                return Err(BlockEvidError::BadRequest(format!(
                    "empty action name in grants for role: {}",
                    grant.role
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            ping_interval_ms: default_ping_interval_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        if !(5000..=120000).contains(&self.ping_interval_ms) {
            return Err(BlockEvidError::BadRequest(
                "service.ping_interval_ms must be between 5000 and 120000".into(),
            ));
        }
        if !(10000..=600000).contains(&self.idle_timeout_ms) {
            return Err(BlockEvidError::BadRequest(
                "service.idle_timeout_ms must be between 10000 and 600000".into(),
            ));
        }
        if self.idle_timeout_ms <= self.ping_interval_ms {
            return Err(BlockEvidError::BadRequest(
                "service.idle_timeout_ms must be greater than ping_interval_ms".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_ping_interval_ms() -> u64 {
    20000
}
fn default_idle_timeout_ms() -> u64 {
    60000
}

/// One explicit directory record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    pub address: String,
    pub role: RoleTag,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub badge_number: Option<String>,
}

/// Action set for one role.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrantEntry {
    pub role: RoleTag,
    #[serde(default)]
    pub actions: Vec<String>,
}
