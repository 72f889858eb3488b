use blockevid_core::error::{BlockEvidError, Result};
use blockevid_core::{
    AccessConstraint, AccessDecision, AccessGuard, PermissionTable, RoleDirectory, RoleProvider,
    RoleTag, UserRole, WalletSnapshot,
};

use crate::config::schema::{PolicyConfig, RosterEntry};

/// Compiled directory + permission table.
/// Construct once at startup, then share via Arc.
pub struct PolicyRuntime {
    directory: RoleDirectory,
    permissions: PermissionTable,
}

impl PolicyRuntime {
    /// Compile a validated config. Empty roster/grants sections fall back to
    /// the demo tables so the process always boots with the original
    /// application's behavior.
    pub fn new(cfg: &PolicyConfig) -> Result<Self> {
        let directory = if cfg.roster.is_empty() {
            RoleDirectory::demo()
        } else {
            // `RoleDirectory::new` would silently keep the last duplicate;
            // refuse instead, even when the caller skipped `validate()`.
            let records: Vec<UserRole> = cfg.roster.iter().map(roster_record).collect();
            let dir = RoleDirectory::new(records);
            if dir.len() != cfg.roster.len() {
                return Err(BlockEvidError::BadRequest(
                    "duplicate roster address".into(),
                ));
            }
            dir
        };

        let permissions = if cfg.grants.is_empty() {
            PermissionTable::demo()
        } else {
            PermissionTable::new(
                cfg.grants
                    .iter()
                    .map(|g| (g.role, g.actions.clone())),
            )
        };

        Ok(Self {
            directory,
            permissions,
        })
    }

    /// One guard evaluation against the compiled tables.
    pub fn evaluate(
        &self,
        snapshot: &WalletSnapshot,
        constraint: &AccessConstraint,
    ) -> AccessDecision {
        AccessGuard::new(&self.directory, &self.permissions).evaluate(snapshot, constraint)
    }

    /// Resolve a role record for an address (total with the directory
    /// provider; a real identity provider may return `None`).
    pub fn resolve(&self, address: &str) -> Option<UserRole> {
        self.directory.resolve_role(address)
    }

    pub fn directory(&self) -> &RoleDirectory {
        &self.directory
    }

    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }

    /// Roles that appear in the directory but have no grants configured.
    /// Permission-constrained regions would always deny these.
    pub fn roles_without_grants(&self) -> Vec<RoleTag> {
        [RoleTag::User, RoleTag::Police, RoleTag::Admin]
            .into_iter()
            .filter(|r| !self.permissions.has_grants_for(*r))
            .collect()
    }
}

fn roster_record(entry: &RosterEntry) -> UserRole {
    let mut rec = UserRole::new(entry.address.clone(), entry.role);
    rec.name = entry.name.clone();
    rec.email = entry.email.clone();
    rec.badge_number = entry.badge_number.clone();
    rec
}
