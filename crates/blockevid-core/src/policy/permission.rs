//! Permission table: role -> fixed set of allowed action names.
//!
//! Membership is literal. There is no inheritance between roles; the demo
//! grants below are intentionally not a hierarchy (`admin` has no
//! `register_complaint`, `user` does) and must stay that way.

use std::collections::{HashMap, HashSet};

use crate::policy::role::RoleTag;

/// Compiled role -> action-set mapping. Built once at startup from injected
/// configuration, then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    grants: HashMap<RoleTag, HashSet<String>>,
}

impl PermissionTable {
    /// Build from explicit (role, actions) pairs. Later pairs for the same
    /// role extend the earlier set.
    pub fn new(grants: impl IntoIterator<Item = (RoleTag, Vec<String>)>) -> Self {
        let mut table: HashMap<RoleTag, HashSet<String>> = HashMap::new();
        for (role, actions) in grants {
            table.entry(role).or_default().extend(actions);
        }
        Self { grants: table }
    }

    /// The demo grants of the original application.
    pub fn demo() -> Self {
        Self::new([
            (
                RoleTag::User,
                vec![
                    "register_complaint".to_string(),
                    "view_own_complaints".to_string(),
                    "track_complaint".to_string(),
                ],
            ),
            (
                RoleTag::Police,
                vec![
                    "view_assigned_complaints".to_string(),
                    "upload_evidence".to_string(),
                    "update_complaint_status".to_string(),
                    "close_complaint".to_string(),
                ],
            ),
            (
                RoleTag::Admin,
                vec![
                    "view_all_complaints".to_string(),
                    "assign_complaints".to_string(),
                    "promote_users".to_string(),
                    "manage_roles".to_string(),
                ],
            ),
        ])
    }

    /// Membership test. Total: `false` for roles with no grants and for
    /// actions not literally enumerated, never an error.
    pub fn has_permission(&self, role: RoleTag, action: &str) -> bool {
        self.grants
            .get(&role)
            .map(|set| set.contains(action))
            .unwrap_or(false)
    }

    /// Actions granted to a role (empty when none configured).
    pub fn actions_for(&self, role: RoleTag) -> Vec<&str> {
        let Some(set) = self.grants.get(&role) else {
            return vec![];
        };
        set.iter().map(String::as_str).collect()
    }

    /// Whether any grants exist for the role.
    pub fn has_grants_for(&self, role: RoleTag) -> bool {
        self.grants.get(&role).is_some_and(|s| !s.is_empty())
    }
}
