//! Access guard: folds wallet state + constraints into one decision.
//!
//! The guard holds no state across evaluations. Every call re-resolves the
//! role and re-checks constraints, so the decision always reflects the most
//! recently observed `(connected, address)` pair.

use serde::{Deserialize, Serialize};

use crate::policy::permission::PermissionTable;
use crate::policy::resolver::RoleProvider;
use crate::policy::role::{RoleTag, UserRole};

/// Wallet-connection state as reported by the external wallet collaborator.
/// The guard performs no address normalization beyond what the resolver's
/// pattern matching does internally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl WalletSnapshot {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            connected: true,
            address: Some(address.into()),
        }
    }
}

/// Per-guarded-region constraint. Both checks must pass when both are set
/// (logical AND, not OR).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConstraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<RoleTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<String>,
}

impl AccessConstraint {
    /// No constraints: any resolved role is granted.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn role(role: RoleTag) -> Self {
        Self {
            required_role: Some(role),
            ..Self::default()
        }
    }

    pub fn permission(action: impl Into<String>) -> Self {
        Self {
            required_permission: Some(action.into()),
            ..Self::default()
        }
    }
}

/// Categorical outcome of one guard evaluation. Derived, never stored; the
/// `status` tag is what view layers and JSON consumers branch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum AccessDecision {
    /// Wallet not connected; no role was resolved.
    Unauthenticated,
    /// Connected but no identity could be resolved for the address.
    UnauthorizedWallet { address: String },
    /// Identity resolved but a supplied constraint failed. Carries actual vs.
    /// required so denial panels can show both.
    Forbidden {
        role: UserRole,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required_role: Option<RoleTag>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required_permission: Option<String>,
    },
    /// All supplied constraints satisfied.
    Granted { role: UserRole },
}

impl AccessDecision {
    /// Stable status label (mirrors the serialized `status` tag).
    pub fn status(&self) -> &'static str {
        match self {
            AccessDecision::Unauthenticated => "unauthenticated",
            AccessDecision::UnauthorizedWallet { .. } => "unauthorized-wallet",
            AccessDecision::Forbidden { .. } => "forbidden",
            AccessDecision::Granted { .. } => "granted",
        }
    }

    /// Resolved role record, when the evaluation got that far.
    pub fn role(&self) -> Option<&UserRole> {
        match self {
            AccessDecision::Forbidden { role, .. } | AccessDecision::Granted { role } => Some(role),
            _ => None,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted { .. })
    }
}

/// Stateless evaluator over an injected provider and permission table.
/// Construct once, share freely; evaluation is idempotent.
pub struct AccessGuard<'a> {
    provider: &'a dyn RoleProvider,
    permissions: &'a PermissionTable,
}

impl<'a> AccessGuard<'a> {
    pub fn new(provider: &'a dyn RoleProvider, permissions: &'a PermissionTable) -> Self {
        Self {
            provider,
            permissions,
        }
    }

    /// Evaluate the snapshot against the constraint.
    ///
    /// Order: connection check, then resolution, then constraints. Both
    /// constraint checks run; either failing alone forbids.
    pub fn evaluate(
        &self,
        snapshot: &WalletSnapshot,
        constraint: &AccessConstraint,
    ) -> AccessDecision {
        if !snapshot.connected {
            return AccessDecision::Unauthenticated;
        }

        let Some(address) = snapshot.address.as_deref() else {
            // Connected with no address reported: nothing to resolve.
            return AccessDecision::UnauthorizedWallet {
                address: String::new(),
            };
        };

        let Some(role) = self.provider.resolve_role(address) else {
            return AccessDecision::UnauthorizedWallet {
                address: address.to_string(),
            };
        };

        let role_ok = constraint
            .required_role
            .map(|required| role.role == required)
            .unwrap_or(true);
        let perm_ok = constraint
            .required_permission
            .as_deref()
            .map(|action| self.permissions.has_permission(role.role, action))
            .unwrap_or(true);

        if !role_ok || !perm_ok {
            tracing::debug!(
                address,
                actual = %role.role,
                required_role = ?constraint.required_role,
                required_permission = ?constraint.required_permission,
                "access forbidden"
            );
            return AccessDecision::Forbidden {
                role,
                required_role: constraint.required_role,
                required_permission: constraint.required_permission.clone(),
            };
        }

        AccessDecision::Granted { role }
    }
}
