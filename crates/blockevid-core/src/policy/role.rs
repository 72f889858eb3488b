//! Role classification types.

use serde::{Deserialize, Serialize};

/// Closed set of access-control roles. Compared only for equality against a
/// required role; no ordering or hierarchy is defined between tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTag {
    User,
    Police,
    Admin,
}

impl RoleTag {
    /// String representation used in JSON payloads and dashboard routes.
    pub fn as_str(self) -> &'static str {
        match self {
            RoleTag::User => "user",
            RoleTag::Police => "police",
            RoleTag::Admin => "admin",
        }
    }

    /// Parse a role tag from its lowercase wire form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(RoleTag::User),
            "police" => Some(RoleTag::Police),
            "admin" => Some(RoleTag::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved identity record for a wallet address.
///
/// Immutable once constructed; the resolver rebuilds it on every call rather
/// than mutating a cached copy. Not persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    /// Wallet address this record was resolved for (verbatim, case kept).
    pub address: String,
    /// Role classification.
    pub role: RoleTag,
    /// Display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Badge number (police records only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_number: Option<String>,
}

impl UserRole {
    pub fn new(address: impl Into<String>, role: RoleTag) -> Self {
        Self {
            address: address.into(),
            role,
            name: None,
            email: None,
            badge_number: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge_number = Some(badge.into());
        self
    }
}
