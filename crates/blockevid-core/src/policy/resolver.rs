//! Role resolution: exact directory lookup with pattern-based fallback.
//!
//! The directory stands in for a real identity service. Addresses missing
//! from it are classified by a deterministic pattern fallback so resolution
//! is total; the synthesized records carry fixed placeholder profiles. The
//! fallback self-assigns privilege by construction, which is why it lives
//! behind `RoleProvider`: swapping in a real lookup must not touch the guard.

use std::collections::HashMap;

use crate::policy::role::{RoleTag, UserRole};

/// Seam between the access guard and whatever maps addresses to roles.
///
/// `None` means the provider has no identity for the address; the guard
/// treats that as an unauthorized wallet. `RoleDirectory` never returns
/// `None`, but a production provider may.
pub trait RoleProvider: Send + Sync {
    fn resolve_role(&self, address: &str) -> Option<UserRole>;
}

/// Address -> role directory with demo-pattern fallback.
///
/// Lookup precedence:
/// 1. exact, case-sensitive match against the injected table;
/// 2. otherwise [`synthesize_role`] on the address.
#[derive(Debug, Clone, Default)]
pub struct RoleDirectory {
    entries: HashMap<String, UserRole>,
}

impl RoleDirectory {
    /// Build a directory from explicit records. Keys are the records'
    /// addresses, matched case-sensitively.
    pub fn new(records: impl IntoIterator<Item = UserRole>) -> Self {
        let entries = records
            .into_iter()
            .map(|r| (r.address.clone(), r))
            .collect();
        Self { entries }
    }

    /// The demo roster of the original application.
    pub fn demo() -> Self {
        Self::new([
            UserRole::new("0x1234567890123456789012345678901234567890", RoleTag::Admin)
                .with_name("Admin User")
                .with_email("admin@blockevid.io"),
            UserRole::new("0x742d35Cc6634C0532925a3b844Bc454e4438f4B1", RoleTag::Police)
                .with_name("Officer John Doe")
                .with_email("officer@police.gov")
                .with_badge("PD-4521"),
            UserRole::new("0x8Ba1f109551bD432803012645Ac136ddd64DBA72", RoleTag::User)
                .with_name("Jane Citizen")
                .with_email("jane@example.com"),
        ])
    }

    /// Number of explicit (non-synthesized) records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicit record for an address, without fallback synthesis.
    pub fn get(&self, address: &str) -> Option<&UserRole> {
        self.entries.get(address)
    }
}

impl RoleProvider for RoleDirectory {
    fn resolve_role(&self, address: &str) -> Option<UserRole> {
        if let Some(rec) = self.entries.get(address) {
            return Some(rec.clone());
        }
        Some(synthesize_role(address))
    }
}

/// Deterministic fallback classification for addresses absent from the
/// directory. Admin patterns are checked before police patterns; anything
/// else is a plain user.
pub fn synthesize_role(address: &str) -> UserRole {
    let lower = address.to_lowercase();

    if lower.contains("fff") || lower.contains("aaa") || lower.ends_with('0') {
        return UserRole::new(address, RoleTag::Admin)
            .with_name("Demo Admin")
            .with_email("demo.admin@blockevid.io");
    }

    if lower.contains("bbb") || lower.contains("ccc") || lower.ends_with('1') {
        return UserRole::new(address, RoleTag::Police)
            .with_name("Demo Officer")
            .with_email("demo.officer@blockevid.io")
            .with_badge("PD-0000");
    }

    UserRole::new(address, RoleTag::User)
        .with_name("Demo User")
        .with_email("demo.user@blockevid.io")
}
