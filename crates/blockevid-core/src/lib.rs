//! BlockEvid core: role resolution, permission tables, and access-guard
//! evaluation for the case/evidence-management application.
//!
//! This crate defines the policy contracts shared by the gateway and any
//! embedding UI shell. It intentionally carries no transport or runtime
//! dependencies so the same evaluation logic can run server-side, in tests,
//! or inside a WASM shell.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Policy evaluation is total: a denial is a normal `AccessDecision`, never
//! an error, and resolution never fails for any address string.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{BlockEvidError, Result};
pub use policy::{
    AccessConstraint, AccessDecision, AccessGuard, PermissionTable, RoleDirectory, RoleProvider,
    RoleTag, UserRole, WalletSnapshot,
};
