//! Policy layer (roles, permissions, access guard).
//!
//! Three cooperating pieces: the role resolver (address -> `UserRole`), the
//! permission table (role -> allowed actions), and the access guard that
//! folds both into a single `AccessDecision` for the view layer to branch on.

pub mod guard;
pub mod permission;
pub mod resolver;
pub mod role;

pub use guard::{AccessConstraint, AccessDecision, AccessGuard, WalletSnapshot};
pub use permission::PermissionTable;
pub use resolver::{RoleDirectory, RoleProvider};
pub use role::{RoleTag, UserRole};
