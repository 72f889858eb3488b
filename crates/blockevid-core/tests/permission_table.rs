//! Permission-table membership tests (literal sets, no inheritance).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use blockevid_core::{PermissionTable, RoleTag};

#[test]
fn demo_grants_are_literal() {
    let table = PermissionTable::demo();

    assert!(table.has_permission(RoleTag::User, "register_complaint"));
    assert!(table.has_permission(RoleTag::User, "view_own_complaints"));
    assert!(table.has_permission(RoleTag::User, "track_complaint"));

    assert!(table.has_permission(RoleTag::Police, "view_assigned_complaints"));
    assert!(table.has_permission(RoleTag::Police, "upload_evidence"));
    assert!(table.has_permission(RoleTag::Police, "update_complaint_status"));
    assert!(table.has_permission(RoleTag::Police, "close_complaint"));

    assert!(table.has_permission(RoleTag::Admin, "view_all_complaints"));
    assert!(table.has_permission(RoleTag::Admin, "assign_complaints"));
    assert!(table.has_permission(RoleTag::Admin, "promote_users"));
    assert!(table.has_permission(RoleTag::Admin, "manage_roles"));
}

#[test]
fn no_inheritance_between_roles() {
    let table = PermissionTable::demo();

    // admin is deliberately not a superset of user/police.
    assert!(!table.has_permission(RoleTag::Admin, "register_complaint"));
    assert!(!table.has_permission(RoleTag::Admin, "upload_evidence"));

    assert!(!table.has_permission(RoleTag::User, "promote_users"));
    assert!(!table.has_permission(RoleTag::User, "upload_evidence"));
    assert!(!table.has_permission(RoleTag::Police, "manage_roles"));
}

#[test]
fn unknown_actions_are_false_never_error() {
    let table = PermissionTable::demo();
    assert!(!table.has_permission(RoleTag::User, "no_such_action"));
    assert!(!table.has_permission(RoleTag::Admin, ""));
}

#[test]
fn role_without_grants_denies_everything() {
    let table = PermissionTable::new([(
        RoleTag::User,
        vec!["register_complaint".to_string()],
    )]);
    assert!(!table.has_permission(RoleTag::Police, "upload_evidence"));
    assert!(!table.has_grants_for(RoleTag::Police));
    assert!(table.actions_for(RoleTag::Admin).is_empty());
}

#[test]
fn repeated_role_entries_extend_the_set() {
    let table = PermissionTable::new([
        (RoleTag::Police, vec!["upload_evidence".to_string()]),
        (RoleTag::Police, vec!["close_complaint".to_string()]),
    ]);
    assert!(table.has_permission(RoleTag::Police, "upload_evidence"));
    assert!(table.has_permission(RoleTag::Police, "close_complaint"));
}
