#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use blockevid_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
service:
  listen: "0.0.0.0:8080"
roster:
  - address: "0xabc"
    role: user
    badge: "typo-field" # should be badge_number
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert!(cfg.roster.is_empty());
    assert!(cfg.grants.is_empty());
    assert_eq!(cfg.service.listen, "0.0.0.0:8080");
}

#[test]
fn wrong_version_is_rejected() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn unknown_role_tag_is_rejected() {
    let bad = r#"
version: 1
roster:
  - address: "0xabc"
    role: superadmin
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn duplicate_roster_address_is_rejected() {
    let bad = r#"
version: 1
roster:
  - address: "0xabc"
    role: user
  - address: "0xabc"
    role: admin
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate roster address"));
}

#[test]
fn duplicate_grant_role_is_rejected() {
    let bad = r#"
version: 1
grants:
  - role: police
    actions: ["upload_evidence"]
  - role: police
    actions: ["close_complaint"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate grants entry"));
}

#[test]
fn empty_action_name_is_rejected() {
    let bad = r#"
version: 1
grants:
  - role: user
    actions: ["register_complaint", ""]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("empty action name"));
}

#[test]
fn service_timer_ranges_are_enforced() {
    let bad = r#"
version: 1
service:
  ping_interval_ms: 1000
"#;
    assert!(config::load_from_str(bad).is_err());

    let bad = r#"
version: 1
service:
  ping_interval_ms: 30000
  idle_timeout_ms: 20000
"#;
    let err = config::load_from_str(bad).expect_err("idle must exceed ping");
    assert!(err.to_string().contains("idle_timeout_ms"));
}

#[test]
fn full_roster_and_grants_parse() {
    let ok = r#"
version: 1
service:
  listen: "127.0.0.1:9090"
roster:
  - address: "0x1111111111111111111111111111111111111111"
    role: admin
    name: "Root"
    email: "root@example.com"
  - address: "0x2222222222222222222222222222222222222222"
    role: police
    badge_number: "PD-7"
grants:
  - role: admin
    actions: ["manage_roles"]
  - role: police
    actions: ["upload_evidence"]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.roster.len(), 2);
    assert_eq!(cfg.grants.len(), 2);
    assert_eq!(cfg.roster[1].badge_number.as_deref(), Some("PD-7"));
}
