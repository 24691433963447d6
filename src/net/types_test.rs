use super::*;

// =============================================================================
// Role mapping
// =============================================================================

#[test]
fn role_parse_accepts_every_member() {
    assert_eq!(Role::parse("super_admin"), Some(Role::SuperAdmin));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("rider"), Some(Role::Rider));
    assert_eq!(Role::parse("user"), Some(Role::User));
    assert_eq!(Role::parse("unknown"), Some(Role::Unknown));
}

#[test]
fn role_parse_is_exact_match_only() {
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("super-admin"), None);
    assert_eq!(Role::parse(" admin"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("wizard"), None);
}

#[test]
fn from_api_collapses_unmapped_tags() {
    assert_eq!(Role::from_api("wizard"), Role::Unknown);
    assert_eq!(Role::from_api(""), Role::Unknown);
    assert_eq!(Role::from_api("rider"), Role::Rider);
}

#[test]
fn as_str_inverts_parse() {
    for role in [Role::SuperAdmin, Role::Admin, Role::Rider, Role::User, Role::Unknown] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

// =============================================================================
// AuthPayload normalization
// =============================================================================

const USER_JSON: &str = r#"{
    "id": "u-1",
    "fullname": "Ada Obi",
    "email": "ada@example.com",
    "phone": "08030000000",
    "role": "admin",
    "verification_status": "verified",
    "created_at": "2024-05-01T10:00:00Z",
    "updated_at": "2024-05-02T10:00:00Z"
}"#;

#[test]
fn auth_payload_accepts_token_field() {
    let json = format!(r#"{{"message":"ok","token":"tok-1","token_type":"Bearer","user":{USER_JSON}}}"#);
    let payload: AuthPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(payload.token, "tok-1");
    assert_eq!(payload.user.id, "u-1");
}

#[test]
fn auth_payload_accepts_access_token_field() {
    let json = format!(r#"{{"access_token":"tok-2","user":{USER_JSON}}}"#);
    let payload: AuthPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(payload.token, "tok-2");
}

#[test]
fn auth_payload_rejects_missing_credential() {
    let json = format!(r#"{{"message":"ok","user":{USER_JSON}}}"#);
    assert!(serde_json::from_str::<AuthPayload>(&json).is_err());
}

// =============================================================================
// Identity deserialization
// =============================================================================

#[test]
fn user_tolerates_absent_optionals() {
    let user: User = serde_json::from_str(USER_JSON).unwrap();
    assert!(user.branch_id.is_none());
    assert!(user.branch.is_none());
    assert!(user.user_profile.is_none());
    assert!(user.balance.is_none());
    assert!(user.banned_at.is_none());
}

#[test]
fn user_rejects_missing_required_field() {
    let json = r#"{"id":"u-1","fullname":"Ada Obi","email":"ada@example.com","role":"admin","verification_status":"verified"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

#[test]
fn user_carries_nested_branch_and_profile() {
    let json = r#"{
        "id": "u-2",
        "fullname": "Bola Ade",
        "email": "bola@example.com",
        "phone": "08120000000",
        "role": "rider",
        "verification_status": "pending",
        "branch_id": 7,
        "branch": {"id": 7, "name": "Yaba", "location": "Lagos"},
        "user_profile": {
            "address": "3 Herbert Macaulay Way",
            "vehicle_type": "tricycle",
            "total_pickups": 12,
            "current_debt": 250.5
        },
        "balance": "900.00",
        "created_at": "2024-06-01T08:00:00Z",
        "updated_at": "2024-06-02T08:00:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.branch.as_ref().unwrap().name, "Yaba");
    let profile = user.user_profile.unwrap();
    assert_eq!(profile.total_pickups, Some(12));
    assert_eq!(profile.vehicle_type.as_deref(), Some("tricycle"));
}
