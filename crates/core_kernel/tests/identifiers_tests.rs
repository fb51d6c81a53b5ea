//! Unit tests for strongly-typed identifiers

use core_kernel::{CarId, ClaimId, ExpirationId, OwnerId, PolicyId};
use uuid::Uuid;

#[test]
fn display_includes_type_prefix() {
    assert!(CarId::new().to_string().starts_with("CAR-"));
    assert!(OwnerId::new().to_string().starts_with("OWN-"));
    assert!(PolicyId::new().to_string().starts_with("POL-"));
    assert!(ClaimId::new().to_string().starts_with("CLM-"));
    assert!(ExpirationId::new().to_string().starts_with("EXP-"));
}

#[test]
fn parses_with_and_without_prefix() {
    let id = PolicyId::new();
    let with_prefix: PolicyId = id.to_string().parse().unwrap();
    let without_prefix: PolicyId = id.as_uuid().to_string().parse().unwrap();
    assert_eq!(id, with_prefix);
    assert_eq!(id, without_prefix);
}

#[test]
fn rejects_malformed_input() {
    assert!("not-a-uuid".parse::<CarId>().is_err());
}

#[test]
fn serde_roundtrip_is_transparent() {
    let id = CarId::from_uuid(Uuid::new_v4());
    let json = serde_json::to_string(&id).unwrap();
    // Serialized as a bare UUID string, not an object
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    let back: CarId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, back);
}

#[test]
fn random_ids_are_unique() {
    let a = ExpirationId::new();
    let b = ExpirationId::new();
    assert_ne!(a, b);
}
