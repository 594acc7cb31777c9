//! Unit tests for core haisen value types.
mod common;
use haisen::error::CatalogError;
use haisen::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_pair_key_symmetry() {
    assert_eq!(PairKey::new("a", "t1"), PairKey::new("t1", "a"));

    let mut keys = HashSet::new();
    keys.insert(PairKey::new("phase-a", "t1-h1"));
    assert!(keys.contains(&PairKey::new("t1-h1", "phase-a")));
    assert_eq!(keys.len(), 1);
}

#[test]
fn test_pair_key_endpoints() {
    let key = PairKey::new("t1", "a");
    // Normalized order: lexicographically smaller id first.
    assert_eq!(key.first(), "a");
    assert_eq!(key.second(), "t1");
    assert!(key.touches("a"));
    assert!(key.touches("t1"));
    assert!(!key.touches("b"));
}

#[test]
fn test_pair_key_display() {
    let key = PairKey::new("t1", "a");
    assert_eq!(format!("{}", key), "a <-> t1");
}

#[test]
fn test_wire_connection_key_ignores_direction() {
    let forward = WireConnection {
        from: "a".to_string(),
        to: "t1".to_string(),
        is_correct: true,
        error_reason: None,
    };
    let reverse = WireConnection {
        from: "t1".to_string(),
        to: "a".to_string(),
        is_correct: true,
        error_reason: None,
    };
    assert_eq!(forward.key(), reverse.key());
}

#[test]
fn test_required_connection_key_matches_pair() {
    let required = RequiredConnection::new("b", "t2");
    assert_eq!(required.key(), PairKey::new("t2", "b"));
}

#[test]
fn test_bank_type_display_round_trip() {
    for bank_type in BankType::ALL {
        let displayed = format!("{}", bank_type);
        assert_eq!(BankType::from_str(&displayed), Ok(bank_type));
    }
    assert!(BankType::from_str("star-star").is_err());
}

#[test]
fn test_point_kind_display() {
    assert_eq!(format!("{}", PointKind::Primary), "primary");
    assert_eq!(format!("{}", PointKind::Ground), "ground");
}

#[test]
fn test_error_display() {
    let err = CatalogError::PointNotFound {
        missing_point_id: "t9".to_string(),
    };
    assert!(err.to_string().contains("t9"));

    let err = CatalogError::StepConnectionNotRequired {
        step_number: 3,
        a: "a".to_string(),
        b: "t2".to_string(),
    };
    assert!(err.to_string().contains('3'));
    assert!(err.to_string().contains("t2"));

    let err = CatalogConversionError::ValidationError("missing terminals".to_string());
    assert!(err.to_string().contains("missing terminals"));
}
