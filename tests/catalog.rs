//! Tests for bank definition validation and the catalog artifact.
mod common;
use common::*;
use haisen::catalog::builtin;
use haisen::error::CatalogError;
use haisen::prelude::*;

#[test]
fn test_builtin_wye_wye_validates() {
    let catalog = BankCatalog::new(builtin::wye_wye()).expect("built-in bank must validate");

    assert_eq!(catalog.bank_type(), BankType::WyeWye);
    assert_eq!(catalog.points().len(), 20);
    assert_eq!(catalog.required_connections().len(), 13);
    assert_eq!(catalog.steps().len(), 5);

    // Every step connection must come from the required set; spot-check the
    // grounding step.
    let grounding = &catalog.steps()[4];
    assert!(catalog.is_required(&grounding.required_connections[0].key()));
}

#[test]
fn test_catalog_point_lookup() {
    let catalog = BankCatalog::new(three_wire_bank()).expect("must validate");

    assert!(catalog.contains_point("t2"));
    assert_eq!(catalog.point("t2").map(|p| p.label.as_str()), Some("T2"));
    assert!(catalog.point("t9").is_none());

    // Required lookups are direction-insensitive.
    assert!(catalog.is_required(&PairKey::new("t1", "a")));
    assert!(!catalog.is_required(&PairKey::new("a", "t2")));
}

#[test]
fn test_duplicate_point_id_rejected() {
    let mut definition = three_wire_bank();
    let duplicate = definition.points[0].clone();
    definition.points.push(duplicate);

    match BankCatalog::new(definition) {
        Err(CatalogError::DuplicatePointId { point_id }) => assert_eq!(point_id, "a"),
        other => panic!("Expected DuplicatePointId, got {:?}", other),
    }
}

#[test]
fn test_unknown_required_point_rejected() {
    let mut definition = three_wire_bank();
    definition
        .required_connections
        .push(RequiredConnection::new("a", "t9"));

    match BankCatalog::new(definition) {
        Err(CatalogError::PointNotFound { missing_point_id }) => {
            assert_eq!(missing_point_id, "t9")
        }
        other => panic!("Expected PointNotFound, got {:?}", other),
    }
}

#[test]
fn test_self_connection_rejected() {
    let mut definition = three_wire_bank();
    definition
        .required_connections
        .push(RequiredConnection::new("a", "a"));

    assert!(matches!(
        BankCatalog::new(definition),
        Err(CatalogError::SelfConnection { .. })
    ));
}

#[test]
fn test_duplicate_required_connection_rejected() {
    let mut definition = three_wire_bank();
    // Same wiring, opposite direction: still a duplicate.
    definition
        .required_connections
        .push(RequiredConnection::new("t1", "a"));

    assert!(matches!(
        BankCatalog::new(definition),
        Err(CatalogError::DuplicateRequiredConnection { .. })
    ));
}

#[test]
fn test_step_with_unrequired_connection_rejected() {
    let mut definition = three_wire_bank();
    definition.steps[0]
        .required_connections
        .push(RequiredConnection::new("a", "t2"));

    match BankCatalog::new(definition) {
        Err(CatalogError::StepConnectionNotRequired { step_number, .. }) => {
            assert_eq!(step_number, 1)
        }
        other => panic!("Expected StepConnectionNotRequired, got {:?}", other),
    }
}

#[test]
fn test_step_numbers_must_ascend() {
    let mut definition = three_wire_bank();
    definition.steps[1].step_number = 1;

    assert!(matches!(
        BankCatalog::new(definition),
        Err(CatalogError::StepOutOfSequence { step_number: 1 })
    ));
}

#[test]
fn test_library_register_and_lookup() {
    let mut library = CatalogLibrary::new();
    assert!(library.is_empty());

    library.register(builtin::wye_wye()).expect("must validate");
    assert!(library.contains(BankType::WyeWye));
    assert!(!library.contains(BankType::OpenDelta));
    assert!(library.bank(BankType::WyeWye).is_some());
    assert_eq!(library.bank_types().count(), 1);
}

#[test]
fn test_artifact_round_trip() {
    let mut library = CatalogLibrary::new();
    library.register(builtin::wye_wye()).expect("must validate");
    library.register(three_wire_bank()).expect("must validate");

    let path = std::env::temp_dir().join("haisen_artifact_round_trip.bin");
    let path = path.to_str().expect("temp path must be valid UTF-8");

    library.save(path).expect("save must succeed");
    let loaded = CatalogLibrary::from_file(path).expect("load must succeed");
    std::fs::remove_file(path).ok();

    // Registration order: the three-wire bank replaced the built-in, since
    // both are wye-wye.
    let catalog = loaded
        .bank(BankType::WyeWye)
        .expect("wye-wye survives the round trip");
    assert_eq!(catalog.points().len(), 6);
    assert!(catalog.is_required(&PairKey::new("t3", "c")));
}
