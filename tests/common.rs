//! Common test utilities for building bank definitions and sessions.
use haisen::prelude::*;
use std::sync::Arc;

/// Creates a minimal three-wire bank for scenario tests.
///
/// Required wiring: `a <-> t1`, `b <-> t2`, `c <-> t3`. Guided steps: step 1
/// is the first wire alone, step 2 is the remaining two.
#[allow(dead_code)]
pub fn three_wire_bank() -> BankDefinition {
    let points = vec![
        source_point("a", "Phase A", PointKind::Primary),
        source_point("b", "Phase B", PointKind::Primary),
        source_point("c", "Phase C", PointKind::Primary),
        transformer_point("t1", "T1", PointKind::Primary),
        transformer_point("t2", "T2", PointKind::Primary),
        transformer_point("t3", "T3", PointKind::Primary),
    ];

    let steps = vec![
        TrainingStep::new(
            1,
            vec![RequiredConnection::new("a", "t1")],
            "Connect phase A to transformer T1.",
        ),
        TrainingStep::new(
            2,
            vec![
                RequiredConnection::new("b", "t2"),
                RequiredConnection::new("c", "t3"),
            ],
            "Connect the remaining phases to T2 and T3.",
        ),
    ];

    BankDefinition {
        bank_type: BankType::WyeWye,
        points,
        required_connections: vec![
            RequiredConnection::new("a", "t1"),
            RequiredConnection::new("b", "t2"),
            RequiredConnection::new("c", "t3"),
        ],
        steps,
    }
}

/// Creates a bank with every point kind represented, for compatibility
/// rule tests. Required wiring covers a same-kind cross-side pair, a
/// primary-secondary pair, and the neutral/ground chain.
#[allow(dead_code)]
pub fn mixed_kind_bank() -> BankDefinition {
    let points = vec![
        source_point("phase-a", "Phase A", PointKind::Primary),
        source_point("phase-b", "Phase B", PointKind::Primary),
        transformer_point("h1", "H1", PointKind::Primary),
        transformer_point("h2", "H2", PointKind::Neutral),
        transformer_point("x2", "X2", PointKind::Neutral),
        transformer_point("x1", "X1", PointKind::Secondary),
        source_point("service", "Service", PointKind::Secondary),
        source_point("neutral-bus", "Neutral Bus", PointKind::Neutral),
        source_point("ground-rod", "Ground Rod", PointKind::Ground),
        source_point("ground-grid", "Ground Grid", PointKind::Ground),
    ];

    BankDefinition {
        bank_type: BankType::WyeWye,
        points,
        required_connections: vec![
            RequiredConnection::new("phase-a", "h1"),
            RequiredConnection::new("x1", "service"),
            RequiredConnection::new("h2", "neutral-bus"),
            RequiredConnection::new("neutral-bus", "ground-rod"),
        ],
        steps: vec![],
    }
}

/// Registers a definition into a fresh shared library.
#[allow(dead_code)]
pub fn library_with(definition: BankDefinition) -> Arc<CatalogLibrary> {
    let mut library = CatalogLibrary::new();
    library
        .register(definition)
        .expect("test definition must validate");
    Arc::new(library)
}

/// A session over the three-wire bank in the given mode.
#[allow(dead_code)]
pub fn three_wire_session(mode: TrainingMode) -> TrainingSession {
    TrainingSession::new(
        library_with(three_wire_bank()),
        BankType::WyeWye,
        mode,
        Difficulty::Apprentice,
    )
}

/// A session over the mixed-kind bank, always freeplay.
#[allow(dead_code)]
pub fn mixed_kind_session() -> TrainingSession {
    TrainingSession::new(
        library_with(mixed_kind_bank()),
        BankType::WyeWye,
        TrainingMode::Freeplay,
        Difficulty::Journeyman,
    )
}

#[allow(dead_code)]
fn source_point(id: &str, label: &str, kind: PointKind) -> ConnectionPoint {
    ConnectionPoint::new(id, label, kind, PointRole::SourceSide, Position::default())
}

#[allow(dead_code)]
fn transformer_point(id: &str, label: &str, kind: PointKind) -> ConnectionPoint {
    ConnectionPoint::new(
        id,
        label,
        kind,
        PointRole::TransformerSide,
        Position::default(),
    )
}
