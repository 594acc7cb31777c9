//! Built-in bank definitions.
//!
//! Only the wye-to-wye bank ships with authored data. The remaining
//! topologies (delta-delta, wye-delta, delta-wye, open-delta) are loaded
//! from external definitions, either as `BankDefinition` JSON or through
//! the [`super::conversion::IntoCatalog`] trait.

use super::bank::BankType;
use super::definition::BankDefinition;
use super::pair::RequiredConnection;
use super::point::{ConnectionPoint, PointKind, PointRole, Position};
use super::step::TrainingStep;

fn point(
    id: &str,
    label: &str,
    kind: PointKind,
    role: PointRole,
    x: f64,
    y: f64,
) -> ConnectionPoint {
    ConnectionPoint::new(id, label, kind, role, Position::new(x, y))
}

/// The built-in wye-to-wye bank: three transformers T1-T3 with H1/H2 and
/// X1/X2 bushings, a three-phase source, a three-span secondary service, a
/// neutral bus, and a ground rod.
///
/// Positions are a default layout the renderer may override.
pub fn wye_wye() -> BankDefinition {
    use PointKind::*;
    use PointRole::*;

    let points = vec![
        // Incoming three-phase source
        point("phase-a", "Phase A", Primary, SourceSide, 40.0, 60.0),
        point("phase-b", "Phase B", Primary, SourceSide, 40.0, 180.0),
        point("phase-c", "Phase C", Primary, SourceSide, 40.0, 300.0),
        // Transformer primary bushings
        point("t1-h1", "T1 H1", Primary, TransformerSide, 200.0, 60.0),
        point("t1-h2", "T1 H2", Neutral, TransformerSide, 260.0, 60.0),
        point("t2-h1", "T2 H1", Primary, TransformerSide, 200.0, 180.0),
        point("t2-h2", "T2 H2", Neutral, TransformerSide, 260.0, 180.0),
        point("t3-h1", "T3 H1", Primary, TransformerSide, 200.0, 300.0),
        point("t3-h2", "T3 H2", Neutral, TransformerSide, 260.0, 300.0),
        // Transformer secondary bushings
        point("t1-x1", "T1 X1", Secondary, TransformerSide, 340.0, 60.0),
        point("t1-x2", "T1 X2", Neutral, TransformerSide, 400.0, 60.0),
        point("t2-x1", "T2 X1", Secondary, TransformerSide, 340.0, 180.0),
        point("t2-x2", "T2 X2", Neutral, TransformerSide, 400.0, 180.0),
        point("t3-x1", "T3 X1", Secondary, TransformerSide, 340.0, 300.0),
        point("t3-x2", "T3 X2", Neutral, TransformerSide, 400.0, 300.0),
        // Secondary service spans
        point("service-a", "Service A", Secondary, SourceSide, 520.0, 60.0),
        point("service-b", "Service B", Secondary, SourceSide, 520.0, 180.0),
        point("service-c", "Service C", Secondary, SourceSide, 520.0, 300.0),
        // Neutral bus and grounding
        point("neutral-bus", "Neutral Bus", Neutral, SourceSide, 320.0, 420.0),
        point("ground-rod", "Ground Rod", Ground, SourceSide, 320.0, 500.0),
    ];

    let primary_phases = vec![
        RequiredConnection::new("phase-a", "t1-h1"),
        RequiredConnection::new("phase-b", "t2-h1"),
        RequiredConnection::new("phase-c", "t3-h1"),
    ];
    let primary_neutrals = vec![
        RequiredConnection::new("t1-h2", "neutral-bus"),
        RequiredConnection::new("t2-h2", "neutral-bus"),
        RequiredConnection::new("t3-h2", "neutral-bus"),
    ];
    let secondary_spans = vec![
        RequiredConnection::new("t1-x1", "service-a"),
        RequiredConnection::new("t2-x1", "service-b"),
        RequiredConnection::new("t3-x1", "service-c"),
    ];
    let secondary_neutrals = vec![
        RequiredConnection::new("t1-x2", "neutral-bus"),
        RequiredConnection::new("t2-x2", "neutral-bus"),
        RequiredConnection::new("t3-x2", "neutral-bus"),
    ];
    let grounding = vec![RequiredConnection::new("neutral-bus", "ground-rod")];

    let steps = vec![
        TrainingStep::new(
            1,
            primary_phases.clone(),
            "Connect each incoming phase to its transformer's H1 bushing.",
        ),
        TrainingStep::new(
            2,
            primary_neutrals.clone(),
            "Tie every H2 bushing to the neutral bus.",
        ),
        TrainingStep::new(
            3,
            secondary_spans.clone(),
            "Connect each X1 bushing to its secondary service span.",
        ),
        TrainingStep::new(
            4,
            secondary_neutrals.clone(),
            "Tie every X2 bushing to the neutral bus.",
        ),
        TrainingStep::new(
            5,
            grounding.clone(),
            "Bond the neutral bus to the ground rod.",
        ),
    ];

    let required_connections = [
        primary_phases,
        primary_neutrals,
        secondary_spans,
        secondary_neutrals,
        grounding,
    ]
    .into_iter()
    .flatten()
    .collect();

    BankDefinition {
        bank_type: BankType::WyeWye,
        points,
        required_connections,
        steps,
    }
}
