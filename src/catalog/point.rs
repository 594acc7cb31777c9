use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a connection point within a bank configuration.
pub type PointId = String;

/// The electrical class of a connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointKind {
    Primary,
    Secondary,
    Neutral,
    Ground,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::Primary => write!(f, "primary"),
            PointKind::Secondary => write!(f, "secondary"),
            PointKind::Neutral => write!(f, "neutral"),
            PointKind::Ground => write!(f, "ground"),
        }
    }
}

/// Which side of the installation a point sits on.
///
/// The role feeds the compatibility resolver's highlighting only; the
/// validator never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointRole {
    SourceSide,
    TransformerSide,
}

/// A rendering position. The engine stores it for the renderer and never
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named terminal that can be wired to another terminal.
///
/// Points are constructed once per bank definition load and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub id: PointId,
    pub label: String,
    pub kind: PointKind,
    pub role: PointRole,
    pub position: Position,
}

impl ConnectionPoint {
    pub fn new(
        id: impl Into<PointId>,
        label: impl Into<String>,
        kind: PointKind,
        role: PointRole,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            role,
            position,
        }
    }
}
