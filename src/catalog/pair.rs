use super::point::PointId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered pair of point ids.
///
/// The constructor normalizes the order, so the derived `Eq` and `Hash`
/// treat `{A, B}` and `{B, A}` as the same wiring. Every pair comparison in
/// the crate goes through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(PointId, PointId);

impl PairKey {
    pub fn new(a: impl Into<PointId>, b: impl Into<PointId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }

    /// Whether the given point is one of the pair's endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.0 == id || self.1 == id
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.0, self.1)
    }
}

/// One correct wiring for a bank configuration.
///
/// The full set of required connections for a bank type is the ground truth
/// against which every user connection is judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredConnection {
    pub a: PointId,
    pub b: PointId,
}

impl RequiredConnection {
    pub fn new(a: impl Into<PointId>, b: impl Into<PointId>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(self.a.clone(), self.b.clone())
    }
}
