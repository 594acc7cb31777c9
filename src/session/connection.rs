use crate::catalog::{PairKey, PointId};
use serde::{Deserialize, Serialize};

/// A connection the trainee has made.
///
/// Incorrect connections are kept on the board with their reason so the
/// trainee sees the wrong wire, rather than being silently rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConnection {
    pub from: PointId,
    pub to: PointId,
    pub is_correct: bool,
    pub error_reason: Option<String>,
}

impl WireConnection {
    /// The direction-insensitive identity of this wiring. Two connections
    /// with equal keys are the same wire, whichever end was picked up first.
    pub fn key(&self) -> PairKey {
        PairKey::new(self.from.clone(), self.to.clone())
    }
}
