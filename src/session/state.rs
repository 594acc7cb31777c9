use super::connection::WireConnection;
use crate::catalog::{BankType, PointId, Position};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How required connections are presented to the trainee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingMode {
    /// Ordered steps with instructions; progress is tracked per step.
    Guided,
    /// No sequencing; the trainee wires everything before checking.
    Freeplay,
}

/// Stored on the session for the surrounding curriculum; this layer does
/// not change behavior based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Apprentice,
    Journeyman,
    Master,
}

/// The active input modality. Both styles end in the same add-connection
/// operation; switching resets the transient interaction state of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMode {
    /// Select a source point, then tap a highlighted target.
    StickyKeys,
    /// Press on a source point, drag a preview wire, release on a target.
    Drag,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionMode::StickyKeys => write!(f, "sticky-keys"),
            ConnectionMode::Drag => write!(f, "drag"),
        }
    }
}

/// UI-interaction scratch state. Not part of the training record; reset on
/// mode switch, bank switch, modality switch, and clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub selected_wire: Option<PointId>,
    pub drag_source: Option<PointId>,
    pub drag_preview: Option<Position>,
    pub compatible_points: AHashSet<PointId>,
}

impl InteractionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The full mutable state of one training session.
///
/// Owned by [`super::TrainingSession`] and mutated only through its command
/// surface; observers receive a shared reference after every change.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub bank_type: BankType,
    pub mode: TrainingMode,
    pub difficulty: Difficulty,
    pub connection_mode: ConnectionMode,
    pub connections: Vec<WireConnection>,
    pub current_step_index: usize,
    pub completed_step_ids: Vec<u32>,
    pub is_complete: bool,
    pub is_energized: bool,
    pub interaction: InteractionState,
}

impl SessionState {
    pub fn new(bank_type: BankType, mode: TrainingMode, difficulty: Difficulty) -> Self {
        Self {
            bank_type,
            mode,
            difficulty,
            connection_mode: ConnectionMode::StickyKeys,
            connections: Vec::new(),
            current_step_index: 0,
            completed_step_ids: Vec::new(),
            is_complete: false,
            is_energized: false,
            interaction: InteractionState::default(),
        }
    }

    /// Drops all wiring and progress, reproducing a freshly constructed
    /// session with the same bank type, mode, and difficulty.
    pub fn clear(&mut self) {
        self.connections.clear();
        self.current_step_index = 0;
        self.completed_step_ids.clear();
        self.is_complete = false;
        self.is_energized = false;
        self.interaction.reset();
    }

    /// The connections currently marked correct.
    pub fn correct_connections(&self) -> impl Iterator<Item = &WireConnection> {
        self.connections.iter().filter(|c| c.is_correct)
    }
}
