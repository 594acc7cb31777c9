//! The training session: a single owned state container behind the command
//! and query surface the rendering layer drives.
//!
//! Every command runs to completion synchronously, then notifies the
//! subscribed listeners in order. The session holds its catalog library
//! behind an `Arc`, so several independent practice sessions can share one
//! validated library without synchronization.

use crate::catalog::{
    BankCatalog, BankType, CatalogLibrary, ConnectionPoint, PointId, Position,
    RequiredConnection, TrainingStep,
};
use crate::rules;
use crate::rules::EnergizationResult;
use ahash::AHashSet;
use std::sync::Arc;

pub mod connection;
pub mod observer;
pub mod state;

pub use connection::*;
pub use observer::*;
pub use state::*;

/// The aggregate root of one trainee's practice run.
///
/// All mutation goes through the command methods below; each one notifies
/// listeners exactly once, after the state change.
#[derive(Debug)]
pub struct TrainingSession {
    library: Arc<CatalogLibrary>,
    state: SessionState,
    listeners: ListenerRegistry,
}

impl TrainingSession {
    /// Creates a session for a registered bank type.
    ///
    /// # Panics
    ///
    /// Panics if `bank_type` has no catalog in the library; the loading
    /// layer must register every bank type it offers.
    pub fn new(
        library: Arc<CatalogLibrary>,
        bank_type: BankType,
        mode: TrainingMode,
        difficulty: Difficulty,
    ) -> Self {
        library.expect_bank(bank_type);
        Self {
            library,
            state: SessionState::new(bank_type, mode, difficulty),
            listeners: ListenerRegistry::new(),
        }
    }

    // --- Queries ---

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The active bank's validated catalog.
    pub fn catalog(&self) -> &BankCatalog {
        self.library.expect_bank(self.state.bank_type)
    }

    pub fn connection_points(&self) -> &[ConnectionPoint] {
        self.catalog().points()
    }

    pub fn required_connections(&self) -> &[RequiredConnection] {
        self.catalog().required_connections()
    }

    pub fn training_steps(&self) -> &[TrainingStep] {
        self.catalog().steps()
    }

    /// The step the trainee is on, or `None` once all steps are done (or in
    /// freeplay, where no steps exist).
    pub fn current_step(&self) -> Option<&TrainingStep> {
        self.catalog().steps().get(self.state.current_step_index)
    }

    /// The highlight set computed by the last selection or drag start.
    pub fn compatible_points(&self) -> &AHashSet<PointId> {
        &self.state.interaction.compatible_points
    }

    pub fn is_compatible_connection(&self, id: &str) -> bool {
        self.state.interaction.compatible_points.contains(id)
    }

    // --- Observer surface ---

    /// Registers a listener called synchronously after every command.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionState) + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.unsubscribe(id);
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.state);
    }

    // --- Configuration commands ---

    /// Switches the active bank and starts a fresh exercise.
    ///
    /// # Panics
    ///
    /// Panics if `bank_type` has no catalog in the library.
    pub fn set_bank_type(&mut self, bank_type: BankType) {
        self.library.expect_bank(bank_type);
        self.state.bank_type = bank_type;
        self.state.clear();
        self.notify();
    }

    /// Switches between guided and freeplay and starts a fresh exercise.
    /// Step progress is only meaningful from an empty board, so the wiring
    /// is cleared along with the transient state.
    pub fn set_mode(&mut self, mode: TrainingMode) {
        self.state.mode = mode;
        self.state.clear();
        self.notify();
    }

    /// Stores the difficulty for the surrounding curriculum. No behavior at
    /// this layer depends on it.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
        self.notify();
    }

    /// Switches the input modality and resets both modalities' transient
    /// state.
    pub fn set_connection_mode(&mut self, connection_mode: ConnectionMode) {
        self.state.connection_mode = connection_mode;
        self.state.interaction.reset();
        self.notify();
    }

    // --- Wiring commands ---

    /// Adds a wire between two points.
    ///
    /// This never rejects a connection between existing points: a wrong
    /// wire lands on the board marked incorrect, with a reason, so the
    /// trainee gets feedback instead of a silent refusal. In guided mode a
    /// correct wire advances step progress; completion is recomputed either
    /// way.
    ///
    /// # Panics
    ///
    /// Panics if either id is not a point of the active catalog.
    pub fn add_connection(&mut self, from: &str, to: &str) {
        self.commit_connection(from, to);
        self.notify();
    }

    /// Removes the wire matching the unordered pair, if present. Step
    /// progress already earned is kept; only completion is recomputed.
    pub fn remove_connection(&mut self, from: &str, to: &str) {
        let key = crate::catalog::PairKey::new(from, to);
        if let Some(position) = self
            .state
            .connections
            .iter()
            .position(|connection| connection.key() == key)
        {
            self.state.connections.remove(position);
            let catalog = self.library.expect_bank(self.state.bank_type);
            self.state.is_complete = rules::bank_complete(catalog, &self.state.connections);
        }
        self.notify();
    }

    /// Empties the board and all progress, reproducing a freshly
    /// constructed session with the same bank, mode, and difficulty. Always
    /// safe to re-issue.
    pub fn clear_connections(&mut self) {
        self.state.clear();
        self.notify();
    }

    // --- Energization ---

    /// Powers on the bank and classifies the wiring. The result is handed
    /// to the renderer to pick the success, fault, or still-missing
    /// feedback; the session only records a success.
    pub fn energize_transformer(&mut self) -> EnergizationResult {
        let catalog = self.library.expect_bank(self.state.bank_type);
        let result = rules::energize(catalog, &self.state.connections);
        if result.is_correct() {
            self.state.is_complete = true;
            self.state.is_energized = true;
        }
        self.notify();
        result
    }

    /// Clears the energized flag. A rendering-only signal; the wiring is
    /// not re-validated.
    pub fn de_energize_transformer(&mut self) {
        self.state.is_energized = false;
        self.notify();
    }

    // --- Sticky-keys modality ---

    /// Selects a wire source, toggles it off, or commits a connection.
    ///
    /// Tapping the selected point again deselects it. Tapping a highlighted
    /// compatible point while a source is selected commits the connection
    /// and returns to idle. Tapping anything else moves the selection.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a point of the active catalog.
    pub fn select_wire(&mut self, id: &str) {
        match self.state.interaction.selected_wire.clone() {
            Some(selected) if selected == id => {
                self.state.interaction.reset();
            }
            Some(selected) if self.state.interaction.compatible_points.contains(id) => {
                self.commit_connection(&selected, id);
                self.state.interaction.reset();
            }
            _ => {
                let catalog = self.library.expect_bank(self.state.bank_type);
                let compatible =
                    rules::compatible_points(catalog, &self.state.connections, id);
                self.state.interaction.selected_wire = Some(id.to_string());
                self.state.interaction.compatible_points = compatible;
            }
        }
        self.notify();
    }

    /// Drops the selection and its highlight set.
    pub fn clear_wire_selection(&mut self) {
        self.state.interaction.reset();
        self.notify();
    }

    // --- Drag modality ---

    /// Begins a drag from a point, computing the highlight set once.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a point of the active catalog.
    pub fn start_drag(&mut self, id: &str) {
        let catalog = self.library.expect_bank(self.state.bank_type);
        let compatible = rules::compatible_points(catalog, &self.state.connections, id);
        self.state.interaction.drag_source = Some(id.to_string());
        self.state.interaction.drag_preview = None;
        self.state.interaction.compatible_points = compatible;
        self.notify();
    }

    /// Moves the preview end of the dragged wire. Pure UI feedback: no
    /// validation runs, so this stays O(1) at pointer-move frequency.
    pub fn update_drag_position(&mut self, position: Position) {
        self.state.interaction.drag_preview = Some(position);
        self.notify();
    }

    /// Ends the drag. The caller hit-tests the release and passes the
    /// target, if any; the connection commits only when that target is in
    /// the highlight set. Drag state is cleared regardless of the outcome.
    pub fn end_drag(&mut self, target: Option<&str>) {
        let source = self.state.interaction.drag_source.clone();
        if let (Some(source), Some(target)) = (source, target) {
            if self.state.interaction.compatible_points.contains(target) {
                self.commit_connection(&source, target);
            }
        }
        self.state.interaction.reset();
        self.notify();
    }

    // --- Internals ---

    /// Shared terminal operation of both modalities: validate, record,
    /// advance steps, recompute completion. Callers notify.
    fn commit_connection(&mut self, from: &str, to: &str) {
        let catalog = self.library.expect_bank(self.state.bank_type);
        let verdict = rules::validate_connection(catalog, from, to);
        self.state.connections.push(WireConnection {
            from: from.to_string(),
            to: to.to_string(),
            is_correct: verdict.is_correct,
            error_reason: verdict.error_reason,
        });
        if verdict.is_correct && self.state.mode == TrainingMode::Guided {
            rules::advance(catalog, &mut self.state);
        }
        self.state.is_complete = rules::bank_complete(catalog, &self.state.connections);
    }
}
