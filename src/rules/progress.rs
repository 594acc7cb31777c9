use crate::catalog::{BankCatalog, PairKey, TrainingStep};
use crate::session::SessionState;
use ahash::AHashSet;

/// Advances guided-mode step progress after a correct connection was added.
///
/// A step is complete when every one of its required pairs is present among
/// the correct connections, matched by unordered pair key. One connection
/// can finish several consecutive steps, so this loops until the current
/// step is still open or the sequence is exhausted. Progress is never
/// rolled back when connections are removed; `clear_connections` is the
/// only reset.
pub fn advance(catalog: &BankCatalog, state: &mut SessionState) {
    let correct: AHashSet<PairKey> = state.correct_connections().map(|c| c.key()).collect();

    while let Some(step) = catalog.steps().get(state.current_step_index) {
        if !step_complete(step, &correct) {
            break;
        }
        state.completed_step_ids.push(step.step_number);
        state.current_step_index += 1;
    }
}

fn step_complete(step: &TrainingStep, correct: &AHashSet<PairKey>) -> bool {
    step.required_connections
        .iter()
        .all(|connection| correct.contains(&connection.key()))
}
