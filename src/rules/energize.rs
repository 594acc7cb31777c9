use crate::catalog::{BankCatalog, PairKey};
use crate::session::WireConnection;
use ahash::AHashSet;

/// Classification of an energization attempt, in the order the renderer
/// switches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergizationOutcome {
    /// Nothing is wired yet.
    NoInput,
    /// At least one connection is not in the required set. Modeled as a
    /// live electrical fault, not just a wrong answer.
    Fault,
    /// Every connection is correct but some required ones are missing.
    Incomplete,
    /// The wiring exactly matches the required set.
    Success,
}

/// The result of energizing the bank. Returned to the renderer, never
/// stored on the session; only a success flips the session's completion
/// flag.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergizationResult {
    pub outcome: EnergizationOutcome,
    pub message: Option<String>,
    /// The extraneous connections responsible for a fault. Empty for every
    /// other outcome.
    pub incorrect_connections: Vec<WireConnection>,
}

impl EnergizationResult {
    pub fn is_correct(&self) -> bool {
        self.outcome == EnergizationOutcome::Success
    }
}

/// Decides the outcome of powering on the bank.
///
/// Pure over the connection list and the bank's required set. Outcomes, in
/// priority order: no input, fault (any extraneous connection, even when
/// all required connections are also present), incomplete, success.
pub fn energize(catalog: &BankCatalog, connections: &[WireConnection]) -> EnergizationResult {
    if connections.is_empty() {
        return EnergizationResult {
            outcome: EnergizationOutcome::NoInput,
            message: Some("No connections made. Wire the bank before energizing.".to_string()),
            incorrect_connections: Vec::new(),
        };
    }

    let (matched, extraneous): (Vec<&WireConnection>, Vec<&WireConnection>) = connections
        .iter()
        .partition(|connection| catalog.is_required(&connection.key()));

    if !extraneous.is_empty() {
        return EnergizationResult {
            outcome: EnergizationOutcome::Fault,
            message: Some(
                "Fault! The bank is wired incorrectly and flashed over when energized."
                    .to_string(),
            ),
            incorrect_connections: extraneous.into_iter().cloned().collect(),
        };
    }

    let matched_keys: AHashSet<PairKey> = matched.iter().map(|c| c.key()).collect();
    if matched_keys != *catalog.required_keys() {
        return EnergizationResult {
            outcome: EnergizationOutcome::Incomplete,
            message: Some(
                "The bank is not fully wired. Finish the remaining connections before energizing."
                    .to_string(),
            ),
            incorrect_connections: Vec::new(),
        };
    }

    EnergizationResult {
        outcome: EnergizationOutcome::Success,
        message: None,
        incorrect_connections: Vec::new(),
    }
}

/// Whether the correct connections exactly cover the required set.
///
/// Set equality, not a count comparison: a wrong wire plus a correct one
/// never cancel out to "complete".
pub fn bank_complete(catalog: &BankCatalog, connections: &[WireConnection]) -> bool {
    let correct: AHashSet<PairKey> = connections
        .iter()
        .filter(|connection| connection.is_correct)
        .map(|connection| connection.key())
        .collect();
    correct == *catalog.required_keys()
}
