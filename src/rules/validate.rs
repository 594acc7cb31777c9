use crate::catalog::{BankCatalog, PairKey};

/// The validator's judgement on a proposed connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_correct: bool,
    pub error_reason: Option<String>,
}

/// Decides whether the wiring from `from` to `to` is correct for the bank.
///
/// A connection is correct iff its unordered pair is a member of the bank's
/// required set. The reason string on a wrong connection is a training hint
/// only; it does not attempt to diagnose why the pairing is wrong.
///
/// # Panics
///
/// Panics if either id is not a point of the catalog (a configuration
/// defect, see [`super::compat::compatible_points`]).
pub fn validate_connection(catalog: &BankCatalog, from: &str, to: &str) -> Verdict {
    let from = catalog.expect_point(from);
    let to = catalog.expect_point(to);

    let pair = PairKey::new(from.id.clone(), to.id.clone());
    if catalog.is_required(&pair) {
        Verdict {
            is_correct: true,
            error_reason: None,
        }
    } else {
        Verdict {
            is_correct: false,
            error_reason: Some(format!(
                "{} to {} is not part of a correct {} hookup",
                from.label,
                to.label,
                catalog.bank_type()
            )),
        }
    }
}
