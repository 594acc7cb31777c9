use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The topology of a three-transformer bank.
///
/// Only the wye-to-wye topology ships with a built-in definition (see
/// [`crate::catalog::builtin`]); the other four are extension points whose
/// point and requirement sets are supplied as external configuration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankType {
    WyeWye,
    DeltaDelta,
    WyeDelta,
    DeltaWye,
    OpenDelta,
}

impl BankType {
    /// All bank types, in the order a catalog browser would list them.
    pub const ALL: [BankType; 5] = [
        BankType::WyeWye,
        BankType::DeltaDelta,
        BankType::WyeDelta,
        BankType::DeltaWye,
        BankType::OpenDelta,
    ];
}

impl fmt::Display for BankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankType::WyeWye => write!(f, "wye-wye"),
            BankType::DeltaDelta => write!(f, "delta-delta"),
            BankType::WyeDelta => write!(f, "wye-delta"),
            BankType::DeltaWye => write!(f, "delta-wye"),
            BankType::OpenDelta => write!(f, "open-delta"),
        }
    }
}

impl FromStr for BankType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wye-wye" => Ok(BankType::WyeWye),
            "delta-delta" => Ok(BankType::DeltaDelta),
            "wye-delta" => Ok(BankType::WyeDelta),
            "delta-wye" => Ok(BankType::DeltaWye),
            "open-delta" => Ok(BankType::OpenDelta),
            other => Err(format!("Unknown bank type: '{}'", other)),
        }
    }
}
