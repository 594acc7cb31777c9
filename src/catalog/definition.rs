use super::bank::BankType;
use super::pair::RequiredConnection;
use super::point::ConnectionPoint;
use super::step::TrainingStep;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of one bank configuration, ready for
/// validation. This is the target structure for any custom data model
/// conversion and the crate's JSON boundary format.
///
/// A definition is raw data: nothing about it is checked until it is turned
/// into a [`super::compiled::BankCatalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDefinition {
    #[serde(alias = "bankType")]
    pub bank_type: BankType,
    pub points: Vec<ConnectionPoint>,
    #[serde(alias = "requiredConnections")]
    pub required_connections: Vec<RequiredConnection>,
    #[serde(default)]
    pub steps: Vec<TrainingStep>,
}
