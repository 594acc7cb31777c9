use super::bank::BankType;
use super::definition::BankDefinition;
use super::pair::{PairKey, RequiredConnection};
use super::point::{ConnectionPoint, PointId};
use super::step::TrainingStep;
use crate::error::CatalogError;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A validated and indexed bank configuration.
///
/// Construction via [`BankCatalog::new`] is the only way configuration data
/// reaches a training session, so every id a session hands around is
/// guaranteed to resolve. Unknown ids showing up later are treated as
/// loader defects and panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankCatalog {
    bank_type: BankType,
    points: Vec<ConnectionPoint>,
    required: Vec<RequiredConnection>,
    steps: Vec<TrainingStep>,
    points_by_id: AHashMap<PointId, usize>,
    required_keys: AHashSet<PairKey>,
}

impl BankCatalog {
    /// Validates a raw definition into a catalog.
    ///
    /// Checks performed, in order:
    /// - point ids are unique;
    /// - every required connection references two distinct, existing points
    ///   and no pair is listed twice;
    /// - every step connection is a member of the required set, and step
    ///   numbers are unique and ascending.
    pub fn new(definition: BankDefinition) -> Result<Self, CatalogError> {
        let BankDefinition {
            bank_type,
            points,
            required_connections,
            steps,
        } = definition;

        if let Some(dup) = points.iter().map(|p| &p.id).duplicates().next() {
            return Err(CatalogError::DuplicatePointId {
                point_id: dup.clone(),
            });
        }

        let points_by_id: AHashMap<PointId, usize> = points
            .iter()
            .enumerate()
            .map(|(index, point)| (point.id.clone(), index))
            .collect();

        let mut required_keys = AHashSet::with_capacity(required_connections.len());
        for connection in &required_connections {
            for endpoint in [&connection.a, &connection.b] {
                if !points_by_id.contains_key(endpoint) {
                    return Err(CatalogError::PointNotFound {
                        missing_point_id: endpoint.clone(),
                    });
                }
            }
            if connection.a == connection.b {
                return Err(CatalogError::SelfConnection {
                    point_id: connection.a.clone(),
                });
            }
            if !required_keys.insert(connection.key()) {
                return Err(CatalogError::DuplicateRequiredConnection {
                    a: connection.a.clone(),
                    b: connection.b.clone(),
                });
            }
        }

        let mut last_step_number = 0;
        for step in &steps {
            if step.step_number <= last_step_number {
                return Err(CatalogError::StepOutOfSequence {
                    step_number: step.step_number,
                });
            }
            last_step_number = step.step_number;
            for connection in &step.required_connections {
                if !required_keys.contains(&connection.key()) {
                    return Err(CatalogError::StepConnectionNotRequired {
                        step_number: step.step_number,
                        a: connection.a.clone(),
                        b: connection.b.clone(),
                    });
                }
            }
        }

        Ok(Self {
            bank_type,
            points,
            required: required_connections,
            steps,
            points_by_id,
            required_keys,
        })
    }

    pub fn bank_type(&self) -> BankType {
        self.bank_type
    }

    /// All connection points, in definition order.
    pub fn points(&self) -> &[ConnectionPoint] {
        &self.points
    }

    /// The authoritative correct-wiring set, in definition order.
    pub fn required_connections(&self) -> &[RequiredConnection] {
        &self.required
    }

    /// The guided-mode step sequence. Empty for freeplay-only definitions.
    pub fn steps(&self) -> &[TrainingStep] {
        &self.steps
    }

    pub fn point(&self, id: &str) -> Option<&ConnectionPoint> {
        self.points_by_id.get(id).map(|&index| &self.points[index])
    }

    pub fn contains_point(&self, id: &str) -> bool {
        self.points_by_id.contains_key(id)
    }

    /// Whether the pair is one of the bank's correct wirings.
    pub fn is_required(&self, key: &PairKey) -> bool {
        self.required_keys.contains(key)
    }

    /// The required set as pair keys, for exact set comparisons.
    pub fn required_keys(&self) -> &AHashSet<PairKey> {
        &self.required_keys
    }

    /// Resolves a point id that the loader has already vouched for.
    ///
    /// # Panics
    ///
    /// Panics if the id is not in the catalog. Reaching this with an unknown
    /// id means the configuration loader let a bad reference through, which
    /// is a defect, not a user mistake.
    pub(crate) fn expect_point(&self, id: &str) -> &ConnectionPoint {
        self.point(id).unwrap_or_else(|| {
            panic!(
                "Point '{}' does not exist in the {} catalog",
                id, self.bank_type
            )
        })
    }
}

/// The set of validated bank catalogs available to a session, keyed by bank
/// type. Read-only after construction and safe to share across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogLibrary {
    banks: AHashMap<BankType, BankCatalog>,
}

impl CatalogLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers a bank definition, replacing any previous
    /// catalog for the same bank type.
    pub fn register(&mut self, definition: BankDefinition) -> Result<(), CatalogError> {
        let catalog = BankCatalog::new(definition)?;
        self.banks.insert(catalog.bank_type(), catalog);
        Ok(())
    }

    pub fn bank(&self, bank_type: BankType) -> Option<&BankCatalog> {
        self.banks.get(&bank_type)
    }

    pub fn contains(&self, bank_type: BankType) -> bool {
        self.banks.contains_key(&bank_type)
    }

    /// Registered bank types, in no particular order.
    pub fn bank_types(&self) -> impl Iterator<Item = BankType> + '_ {
        self.banks.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// # Panics
    ///
    /// Panics if the bank type has no registered catalog. A session must
    /// only be pointed at bank types the loading layer has registered.
    pub(crate) fn expect_bank(&self, bank_type: BankType) -> &BankCatalog {
        self.banks.get(&bank_type).unwrap_or_else(|| {
            panic!("Bank type {} is not registered in the catalog library", bank_type)
        })
    }
}
