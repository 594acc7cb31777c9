use super::definition::BankDefinition;
use crate::error::CatalogConversionError;

/// A trait for custom data models that can be converted into a haisen
/// `BankDefinition`.
///
/// This is the primary extension point for making haisen format-agnostic.
/// The four bank topologies without built-in data (delta-delta, wye-delta,
/// delta-wye, open-delta) are expected to arrive through this trait or
/// through the `BankDefinition` JSON format directly.
///
/// # Example
///
/// ```rust,no_run
/// use haisen::catalog::{
///     BankDefinition, BankType, ConnectionPoint, IntoCatalog, PointKind, PointRole, Position,
/// };
/// use haisen::error::CatalogConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyTerminal { id: String, name: String }
/// struct MyBankLayout { terminals: Vec<MyTerminal> }
///
/// // 2. Implement `IntoCatalog` for your top-level struct.
/// impl IntoCatalog for MyBankLayout {
///     fn into_catalog(self) -> Result<BankDefinition, CatalogConversionError> {
///         let mut points = Vec::new();
///         for terminal in self.terminals {
///             // Your logic to map `MyTerminal` onto a `ConnectionPoint`.
///             points.push(ConnectionPoint::new(
///                 terminal.id,
///                 terminal.name,
///                 PointKind::Primary,
///                 PointRole::TransformerSide,
///                 Position::default(),
///             ));
///         }
///
///         Ok(BankDefinition {
///             bank_type: BankType::DeltaDelta,
///             points,
///             required_connections: vec![], // Convert your wiring table here as well
///             steps: vec![],
///         })
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a haisen-compatible bank
    /// definition.
    fn into_catalog(self) -> Result<BankDefinition, CatalogConversionError>;
}
