//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! haisen crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use haisen::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run_example() -> Result<()> {
//! // Load and validate a bank definition
//! let definition_json = std::fs::read_to_string("path/to/bank.json")?;
//! let definition: BankDefinition = serde_json::from_str(&definition_json)?;
//!
//! let mut library = CatalogLibrary::new();
//! library.register(definition)?;
//!
//! // Run a training session against it
//! let mut session = TrainingSession::new(
//!     Arc::new(library),
//!     BankType::WyeWye,
//!     TrainingMode::Freeplay,
//!     Difficulty::Journeyman,
//! );
//! session.add_connection("phase-a", "t1-h1");
//! let result = session.energize_transformer();
//!
//! println!("Energization outcome: {:?}", result.outcome);
//! # Ok(())
//! # }
//! ```

// Catalog types
pub use crate::catalog::{
    BankCatalog, BankDefinition, BankType, CatalogLibrary, ConnectionPoint, IntoCatalog,
    PairKey, PointId, PointKind, PointRole, Position, RequiredConnection, TrainingStep,
};

// Session types
pub use crate::session::{
    ConnectionMode, Difficulty, InteractionState, ListenerId, SessionState, TrainingMode,
    TrainingSession, WireConnection,
};

// Rule results
pub use crate::rules::{EnergizationOutcome, EnergizationResult, Verdict};

// Error types
pub use crate::error::{ArtifactError, CatalogConversionError, CatalogError};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
