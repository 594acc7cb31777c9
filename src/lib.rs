//! # Haisen - Transformer-Bank Wiring Training Engine
//!
//! **Haisen** is the rules and state-machine layer behind a transformer-bank
//! wiring trainer: it lets a trainee connect abstract points with virtual
//! wires, judges each wire against a bank configuration's correct-wiring
//! set, tracks guided step-by-step progress, and classifies what happens
//! when the bank is energized (success, incomplete, or a live fault).
//!
//! The engine renders nothing and persists nothing. Its boundary is an
//! in-process API: a configuration-loading layer supplies validated bank
//! catalogs, a rendering layer issues commands and observes state changes.
//!
//! ## Core Workflow
//!
//! 1.  **Author or load a bank definition**: use the built-in wye-to-wye
//!     bank, parse `BankDefinition` JSON, or implement the `IntoCatalog`
//!     trait for your own format.
//! 2.  **Register it**: `CatalogLibrary::register` validates the definition
//!     (every referenced point must exist, no duplicate wirings) and indexes
//!     it for the session. Validation failures abort loading; they never
//!     surface as user errors.
//! 3.  **Run a session**: construct a `TrainingSession` over the shared
//!     library, subscribe the renderer, and drive it with commands
//!     (`select_wire`, `start_drag`/`end_drag`, `add_connection`,
//!     `energize_transformer`, ...).
//! 4.  **React**: listeners fire synchronously after every command; the
//!     `EnergizationResult` tells the renderer which animation to play.
//!
//! ## Quick Start
//!
//! ```rust
//! use haisen::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     // 1. + 2. Load the built-in wye-to-wye bank into a library.
//!     let mut library = CatalogLibrary::new();
//!     library.register(haisen::catalog::builtin::wye_wye())?;
//!     let library = Arc::new(library);
//!
//!     // 3. Start a guided session and watch it change.
//!     let mut session = TrainingSession::new(
//!         library,
//!         BankType::WyeWye,
//!         TrainingMode::Guided,
//!         Difficulty::Apprentice,
//!     );
//!     session.subscribe(|state| {
//!         println!("{} wires on the board", state.connections.len());
//!     });
//!
//!     // Wire the first phase: select the source, then a highlighted target.
//!     session.select_wire("phase-a");
//!     assert!(session.is_compatible_connection("t1-h1"));
//!     session.select_wire("t1-h1");
//!
//!     // 4. Energizing now reports the remaining work.
//!     let result = session.energize_transformer();
//!     assert!(!result.is_correct());
//!     println!("{}", result.message.unwrap());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod rules;
pub mod session;
