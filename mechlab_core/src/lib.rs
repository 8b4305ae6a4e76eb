//! # mechlab_core - Mechanics of Materials Calculation Engine
//!
//! `mechlab_core` computes the classic strength-of-materials load cases: axial
//! loading, beam bending, shaft torsion, Euler buckling, eccentric (combined)
//! loading, stress transformation and the stress-strain fundamentals. All
//! inputs and outputs are JSON-serializable so a UI, a CLI or a tutoring
//! service can drive the same engine.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Narrow inputs**: each model reads only the parameters it needs
//!
//! ## Quick Start
//!
//! ```rust
//! use mechlab_core::calculations::{DerivedResult, ModuleKind};
//! use mechlab_core::SimulationParameters;
//!
//! let mut params = SimulationParameters::default();
//! params.select_material("aluminum 6061").unwrap();
//!
//! if let DerivedResult::Bending(beam) = params.evaluate(ModuleKind::Bending).unwrap() {
//!     assert!(beam.max_deflection_mm > 0.0);
//! }
//!
//! let json = serde_json::to_string_pretty(&params.evaluate_all().unwrap()).unwrap();
//! assert!(json.contains("\"module\": \"buckling\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The seven mechanics models and the result wrapper
//! - [`simulation`] - Parameter record, partial-merge patches, dispatch
//! - [`materials`] - Material constants and the built-in catalog
//! - [`equations`] - Shared formulas, equation registry, theory panels
//! - [`narration`] - Tutoring prompt builder and the narrator seam
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod narration;
pub mod simulation;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{DerivedResult, ModuleKind};
pub use errors::{CalcError, CalcResult};
pub use materials::MaterialProperties;
pub use simulation::SimulationParameters;
