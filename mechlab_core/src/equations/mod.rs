//! # Mechanics Equations
//!
//! Reusable closed-form formulas shared by the models, and the registry
//! describing every formula the engine evaluates.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, moment, deflection, flexure)
//! - [`section`] - Cross-section properties (A, I, I_p, i)
//! - [`registry`] - Equation metadata, theory panels and Markdown export
//!
//! ## Sign Conventions
//!
//! - **Normal stress**: Positive in tension
//! - **Loads**: Positive downward (beam), positive in tension (axial)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//!
//! ## References
//!
//! - R.C. Hibbeler, Mechanics of Materials, 10th Edition

pub mod beam;
pub mod registry;
pub mod section;

pub use beam::{
    flexural_stress, midspan_point_load_max_deflection, midspan_point_load_max_moment,
    point_load_moment, point_load_reactions,
};

pub use section::{
    radius_of_gyration, rectangular_area, rectangular_moment_of_inertia,
    rectangular_weak_axis_inertia, solid_circle_polar_moment,
};

pub use registry::{
    generate_equations_markdown, theory, CodeReference, Equation, EquationCategory,
    EquationMetadata, TheoryEntry, TheoryFormula, Variable, ALL_EQUATIONS,
};
