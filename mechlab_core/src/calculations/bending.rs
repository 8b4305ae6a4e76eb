//! # Beam Bending
//!
//! Simply-supported rectangular beam with a concentrated load at midspan.
//! Purely linear-elastic; there is no plastic hinge or shear check.
//!
//! ```text
//!              P
//!              ↓
//!    ┌─────────┴─────────┐  h
//!    └───────────────────┘
//!    △                   △
//!    ←──────── L ────────→
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::calculations::bending::{calculate, BendingInput};
//!
//! let input = BendingInput {
//!     load_n: 2000.0,
//!     span_m: 2.0,
//!     width_mm: 100.0,
//!     height_mm: 150.0,
//!     elastic_modulus_gpa: 200.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.moment_of_inertia_mm4 - 28_125_000.0).abs() < 1e-6);
//! assert!((result.max_moment_nm - 1000.0).abs() < 1e-9);
//! assert!((result.max_stress_mpa - 2.6667).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    flexural_stress, midspan_point_load_max_deflection, midspan_point_load_max_moment,
    point_load_moment, point_load_reactions,
};
use crate::equations::section::rectangular_moment_of_inertia;
use crate::errors::{require_finite, require_positive, CalcResult};
use crate::units::{GigaPascals, MegaPascals, Meters, Millimeters, NewtonMeters, NewtonMillimeters};

/// Input parameters for a simply-supported beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingInput {
    /// Midspan point load P (N), positive downward
    pub load_n: f64,

    /// Span L (m)
    pub span_m: f64,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Section height h (mm)
    pub height_mm: f64,

    /// Young's modulus E (GPa)
    pub elastic_modulus_gpa: f64,
}

impl BendingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("load_n", self.load_n)?;
        require_positive("span_m", self.span_m)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("height_mm", self.height_mm)?;
        require_positive("elastic_modulus_gpa", self.elastic_modulus_gpa)?;
        Ok(())
    }

    /// Second moment of area I = b·h³/12 (mm⁴)
    pub fn moment_of_inertia_mm4(&self) -> f64 {
        rectangular_moment_of_inertia(self.width_mm, self.height_mm)
    }

    /// Support reactions (N), each P/2 for the midspan load
    pub fn reactions_n(&self) -> (f64, f64) {
        point_load_reactions(self.load_n, self.span_m / 2.0, self.span_m)
    }

    /// Bending moment (N·m) at `x_m` from the left support, for the moment diagram
    pub fn moment_at(&self, x_m: f64) -> f64 {
        let x_m = x_m.max(0.0).min(self.span_m);
        point_load_moment(self.load_n, self.span_m / 2.0, self.span_m, x_m)
    }
}

/// Results from the bending calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingResult {
    /// Second moment of area I (mm⁴)
    pub moment_of_inertia_mm4: f64,

    /// Maximum bending moment at midspan M = P·L/4 (N·m)
    pub max_moment_nm: f64,

    /// Maximum deflection at midspan w = P·L³/(48·E·I) (mm)
    pub max_deflection_mm: f64,

    /// Maximum bending stress at the extreme fibre σ = M·(h/2)/I (MPa)
    pub max_stress_mpa: f64,

    /// Span used in the formulas (mm)
    pub span_mm: f64,

    /// Modulus used in the formulas (MPa)
    pub e_mpa: f64,
}

/// Calculate moment, deflection and extreme-fibre stress.
pub fn calculate(input: &BendingInput) -> CalcResult<BendingResult> {
    input.validate()?;

    let inertia = input.moment_of_inertia_mm4();
    let span: Millimeters = Meters(input.span_m).into();
    let e: MegaPascals = GigaPascals(input.elastic_modulus_gpa).into();

    let max_moment = NewtonMeters(midspan_point_load_max_moment(input.load_n, input.span_m));
    let max_moment_nmm: NewtonMillimeters = max_moment.into();

    let max_deflection_mm = midspan_point_load_max_deflection(input.load_n, span.0, e.0, inertia);
    let max_stress_mpa = flexural_stress(max_moment_nmm.0, input.height_mm / 2.0, inertia);

    log::debug!(
        "bending: P={} N, L={} m, {}x{} mm -> M={:.2} N·m, w={:.4} mm, σ={:.3} MPa",
        input.load_n,
        input.span_m,
        input.width_mm,
        input.height_mm,
        max_moment.0,
        max_deflection_mm,
        max_stress_mpa
    );

    Ok(BendingResult {
        moment_of_inertia_mm4: inertia,
        max_moment_nm: max_moment.0,
        max_deflection_mm,
        max_stress_mpa,
        span_mm: span.0,
        e_mpa: e.0,
    })
}
