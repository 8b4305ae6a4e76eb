//! # Euler Column Buckling
//!
//! Stability of a pinned-pinned rectangular column under axial compression.
//!
//! ## Assumptions
//!
//! - Pin-pin boundary conditions (effective length factor K = 1.0)
//! - Buckling about the weak axis: the smaller side is the bending depth
//! - Elastic buckling only; no inelastic (Johnson) transition, no
//!   post-buckling shape
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::calculations::buckling::{calculate, BucklingInput, ColumnState};
//!
//! let input = BucklingInput {
//!     load_n: 1000.0,
//!     length_m: 2.0,
//!     width_mm: 40.0,
//!     height_mm: 40.0,
//!     elastic_modulus_gpa: 200.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.critical_load_n - 105_276.0).abs() < 2.0);
//! assert_eq!(result.state, ColumnState::Safe);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    radius_of_gyration, rectangular_area, rectangular_weak_axis_inertia,
};
use crate::errors::{require_finite, require_positive, CalcResult};
use crate::units::{GigaPascals, MegaPascals, Meters, Millimeters};

/// Input parameters for a compressed column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_n": 1000.0,
///   "length_m": 2.0,
///   "width_mm": 40.0,
///   "height_mm": 40.0,
///   "elastic_modulus_gpa": 200.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucklingInput {
    /// Axial compressive load P (N)
    pub load_n: f64,

    /// Column length L (m)
    pub length_m: f64,

    /// Section width (mm)
    pub width_mm: f64,

    /// Section height (mm)
    pub height_mm: f64,

    /// Young's modulus E (GPa)
    pub elastic_modulus_gpa: f64,
}

impl BucklingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("load_n", self.load_n)?;
        require_positive("length_m", self.length_m)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("height_mm", self.height_mm)?;
        require_positive("elastic_modulus_gpa", self.elastic_modulus_gpa)?;
        Ok(())
    }

    /// Cross-sectional area A (mm²)
    pub fn area_mm2(&self) -> f64 {
        rectangular_area(self.width_mm, self.height_mm)
    }

    /// Weak-axis second moment of area I_min (mm⁴)
    pub fn min_inertia_mm4(&self) -> f64 {
        rectangular_weak_axis_inertia(self.width_mm, self.height_mm)
    }
}

/// Stability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnState {
    /// P ≤ P_cr
    Safe,
    /// P > P_cr
    Buckled,
}

impl ColumnState {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnState::Safe => "Safe",
            ColumnState::Buckled => "Buckled",
        }
    }
}

impl std::fmt::Display for ColumnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from the buckling calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucklingResult {
    /// Weak-axis second moment of area I_min (mm⁴)
    pub min_inertia_mm4: f64,

    /// Cross-sectional area (mm²)
    pub area_mm2: f64,

    /// Radius of gyration i = √(I_min/A) (mm)
    pub radius_of_gyration_mm: f64,

    /// Slenderness ratio λ = L/i
    pub slenderness_ratio: f64,

    /// Euler critical load P_cr = π²·E·I_min/L² (N)
    pub critical_load_n: f64,

    /// Applied load over critical load, P/P_cr
    pub load_ratio: f64,

    /// Stability classification
    pub state: ColumnState,
}

impl BucklingResult {
    /// Check if the column is stable
    pub fn passes(&self) -> bool {
        self.state == ColumnState::Safe
    }
}

/// Calculate the Euler critical load and classify the column.
pub fn calculate(input: &BucklingInput) -> CalcResult<BucklingResult> {
    input.validate()?;

    let e: MegaPascals = GigaPascals(input.elastic_modulus_gpa).into();
    let length: Millimeters = Meters(input.length_m).into();

    let area_mm2 = input.area_mm2();
    let min_inertia_mm4 = input.min_inertia_mm4();
    let radius_of_gyration_mm = radius_of_gyration(min_inertia_mm4, area_mm2);
    let slenderness_ratio = length.0 / radius_of_gyration_mm;

    let critical_load_n = PI.powi(2) * e.0 * min_inertia_mm4 / length.0.powi(2);
    let load_ratio = input.load_n / critical_load_n;

    let state = if input.load_n > critical_load_n {
        ColumnState::Buckled
    } else {
        ColumnState::Safe
    };

    log::debug!(
        "buckling: P={} N, L={} m, {}x{} mm -> λ={:.1}, P_cr={:.0} N, {}",
        input.load_n,
        input.length_m,
        input.width_mm,
        input.height_mm,
        slenderness_ratio,
        critical_load_n,
        state
    );

    Ok(BucklingResult {
        min_inertia_mm4,
        area_mm2,
        radius_of_gyration_mm,
        slenderness_ratio,
        critical_load_n,
        load_ratio,
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_column() -> BucklingInput {
        BucklingInput {
            load_n: 1000.0,
            length_m: 2.0,
            width_mm: 40.0,
            height_mm: 40.0,
            elastic_modulus_gpa: 200.0,
        }
    }

    #[test]
    fn test_reference_column() {
        let result = calculate(&test_column()).unwrap();
        assert!((result.min_inertia_mm4 - 213_333.333).abs() < 0.01);
        assert!((result.radius_of_gyration_mm - 11.547).abs() < 0.001);
        // λ = 2000 / 11.547 = 173.2
        assert!((result.slenderness_ratio - 173.205).abs() < 0.01);
        assert!(result.critical_load_n > 100_000.0 && result.critical_load_n < 110_000.0);
        assert_eq!(result.state, ColumnState::Safe);
        assert!(result.passes());
    }

    #[test]
    fn test_overload_buckles() {
        let result = calculate(&BucklingInput { load_n: 120_000.0, ..test_column() }).unwrap();
        assert_eq!(result.state, ColumnState::Buckled);
        assert!(result.load_ratio > 1.0);
    }

    #[test]
    fn test_load_equal_to_critical_is_safe() {
        let p_cr = calculate(&test_column()).unwrap().critical_load_n;
        let result = calculate(&BucklingInput { load_n: p_cr, ..test_column() }).unwrap();
        assert_eq!(result.state, ColumnState::Safe);
    }

    #[test]
    fn test_weak_axis_governs() {
        let a = calculate(&BucklingInput {
            width_mm: 20.0,
            height_mm: 60.0,
            ..test_column()
        })
        .unwrap();
        let b = calculate(&BucklingInput {
            width_mm: 60.0,
            height_mm: 20.0,
            ..test_column()
        })
        .unwrap();
        assert_eq!(a.min_inertia_mm4, b.min_inertia_mm4);
        // 60 * 20³ / 12 = 40,000
        assert!((a.min_inertia_mm4 - 40_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_critical_load_inverse_square_in_length() {
        let short = calculate(&test_column()).unwrap();
        let long = calculate(&BucklingInput { length_m: 4.0, ..test_column() }).unwrap();
        assert!((short.critical_load_n / long.critical_load_n - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&BucklingInput { length_m: 0.0, ..test_column() }).is_err());
        assert!(calculate(&BucklingInput { width_mm: -40.0, ..test_column() }).is_err());
    }
}
