//! # Combined Loading (Eccentric Axial Force)
//!
//! A rectangular member carrying an axial force offset from the centroid by
//! an eccentricity e. The uniform axial stress and the linear bending stress
//! from M = F·e superpose:
//!
//! ```text
//!   σ_top    = F/A − M·(h/2)/I
//!   σ_bottom = F/A + M·(h/2)/I
//! ```
//!
//! When e exceeds the kern limit h/6 the extreme fibres take opposite signs.
//! The sign of every stress is preserved so that reversal stays visible.

use serde::{Deserialize, Serialize};

use crate::equations::beam::flexural_stress;
use crate::equations::section::{rectangular_area, rectangular_moment_of_inertia};
use crate::errors::{require_finite, require_positive, CalcResult};

/// Input parameters for an eccentrically loaded member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedInput {
    /// Axial force F (N)
    pub force_n: f64,

    /// Offset of the load line from the centroid e (mm), positive toward the bottom fibre
    pub eccentricity_mm: f64,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Section height h (mm), in the plane of the eccentricity
    pub height_mm: f64,
}

impl CombinedInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("force_n", self.force_n)?;
        require_finite("eccentricity_mm", self.eccentricity_mm)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("height_mm", self.height_mm)?;
        Ok(())
    }

    /// Kern limit h/6: the largest eccentricity without stress reversal
    pub fn kern_limit_mm(&self) -> f64 {
        self.height_mm / 6.0
    }
}

/// Results from the combined-loading calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedResult {
    /// Cross-sectional area A (mm²)
    pub area_mm2: f64,

    /// Second moment of area I (mm⁴)
    pub moment_of_inertia_mm4: f64,

    /// Bending moment M = F·e (N·mm)
    pub moment_nmm: f64,

    /// Uniform axial stress F/A (MPa)
    pub axial_stress_mpa: f64,

    /// Extreme-fibre bending stress M·(h/2)/I (MPa)
    pub bending_stress_mpa: f64,

    /// Top-fibre stress σ_axial − σ_bend (MPa)
    pub top_stress_mpa: f64,

    /// Bottom-fibre stress σ_axial + σ_bend (MPa)
    pub bottom_stress_mpa: f64,

    /// Kern limit h/6 (mm)
    pub kern_limit_mm: f64,
}

impl CombinedResult {
    /// True when the extreme fibres carry stresses of opposite sign
    pub fn has_stress_reversal(&self) -> bool {
        self.top_stress_mpa * self.bottom_stress_mpa < 0.0
    }

    /// Largest stress magnitude on the section (MPa)
    pub fn peak_stress_mpa(&self) -> f64 {
        self.top_stress_mpa.abs().max(self.bottom_stress_mpa.abs())
    }
}

/// Superpose axial and bending stress at the extreme fibres.
///
/// # Example
///
/// ```rust
/// use mechlab_core::calculations::combined::{calculate, CombinedInput};
///
/// let result = calculate(&CombinedInput {
///     force_n: 10_000.0,
///     eccentricity_mm: 20.0,
///     width_mm: 50.0,
///     height_mm: 100.0,
/// }).unwrap();
/// assert!((result.axial_stress_mpa - 2.0).abs() < 1e-12);
/// assert!((result.bending_stress_mpa - 2.4).abs() < 1e-9);
/// assert!(result.top_stress_mpa < 0.0);
/// assert!(result.has_stress_reversal());
/// ```
pub fn calculate(input: &CombinedInput) -> CalcResult<CombinedResult> {
    input.validate()?;

    let area_mm2 = rectangular_area(input.width_mm, input.height_mm);
    let moment_of_inertia_mm4 = rectangular_moment_of_inertia(input.width_mm, input.height_mm);
    let moment_nmm = input.force_n * input.eccentricity_mm;

    let axial_stress_mpa = input.force_n / area_mm2;
    let bending_stress_mpa =
        flexural_stress(moment_nmm, input.height_mm / 2.0, moment_of_inertia_mm4);

    let result = CombinedResult {
        area_mm2,
        moment_of_inertia_mm4,
        moment_nmm,
        axial_stress_mpa,
        bending_stress_mpa,
        top_stress_mpa: axial_stress_mpa - bending_stress_mpa,
        bottom_stress_mpa: axial_stress_mpa + bending_stress_mpa,
        kern_limit_mm: input.kern_limit_mm(),
    };

    log::debug!(
        "combined: F={} N, e={} mm -> σ_top={:.3} MPa, σ_bottom={:.3} MPa, reversal={}",
        input.force_n,
        input.eccentricity_mm,
        result.top_stress_mpa,
        result.bottom_stress_mpa,
        result.has_stress_reversal()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_member() -> CombinedInput {
        CombinedInput {
            force_n: 10_000.0,
            eccentricity_mm: 20.0,
            width_mm: 50.0,
            height_mm: 100.0,
        }
    }

    #[test]
    fn test_reference_member() {
        let result = calculate(&test_member()).unwrap();
        assert_eq!(result.area_mm2, 5000.0);
        assert_eq!(result.moment_nmm, 200_000.0);
        assert!((result.top_stress_mpa - (-0.4)).abs() < 1e-9);
        assert!((result.bottom_stress_mpa - 4.4).abs() < 1e-9);
        assert!((result.peak_stress_mpa() - 4.4).abs() < 1e-9);
        assert!((result.kern_limit_mm - 100.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_inside_kern_no_reversal() {
        let result = calculate(&CombinedInput { eccentricity_mm: 10.0, ..test_member() }).unwrap();
        assert!(!result.has_stress_reversal());
        assert!(result.top_stress_mpa > 0.0);
    }

    #[test]
    fn test_at_kern_limit_top_fibre_is_zero() {
        let member = test_member();
        let at_kern = CombinedInput { eccentricity_mm: member.kern_limit_mm(), ..member };
        let result = calculate(&at_kern).unwrap();
        assert!(result.top_stress_mpa.abs() < 1e-9);
    }

    #[test]
    fn test_concentric_load_is_uniform() {
        let result = calculate(&CombinedInput { eccentricity_mm: 0.0, ..test_member() }).unwrap();
        assert_eq!(result.bending_stress_mpa, 0.0);
        assert_eq!(result.top_stress_mpa, result.bottom_stress_mpa);
    }

    #[test]
    fn test_compressive_member_reversal_keeps_sign() {
        let result = calculate(&CombinedInput { force_n: -10_000.0, ..test_member() }).unwrap();
        // Nominally compressive, but the top fibre goes into tension
        assert!(result.axial_stress_mpa < 0.0);
        assert!(result.top_stress_mpa > 0.0);
        assert!(result.bottom_stress_mpa < 0.0);
        assert!(result.has_stress_reversal());
    }

    #[test]
    fn test_invalid_section() {
        assert!(calculate(&CombinedInput { width_mm: 0.0, ..test_member() }).is_err());
        assert!(calculate(&CombinedInput { eccentricity_mm: f64::NAN, ..test_member() }).is_err());
    }
}
