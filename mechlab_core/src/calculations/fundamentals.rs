//! # Fundamentals: Poisson Effect and Stress–Strain Curves
//!
//! Two independent teaching computations:
//!
//! 1. **Poisson effect**: lateral contraction of a specimen under axial strain,
//!    ε_trans = −ν·ε_axial.
//! 2. **Engineering vs. true stress**: an illustrative piecewise curve over
//!    engineering strain e ∈ [0, 0.5]:
//!
//! ```text
//!   e < 0.05:  σ_eng = 4000·e
//!   e ≥ 0.05:  σ_eng = 200 + 300·(e − 0.05)^0.4 − 100·(e − 0.05)²
//!   σ_true = σ_eng·(1 + e)
//! ```
//!
//! The curve coefficients are fixed presentation constants, not fitted to any
//! real material. Both branches give 200 MPa at e = 0.05.

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// Strain where the curve switches from the linear to the hardening branch
pub const TRANSITION_STRAIN: f64 = 0.05;

/// Slope of the linear branch (MPa per unit strain)
pub const LINEAR_SLOPE_MPA: f64 = 4000.0;

/// Upper end of the sampled strain domain
pub const MAX_CURVE_STRAIN: f64 = 0.5;

/// Number of sampling steps across [0, MAX_CURVE_STRAIN]
pub const CURVE_STEPS: usize = 50;

// ============================================================================
// Poisson effect
// ============================================================================

/// Input for the Poisson-effect computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoissonInput {
    /// Axial strain ε_axial (dimensionless)
    pub axial_strain: f64,

    /// Poisson ratio ν, in [0, 0.5)
    pub poisson_ratio: f64,
}

impl PoissonInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("axial_strain", self.axial_strain)?;
        require_finite("poisson_ratio", self.poisson_ratio)?;
        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(CalcError::invalid_parameter(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson ratio must be in [0, 0.5)",
            ));
        }
        Ok(())
    }
}

/// Result of the Poisson-effect computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoissonResult {
    pub axial_strain: f64,

    /// Transverse strain ε_trans = −ν·ε_axial
    pub transverse_strain: f64,

    /// Deformed length of a unit specimen along the load, 1 + ε_axial
    pub deformed_length_ratio: f64,

    /// Deformed width of a unit specimen across the load, 1 + ε_trans
    pub deformed_width_ratio: f64,
}

/// Lateral strain and deformed proportions of a unit specimen.
pub fn poisson_effect(input: &PoissonInput) -> CalcResult<PoissonResult> {
    input.validate()?;

    let transverse_strain = -input.poisson_ratio * input.axial_strain;
    Ok(PoissonResult {
        axial_strain: input.axial_strain,
        transverse_strain,
        deformed_length_ratio: 1.0 + input.axial_strain,
        deformed_width_ratio: 1.0 + transverse_strain,
    })
}

// ============================================================================
// Engineering / true stress curve
// ============================================================================

/// One sample of the stress–strain curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Engineering strain e
    pub strain: f64,

    /// Engineering stress σ_eng (MPa)
    pub engineering_stress_mpa: f64,

    /// True stress σ_true = σ_eng·(1 + e) (MPa)
    pub true_stress_mpa: f64,
}

impl CurvePoint {
    fn at(strain: f64) -> Self {
        let engineering_stress_mpa = engineering_stress(strain);
        CurvePoint {
            strain,
            engineering_stress_mpa,
            true_stress_mpa: engineering_stress_mpa * (1.0 + strain),
        }
    }

    /// Current-to-original area ratio A/A₀ = 1/(1 + e), assuming constant volume
    pub fn area_ratio(&self) -> f64 {
        1.0 / (1.0 + self.strain)
    }
}

/// Engineering stress at strain `e` (MPa). Caller guarantees e ≥ 0.
fn engineering_stress(e: f64) -> f64 {
    if e < TRANSITION_STRAIN {
        e * LINEAR_SLOPE_MPA
    } else {
        let ep = e - TRANSITION_STRAIN;
        200.0 + 300.0 * ep.powf(0.4) - 100.0 * ep.powi(2)
    }
}

/// Evaluate the curve at an arbitrary strain, e.g. to mark the current point.
///
/// Strains beyond the sampled domain are evaluated with the hardening branch.
///
/// # Example
///
/// ```rust
/// use mechlab_core::calculations::fundamentals::curve_point;
///
/// let p = curve_point(0.05).unwrap();
/// assert_eq!(p.engineering_stress_mpa, 200.0);
/// assert!((p.true_stress_mpa - 210.0).abs() < 1e-9);
/// ```
pub fn curve_point(strain: f64) -> CalcResult<CurvePoint> {
    require_finite("strain", strain)?;
    if strain < 0.0 {
        return Err(CalcError::invalid_parameter(
            "strain",
            strain.to_string(),
            "Strain must be non-negative",
        ));
    }
    Ok(CurvePoint::at(strain))
}

/// Lazy, restartable sequence of curve samples at a fixed step of 0.01
/// over [0, 0.5], both ends included.
///
/// Strains are generated from an integer index, so cloning or recreating the
/// iterator replays exactly the same values.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    index: usize,
}

impl CurveSamples {
    pub fn new() -> Self {
        CurveSamples { index: 0 }
    }
}

impl Default for CurveSamples {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CurveSamples {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.index > CURVE_STEPS {
            return None;
        }
        let strain = self.index as f64 * MAX_CURVE_STRAIN / CURVE_STEPS as f64;
        self.index += 1;
        Some(CurvePoint::at(strain))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (CURVE_STEPS + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples {}

/// Start a fresh pass over the curve samples.
pub fn curve_samples() -> CurveSamples {
    CurveSamples::new()
}

/// Combined fundamentals result: Poisson effect plus the current curve point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsResult {
    pub poisson: PoissonResult,
    pub current: CurvePoint,
}

/// Evaluate both sub-computations at the same strain level.
pub fn calculate(input: &PoissonInput) -> CalcResult<FundamentalsResult> {
    let poisson = poisson_effect(input)?;
    let current = curve_point(input.axial_strain)?;

    log::debug!(
        "fundamentals: ε={} ν={} -> ε_trans={:.4}, σ_eng={:.1} MPa, σ_true={:.1} MPa",
        input.axial_strain,
        input.poisson_ratio,
        poisson.transverse_strain,
        current.engineering_stress_mpa,
        current.true_stress_mpa
    );

    Ok(FundamentalsResult { poisson, current })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisson_contraction() {
        let result = poisson_effect(&PoissonInput {
            axial_strain: 0.1,
            poisson_ratio: 0.3,
        })
        .unwrap();
        assert!((result.transverse_strain - (-0.03)).abs() < 1e-15);
        assert!((result.deformed_length_ratio - 1.1).abs() < 1e-15);
        assert!((result.deformed_width_ratio - 0.97).abs() < 1e-15);
    }

    #[test]
    fn test_poisson_ratio_out_of_range() {
        assert!(poisson_effect(&PoissonInput { axial_strain: 0.1, poisson_ratio: 0.5 }).is_err());
        assert!(poisson_effect(&PoissonInput { axial_strain: 0.1, poisson_ratio: -0.1 }).is_err());
    }

    #[test]
    fn test_curve_continuous_at_transition() {
        let below = curve_point(TRANSITION_STRAIN - 1e-12).unwrap();
        let at = curve_point(TRANSITION_STRAIN).unwrap();
        assert!((below.engineering_stress_mpa - 200.0).abs() < 1e-6);
        assert_eq!(at.engineering_stress_mpa, 200.0);
    }

    #[test]
    fn test_linear_branch() {
        let p = curve_point(0.02).unwrap();
        assert!((p.engineering_stress_mpa - 80.0).abs() < 1e-12);
        assert!((p.true_stress_mpa - 81.6).abs() < 1e-12);
    }

    #[test]
    fn test_true_stress_exceeds_engineering() {
        for p in curve_samples().skip(1) {
            assert!(p.true_stress_mpa > p.engineering_stress_mpa);
        }
    }

    #[test]
    fn test_samples_cover_domain() {
        let samples: Vec<CurvePoint> = curve_samples().collect();
        assert_eq!(samples.len(), 51);
        assert_eq!(samples[0].strain, 0.0);
        assert_eq!(samples[0].engineering_stress_mpa, 0.0);
        assert_eq!(samples[5].strain, 0.05);
        assert_eq!(samples[50].strain, 0.5);
    }

    #[test]
    fn test_samples_restartable() {
        let first: Vec<CurvePoint> = curve_samples().collect();
        let second: Vec<CurvePoint> = curve_samples().collect();
        assert_eq!(first, second);

        let mut iter = curve_samples();
        iter.next();
        let replay = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut iter = curve_samples();
        assert_eq!(iter.len(), 51);
        iter.next();
        assert_eq!(iter.len(), 50);
    }

    #[test]
    fn test_point_query_rejects_negative() {
        assert!(curve_point(-0.01).is_err());
        assert!(curve_point(f64::NAN).is_err());
        // Past the sampled domain is allowed
        assert!(curve_point(0.8).is_ok());
    }

    #[test]
    fn test_area_ratio() {
        let p = curve_point(0.25).unwrap();
        assert!((p.area_ratio() - 0.8).abs() < 1e-15);
    }
}
