//! # Axial Loading
//!
//! Stress, strain and elongation of a prismatic bar under a uniaxial force,
//! with a simplified three-regime material response.
//!
//! ## Material Response
//!
//! ```text
//!  σ
//!  │          UTS ●
//!  │         ╱     ╲_ failure (1.4·σ_y)
//!  │ σ_y ●──╯
//!  │    ╱
//!  │   ╱  elastic: ε = σ/E
//!  └──────────────────────── ε
//!       ε_y   10·ε_y  15·ε_y
//! ```
//!
//! - Elastic (σ ≤ σ_y): ε = σ/E
//! - Plastic (σ_y < σ ≤ UTS = 1.5·σ_y): ε = ε_y + (ε_UTS − ε_y)·((σ − σ_y)/(UTS − σ_y))²
//! - Fractured (σ > UTS): ε is held at ε_fail = 15·ε_y
//!
//! The multipliers are fixed teaching constants, not a calibrated material law.
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::calculations::axial::{calculate, AxialInput, AxialState};
//!
//! let input = AxialInput {
//!     force_n: 5000.0,
//!     area_mm2: 100.0,
//!     length_m: 1.0,
//!     elastic_modulus_gpa: 200.0,
//!     yield_strength_mpa: 250.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.stress_mpa, 50.0);
//! assert_eq!(result.state, AxialState::Elastic);
//! assert!((result.strain - 0.00025).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, require_positive, CalcResult};
use crate::units::{GigaPascals, MegaPascals, Meters, Millimeters};

/// UTS as a multiple of yield strength
pub const UTS_FACTOR: f64 = 1.5;
/// Strain at UTS as a multiple of yield strain
pub const UTS_STRAIN_FACTOR: f64 = 10.0;
/// Strain at fracture as a multiple of yield strain
pub const FAILURE_STRAIN_FACTOR: f64 = 15.0;
/// Stress at the end of the drawn curve (necking) as a multiple of yield strength
pub const FAILURE_STRESS_FACTOR: f64 = 1.4;

/// Input parameters for an axially loaded bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxialInput {
    /// Axial force F (N), positive in tension
    pub force_n: f64,

    /// Cross-sectional area A (mm²)
    pub area_mm2: f64,

    /// Free length L (m)
    pub length_m: f64,

    /// Young's modulus E (GPa)
    pub elastic_modulus_gpa: f64,

    /// Yield strength σ_y (MPa)
    pub yield_strength_mpa: f64,
}

impl AxialInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("force_n", self.force_n)?;
        require_positive("area_mm2", self.area_mm2)?;
        require_finite("length_m", self.length_m)?;
        require_positive("elastic_modulus_gpa", self.elastic_modulus_gpa)?;
        require_positive("yield_strength_mpa", self.yield_strength_mpa)?;
        Ok(())
    }

    /// Young's modulus in MPa
    pub fn e_mpa(&self) -> MegaPascals {
        GigaPascals(self.elastic_modulus_gpa).into()
    }
}

/// Response regime of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxialState {
    /// σ ≤ σ_y, fully recoverable
    Elastic,
    /// σ_y < σ ≤ UTS, permanent set
    Plastic,
    /// σ > UTS
    Fractured,
}

impl AxialState {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AxialState::Elastic => "Elastic",
            AxialState::Plastic => "Plastic",
            AxialState::Fractured => "Fractured",
        }
    }
}

impl std::fmt::Display for AxialState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Landmarks of the simplified stress-strain curve for a given material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKeyPoints {
    /// σ_y (MPa)
    pub yield_strength_mpa: f64,
    /// ε_y = σ_y/E
    pub strain_at_yield: f64,
    /// UTS = 1.5·σ_y (MPa)
    pub uts_mpa: f64,
    /// ε_UTS = 10·ε_y
    pub strain_at_uts: f64,
    /// Stress at the end of the curve, 1.4·σ_y (MPa)
    pub failure_stress_mpa: f64,
    /// ε_fail = 15·ε_y
    pub strain_at_failure: f64,
}

impl CurveKeyPoints {
    /// Build the landmarks from E (MPa) and σ_y (MPa).
    pub fn new(e_mpa: f64, yield_strength_mpa: f64) -> Self {
        let strain_at_yield = yield_strength_mpa / e_mpa;
        CurveKeyPoints {
            yield_strength_mpa,
            strain_at_yield,
            uts_mpa: yield_strength_mpa * UTS_FACTOR,
            strain_at_uts: strain_at_yield * UTS_STRAIN_FACTOR,
            failure_stress_mpa: yield_strength_mpa * FAILURE_STRESS_FACTOR,
            strain_at_failure: strain_at_yield * FAILURE_STRAIN_FACTOR,
        }
    }

    /// Classify a stress and return the corresponding strain.
    pub fn response(&self, stress_mpa: f64, e_mpa: f64) -> (AxialState, f64) {
        if stress_mpa <= self.yield_strength_mpa {
            (AxialState::Elastic, stress_mpa / e_mpa)
        } else if stress_mpa <= self.uts_mpa {
            let ratio =
                (stress_mpa - self.yield_strength_mpa) / (self.uts_mpa - self.yield_strength_mpa);
            let strain =
                self.strain_at_yield + (self.strain_at_uts - self.strain_at_yield) * ratio.powi(2);
            (AxialState::Plastic, strain)
        } else {
            (AxialState::Fractured, self.strain_at_failure)
        }
    }
}

/// Results from the axial calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stress_mpa": 50.0,
///   "strain": 0.00025,
///   "elongation_mm": 0.25,
///   "state": "Elastic",
///   "curve": { "yield_strength_mpa": 250.0, "strain_at_yield": 0.00125, "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxialResult {
    /// Engineering stress σ = F/A (MPa)
    pub stress_mpa: f64,

    /// Engineering strain ε
    pub strain: f64,

    /// Elongation ΔL = ε·L (mm)
    pub elongation_mm: f64,

    /// Response regime
    pub state: AxialState,

    /// Curve landmarks for this material
    pub curve: CurveKeyPoints,
}

impl AxialResult {
    /// Stress as a fraction of the yield strength
    pub fn yield_utilization(&self) -> f64 {
        self.stress_mpa / self.curve.yield_strength_mpa
    }

    /// True once the bar has left the elastic range
    pub fn has_yielded(&self) -> bool {
        self.state != AxialState::Elastic
    }
}

/// Calculate stress, strain and elongation of the bar.
///
/// # Returns
///
/// * `Ok(AxialResult)` - Calculation results
/// * `Err(CalcError::InvalidParameter)` - non-positive area, modulus or yield
///   strength, or a non-finite input
pub fn calculate(input: &AxialInput) -> CalcResult<AxialResult> {
    input.validate()?;

    let e_mpa = input.e_mpa().0;
    let stress_mpa = input.force_n / input.area_mm2;
    let curve = CurveKeyPoints::new(e_mpa, input.yield_strength_mpa);
    let (state, strain) = curve.response(stress_mpa, e_mpa);

    let length: Millimeters = Meters(input.length_m).into();
    let elongation_mm = strain * length.0;

    log::debug!(
        "axial: F={} N, A={} mm² -> σ={:.3} MPa, ε={:.6}, {}",
        input.force_n,
        input.area_mm2,
        stress_mpa,
        strain,
        state
    );

    Ok(AxialResult {
        stress_mpa,
        strain,
        elongation_mm,
        state,
        curve,
    })
}
