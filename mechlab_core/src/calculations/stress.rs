//! # Stress Transformation
//!
//! Plane-stress transformation (Mohr's circle) for a rotated element, plus the
//! principal stresses of a full 3-D symmetric stress tensor.
//!
//! ## Sign Convention
//!
//! Tension positive. θ is measured counter-clockwise from the x-axis to the
//! rotated x′-axis, in degrees, and is wrapped into [0, 360).
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::calculations::stress::{transform, PlaneStressInput};
//!
//! let input = PlaneStressInput {
//!     sigma_x_mpa: 50.0,
//!     sigma_y_mpa: 20.0,
//!     tau_xy_mpa: 30.0,
//!     angle_deg: 0.0,
//! };
//! let result = transform(&input).unwrap();
//! assert!((result.sigma_1_mpa - 68.541).abs() < 1e-3);
//! assert!((result.sigma_2_mpa - 1.459).abs() < 1e-3);
//! assert!((result.tau_max_mpa - 33.541).abs() < 1e-3);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::units::{Degrees, Radians};

/// Plane-stress state and rotation angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneStressInput {
    /// Normal stress σx (MPa)
    pub sigma_x_mpa: f64,

    /// Normal stress σy (MPa)
    pub sigma_y_mpa: f64,

    /// Shear stress τxy (MPa)
    pub tau_xy_mpa: f64,

    /// Element rotation θ (degrees), any real value
    pub angle_deg: f64,
}

impl PlaneStressInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("sigma_x_mpa", self.sigma_x_mpa)?;
        require_finite("sigma_y_mpa", self.sigma_y_mpa)?;
        require_finite("tau_xy_mpa", self.tau_xy_mpa)?;
        require_finite("angle_deg", self.angle_deg)?;
        Ok(())
    }

    /// Mean normal stress (σx + σy)/2, the Mohr circle center
    pub fn average_mpa(&self) -> f64 {
        (self.sigma_x_mpa + self.sigma_y_mpa) / 2.0
    }

    /// Mohr circle radius R = √(((σx − σy)/2)² + τxy²)
    pub fn radius_mpa(&self) -> f64 {
        let diff = (self.sigma_x_mpa - self.sigma_y_mpa) / 2.0;
        diff.hypot(self.tau_xy_mpa)
    }
}

/// Mohr circle geometry for diagram rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MohrCircle {
    /// Center on the σ axis (MPa)
    pub center_mpa: f64,

    /// Radius (MPa)
    pub radius_mpa: f64,
}

impl MohrCircle {
    /// Point (σ, τ) on the circle for the face rotated by θ
    pub fn point_at(&self, state: &PlaneStressInput, angle_deg: f64) -> (f64, f64) {
        let rotated = PlaneStressInput { angle_deg, ..state.clone() };
        let (sx, _, txy) = rotated_components(&rotated);
        (sx, txy)
    }
}

/// Results of a plane-stress transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneStressResult {
    /// Rotation actually applied, wrapped into [0, 360) (degrees)
    pub angle_deg: f64,

    /// Rotated normal stress σx′ (MPa)
    pub sigma_x_prime_mpa: f64,

    /// Rotated normal stress σy′ (MPa)
    pub sigma_y_prime_mpa: f64,

    /// Rotated shear stress τx′y′ (MPa)
    pub tau_xy_prime_mpa: f64,

    /// Major principal stress σ1 (MPa)
    pub sigma_1_mpa: f64,

    /// Minor principal stress σ2 (MPa)
    pub sigma_2_mpa: f64,

    /// Maximum in-plane shear τ_max = R (MPa)
    pub tau_max_mpa: f64,

    /// Principal-plane angle θp = ½·atan2(2τxy, σx − σy) (degrees)
    pub principal_angle_deg: f64,

    /// Mohr circle geometry
    pub mohr: MohrCircle,
}

/// Rotated (σx′, σy′, τx′y′) for the input's angle.
///
/// Written in terms of (1 ± cos 2θ)/2 so that θ = 0 reproduces the input
/// components bit for bit.
fn rotated_components(input: &PlaneStressInput) -> (f64, f64, f64) {
    let theta: Radians = Degrees(input.angle_deg).normalized().into();
    let c = (2.0 * theta.0).cos();
    let s = (2.0 * theta.0).sin();
    let (sx, sy, txy) = (input.sigma_x_mpa, input.sigma_y_mpa, input.tau_xy_mpa);
    let diff = (sx - sy) / 2.0;

    let sx_prime = sx * (1.0 + c) / 2.0 + sy * (1.0 - c) / 2.0 + txy * s;
    let sy_prime = sx * (1.0 - c) / 2.0 + sy * (1.0 + c) / 2.0 - txy * s;
    let txy_prime = -diff * s + txy * c;
    (sx_prime, sy_prime, txy_prime)
}

/// Rotate the plane-stress element and compute its principal values.
pub fn transform(input: &PlaneStressInput) -> CalcResult<PlaneStressResult> {
    input.validate()?;

    let angle = Degrees(input.angle_deg).normalized();
    let (sigma_x_prime_mpa, sigma_y_prime_mpa, tau_xy_prime_mpa) = rotated_components(input);

    let center_mpa = input.average_mpa();
    let radius_mpa = input.radius_mpa();
    let principal: Degrees = Radians(
        0.5 * (2.0 * input.tau_xy_mpa).atan2(input.sigma_x_mpa - input.sigma_y_mpa),
    )
    .into();

    log::debug!(
        "stress: σx={} σy={} τxy={} θ={}° -> σ1={:.3}, σ2={:.3}, τmax={:.3} MPa",
        input.sigma_x_mpa,
        input.sigma_y_mpa,
        input.tau_xy_mpa,
        angle.0,
        center_mpa + radius_mpa,
        center_mpa - radius_mpa,
        radius_mpa
    );

    Ok(PlaneStressResult {
        angle_deg: angle.0,
        sigma_x_prime_mpa,
        sigma_y_prime_mpa,
        tau_xy_prime_mpa,
        sigma_1_mpa: center_mpa + radius_mpa,
        sigma_2_mpa: center_mpa - radius_mpa,
        tau_max_mpa: radius_mpa,
        principal_angle_deg: principal.0,
        mohr: MohrCircle { center_mpa, radius_mpa },
    })
}

// ============================================================================
// 3-D stress state
// ============================================================================

/// Symmetric Cauchy stress tensor (MPa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTensor3 {
    pub sigma_x_mpa: f64,
    pub sigma_y_mpa: f64,
    pub sigma_z_mpa: f64,
    pub tau_xy_mpa: f64,
    pub tau_yz_mpa: f64,
    pub tau_zx_mpa: f64,
}

impl StressTensor3 {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("sigma_x_mpa", self.sigma_x_mpa)?;
        require_finite("sigma_y_mpa", self.sigma_y_mpa)?;
        require_finite("sigma_z_mpa", self.sigma_z_mpa)?;
        require_finite("tau_xy_mpa", self.tau_xy_mpa)?;
        require_finite("tau_yz_mpa", self.tau_yz_mpa)?;
        require_finite("tau_zx_mpa", self.tau_zx_mpa)?;
        Ok(())
    }

    /// First invariant I1 = σx + σy + σz
    pub fn i1(&self) -> f64 {
        self.sigma_x_mpa + self.sigma_y_mpa + self.sigma_z_mpa
    }

    /// Second invariant I2 = σxσy + σyσz + σzσx − τxy² − τyz² − τzx²
    pub fn i2(&self) -> f64 {
        let (sx, sy, sz) = (self.sigma_x_mpa, self.sigma_y_mpa, self.sigma_z_mpa);
        sx * sy + sy * sz + sz * sx - self.shear_sum_sq()
    }

    /// Third invariant I3 = det(σ)
    pub fn i3(&self) -> f64 {
        let (sx, sy, sz) = (self.sigma_x_mpa, self.sigma_y_mpa, self.sigma_z_mpa);
        let (txy, tyz, tzx) = (self.tau_xy_mpa, self.tau_yz_mpa, self.tau_zx_mpa);
        sx * sy * sz + 2.0 * txy * tyz * tzx - sx * tyz * tyz - sy * tzx * tzx - sz * txy * txy
    }

    fn shear_sum_sq(&self) -> f64 {
        self.tau_xy_mpa.powi(2) + self.tau_yz_mpa.powi(2) + self.tau_zx_mpa.powi(2)
    }

    fn max_abs_component(&self) -> f64 {
        [
            self.sigma_x_mpa,
            self.sigma_y_mpa,
            self.sigma_z_mpa,
            self.tau_xy_mpa,
            self.tau_yz_mpa,
            self.tau_zx_mpa,
        ]
        .iter()
        .fold(0.0, |max, v| max.max(v.abs()))
    }

    fn divided_by(&self, divisor: f64) -> StressTensor3 {
        StressTensor3 {
            sigma_x_mpa: self.sigma_x_mpa / divisor,
            sigma_y_mpa: self.sigma_y_mpa / divisor,
            sigma_z_mpa: self.sigma_z_mpa / divisor,
            tau_xy_mpa: self.tau_xy_mpa / divisor,
            tau_yz_mpa: self.tau_yz_mpa / divisor,
            tau_zx_mpa: self.tau_zx_mpa / divisor,
        }
    }
}

/// Principal values of a 3-D stress state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStresses3 {
    /// Invariants (I1, I2, I3)
    pub i1: f64,
    pub i2: f64,
    pub i3: f64,

    /// Ordered principal stresses σ1 ≥ σ2 ≥ σ3 (MPa)
    pub sigma_1_mpa: f64,
    pub sigma_2_mpa: f64,
    pub sigma_3_mpa: f64,

    /// Absolute maximum shear (σ1 − σ3)/2 (MPa)
    pub tau_max_mpa: f64,
}

/// Roots of the characteristic equation σ³ − I1σ² + I2σ − I3 = 0.
///
/// Uses the trigonometric form for real symmetric matrices, which never
/// takes the cube root of a complex number. The tensor is divided by its
/// largest component before solving so the squared terms stay in range.
///
/// # Returns
///
/// * `Err(CalcError::InvalidParameter)` - a non-finite component, or
///   components so large that the invariants overflow
pub fn principal_stresses(tensor: &StressTensor3) -> CalcResult<PrincipalStresses3> {
    tensor.validate()?;

    let no_shear = tensor.tau_xy_mpa == 0.0 && tensor.tau_yz_mpa == 0.0 && tensor.tau_zx_mpa == 0.0;
    let scale = tensor.max_abs_component();

    let mut roots = if no_shear {
        [tensor.sigma_x_mpa, tensor.sigma_y_mpa, tensor.sigma_z_mpa]
    } else {
        unit_roots(&tensor.divided_by(scale)).map(|root| root * scale)
    };
    roots.sort_by(|a, b| b.total_cmp(a));

    log::trace!("principal stresses (3-D): {:?}", roots);

    let result = PrincipalStresses3 {
        i1: tensor.i1(),
        i2: tensor.i2(),
        i3: tensor.i3(),
        sigma_1_mpa: roots[0],
        sigma_2_mpa: roots[1],
        sigma_3_mpa: roots[2],
        tau_max_mpa: (roots[0] - roots[2]) / 2.0,
    };

    let outputs = [
        result.i1,
        result.i2,
        result.i3,
        result.sigma_1_mpa,
        result.sigma_2_mpa,
        result.sigma_3_mpa,
        result.tau_max_mpa,
    ];
    if !outputs.iter().all(|v| v.is_finite()) {
        return Err(CalcError::invalid_parameter(
            "stress_tensor",
            format!("max |component| = {:e}", scale),
            "Stress components are too large; the invariants overflow",
        ));
    }

    Ok(result)
}

/// Eigenvalues of a tensor whose components lie in [-1, 1].
fn unit_roots(unit: &StressTensor3) -> [f64; 3] {
    let (sx, sy, sz) = (unit.sigma_x_mpa, unit.sigma_y_mpa, unit.sigma_z_mpa);
    let q = unit.i1() / 3.0;
    let p2 = (sx - q).powi(2) + (sy - q).powi(2) + (sz - q).powi(2) + 2.0 * unit.shear_sum_sq();
    let p = (p2 / 6.0).sqrt();

    // B = (σ − qI)/p; r = det(B)/2
    let shifted = StressTensor3 {
        sigma_x_mpa: (sx - q) / p,
        sigma_y_mpa: (sy - q) / p,
        sigma_z_mpa: (sz - q) / p,
        tau_xy_mpa: unit.tau_xy_mpa / p,
        tau_yz_mpa: unit.tau_yz_mpa / p,
        tau_zx_mpa: unit.tau_zx_mpa / p,
    };
    let r = (shifted.i3() / 2.0).clamp(-1.0, 1.0);
    let phi = r.acos() / 3.0;

    let s1 = q + 2.0 * p * phi.cos();
    let s3 = q + 2.0 * p * (phi + 2.0 * PI / 3.0).cos();
    [s1, 3.0 * q - s1 - s3, s3]
}

/// Plane transformation together with the full 3-D principal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressStateResult {
    pub plane: PlaneStressResult,
    pub principal_3d: PrincipalStresses3,
}

/// Evaluate the in-plane transformation and the 3-D principal stresses of
/// the same point.
pub fn calculate(
    plane: &PlaneStressInput,
    tensor: &StressTensor3,
) -> CalcResult<StressStateResult> {
    Ok(StressStateResult {
        plane: transform(plane)?,
        principal_3d: principal_stresses(tensor)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> PlaneStressInput {
        PlaneStressInput {
            sigma_x_mpa: 50.0,
            sigma_y_mpa: 20.0,
            tau_xy_mpa: 30.0,
            angle_deg: 0.0,
        }
    }

    #[test]
    fn test_identity_at_zero_angle() {
        let result = transform(&test_state()).unwrap();
        assert_eq!(result.sigma_x_prime_mpa, 50.0);
        assert_eq!(result.sigma_y_prime_mpa, 20.0);
        assert_eq!(result.tau_xy_prime_mpa, 30.0);
    }

    #[test]
    fn test_reference_principal_values() {
        let result = transform(&test_state()).unwrap();
        let r = (15.0_f64.powi(2) + 30.0_f64.powi(2)).sqrt();
        assert!((result.sigma_1_mpa - (35.0 + r)).abs() < 1e-12);
        assert!((result.sigma_2_mpa - (35.0 - r)).abs() < 1e-12);
        assert!((result.tau_max_mpa - r).abs() < 1e-12);
        assert_eq!(result.mohr.center_mpa, 35.0);
        assert!((result.mohr.radius_mpa - r).abs() < 1e-12);
    }

    #[test]
    fn test_trace_preserved_for_all_angles() {
        for step in -8..=16 {
            let angle_deg = step as f64 * 37.5;
            let result = transform(&PlaneStressInput { angle_deg, ..test_state() }).unwrap();
            assert!((result.sigma_x_prime_mpa + result.sigma_y_prime_mpa - 70.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_principal_angle_zeroes_shear() {
        let base = transform(&test_state()).unwrap();
        let rotated = transform(&PlaneStressInput {
            angle_deg: base.principal_angle_deg,
            ..test_state()
        })
        .unwrap();
        assert!(rotated.tau_xy_prime_mpa.abs() < 1e-9);
        assert!((rotated.sigma_x_prime_mpa - base.sigma_1_mpa).abs() < 1e-9);
    }

    #[test]
    fn test_angle_wraps_modulo_360() {
        let a = transform(&PlaneStressInput { angle_deg: 30.0, ..test_state() }).unwrap();
        let b = transform(&PlaneStressInput { angle_deg: 390.0, ..test_state() }).unwrap();
        let c = transform(&PlaneStressInput { angle_deg: -330.0, ..test_state() }).unwrap();
        assert!((a.angle_deg - 30.0).abs() < 1e-9);
        assert!((b.angle_deg - 30.0).abs() < 1e-9);
        assert!((a.sigma_x_prime_mpa - b.sigma_x_prime_mpa).abs() < 1e-9);
        assert!((a.tau_xy_prime_mpa - c.tau_xy_prime_mpa).abs() < 1e-9);
    }

    #[test]
    fn test_mohr_point_lies_on_circle() {
        let input = test_state();
        let result = transform(&input).unwrap();
        let (sigma, tau) = result.mohr.point_at(&input, 25.0);
        let dist = (sigma - result.mohr.center_mpa).hypot(tau);
        assert!((dist - result.mohr.radius_mpa).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = transform(&PlaneStressInput {
            angle_deg: f64::INFINITY,
            ..test_state()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("angle_deg"));
    }

    #[test]
    fn test_diagonal_tensor_sorted() {
        let tensor = StressTensor3 {
            sigma_x_mpa: 10.0,
            sigma_y_mpa: -5.0,
            sigma_z_mpa: 40.0,
            tau_xy_mpa: 0.0,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
        };
        let p = principal_stresses(&tensor).unwrap();
        assert_eq!((p.sigma_1_mpa, p.sigma_2_mpa, p.sigma_3_mpa), (40.0, 10.0, -5.0));
        assert_eq!(p.tau_max_mpa, 22.5);
    }

    #[test]
    fn test_plane_state_embedded_in_3d() {
        // With τyz = τzx = 0, σz is a principal stress and the in-plane pair matches 2-D
        let tensor = StressTensor3 {
            sigma_x_mpa: 50.0,
            sigma_y_mpa: 20.0,
            sigma_z_mpa: 10.0,
            tau_xy_mpa: 30.0,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
        };
        let plane = transform(&test_state()).unwrap();
        let p = principal_stresses(&tensor).unwrap();
        assert!((p.sigma_1_mpa - plane.sigma_1_mpa).abs() < 1e-9);
        assert!((p.sigma_2_mpa - 10.0).abs() < 1e-9);
        assert!((p.sigma_3_mpa - plane.sigma_2_mpa).abs() < 1e-9);
        assert!((p.i1 - (p.sigma_1_mpa + p.sigma_2_mpa + p.sigma_3_mpa)).abs() < 1e-9);
    }

    #[test]
    fn test_general_tensor_invariants() {
        let tensor = StressTensor3 {
            sigma_x_mpa: 80.0,
            sigma_y_mpa: -20.0,
            sigma_z_mpa: 35.0,
            tau_xy_mpa: 25.0,
            tau_yz_mpa: -12.0,
            tau_zx_mpa: 18.0,
        };
        let p = principal_stresses(&tensor).unwrap();
        let (s1, s2, s3) = (p.sigma_1_mpa, p.sigma_2_mpa, p.sigma_3_mpa);
        assert!(s1 >= s2 && s2 >= s3);
        assert!((s1 + s2 + s3 - p.i1).abs() < 1e-9);
        assert!((s1 * s2 + s2 * s3 + s3 * s1 - p.i2).abs() < 1e-6);
        assert!((s1 * s2 * s3 - p.i3).abs() < 1e-4);
    }

    #[test]
    fn test_hydrostatic_state() {
        let tensor = StressTensor3 {
            sigma_x_mpa: -15.0,
            sigma_y_mpa: -15.0,
            sigma_z_mpa: -15.0,
            tau_xy_mpa: 0.0,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
        };
        let p = principal_stresses(&tensor).unwrap();
        assert_eq!(p.tau_max_mpa, 0.0);
    }

    #[test]
    fn test_large_components_stay_finite() {
        let tensor = StressTensor3 {
            sigma_x_mpa: 1e160,
            sigma_y_mpa: 0.0,
            sigma_z_mpa: 0.0,
            tau_xy_mpa: 1e150,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
        };
        let p = principal_stresses(&tensor).unwrap();
        assert!([p.sigma_1_mpa, p.sigma_2_mpa, p.sigma_3_mpa].iter().all(|s| s.is_finite()));
        assert!(p.tau_max_mpa.is_finite());
        assert!((p.sigma_1_mpa / 1e160 - 1.0).abs() < 1e-9);
        assert!(p.sigma_1_mpa >= p.sigma_2_mpa && p.sigma_2_mpa >= p.sigma_3_mpa);
    }

    #[test]
    fn test_overflowing_invariants_rejected() {
        let tensor = StressTensor3 {
            sigma_x_mpa: 1e200,
            sigma_y_mpa: 1e200,
            sigma_z_mpa: 0.0,
            tau_xy_mpa: 1.0,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
        };
        let err = principal_stresses(&tensor).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert_eq!(err.field(), Some("stress_tensor"));
    }

    #[test]
    fn test_tiny_shear_resolved_after_scaling() {
        // Squaring 1e-160 lands in the subnormal range; scaling keeps full precision
        let tensor = StressTensor3 {
            sigma_x_mpa: 0.0,
            sigma_y_mpa: 0.0,
            sigma_z_mpa: 0.0,
            tau_xy_mpa: 1e-160,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
        };
        let p = principal_stresses(&tensor).unwrap();
        assert!((p.sigma_1_mpa / 1e-160 - 1.0).abs() < 1e-9);
        assert!(p.sigma_2_mpa.abs() < 1e-170);
        assert!((p.sigma_3_mpa / 1e-160 + 1.0).abs() < 1e-9);
    }
}
