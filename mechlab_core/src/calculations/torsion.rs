//! # Torsion of a Circular Shaft
//!
//! Solid circular shaft under pure torque. Linear-elastic, no warping.
//!
//! - I_p = π·r⁴/2
//! - τ_max = T·r/I_p (at the outer surface)
//! - φ = T·L/(G·I_p)

use serde::{Deserialize, Serialize};

use crate::equations::section::solid_circle_polar_moment;
use crate::errors::{require_finite, require_positive, CalcResult};
use crate::units::{
    Degrees, GigaPascals, MegaPascals, Meters, Millimeters, NewtonMeters, NewtonMillimeters,
    Radians,
};

/// Input parameters for a shaft in torsion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionInput {
    /// Applied torque T (N·m)
    pub torque_nm: f64,

    /// Shaft radius r (mm)
    pub radius_mm: f64,

    /// Shaft length L (m)
    pub length_m: f64,

    /// Shear modulus G (GPa)
    pub shear_modulus_gpa: f64,
}

impl TorsionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("torque_nm", self.torque_nm)?;
        require_positive("radius_mm", self.radius_mm)?;
        require_finite("length_m", self.length_m)?;
        require_positive("shear_modulus_gpa", self.shear_modulus_gpa)?;
        Ok(())
    }
}

/// Results from the torsion calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionResult {
    /// Polar second moment of area I_p (mm⁴)
    pub polar_moment_mm4: f64,

    /// Maximum shear stress τ_max (MPa)
    pub max_shear_stress_mpa: f64,

    /// Angle of twist φ (rad)
    pub twist_angle_rad: f64,

    /// Angle of twist φ (degrees)
    pub twist_angle_deg: f64,
}

/// Calculate polar moment, surface shear stress and twist angle.
///
/// # Example
///
/// ```rust
/// use mechlab_core::calculations::torsion::{calculate, TorsionInput};
///
/// let result = calculate(&TorsionInput {
///     torque_nm: 500.0,
///     radius_mm: 20.0,
///     length_m: 1.0,
///     shear_modulus_gpa: 77.0,
/// }).unwrap();
/// assert!((result.max_shear_stress_mpa - 39.79).abs() < 0.01);
/// assert!((result.twist_angle_deg - 1.480).abs() < 0.001);
/// ```
pub fn calculate(input: &TorsionInput) -> CalcResult<TorsionResult> {
    input.validate()?;

    let polar_moment_mm4 = solid_circle_polar_moment(input.radius_mm);
    let torque: NewtonMillimeters = NewtonMeters(input.torque_nm).into();
    let g: MegaPascals = GigaPascals(input.shear_modulus_gpa).into();
    let length: Millimeters = Meters(input.length_m).into();

    let max_shear_stress_mpa = torque.0 * input.radius_mm / polar_moment_mm4;
    let twist = Radians(torque.0 * length.0 / (g.0 * polar_moment_mm4));
    let twist_deg: Degrees = twist.into();

    log::debug!(
        "torsion: T={} N·m, r={} mm -> τ={:.3} MPa, φ={:.4}°",
        input.torque_nm,
        input.radius_mm,
        max_shear_stress_mpa,
        twist_deg.0
    );

    Ok(TorsionResult {
        polar_moment_mm4,
        max_shear_stress_mpa,
        twist_angle_rad: twist.0,
        twist_angle_deg: twist_deg.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn test_shaft() -> TorsionInput {
        TorsionInput {
            torque_nm: 500.0,
            radius_mm: 20.0,
            length_m: 1.0,
            shear_modulus_gpa: 77.0,
        }
    }

    #[test]
    fn test_reference_shaft() {
        let result = calculate(&test_shaft()).unwrap();
        let ip = PI * 20.0_f64.powi(4) / 2.0;
        assert!((result.polar_moment_mm4 - ip).abs() < 1e-6);
        assert!((result.max_shear_stress_mpa - 500_000.0 * 20.0 / ip).abs() < 1e-9);
        let phi = 500_000.0 * 1000.0 / (77_000.0 * ip);
        assert!((result.twist_angle_rad - phi).abs() < 1e-12);
        assert!((result.twist_angle_deg - phi * 180.0 / PI).abs() < 1e-9);
    }

    #[test]
    fn test_doubling_radius() {
        let base = calculate(&test_shaft()).unwrap();
        let thick = calculate(&TorsionInput { radius_mm: 40.0, ..test_shaft() }).unwrap();
        // τ ∝ 1/r³, φ ∝ 1/r⁴
        assert!((base.max_shear_stress_mpa / thick.max_shear_stress_mpa - 8.0).abs() < 1e-9);
        assert!((base.twist_angle_rad / thick.twist_angle_rad - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_reverse_torque_twists_backwards() {
        let result = calculate(&TorsionInput { torque_nm: -500.0, ..test_shaft() }).unwrap();
        assert!(result.twist_angle_deg < 0.0);
        assert!(result.max_shear_stress_mpa < 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&TorsionInput { radius_mm: 0.0, ..test_shaft() }).is_err());
        assert!(calculate(&TorsionInput { shear_modulus_gpa: -1.0, ..test_shaft() }).is_err());
    }
}
