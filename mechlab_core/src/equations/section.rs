//! # Cross-Section Property Formulas
//!
//! Geometric properties of the cross-sections the models use. All inputs are
//! in mm, so areas come out in mm² and second moments in mm⁴.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about a centroidal axis
//! - `I_p` = Polar second moment of area
//! - `i` = Radius of gyration (√(I/A))
//! - `b` = Width of section
//! - `h` = Height of section (parallel to the bending plane)
//! - `r` = Radius of a solid circular section

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use mechlab_core::equations::section::rectangular_area;
///
/// assert_eq!(rectangular_area(50.0, 100.0), 5000.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Second moment of area of a rectangle about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = b·h³/12
///
/// # Example
/// ```rust
/// use mechlab_core::equations::section::rectangular_moment_of_inertia;
///
/// // 100 x 150 mm beam
/// let i = rectangular_moment_of_inertia(100.0, 150.0);
/// assert!((i - 28_125_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Second moment of area about the weak axis of a rectangle
///
/// A compressed bar buckles about the axis with the least stiffness, so the
/// smaller side is cubed regardless of which one is called "width".
///
/// # Formula
/// I_min = max(b, h) · min(b, h)³ / 12
#[inline]
pub fn rectangular_weak_axis_inertia(b: f64, h: f64) -> f64 {
    let side_min = b.min(h);
    let side_max = b.max(h);
    rectangular_moment_of_inertia(side_max, side_min)
}

/// Radius of gyration i = √(I/A)
///
/// # Example
/// ```rust
/// use mechlab_core::equations::section::radius_of_gyration;
///
/// // 40 x 40 mm square: i = 40/√12
/// let i = radius_of_gyration(213_333.333, 1600.0);
/// assert!((i - 11.547).abs() < 0.001);
/// ```
#[inline]
pub fn radius_of_gyration(inertia: f64, area: f64) -> f64 {
    (inertia / area).sqrt()
}

// =============================================================================
// CIRCULAR SECTION PROPERTIES
// =============================================================================

/// Polar second moment of area of a solid circular shaft
///
/// # Formula
/// I_p = π·r⁴/2
///
/// # Example
/// ```rust
/// use mechlab_core::equations::section::solid_circle_polar_moment;
///
/// let ip = solid_circle_polar_moment(20.0);
/// assert!((ip - 251_327.41).abs() < 0.01);
/// ```
#[inline]
pub fn solid_circle_polar_moment(r: f64) -> f64 {
    PI * r.powi(4) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_area() {
        assert_eq!(rectangular_area(40.0, 40.0), 1600.0);
    }

    #[test]
    fn test_rectangular_inertia() {
        // 50 x 100: 50 * 100^3 / 12 = 4,166,666.67
        let i = rectangular_moment_of_inertia(50.0, 100.0);
        assert!((i - 4_166_666.667).abs() < 0.01);
    }

    #[test]
    fn test_weak_axis_is_orientation_independent() {
        let a = rectangular_weak_axis_inertia(30.0, 60.0);
        let b = rectangular_weak_axis_inertia(60.0, 30.0);
        assert_eq!(a, b);
        // 60 * 30^3 / 12 = 135,000
        assert!((a - 135_000.0).abs() < 1e-9);
        assert!(a < rectangular_moment_of_inertia(30.0, 60.0));
    }

    #[test]
    fn test_square_radius_of_gyration() {
        let i = rectangular_weak_axis_inertia(40.0, 40.0);
        let r = radius_of_gyration(i, rectangular_area(40.0, 40.0));
        assert!((r - 40.0 / 12.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_polar_moment_scales_with_r4() {
        let ratio = solid_circle_polar_moment(20.0) / solid_circle_polar_moment(10.0);
        assert!((ratio - 16.0).abs() < 1e-9);
    }
}
