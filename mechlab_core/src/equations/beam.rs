//! # Simply-Supported Beam Formulas
//!
//! Closed-form results for a simply-supported beam (pin at x = 0, roller at
//! x = L) under a concentrated load. Consistent units are the caller's job;
//! the bending model evaluates these in N and mm.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left support
//! - `a` = Load position from left support
//! - `P` = Point load magnitude
//! - `M` = Bending moment
//! - `δ` = Deflection
//! - `E` = Modulus of elasticity
//! - `I` = Second moment of area
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Deflection: Positive downward
//! - Reactions: Positive upward

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Moment at position x for point load P at position a
///
/// # Formulas
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

/// Maximum moment for a point load at midspan
///
/// # Formula
/// M_max = P·L/4
///
/// # Example
/// ```rust
/// use mechlab_core::equations::beam::midspan_point_load_max_moment;
///
/// // 2000 N over 2 m
/// assert_eq!(midspan_point_load_max_moment(2000.0, 2.0), 1000.0);
/// ```
#[inline]
pub fn midspan_point_load_max_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Maximum deflection for a point load at midspan
///
/// # Formula
/// δ_max = P·L³/(48·E·I)
#[inline]
pub fn midspan_point_load_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

/// Flexure formula: normal stress at distance y from the neutral axis
///
/// # Formula
/// σ = M·y/I
#[inline]
pub fn flexural_stress(m: f64, y: f64, i: f64) -> f64 {
    m * y / i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_sum_to_load() {
        let (r1, r2) = point_load_reactions(1200.0, 0.5, 2.0);
        assert!((r1 + r2 - 1200.0).abs() < 1e-9);
        assert!((r1 - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_general_moment_matches_midspan_formula() {
        let p = 2000.0;
        let l = 2.0;
        let m = point_load_moment(p, l / 2.0, l, l / 2.0);
        assert!((m - midspan_point_load_max_moment(p, l)).abs() < 1e-9);
        assert_eq!(point_load_moment(p, 1.0, l, 0.0), 0.0);
        assert!(point_load_moment(p, 1.0, l, l).abs() < 1e-9);
    }

    #[test]
    fn test_midspan_deflection() {
        // 2000 N, 2000 mm, E = 200,000 MPa, I = 28,125,000 mm⁴
        let d = midspan_point_load_max_deflection(2000.0, 2000.0, 200_000.0, 28_125_000.0);
        assert!((d - 0.059259).abs() < 1e-5);
    }

    #[test]
    fn test_flexural_stress() {
        let s = flexural_stress(1_000_000.0, 75.0, 28_125_000.0);
        assert!((s - 2.6667).abs() < 1e-3);
    }
}
