//! Plain-text rendering of results for the terminal.

use mechlab_core::calculations::fundamentals::curve_samples;
use mechlab_core::calculations::DerivedResult;
use mechlab_core::equations::registry::TheoryEntry;
use mechlab_core::materials::catalog;
use mechlab_core::SimulationParameters;

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[WARN]" }
}

fn header(title: &str) {
    println!("{}", RULE);
    println!("  {}", title.to_uppercase());
    println!("{}", RULE);
}

/// Print one result with the inputs it was computed from.
pub fn print_result(params: &SimulationParameters, result: &DerivedResult) {
    header(result.kind().display_name());
    println!();
    println!("Material: {}", params.material.summary());
    if let Some(preset) = params.matched_catalog_material() {
        if preset.name != params.material.name {
            println!("          (matches catalog preset {})", preset.name);
        }
    }
    println!();

    match result {
        DerivedResult::Fundamentals(r) => {
            println!("Input:");
            println!("  Axial strain:     {}", r.poisson.axial_strain);
            println!();
            println!("Poisson effect:");
            println!("  ε_trans =  {:.5}", r.poisson.transverse_strain);
            println!(
                "  Unit specimen:  {:.3} long x {:.3} wide",
                r.poisson.deformed_length_ratio, r.poisson.deformed_width_ratio
            );
            println!();
            println!("Stress-strain curve at this strain:");
            println!("  σ_eng  = {:.1} MPa", r.current.engineering_stress_mpa);
            println!("  σ_true = {:.1} MPa", r.current.true_stress_mpa);
            println!("  A/A₀   = {:.3}", r.current.area_ratio());
        }
        DerivedResult::Axial(r) => {
            let a = &params.axial;
            println!("Input:");
            println!("  F = {} N, A = {} mm², L = {} m", a.force_n, a.area_mm2, a.length_m);
            println!();
            println!("Response:");
            println!(
                "  σ  = {:.2} MPa ({:.0}% of σ_y)",
                r.stress_mpa,
                r.yield_utilization() * 100.0
            );
            println!("  ε  = {:.6}", r.strain);
            println!("  ΔL = {:.4} mm", r.elongation_mm);
            println!();
            println!("Curve landmarks:");
            println!(
                "  σ_y = {:.0} MPa at ε = {:.5}",
                r.curve.yield_strength_mpa, r.curve.strain_at_yield
            );
            println!("  UTS = {:.0} MPa at ε = {:.5}", r.curve.uts_mpa, r.curve.strain_at_uts);
            println!(
                "  failure {:.0} MPa at ε = {:.5}",
                r.curve.failure_stress_mpa, r.curve.strain_at_failure
            );
            println!();
            println!("State: {} {}", r.state, status_icon(!r.has_yielded()));
        }
        DerivedResult::Bending(r) => {
            let b = &params.bending;
            println!("Input:");
            println!(
                "  P = {} N at midspan, L = {} m, section {} x {} mm",
                b.load_n, b.span_m, b.width_mm, b.height_mm
            );
            println!();
            println!("Demand:");
            println!("  I     = {:.0} mm⁴", r.moment_of_inertia_mm4);
            println!("  M_max = {:.1} N·m", r.max_moment_nm);
            println!("  w_max = {:.4} mm", r.max_deflection_mm);
            println!(
                "  σ_max = {:.2} MPa {}",
                r.max_stress_mpa,
                status_icon(r.max_stress_mpa.abs() <= params.material.yield_strength_mpa)
            );
        }
        DerivedResult::Torsion(r) => {
            let t = &params.torsion;
            println!("Input:");
            println!("  T = {} N·m, r = {} mm, L = {} m", t.torque_nm, t.radius_mm, t.length_m);
            println!();
            println!("Response:");
            println!("  I_p   = {:.0} mm⁴", r.polar_moment_mm4);
            println!("  τ_max = {:.2} MPa", r.max_shear_stress_mpa);
            println!("  φ     = {:.4}° ({:.6} rad)", r.twist_angle_deg, r.twist_angle_rad);
        }
        DerivedResult::Buckling(r) => {
            let b = &params.buckling;
            println!("Input:");
            println!(
                "  P = {} N, L = {} m, section {} x {} mm (pinned-pinned)",
                b.load_n, b.length_m, b.width_mm, b.height_mm
            );
            println!();
            println!("Stability:");
            println!("  I_min = {:.0} mm⁴", r.min_inertia_mm4);
            println!("  i     = {:.2} mm", r.radius_of_gyration_mm);
            println!("  λ     = {:.1}", r.slenderness_ratio);
            println!("  P_cr  = {:.0} N", r.critical_load_n);
            println!("  P/P_cr = {:.3}", r.load_ratio);
            println!();
            println!("State: {} {}", r.state, status_icon(r.passes()));
        }
        DerivedResult::Stress(r) => {
            let s = &params.stress;
            println!("Input:");
            println!(
                "  σx = {}, σy = {}, σz = {} MPa; τxy = {}, τyz = {}, τzx = {} MPa",
                s.sigma_x_mpa,
                s.sigma_y_mpa,
                s.sigma_z_mpa,
                s.tau_xy_mpa,
                s.tau_yz_mpa,
                s.tau_zx_mpa
            );
            println!("  θ = {}°", r.plane.angle_deg);
            println!();
            println!("Rotated element:");
            println!("  σx' = {:.2} MPa", r.plane.sigma_x_prime_mpa);
            println!("  σy' = {:.2} MPa", r.plane.sigma_y_prime_mpa);
            println!("  τx'y' = {:.2} MPa", r.plane.tau_xy_prime_mpa);
            println!();
            println!(
                "In-plane principal (Mohr circle C = {:.2}, R = {:.2}):",
                r.plane.mohr.center_mpa, r.plane.mohr.radius_mpa
            );
            println!(
                "  σ1 = {:.2} MPa, σ2 = {:.2} MPa",
                r.plane.sigma_1_mpa, r.plane.sigma_2_mpa
            );
            println!(
                "  τ_max = {:.2} MPa at θp = {:.2}°",
                r.plane.tau_max_mpa, r.plane.principal_angle_deg
            );
            println!();
            let p = &r.principal_3d;
            println!("3-D principal:");
            println!("  I1 = {:.2}, I2 = {:.2}, I3 = {:.2}", p.i1, p.i2, p.i3);
            println!(
                "  σ1 = {:.2}, σ2 = {:.2}, σ3 = {:.2} MPa, τ_abs = {:.2} MPa",
                p.sigma_1_mpa, p.sigma_2_mpa, p.sigma_3_mpa, p.tau_max_mpa
            );
        }
        DerivedResult::Combined(r) => {
            let c = &params.combined;
            println!("Input:");
            println!(
                "  F = {} N, e = {} mm, section {} x {} mm",
                c.force_n, c.eccentricity_mm, c.width_mm, c.height_mm
            );
            println!();
            println!("Stresses:");
            println!("  M        = {:.0} N·mm", r.moment_nmm);
            println!("  σ_axial  = {:.2} MPa", r.axial_stress_mpa);
            println!("  σ_bend   = {:.2} MPa", r.bending_stress_mpa);
            println!("  σ_top    = {:.2} MPa", r.top_stress_mpa);
            println!("  σ_bottom = {:.2} MPa", r.bottom_stress_mpa);
            println!(
                "  kern h/6 = {:.2} mm {}",
                r.kern_limit_mm,
                status_icon(!r.has_stress_reversal())
            );
        }
    }

    if let Some(alert) = result.alert() {
        println!();
        println!("! {}", alert);
    }
    println!();
}

/// Print the catalog as a table.
pub fn print_materials() {
    println!(
        "{:<22} {:<20} {:>8} {:>8} {:>9} {:>6}",
        "KEY", "NAME", "E (GPa)", "G (GPa)", "σ_y (MPa)", "ν"
    );
    for entry in catalog::ENTRIES.iter() {
        println!(
            "{:<22} {:<20} {:>8} {:>8} {:>9} {:>6}",
            entry.key,
            entry.name,
            entry.elastic_modulus_gpa,
            entry.shear_modulus_gpa,
            entry.yield_strength_mpa,
            entry.poisson_ratio
        );
    }
}

/// Print a theory panel.
pub fn print_theory(entry: &TheoryEntry) {
    header(entry.title);
    println!();
    println!("{}", entry.definition);
    println!();
    for formula in entry.formulas {
        println!("  {}: {}", formula.label, formula.latex);
        println!("      {}", formula.description);
    }
    println!();
    println!("Insight: {}", entry.insight);
}

/// Print the sampled engineering/true stress curve.
pub fn print_curve() {
    println!("{:>8} {:>12} {:>12}", "strain", "σ_eng (MPa)", "σ_true (MPa)");
    for point in curve_samples() {
        println!(
            "{:>8.2} {:>12.1} {:>12.1}",
            point.strain, point.engineering_stress_mpa, point.true_stress_mpa
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechlab_core::equations::theory;
    use mechlab_core::ModuleKind;

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(true), "[OK]");
        assert_eq!(status_icon(false), "[WARN]");
    }

    #[test]
    fn test_print_every_result() {
        let params = SimulationParameters::default();
        for result in params.evaluate_all().unwrap() {
            print_result(&params, &result);
        }
    }

    #[test]
    fn test_print_tables_and_panels() {
        print_materials();
        print_curve();
        for kind in ModuleKind::ALL {
            print_theory(theory(kind));
        }
    }
}
