//! # Narration
//!
//! Builds the tutoring prompt that explains a computed result in plain
//! language, and defines the [`Narrator`] seam a front end implements to send
//! it to a text-generation service.
//!
//! The core never performs the request itself. A narration failure is a
//! [`NarrationError`], a separate type from [`crate::CalcError`], so it cannot
//! leak into a physics computation.
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::calculations::ModuleKind;
//! use mechlab_core::narration::{build_prompt, NarrationError, Narrator};
//! use mechlab_core::simulation::SimulationParameters;
//!
//! struct Echo;
//!
//! impl Narrator for Echo {
//!     fn narrate(&self, prompt: &str) -> Result<String, NarrationError> {
//!         Ok(prompt.lines().next().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let params = SimulationParameters::default();
//! let result = params.evaluate(ModuleKind::Torsion).unwrap();
//! let prompt = build_prompt(&params, &result);
//! assert!(Echo.narrate(&prompt).unwrap().contains("professor"));
//! ```

use thiserror::Error;

use crate::calculations::{AxialState, ColumnState, DerivedResult};
use crate::equations::registry::theory;
use crate::simulation::SimulationParameters;

/// Default generative model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Upper bound on the length of the explanation requested
pub const MAX_WORDS: usize = 300;

/// Load ratio above which the prompt asks for an explicit warning
pub const WARNING_RATIO: f64 = 0.8;

/// Errors from a narration request.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("No API key configured (set {variable})")]
    MissingApiKey { variable: String },

    #[error("Request failed: {reason}")]
    Transport { reason: String },

    #[error("Service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unexpected response format: {reason}")]
    InvalidResponse { reason: String },

    #[error("Service returned no text")]
    EmptyResponse,
}

impl NarrationError {
    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            NarrationError::MissingApiKey { .. } => "MISSING_API_KEY",
            NarrationError::Transport { .. } => "TRANSPORT_ERROR",
            NarrationError::Http { .. } => "HTTP_ERROR",
            NarrationError::InvalidResponse { .. } => "INVALID_RESPONSE",
            NarrationError::EmptyResponse => "EMPTY_RESPONSE",
        }
    }
}

/// A service that turns a prompt into explanatory text.
pub trait Narrator {
    fn narrate(&self, prompt: &str) -> Result<String, NarrationError>;
}

/// Build the tutoring prompt for a computed result.
///
/// The prompt carries the module description, the material, the inputs the
/// model read, the computed values and any warning condition.
pub fn build_prompt(params: &SimulationParameters, result: &DerivedResult) -> String {
    let kind = result.kind();
    let panel = theory(kind);
    let material = &params.material;

    let mut context = String::new();
    context.push_str(&format!("Module: {}. {}\n", panel.title, panel.definition));
    context.push_str(&format!(
        "Material: {}, E = {} GPa, G = {} GPa, yield strength σ_y = {} MPa, \
         Poisson ratio ν = {}.\n",
        material.name,
        material.elastic_modulus_gpa,
        material.shear_modulus_gpa,
        material.yield_strength_mpa,
        material.poisson_ratio
    ));

    match result {
        DerivedResult::Fundamentals(r) => {
            context.push_str(&format!(
                "The student is watching the Poisson-effect demo and the true vs. engineering \
                 stress chart at strain {}.\n",
                params.fundamentals.strain_level
            ));
            context.push_str(&format!(
                "Transverse strain {:.4}; engineering stress {:.1} MPa; true stress {:.1} MPa.\n",
                r.poisson.transverse_strain,
                r.current.engineering_stress_mpa,
                r.current.true_stress_mpa
            ));
            context.push_str(
                "Explain why a bar in tension contracts sideways (at the microscopic level) and \
                 why true stress rises well above engineering stress at large strains.\n",
            );
        }
        DerivedResult::Axial(r) => {
            let a = &params.axial;
            context.push_str(&format!(
                "Load case: force F = {} N, area A = {} mm², length L = {} m.\n",
                a.force_n, a.area_mm2, a.length_m
            ));
            context.push_str(&format!(
                "Computed: stress {:.1} MPa, strain {:.6}, elongation {:.3} mm, state {}.\n",
                r.stress_mpa, r.strain, r.elongation_mm, r.state
            ));
            context.push_str(
                "Focus on whether plastic deformation occurred \
                 (stress above the yield strength).\n",
            );
            if r.state != AxialState::Elastic || r.yield_utilization() >= WARNING_RATIO {
                context.push_str(&format!(
                    "WARNING CONDITION: stress is {:.0}% of the yield strength.\n",
                    r.yield_utilization() * 100.0
                ));
            }
        }
        DerivedResult::Bending(r) => {
            let b = &params.bending;
            context.push_str(&format!(
                "Load case: load P = {} N, span L = {} m, section width b = {} mm, \
                 height h = {} mm.\n",
                b.load_n, b.span_m, b.width_mm, b.height_mm
            ));
            context.push_str(&format!(
                "Computed: I = {:.0} mm⁴, M_max = {:.1} N·m, deflection {:.4} mm, \
                 bending stress {:.2} MPa.\n",
                r.moment_of_inertia_mm4, r.max_moment_nm, r.max_deflection_mm, r.max_stress_mpa
            ));
            push_yield_warning(&mut context, r.max_stress_mpa.abs(), material.yield_strength_mpa);
        }
        DerivedResult::Torsion(r) => {
            let t = &params.torsion;
            context.push_str(&format!(
                "Load case: torque T = {} N·m, radius r = {} mm, length L = {} m.\n",
                t.torque_nm, t.radius_mm, t.length_m
            ));
            context.push_str(&format!(
                "Computed: I_p = {:.0} mm⁴, max shear stress {:.2} MPa, twist {:.3}°.\n",
                r.polar_moment_mm4, r.max_shear_stress_mpa, r.twist_angle_deg
            ));
        }
        DerivedResult::Buckling(r) => {
            let b = &params.buckling;
            context.push_str(&format!(
                "Load case: compressive load P = {} N, length L = {} m, section width b = {} mm, \
                 height h = {} mm.\n",
                b.load_n, b.length_m, b.width_mm, b.height_mm
            ));
            context.push_str(&format!(
                "Computed: I_min = {:.0} mm⁴, radius of gyration {:.2} mm, slenderness {:.1}, \
                 P_cr = {:.0} N, state {}.\n",
                r.min_inertia_mm4,
                r.radius_of_gyration_mm,
                r.slenderness_ratio,
                r.critical_load_n,
                r.state
            ));
            if r.state == ColumnState::Buckled || r.load_ratio >= WARNING_RATIO {
                context.push_str(&format!(
                    "WARNING CONDITION: load is {:.0}% of the critical load.\n",
                    r.load_ratio * 100.0
                ));
            }
        }
        DerivedResult::Stress(r) => {
            let s = &params.stress;
            context.push_str(&format!(
                "3-D stress tensor: σx = {} MPa, σy = {} MPa, σz = {} MPa, τxy = {} MPa, \
                 τyz = {} MPa, τzx = {} MPa; in-plane rotation θ = {}°.\n",
                s.sigma_x_mpa,
                s.sigma_y_mpa,
                s.sigma_z_mpa,
                s.tau_xy_mpa,
                s.tau_yz_mpa,
                s.tau_zx_mpa,
                s.angle_deg
            ));
            context.push_str(&format!(
                "Computed: principal stresses {:.2}, {:.2}, {:.2} MPa; absolute max shear \
                 {:.2} MPa; in-plane σ1 = {:.2}, σ2 = {:.2} MPa at θp = {:.1}°.\n",
                r.principal_3d.sigma_1_mpa,
                r.principal_3d.sigma_2_mpa,
                r.principal_3d.sigma_3_mpa,
                r.principal_3d.tau_max_mpa,
                r.plane.sigma_1_mpa,
                r.plane.sigma_2_mpa,
                r.plane.principal_angle_deg
            ));
        }
        DerivedResult::Combined(r) => {
            let c = &params.combined;
            context.push_str(&format!(
                "Load case: axial force F = {} N, eccentricity e = {} mm, section {} x {} mm.\n",
                c.force_n, c.eccentricity_mm, c.width_mm, c.height_mm
            ));
            context.push_str(&format!(
                "Computed: axial stress {:.2} MPa, bending stress {:.2} MPa, top fibre {:.2} MPa, \
                 bottom fibre {:.2} MPa, kern limit h/6 = {:.2} mm.\n",
                r.axial_stress_mpa,
                r.bending_stress_mpa,
                r.top_stress_mpa,
                r.bottom_stress_mpa,
                r.kern_limit_mm
            ));
            context.push_str(
                "Analyse the maximum and minimum stress on the section and compare them with \
                 the yield strength.\n",
            );
            if r.has_stress_reversal() {
                context
                    .push_str("Note: the extreme fibres have opposite signs (stress reversal).\n");
            }
            push_yield_warning(&mut context, r.peak_stress_mpa(), material.yield_strength_mpa);
        }
    }

    format!(
        "You are a witty but rigorous professor of mechanics of materials. A student is \
         running this virtual experiment:\n\
         \n\
         {context}\n\
         Based on the current values:\n\
         1. Explain the physical phenomenon taking place.\n\
         2. If the stress is near or above the yield strength, or the load near or above the \
         critical load, give a serious warning and suggest improvements.\n\
         3. Using geometric properties such as the moment of inertia or radius of gyration, \
         give an intuitive physical picture or an everyday example.\n\
         \n\
         Answer in Markdown (bold, lists), clearly structured, in at most {max_words} words.",
        context = context,
        max_words = MAX_WORDS
    )
}

fn push_yield_warning(context: &mut String, stress_mpa: f64, yield_mpa: f64) {
    let ratio = stress_mpa / yield_mpa;
    if ratio >= WARNING_RATIO {
        context.push_str(&format!(
            "WARNING CONDITION: peak stress is {:.0}% of the yield strength.\n",
            ratio * 100.0
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::ModuleKind;
    use serde_json::json;

    struct Canned(Result<String, ()>);

    impl Narrator for Canned {
        fn narrate(&self, _prompt: &str) -> Result<String, NarrationError> {
            self.0.clone().map_err(|_| NarrationError::EmptyResponse)
        }
    }

    #[test]
    fn test_prompt_contains_context() {
        let params = SimulationParameters::default();
        let result = params.evaluate(ModuleKind::Bending).unwrap();
        let prompt = build_prompt(&params, &result);

        assert!(prompt.contains("Beam Bending"));
        assert!(prompt.contains("Structural Steel"));
        assert!(prompt.contains("P = 2000 N"));
        assert!(prompt.contains("M_max = 1000.0 N·m"));
        assert!(prompt.contains("at most 300 words"));
        assert!(!prompt.contains("WARNING CONDITION"));
    }

    #[test]
    fn test_prompt_warns_when_yielded() {
        let mut params = SimulationParameters::default();
        params.apply_patch(&json!({ "axial": { "force_n": 30_000.0 } })).unwrap();
        let result = params.evaluate(ModuleKind::Axial).unwrap();
        let prompt = build_prompt(&params, &result);
        assert!(prompt.contains("state Plastic"));
        assert!(prompt.contains("WARNING CONDITION: stress is 120% of the yield strength"));
    }

    #[test]
    fn test_prompt_warns_near_critical_load() {
        let mut params = SimulationParameters::default();
        params.apply_patch(&json!({ "buckling": { "load_n": 95_000.0 } })).unwrap();
        let result = params.evaluate(ModuleKind::Buckling).unwrap();
        let prompt = build_prompt(&params, &result);
        assert!(prompt.contains("state Safe"));
        assert!(prompt.contains("WARNING CONDITION: load is"));
    }

    #[test]
    fn test_prompt_for_every_module() {
        let params = SimulationParameters::default();
        for result in params.evaluate_all().unwrap() {
            let prompt = build_prompt(&params, &result);
            assert!(prompt.contains(theory(result.kind()).title));
        }
    }

    #[test]
    fn test_narrator_failure_is_separate_from_physics() {
        let params = SimulationParameters::default();
        let result = params.evaluate(ModuleKind::Combined).unwrap();
        let prompt = build_prompt(&params, &result);

        let err = Canned(Err(())).narrate(&prompt).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_RESPONSE");
        // The physics result is untouched by the failed narration
        assert_eq!(params.evaluate(ModuleKind::Combined).unwrap(), result);

        assert_eq!(Canned(Ok("ok".into())).narrate(&prompt).unwrap(), "ok");
    }
}
