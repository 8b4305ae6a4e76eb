//! # Mechanics Models
//!
//! One submodule per loading mode. Each follows the pattern:
//!
//! - `*Input` - the narrow set of parameters the model reads (JSON-serializable)
//! - `*Result` - computed scalars plus a classification where applicable
//! - `calculate(input) -> Result<*Result, CalcError>` - pure, deterministic
//!
//! ## Available Models
//!
//! - [`fundamentals`] - Poisson effect and engineering/true stress curve
//! - [`axial`] - Axial bar with Elastic / Plastic / Fractured response
//! - [`bending`] - Simply-supported beam, midspan point load
//! - [`torsion`] - Solid circular shaft
//! - [`buckling`] - Euler column, pinned-pinned
//! - [`stress`] - Plane-stress transformation and 3-D principal stresses
//! - [`combined`] - Eccentric axial load

pub mod axial;
pub mod bending;
pub mod buckling;
pub mod combined;
pub mod fundamentals;
pub mod stress;
pub mod torsion;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// Re-export commonly used types
pub use axial::{AxialInput, AxialResult, AxialState};
pub use bending::{BendingInput, BendingResult};
pub use buckling::{BucklingInput, BucklingResult, ColumnState};
pub use combined::{CombinedInput, CombinedResult};
pub use fundamentals::{FundamentalsResult, PoissonInput};
pub use stress::{PlaneStressInput, StressStateResult, StressTensor3};
pub use torsion::{TorsionInput, TorsionResult};

/// The seven loading modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Fundamentals,
    Axial,
    Bending,
    Torsion,
    Buckling,
    Stress,
    Combined,
}

impl ModuleKind {
    /// All modules, in presentation order
    pub const ALL: [ModuleKind; 7] = [
        ModuleKind::Fundamentals,
        ModuleKind::Axial,
        ModuleKind::Bending,
        ModuleKind::Torsion,
        ModuleKind::Buckling,
        ModuleKind::Stress,
        ModuleKind::Combined,
    ];

    /// Short machine key, as used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ModuleKind::Fundamentals => "fundamentals",
            ModuleKind::Axial => "axial",
            ModuleKind::Bending => "bending",
            ModuleKind::Torsion => "torsion",
            ModuleKind::Buckling => "buckling",
            ModuleKind::Stress => "stress",
            ModuleKind::Combined => "combined",
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleKind::Fundamentals => "Stress-Strain Fundamentals",
            ModuleKind::Axial => "Axial Loading",
            ModuleKind::Bending => "Beam Bending",
            ModuleKind::Torsion => "Shaft Torsion",
            ModuleKind::Buckling => "Column Buckling",
            ModuleKind::Stress => "Stress Transformation",
            ModuleKind::Combined => "Combined Loading",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ModuleKind {
    type Err = CalcError;

    /// Accepts the key, a few common aliases, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        let kind = match normalized.as_str() {
            "fundamentals" | "basics" | "poisson" => ModuleKind::Fundamentals,
            "axial" | "tension" => ModuleKind::Axial,
            "bending" | "beam" => ModuleKind::Bending,
            "torsion" | "shaft" => ModuleKind::Torsion,
            "buckling" | "column" => ModuleKind::Buckling,
            "stress" | "mohr" | "stresstransformation" => ModuleKind::Stress,
            "combined" | "eccentric" | "combinedloading" => ModuleKind::Combined,
            _ => return Err(CalcError::unknown_module(s)),
        };
        Ok(kind)
    }
}

/// A computed result from any model.
///
/// Tagged by `"module"` so heterogeneous results serialize into one flat
/// JSON object each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum DerivedResult {
    Fundamentals(FundamentalsResult),
    Axial(AxialResult),
    Bending(BendingResult),
    Torsion(TorsionResult),
    Buckling(BucklingResult),
    Stress(StressStateResult),
    Combined(CombinedResult),
}

impl DerivedResult {
    /// The module that produced this result
    pub fn kind(&self) -> ModuleKind {
        match self {
            DerivedResult::Fundamentals(_) => ModuleKind::Fundamentals,
            DerivedResult::Axial(_) => ModuleKind::Axial,
            DerivedResult::Bending(_) => ModuleKind::Bending,
            DerivedResult::Torsion(_) => ModuleKind::Torsion,
            DerivedResult::Buckling(_) => ModuleKind::Buckling,
            DerivedResult::Stress(_) => ModuleKind::Stress,
            DerivedResult::Combined(_) => ModuleKind::Combined,
        }
    }

    /// Short status line for alerts. `None` when the module has nothing to flag.
    pub fn alert(&self) -> Option<String> {
        match self {
            DerivedResult::Axial(r) => match r.state {
                AxialState::Elastic => None,
                AxialState::Plastic => Some(format!(
                    "Yielded: σ = {:.1} MPa exceeds σ_y, permanent deformation",
                    r.stress_mpa
                )),
                AxialState::Fractured => Some(format!(
                    "Fractured: σ = {:.1} MPa exceeds the ultimate strength",
                    r.stress_mpa
                )),
            },
            DerivedResult::Buckling(r) if !r.passes() => Some(format!(
                "Buckled: P exceeds P_cr = {:.0} N (ratio {:.2})",
                r.critical_load_n, r.load_ratio
            )),
            DerivedResult::Combined(r) if r.has_stress_reversal() => Some(format!(
                "Stress reversal: extreme fibres at {:.2} and {:.2} MPa \
                 (e beyond kern h/6 = {:.2} mm)",
                r.top_stress_mpa, r.bottom_stress_mpa, r.kern_limit_mm
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_keys_roundtrip() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.key().parse::<ModuleKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }

    #[test]
    fn test_module_parse_flexible() {
        assert_eq!("Beam".parse::<ModuleKind>().unwrap(), ModuleKind::Bending);
        assert_eq!(" Stress_Transformation ".parse::<ModuleKind>().unwrap(), ModuleKind::Stress);
        assert_eq!("combined-loading".parse::<ModuleKind>().unwrap(), ModuleKind::Combined);

        let err = "fatigue".parse::<ModuleKind>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_MODULE");
    }

    #[test]
    fn test_derived_result_tagged_by_module() {
        let result = combined::calculate(&CombinedInput {
            force_n: 10_000.0,
            eccentricity_mm: 20.0,
            width_mm: 50.0,
            height_mm: 100.0,
        })
        .unwrap();
        let derived = DerivedResult::Combined(result);
        let json = serde_json::to_value(&derived).unwrap();
        assert_eq!(json["module"], "combined");
        assert_eq!(json["area_mm2"], 5000.0);
        assert_eq!(derived.kind(), ModuleKind::Combined);
        assert!(derived.alert().is_some());
    }

    #[test]
    fn test_no_alert_for_safe_column() {
        let result = buckling::calculate(&BucklingInput {
            load_n: 1000.0,
            length_m: 2.0,
            width_mm: 40.0,
            height_mm: 40.0,
            elastic_modulus_gpa: 200.0,
        })
        .unwrap();
        assert!(DerivedResult::Buckling(result).alert().is_none());
    }
}
