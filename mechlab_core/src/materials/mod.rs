//! # Materials
//!
//! Isotropic material constants shared by every loading mode, plus a static
//! catalog of common engineering materials.
//!
//! A [`MaterialProperties`] value is immutable once built. It comes either from
//! the [`catalog`] or from a free-form entry via [`MaterialProperties::custom`],
//! which validates the constants.
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::materials::{catalog, MaterialProperties};
//!
//! let steel = catalog::lookup("structural steel").unwrap();
//! assert_eq!(steel.elastic_modulus_gpa, 200.0);
//!
//! let custom = MaterialProperties::custom("Lab Alloy", 95.0, 36.0, 310.0, 0.31).unwrap();
//! assert_eq!(custom.e_mpa().0, 95_000.0);
//! ```

pub mod catalog;

pub use catalog::CatalogEntry;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::units::{GigaPascals, MegaPascals};

/// Elastic and strength constants of an isotropic material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Structural Steel",
///   "elastic_modulus_gpa": 200.0,
///   "shear_modulus_gpa": 77.0,
///   "yield_strength_mpa": 250.0,
///   "poisson_ratio": 0.3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Display name
    pub name: String,

    /// Young's modulus E (GPa)
    pub elastic_modulus_gpa: f64,

    /// Shear modulus G (GPa)
    pub shear_modulus_gpa: f64,

    /// Yield strength σ_y (MPa)
    pub yield_strength_mpa: f64,

    /// Poisson ratio ν, in [0, 0.5)
    pub poisson_ratio: f64,
}

impl MaterialProperties {
    /// Build and validate a free-form material entry.
    pub fn custom(
        name: impl Into<String>,
        elastic_modulus_gpa: f64,
        shear_modulus_gpa: f64,
        yield_strength_mpa: f64,
        poisson_ratio: f64,
    ) -> CalcResult<Self> {
        let props = MaterialProperties {
            name: name.into(),
            elastic_modulus_gpa,
            shear_modulus_gpa,
            yield_strength_mpa,
            poisson_ratio,
        };
        props.validate()?;
        Ok(props)
    }

    /// Validate the constants: moduli and yield strength positive, ν in [0, 0.5).
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("material.elastic_modulus_gpa", self.elastic_modulus_gpa)?;
        require_positive("material.shear_modulus_gpa", self.shear_modulus_gpa)?;
        require_positive("material.yield_strength_mpa", self.yield_strength_mpa)?;
        require_finite("material.poisson_ratio", self.poisson_ratio)?;
        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(CalcError::invalid_parameter(
                "material.poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson ratio must be in [0, 0.5)",
            ));
        }
        Ok(())
    }

    /// Young's modulus as a typed unit
    pub fn elastic_modulus(&self) -> GigaPascals {
        GigaPascals(self.elastic_modulus_gpa)
    }

    /// Shear modulus as a typed unit
    pub fn shear_modulus(&self) -> GigaPascals {
        GigaPascals(self.shear_modulus_gpa)
    }

    /// Young's modulus in MPa
    pub fn e_mpa(&self) -> MegaPascals {
        self.elastic_modulus().into()
    }

    /// Yield strength as a typed unit
    pub fn yield_strength(&self) -> MegaPascals {
        MegaPascals(self.yield_strength_mpa)
    }

    /// One-line summary, e.g. "Structural Steel (E=200 GPa, G=77 GPa, σ_y=250 MPa, ν=0.3)"
    pub fn summary(&self) -> String {
        format!(
            "{} (E={} GPa, G={} GPa, σ_y={} MPa, ν={})",
            self.name,
            self.elastic_modulus_gpa,
            self.shear_modulus_gpa,
            self.yield_strength_mpa,
            self.poisson_ratio
        )
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        catalog::STRUCTURAL_STEEL.properties()
    }
}

impl std::fmt::Display for MaterialProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_structural_steel() {
        let mat = MaterialProperties::default();
        assert_eq!(mat.name, "Structural Steel");
        assert_eq!(mat.yield_strength_mpa, 250.0);
        assert!(mat.validate().is_ok());
    }

    #[test]
    fn test_custom_validation() {
        assert!(MaterialProperties::custom("ok", 100.0, 40.0, 300.0, 0.0).is_ok());

        let err = MaterialProperties::custom("bad nu", 100.0, 40.0, 300.0, 0.5).unwrap_err();
        assert_eq!(err.field(), Some("material.poisson_ratio"));

        let err = MaterialProperties::custom("bad E", -1.0, 40.0, 300.0, 0.3).unwrap_err();
        assert_eq!(err.field(), Some("material.elastic_modulus_gpa"));

        assert!(MaterialProperties::custom("bad G", 100.0, 0.0, 300.0, 0.3).is_err());
        assert!(MaterialProperties::custom("bad yield", 100.0, 40.0, 0.0, 0.3).is_err());
        assert!(MaterialProperties::custom("neg nu", 100.0, 40.0, 300.0, -0.1).is_err());
    }

    #[test]
    fn test_unit_accessors() {
        let mat = MaterialProperties::default();
        assert_eq!(mat.e_mpa().0, 200_000.0);
        assert_eq!(mat.shear_modulus().0, 77.0);
        assert_eq!(mat.yield_strength().0, 250.0);
    }

    #[test]
    fn test_serialization() {
        let mat = MaterialProperties::default();
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("\"elastic_modulus_gpa\":200.0"));
        let parsed: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }
}
