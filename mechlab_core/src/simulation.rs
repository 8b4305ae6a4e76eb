//! # Simulation Parameters
//!
//! The single record a front end owns: the active material plus one
//! parameter group per loading mode. Each model reads only its own group
//! (and the material constants it needs) through the `*_input()` builders.
//!
//! ## Structure
//!
//! ```text
//! SimulationParameters
//! ├── material: MaterialProperties (embedded by value)
//! ├── fundamentals / axial / bending / torsion
//! └── buckling / stress / combined
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::calculations::ModuleKind;
//! use mechlab_core::simulation::SimulationParameters;
//! use serde_json::json;
//!
//! let mut params = SimulationParameters::default();
//! params.apply_patch(&json!({ "axial": { "force_n": 30_000.0 } })).unwrap();
//!
//! let result = params.evaluate(ModuleKind::Axial).unwrap();
//! assert!(result.alert().is_some()); // 300 MPa > 250 MPa yield
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::calculations::{
    axial, bending, buckling, combined, fundamentals, stress, torsion, AxialInput, BendingInput,
    BucklingInput, CombinedInput, DerivedResult, ModuleKind, PlaneStressInput, PoissonInput,
    StressTensor3, TorsionInput,
};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::materials::{catalog, MaterialProperties};
use crate::units::Degrees;

/// Fundamentals module: the strain level being inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FundamentalsParams {
    /// Axial (engineering) strain, 0 to 0.5 on the chart
    pub strain_level: f64,
}

impl Default for FundamentalsParams {
    fn default() -> Self {
        FundamentalsParams { strain_level: 0.1 }
    }
}

/// Axial module: bar under a tensile force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxialParams {
    pub force_n: f64,
    pub area_mm2: f64,
    pub length_m: f64,
}

impl Default for AxialParams {
    fn default() -> Self {
        AxialParams {
            force_n: 5000.0,
            area_mm2: 100.0,
            length_m: 1.0,
        }
    }
}

/// Bending module: simply-supported beam with a midspan load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BendingParams {
    pub load_n: f64,
    pub span_m: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for BendingParams {
    fn default() -> Self {
        BendingParams {
            load_n: 2000.0,
            span_m: 2.0,
            width_mm: 100.0,
            height_mm: 150.0,
        }
    }
}

/// Torsion module: solid circular shaft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TorsionParams {
    pub torque_nm: f64,
    pub radius_mm: f64,
    pub length_m: f64,
}

impl Default for TorsionParams {
    fn default() -> Self {
        TorsionParams {
            torque_nm: 500.0,
            radius_mm: 20.0,
            length_m: 1.0,
        }
    }
}

/// Buckling module: pinned-pinned rectangular column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BucklingParams {
    pub load_n: f64,
    pub length_m: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for BucklingParams {
    fn default() -> Self {
        BucklingParams {
            load_n: 1000.0,
            length_m: 2.0,
            width_mm: 40.0,
            height_mm: 40.0,
        }
    }
}

/// Stress module: full stress tensor plus the in-plane rotation angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StressParams {
    pub sigma_x_mpa: f64,
    pub sigma_y_mpa: f64,
    pub sigma_z_mpa: f64,
    pub tau_xy_mpa: f64,
    pub tau_yz_mpa: f64,
    pub tau_zx_mpa: f64,
    /// Rotation θ (degrees), kept in [0, 360)
    pub angle_deg: f64,
}

impl Default for StressParams {
    fn default() -> Self {
        StressParams {
            sigma_x_mpa: 50.0,
            sigma_y_mpa: 20.0,
            sigma_z_mpa: 10.0,
            tau_xy_mpa: 30.0,
            tau_yz_mpa: 0.0,
            tau_zx_mpa: 0.0,
            angle_deg: 0.0,
        }
    }
}

/// Combined module: eccentrically loaded member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CombinedParams {
    pub force_n: f64,
    pub eccentricity_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Member length (m). Drawn and reported, not used in the stresses
    pub length_m: f64,
}

impl Default for CombinedParams {
    fn default() -> Self {
        CombinedParams {
            force_n: 10_000.0,
            eccentricity_mm: 20.0,
            width_mm: 50.0,
            height_mm: 100.0,
            length_m: 1.0,
        }
    }
}

/// Every physical input of every module plus the active material.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {
    pub material: MaterialProperties,
    pub fundamentals: FundamentalsParams,
    pub axial: AxialParams,
    pub bending: BendingParams,
    pub torsion: TorsionParams,
    pub buckling: BucklingParams,
    pub stress: StressParams,
    pub combined: CombinedParams,
}

impl SimulationParameters {
    /// Check every group. Model inputs are validated by the models' own rules.
    pub fn validate(&self) -> CalcResult<()> {
        self.material.validate()?;

        require_finite("fundamentals.strain_level", self.fundamentals.strain_level)?;
        if self.fundamentals.strain_level < 0.0 {
            return Err(CalcError::invalid_parameter(
                "fundamentals.strain_level",
                self.fundamentals.strain_level.to_string(),
                "Strain level must be non-negative",
            ));
        }

        self.axial_input().validate().map_err(|e| prefixed("axial", e))?;
        self.bending_input().validate().map_err(|e| prefixed("bending", e))?;
        self.torsion_input().validate().map_err(|e| prefixed("torsion", e))?;
        self.buckling_input().validate().map_err(|e| prefixed("buckling", e))?;
        self.stress_tensor().validate().map_err(|e| prefixed("stress", e))?;
        require_finite("stress.angle_deg", self.stress.angle_deg)?;
        self.combined_input().validate().map_err(|e| prefixed("combined", e))?;
        require_positive("combined.length_m", self.combined.length_m)?;
        Ok(())
    }

    /// Deep-merge a JSON object into the record.
    ///
    /// Nested objects merge key by key; any other value replaces the target.
    /// The merged record is re-validated and the rotation angle wrapped into
    /// [0, 360) before it replaces `self`. On error `self` is left untouched.
    pub fn apply_patch(&mut self, patch: &Value) -> CalcResult<()> {
        if !patch.is_object() {
            return Err(CalcError::serialization("Parameter patch must be a JSON object"));
        }

        let mut merged = serde_json::to_value(&*self)?;
        merge_json(&mut merged, patch);

        let mut candidate: SimulationParameters = serde_json::from_value(merged)?;
        candidate.stress.angle_deg = Degrees(candidate.stress.angle_deg).normalized().0;
        candidate.validate()?;

        log::debug!("applied parameter patch: {}", patch);
        *self = candidate;
        Ok(())
    }

    /// Replace the embedded material with a catalog preset.
    pub fn select_material(&mut self, name: &str) -> CalcResult<()> {
        let material = catalog::lookup(name)?;
        log::debug!("selected material {}", material.name);
        self.material = material.clone();
        Ok(())
    }

    /// Catalog preset whose constants match the embedded material, if any
    pub fn matched_catalog_material(&self) -> Option<&'static MaterialProperties> {
        catalog::identify(
            self.material.elastic_modulus_gpa,
            self.material.shear_modulus_gpa,
            self.material.yield_strength_mpa,
        )
    }

    pub fn poisson_input(&self) -> PoissonInput {
        PoissonInput {
            axial_strain: self.fundamentals.strain_level,
            poisson_ratio: self.material.poisson_ratio,
        }
    }

    pub fn axial_input(&self) -> AxialInput {
        AxialInput {
            force_n: self.axial.force_n,
            area_mm2: self.axial.area_mm2,
            length_m: self.axial.length_m,
            elastic_modulus_gpa: self.material.elastic_modulus_gpa,
            yield_strength_mpa: self.material.yield_strength_mpa,
        }
    }

    pub fn bending_input(&self) -> BendingInput {
        BendingInput {
            load_n: self.bending.load_n,
            span_m: self.bending.span_m,
            width_mm: self.bending.width_mm,
            height_mm: self.bending.height_mm,
            elastic_modulus_gpa: self.material.elastic_modulus_gpa,
        }
    }

    pub fn torsion_input(&self) -> TorsionInput {
        TorsionInput {
            torque_nm: self.torsion.torque_nm,
            radius_mm: self.torsion.radius_mm,
            length_m: self.torsion.length_m,
            shear_modulus_gpa: self.material.shear_modulus_gpa,
        }
    }

    pub fn buckling_input(&self) -> BucklingInput {
        BucklingInput {
            load_n: self.buckling.load_n,
            length_m: self.buckling.length_m,
            width_mm: self.buckling.width_mm,
            height_mm: self.buckling.height_mm,
            elastic_modulus_gpa: self.material.elastic_modulus_gpa,
        }
    }

    pub fn plane_stress_input(&self) -> PlaneStressInput {
        PlaneStressInput {
            sigma_x_mpa: self.stress.sigma_x_mpa,
            sigma_y_mpa: self.stress.sigma_y_mpa,
            tau_xy_mpa: self.stress.tau_xy_mpa,
            angle_deg: self.stress.angle_deg,
        }
    }

    pub fn stress_tensor(&self) -> StressTensor3 {
        StressTensor3 {
            sigma_x_mpa: self.stress.sigma_x_mpa,
            sigma_y_mpa: self.stress.sigma_y_mpa,
            sigma_z_mpa: self.stress.sigma_z_mpa,
            tau_xy_mpa: self.stress.tau_xy_mpa,
            tau_yz_mpa: self.stress.tau_yz_mpa,
            tau_zx_mpa: self.stress.tau_zx_mpa,
        }
    }

    pub fn combined_input(&self) -> CombinedInput {
        CombinedInput {
            force_n: self.combined.force_n,
            eccentricity_mm: self.combined.eccentricity_mm,
            width_mm: self.combined.width_mm,
            height_mm: self.combined.height_mm,
        }
    }

    /// Run one model against the current parameters.
    pub fn evaluate(&self, kind: ModuleKind) -> CalcResult<DerivedResult> {
        self.material.validate()?;
        let result = match kind {
            ModuleKind::Fundamentals => {
                DerivedResult::Fundamentals(fundamentals::calculate(&self.poisson_input())?)
            }
            ModuleKind::Axial => DerivedResult::Axial(axial::calculate(&self.axial_input())?),
            ModuleKind::Bending => {
                DerivedResult::Bending(bending::calculate(&self.bending_input())?)
            }
            ModuleKind::Torsion => {
                DerivedResult::Torsion(torsion::calculate(&self.torsion_input())?)
            }
            ModuleKind::Buckling => {
                DerivedResult::Buckling(buckling::calculate(&self.buckling_input())?)
            }
            ModuleKind::Stress => DerivedResult::Stress(stress::calculate(
                &self.plane_stress_input(),
                &self.stress_tensor(),
            )?),
            ModuleKind::Combined => {
                DerivedResult::Combined(combined::calculate(&self.combined_input())?)
            }
        };
        Ok(result)
    }

    /// Run every model, in [`ModuleKind::ALL`] order. Stops at the first error.
    pub fn evaluate_all(&self) -> CalcResult<Vec<DerivedResult>> {
        ModuleKind::ALL.iter().map(|&kind| self.evaluate(kind)).collect()
    }
}

/// Build a nested patch from a dotted assignment such as `bending.load_n=3500`.
///
/// The value is read as JSON when it parses (numbers, booleans, quoted
/// strings) and as a bare string otherwise.
pub fn patch_from_assignment(assignment: &str) -> CalcResult<Value> {
    let (path, raw) = assignment.split_once('=').ok_or_else(|| {
        CalcError::serialization(format!("Expected path=value, got '{}'", assignment))
    })?;

    let path = path.trim();
    if path.is_empty() || path.split('.').any(|segment| segment.is_empty()) {
        return Err(CalcError::serialization(format!("Invalid parameter path '{}'", path)));
    }

    let raw = raw.trim();
    let mut value =
        serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    for segment in path.rsplit('.') {
        let mut object = Map::new();
        object.insert(segment.to_string(), value);
        value = Value::Object(object);
    }
    Ok(value)
}

fn merge_json(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// Qualify a model-level field name with its parameter group.
fn prefixed(group: &str, err: CalcError) -> CalcError {
    match err {
        CalcError::InvalidParameter { field, value, reason } => {
            CalcError::invalid_parameter(format!("{}.{}", group, field), value, reason)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{AxialState, ColumnState};
    use serde_json::json;

    #[test]
    fn test_defaults_are_valid() {
        let params = SimulationParameters::default();
        params.validate().unwrap();
        assert_eq!(params.material.name, "Structural Steel");
        assert_eq!(params.stress.sigma_z_mpa, 10.0);
        assert_eq!(params.fundamentals.strain_level, 0.1);
    }

    #[test]
    fn test_evaluate_defaults() {
        let params = SimulationParameters::default();

        match params.evaluate(ModuleKind::Axial).unwrap() {
            DerivedResult::Axial(r) => {
                assert_eq!(r.stress_mpa, 50.0);
                assert_eq!(r.state, AxialState::Elastic);
            }
            other => panic!("unexpected result {:?}", other),
        }

        match params.evaluate(ModuleKind::Buckling).unwrap() {
            DerivedResult::Buckling(r) => assert_eq!(r.state, ColumnState::Safe),
            other => panic!("unexpected result {:?}", other),
        }

        match params.evaluate(ModuleKind::Combined).unwrap() {
            DerivedResult::Combined(r) => assert!(r.has_stress_reversal()),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_all_in_order() {
        let results = SimulationParameters::default().evaluate_all().unwrap();
        let kinds: Vec<ModuleKind> = results.iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, ModuleKind::ALL.to_vec());
    }

    #[test]
    fn test_patch_merges_nested_fields() {
        let mut params = SimulationParameters::default();
        params.apply_patch(&json!({ "bending": { "load_n": 3500 } })).unwrap();
        assert_eq!(params.bending.load_n, 3500.0);
        // Untouched siblings keep their values
        assert_eq!(params.bending.span_m, 2.0);
        assert_eq!(params.axial, AxialParams::default());
    }

    #[test]
    fn test_invalid_patch_leaves_record_unchanged() {
        let mut params = SimulationParameters::default();
        let before = params.clone();

        let err = params.apply_patch(&json!({ "buckling": { "width_mm": -5.0 } })).unwrap_err();
        assert_eq!(err.field(), Some("buckling.width_mm"));
        assert_eq!(params, before);

        let err = params.apply_patch(&json!({ "material": { "poisson_ratio": 0.7 } })).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert_eq!(params, before);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let mut params = SimulationParameters::default();
        let err = params.apply_patch(&json!({ "axial": { "forse_n": 1.0 } })).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(params.apply_patch(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_patch_normalizes_angle() {
        let mut params = SimulationParameters::default();
        params.apply_patch(&json!({ "stress": { "angle_deg": 390.0 } })).unwrap();
        assert!((params.stress.angle_deg - 30.0).abs() < 1e-9);

        params.apply_patch(&json!({ "stress": { "angle_deg": -90.0 } })).unwrap();
        assert!((params.stress.angle_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_material() {
        let mut params = SimulationParameters::default();
        params.select_material("aluminum 6061").unwrap();
        assert_eq!(params.material.elastic_modulus_gpa, 70.0);
        assert_eq!(params.bending_input().elastic_modulus_gpa, 70.0);
        assert_eq!(params.torsion_input().shear_modulus_gpa, 26.0);

        let err = params.select_material("unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(params.material.elastic_modulus_gpa, 70.0);
    }

    #[test]
    fn test_matched_catalog_material() {
        let mut params = SimulationParameters::default();
        let patch = json!({ "material": { "name": "My steel", "yield_strength_mpa": 252.0 } });
        params.apply_patch(&patch).unwrap();
        let matched = params.matched_catalog_material().unwrap();
        assert_eq!(matched.name, "Structural Steel");

        params.apply_patch(&json!({ "material": { "yield_strength_mpa": 400.0 } })).unwrap();
        assert!(params.matched_catalog_material().is_none());
    }

    #[test]
    fn test_patch_from_assignment() {
        let patch = patch_from_assignment("bending.load_n=3500").unwrap();
        assert_eq!(patch, json!({ "bending": { "load_n": 3500 } }));

        let patch = patch_from_assignment("material.name = Mild steel").unwrap();
        assert_eq!(patch, json!({ "material": { "name": "Mild steel" } }));

        assert!(patch_from_assignment("bending.load_n").is_err());
        assert!(patch_from_assignment("bending..load_n=1").is_err());
    }

    #[test]
    fn test_partial_file_deserializes_over_defaults() {
        let params: SimulationParameters =
            serde_json::from_value(json!({ "torsion": { "torque_nm": 900.0 } })).unwrap();
        assert_eq!(params.torsion.torque_nm, 900.0);
        assert_eq!(params.torsion.radius_mm, 20.0);
        assert_eq!(params.bending, BendingParams::default());
    }
}
