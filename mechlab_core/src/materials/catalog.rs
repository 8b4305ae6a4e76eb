//! Material Catalog
//!
//! Read-only presets for the materials a student is most likely to try.
//! The constants are typical handbook values rounded for teaching; they are
//! not design values.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::MaterialProperties;
use crate::errors::{CalcError, CalcResult};

/// A compile-time catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Stable lookup key (kebab-case)
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Extra accepted spellings
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    /// E (GPa)
    pub elastic_modulus_gpa: f64,
    /// G (GPa)
    pub shear_modulus_gpa: f64,
    /// σ_y (MPa)
    pub yield_strength_mpa: f64,
    /// ν
    pub poisson_ratio: f64,
}

impl CatalogEntry {
    /// Materialize as an owned property set
    pub fn properties(&self) -> MaterialProperties {
        MaterialProperties {
            name: self.name.to_string(),
            elastic_modulus_gpa: self.elastic_modulus_gpa,
            shear_modulus_gpa: self.shear_modulus_gpa,
            yield_strength_mpa: self.yield_strength_mpa,
            poisson_ratio: self.poisson_ratio,
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.key == normalized || self.aliases.iter().any(|a| *a == normalized)
    }
}

pub const STRUCTURAL_STEEL: CatalogEntry = CatalogEntry {
    key: "structural-steel",
    name: "Structural Steel",
    aliases: &["steel", "mild-steel"],
    elastic_modulus_gpa: 200.0,
    shear_modulus_gpa: 77.0,
    yield_strength_mpa: 250.0,
    poisson_ratio: 0.3,
};

pub const HIGH_STRENGTH_STEEL: CatalogEntry = CatalogEntry {
    key: "high-strength-steel",
    name: "High Strength Steel",
    aliases: &["hss"],
    elastic_modulus_gpa: 210.0,
    shear_modulus_gpa: 80.0,
    yield_strength_mpa: 700.0,
    poisson_ratio: 0.3,
};

pub const ALUMINUM_6061: CatalogEntry = CatalogEntry {
    key: "aluminum-6061",
    name: "Aluminum 6061",
    aliases: &["aluminum", "aluminium", "aluminium-6061", "al-6061"],
    elastic_modulus_gpa: 70.0,
    shear_modulus_gpa: 26.0,
    yield_strength_mpa: 276.0,
    poisson_ratio: 0.33,
};

pub const TITANIUM: CatalogEntry = CatalogEntry {
    key: "titanium",
    name: "Titanium",
    aliases: &["ti"],
    elastic_modulus_gpa: 110.0,
    shear_modulus_gpa: 42.0,
    yield_strength_mpa: 830.0,
    poisson_ratio: 0.34,
};

pub const BRASS: CatalogEntry = CatalogEntry {
    key: "brass",
    name: "Brass",
    aliases: &[],
    elastic_modulus_gpa: 100.0,
    shear_modulus_gpa: 39.0,
    yield_strength_mpa: 200.0,
    poisson_ratio: 0.34,
};

pub const CONCRETE_C30: CatalogEntry = CatalogEntry {
    key: "concrete-c30",
    name: "Concrete C30",
    aliases: &["concrete", "c30"],
    elastic_modulus_gpa: 30.0,
    shear_modulus_gpa: 12.5,
    yield_strength_mpa: 30.0,
    poisson_ratio: 0.2,
};

pub const TIMBER_OAK: CatalogEntry = CatalogEntry {
    key: "timber-oak",
    name: "Timber (Oak)",
    aliases: &["timber", "oak", "wood"],
    elastic_modulus_gpa: 12.0,
    shear_modulus_gpa: 0.8,
    yield_strength_mpa: 40.0,
    poisson_ratio: 0.35,
};

pub const GLASS: CatalogEntry = CatalogEntry {
    key: "glass",
    name: "Glass",
    aliases: &[],
    elastic_modulus_gpa: 70.0,
    shear_modulus_gpa: 28.0,
    yield_strength_mpa: 50.0,
    poisson_ratio: 0.22,
};

pub const RUBBER_ISOPRENE: CatalogEntry = CatalogEntry {
    key: "rubber-isoprene",
    name: "Rubber (Isoprene)",
    aliases: &["rubber", "isoprene"],
    elastic_modulus_gpa: 0.01,
    shear_modulus_gpa: 0.003,
    yield_strength_mpa: 15.0,
    poisson_ratio: 0.49,
};

/// All catalog rows in display order
pub const ENTRIES: [CatalogEntry; 9] = [
    STRUCTURAL_STEEL,
    HIGH_STRENGTH_STEEL,
    ALUMINUM_6061,
    TITANIUM,
    BRASS,
    CONCRETE_C30,
    TIMBER_OAK,
    GLASS,
    RUBBER_ISOPRENE,
];

static CATALOG: Lazy<Vec<MaterialProperties>> =
    Lazy::new(|| ENTRIES.iter().map(CatalogEntry::properties).collect());

/// All catalog materials in display order
pub fn all() -> &'static [MaterialProperties] {
    &CATALOG
}

/// Look up a material by key, display name or alias.
///
/// Matching ignores case, and any run of spaces, underscores or punctuation
/// counts as a single hyphen, so "Timber (Oak)", "timber_oak" and "oak" all
/// resolve to the same row.
///
/// # Example
///
/// ```rust
/// use mechlab_core::materials::catalog;
///
/// let al = catalog::lookup("Aluminium").unwrap();
/// assert_eq!(al.name, "Aluminum 6061");
/// assert!(catalog::lookup("unobtainium").is_err());
/// ```
pub fn lookup(name: &str) -> CalcResult<&'static MaterialProperties> {
    let normalized = normalize(name);
    ENTRIES
        .iter()
        .position(|entry| entry.matches(&normalized))
        .map(|idx| &CATALOG[idx])
        .ok_or_else(|| CalcError::material_not_found(name))
}

/// Find the preset that a free-form entry corresponds to, if any.
///
/// A preset matches when E or G is within 1 GPa of it and the yield strength
/// is within 5 MPa. Used to label hand-edited parameter sets.
pub fn identify(
    elastic_modulus_gpa: f64,
    shear_modulus_gpa: f64,
    yield_strength_mpa: f64,
) -> Option<&'static MaterialProperties> {
    CATALOG.iter().find(|m| {
        let moduli_match = (m.elastic_modulus_gpa - elastic_modulus_gpa).abs() < 1.0
            || (m.shear_modulus_gpa - shear_modulus_gpa).abs() < 1.0;
        moduli_match && (m.yield_strength_mpa - yield_strength_mpa).abs() < 5.0
    })
}

fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_valid() {
        assert_eq!(all().len(), 9);
        for mat in all() {
            assert!(mat.validate().is_ok(), "{} should validate", mat.name);
        }
    }

    #[test]
    fn test_names_normalize_to_keys() {
        for entry in ENTRIES.iter() {
            assert_eq!(normalize(entry.name), entry.key);
        }
    }

    #[test]
    fn test_lookup_flexible() {
        assert_eq!(lookup("Structural Steel").unwrap().elastic_modulus_gpa, 200.0);
        assert_eq!(lookup("structural_steel").unwrap().shear_modulus_gpa, 77.0);
        assert_eq!(lookup("  TIMBER (OAK) ").unwrap().yield_strength_mpa, 40.0);
        assert_eq!(lookup("rubber").unwrap().poisson_ratio, 0.49);
        assert_eq!(lookup("c30").unwrap().name, "Concrete C30");
    }

    #[test]
    fn test_lookup_missing() {
        let err = lookup("Vibranium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_identify() {
        assert_eq!(identify(200.4, 0.0, 252.0).map(|m| m.name.as_str()), Some("Structural Steel"));
        assert_eq!(identify(0.0, 26.5, 276.0).map(|m| m.name.as_str()), Some("Aluminum 6061"));
        // Right modulus, wrong strength
        assert!(identify(200.0, 77.0, 400.0).is_none());
    }
}
