//! # Equation Registry
//!
//! Central registry of every formula the models evaluate, plus the theory
//! summary shown alongside each loading mode.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata (LaTeX and plain-text forms, variables, source location)
//! - A [`TheoryEntry`] per [`ModuleKind`] for explanatory panels and prompts
//! - Markdown export for auditing
//!
//! ## Usage
//!
//! ```rust
//! use mechlab_core::calculations::ModuleKind;
//! use mechlab_core::equations::registry::{theory, Equation};
//!
//! let meta = Equation::EulerCriticalLoad.metadata();
//! assert_eq!(meta.module, Some(ModuleKind::Buckling));
//!
//! let panel = theory(ModuleKind::Torsion);
//! assert!(!panel.formulas.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::ModuleKind;

// ============================================================================
// References
// ============================================================================

/// Source a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Mechanics of Materials by R.C. Hibbeler
    Hibbeler { edition: u8, chapter: u8 },
    /// Fundamental mechanics (no specific reference needed)
    Mechanics,
    /// Fixed teaching constants, not a calibrated material law
    Illustrative,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Hibbeler { edition, chapter } => {
                format!("Hibbeler, Mechanics of Materials {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
            CodeReference::Illustrative => "Illustrative teaching model".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in exported documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Section properties (A, I, I_p, i)
    SectionProperties,
    /// Material response (Hooke, hardening, Poisson)
    MaterialResponse,
    /// Internal forces (moment)
    InternalForces,
    /// Stresses
    Stresses,
    /// Deflection, elongation, twist
    Deformations,
    /// Stability (buckling)
    Stability,
    /// Stress transformation and principal values
    Transformation,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::MaterialResponse => "Material Response",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Deformations => "Deformations",
            EquationCategory::Stability => "Stability",
            EquationCategory::Transformation => "Stress Transformation",
        }
    }

    /// Sort order for exported documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionProperties => 1,
            EquationCategory::MaterialResponse => 2,
            EquationCategory::InternalForces => 3,
            EquationCategory::Stresses => 4,
            EquationCategory::Deformations => 5,
            EquationCategory::Stability => 6,
            EquationCategory::Transformation => 7,
        }
    }

    /// All categories in sort order
    pub const ALL: [EquationCategory; 7] = [
        EquationCategory::SectionProperties,
        EquationCategory::MaterialResponse,
        EquationCategory::InternalForces,
        EquationCategory::Stresses,
        EquationCategory::Deformations,
        EquationCategory::Stability,
        EquationCategory::Transformation,
    ];
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M", "L", "σ")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "N·mm", "mm", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX math notation
    pub formula_latex: &'static str,
    /// The formula in plain text for markdown
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Loading mode that uses the formula; `None` for shared section properties
    pub module: Option<ModuleKind>,
    /// Source file where the equation implementation lives
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula evaluated by the mechanics models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Section properties
    RectangularArea,
    RectangularMomentOfInertia,
    WeakAxisMomentOfInertia,
    RadiusOfGyration,
    CircularPolarMoment,

    // Fundamentals
    PoissonTransverseStrain,
    EngineeringStressCurve,
    TrueStress,

    // Axial
    AxialStress,
    HookeStrain,
    PlasticHardeningStrain,
    AxialElongation,

    // Bending
    MidspanPointLoadMoment,
    MidspanPointLoadDeflection,
    FlexuralStress,

    // Torsion
    TorsionShearStress,
    AngleOfTwist,

    // Buckling
    SlendernessRatio,
    EulerCriticalLoad,

    // Stress transformation
    PlaneStressTransformation,
    PrincipalStresses,
    PrincipalPlaneAngle,
    StressInvariants,
    CharacteristicEquation,

    // Combined loading
    EccentricMoment,
    ExtremeFibreStress,
    KernLimit,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        use EquationCategory::*;

        match self {
            // Section properties
            Equation::RectangularArea => EquationMetadata {
                name: "Rectangular Area",
                description: "Cross-sectional area of a solid rectangle",
                formula_latex: r"A = b \cdot h",
                formula_plain: "A = b * h",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Section width", "mm"),
                    Variable::new("h", "Section height", "mm"),
                ],
                assumptions: vec![],
                category: SectionProperties,
                module: None,
                source_module: "equations/section.rs",
                source_function: "rectangular_area",
            },

            Equation::RectangularMomentOfInertia => EquationMetadata {
                name: "Rectangular Moment of Inertia",
                description: "Second moment of area about the centroidal axis parallel to b",
                formula_latex: r"I = \frac{b \cdot h^3}{12}",
                formula_plain: "I = b*h^3/12",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 6 },
                variables: vec![
                    Variable::new("I", "Second moment of area", "mm^4"),
                    Variable::new("b", "Section width", "mm"),
                    Variable::new("h", "Section height (bending depth)", "mm"),
                ],
                assumptions: vec!["Solid rectangular section"],
                category: SectionProperties,
                module: None,
                source_module: "equations/section.rs",
                source_function: "rectangular_moment_of_inertia",
            },

            Equation::WeakAxisMomentOfInertia => EquationMetadata {
                name: "Weak-Axis Moment of Inertia",
                description: "Smaller second moment of area of a rectangle; the smaller side is \
                              the bending depth",
                formula_latex: r"I_{min} = \frac{\max(b,h) \cdot \min(b,h)^3}{12}",
                formula_plain: "I_min = max(b,h)*min(b,h)^3/12",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("I_min", "Weak-axis second moment of area", "mm^4")],
                assumptions: vec!["Solid rectangular section"],
                category: SectionProperties,
                module: Some(ModuleKind::Buckling),
                source_module: "equations/section.rs",
                source_function: "rectangular_weak_axis_inertia",
            },

            Equation::RadiusOfGyration => EquationMetadata {
                name: "Radius of Gyration",
                description: "Distance at which the area could be concentrated to give the same \
                              inertia",
                formula_latex: r"i = \sqrt{\frac{I}{A}}",
                formula_plain: "i = sqrt(I/A)",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 13 },
                variables: vec![
                    Variable::new("i", "Radius of gyration", "mm"),
                    Variable::new("I", "Second moment of area", "mm^4"),
                    Variable::new("A", "Area", "mm^2"),
                ],
                assumptions: vec![],
                category: SectionProperties,
                module: Some(ModuleKind::Buckling),
                source_module: "equations/section.rs",
                source_function: "radius_of_gyration",
            },

            Equation::CircularPolarMoment => EquationMetadata {
                name: "Polar Moment of a Solid Circle",
                description: "Polar second moment of area of a solid circular shaft",
                formula_latex: r"I_p = \frac{\pi \cdot r^4}{2}",
                formula_plain: "I_p = pi*r^4/2",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 5 },
                variables: vec![
                    Variable::new("I_p", "Polar second moment of area", "mm^4"),
                    Variable::new("r", "Shaft radius", "mm"),
                ],
                assumptions: vec!["Solid circular section"],
                category: SectionProperties,
                module: Some(ModuleKind::Torsion),
                source_module: "equations/section.rs",
                source_function: "solid_circle_polar_moment",
            },

            // Fundamentals
            Equation::PoissonTransverseStrain => EquationMetadata {
                name: "Poisson Effect",
                description: "Lateral strain accompanying an axial strain",
                formula_latex: r"\varepsilon_{trans} = -\nu \cdot \varepsilon_{axial}",
                formula_plain: "eps_trans = -nu * eps_axial",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 3 },
                variables: vec![
                    Variable::new("nu", "Poisson ratio", "-"),
                    Variable::new("eps_axial", "Axial strain", "-"),
                ],
                assumptions: vec!["Isotropic, linear-elastic"],
                category: MaterialResponse,
                module: Some(ModuleKind::Fundamentals),
                source_module: "calculations/fundamentals.rs",
                source_function: "poisson_effect",
            },

            Equation::EngineeringStressCurve => EquationMetadata {
                name: "Engineering Stress Curve",
                description: "Piecewise demonstration curve: linear up to e = 0.05, then power-law \
                              hardening",
                formula_latex: r"\sigma_{eng} = \begin{cases} 4000e & e < 0.05 \\ 200 + 300(e-0.05)^{0.4} - 100(e-0.05)^2 & e \ge 0.05 \end{cases}",
                formula_plain: "sigma_eng = 4000e (e < 0.05); 200 + 300(e-0.05)^0.4 - \
                                100(e-0.05)^2 otherwise",
                reference: CodeReference::Illustrative,
                variables: vec![
                    Variable::new("e", "Engineering strain", "-"),
                    Variable::new("sigma_eng", "Engineering stress", "MPa"),
                ],
                assumptions: vec![
                    "Not fitted to any real material",
                    "Continuous at e = 0.05 (200 MPa)",
                ],
                category: MaterialResponse,
                module: Some(ModuleKind::Fundamentals),
                source_module: "calculations/fundamentals.rs",
                source_function: "curve_point",
            },

            Equation::TrueStress => EquationMetadata {
                name: "True Stress",
                description: "Stress on the instantaneous area under constant volume",
                formula_latex: r"\sigma_{true} = \sigma_{eng}(1 + \varepsilon_{eng})",
                formula_plain: "sigma_true = sigma_eng * (1 + e)",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 3 },
                variables: vec![Variable::new("sigma_true", "True stress", "MPa")],
                assumptions: vec!["Constant volume: A0*L0 = A*L"],
                category: MaterialResponse,
                module: Some(ModuleKind::Fundamentals),
                source_module: "calculations/fundamentals.rs",
                source_function: "curve_point",
            },

            // Axial
            Equation::AxialStress => EquationMetadata {
                name: "Axial Stress",
                description: "Average normal stress on the cross-section",
                formula_latex: r"\sigma = \frac{F}{A}",
                formula_plain: "sigma = F/A",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 1 },
                variables: vec![
                    Variable::new("F", "Axial force", "N"),
                    Variable::new("A", "Cross-sectional area", "mm^2"),
                ],
                assumptions: vec!["Load through the centroid", "Prismatic bar"],
                category: Stresses,
                module: Some(ModuleKind::Axial),
                source_module: "calculations/axial.rs",
                source_function: "calculate",
            },

            Equation::HookeStrain => EquationMetadata {
                name: "Hooke's Law",
                description: "Strain in the elastic range",
                formula_latex: r"\varepsilon = \frac{\sigma}{E}",
                formula_plain: "eps = sigma/E",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 3 },
                variables: vec![Variable::new("E", "Young's modulus", "MPa")],
                assumptions: vec!["sigma <= sigma_y"],
                category: MaterialResponse,
                module: Some(ModuleKind::Axial),
                source_module: "calculations/axial.rs",
                source_function: "CurveKeyPoints::response",
            },

            Equation::PlasticHardeningStrain => EquationMetadata {
                name: "Plastic Hardening Strain",
                description: "Quadratic interpolation between yield and ultimate strength",
                formula_latex: r"\varepsilon = \varepsilon_y + (\varepsilon_{UTS} - \varepsilon_y)\left(\frac{\sigma - \sigma_y}{UTS - \sigma_y}\right)^2",
                formula_plain: "eps = eps_y + (eps_UTS - eps_y)*((sigma - sigma_y)/(UTS - \
                                sigma_y))^2",
                reference: CodeReference::Illustrative,
                variables: vec![
                    Variable::new("eps_y", "Yield strain sigma_y/E", "-"),
                    Variable::new("UTS", "Ultimate strength 1.5*sigma_y", "MPa"),
                    Variable::new("eps_UTS", "Strain at UTS, 10*eps_y", "-"),
                ],
                assumptions: vec![
                    "sigma_y < sigma <= UTS",
                    "Beyond UTS the bar is fractured at 15*eps_y",
                ],
                category: MaterialResponse,
                module: Some(ModuleKind::Axial),
                source_module: "calculations/axial.rs",
                source_function: "CurveKeyPoints::response",
            },

            Equation::AxialElongation => EquationMetadata {
                name: "Elongation",
                description: "Change in length of the bar",
                formula_latex: r"\Delta L = \varepsilon \cdot L",
                formula_plain: "dL = eps * L",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("L", "Free length", "mm")],
                assumptions: vec![],
                category: Deformations,
                module: Some(ModuleKind::Axial),
                source_module: "calculations/axial.rs",
                source_function: "calculate",
            },

            // Bending
            Equation::MidspanPointLoadMoment => EquationMetadata {
                name: "Maximum Moment, Midspan Point Load",
                description: "Bending moment under a centred point load on a simple span",
                formula_latex: r"M_{max} = \frac{P \cdot L}{4}",
                formula_plain: "M_max = P*L/4",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 6 },
                variables: vec![
                    Variable::new("P", "Point load", "N"),
                    Variable::new("L", "Span", "m"),
                ],
                assumptions: vec!["Simply-supported (pin-roller)"],
                category: InternalForces,
                module: Some(ModuleKind::Bending),
                source_module: "equations/beam.rs",
                source_function: "midspan_point_load_max_moment",
            },

            Equation::MidspanPointLoadDeflection => EquationMetadata {
                name: "Maximum Deflection, Midspan Point Load",
                description: "Deflection at midspan under a centred point load",
                formula_latex: r"w_{max} = \frac{P \cdot L^3}{48 \cdot E \cdot I}",
                formula_plain: "w_max = P*L^3/(48*E*I)",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 12 },
                variables: vec![
                    Variable::new("L", "Span", "mm"),
                    Variable::new("E", "Young's modulus", "MPa"),
                    Variable::new("I", "Second moment of area", "mm^4"),
                ],
                assumptions: vec!["Linear elastic material", "Small deflections"],
                category: Deformations,
                module: Some(ModuleKind::Bending),
                source_module: "equations/beam.rs",
                source_function: "midspan_point_load_max_deflection",
            },

            Equation::FlexuralStress => EquationMetadata {
                name: "Flexural Stress",
                description: "Normal stress at distance y from the neutral axis",
                formula_latex: r"\sigma = \frac{M \cdot y}{I}",
                formula_plain: "sigma = M*y/I",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 6 },
                variables: vec![
                    Variable::new("M", "Bending moment", "N·mm"),
                    Variable::new(
                        "y",
                        "Distance from neutral axis (h/2 at the extreme fibre)",
                        "mm",
                    ),
                ],
                assumptions: vec!["Plane sections remain plane"],
                category: Stresses,
                module: Some(ModuleKind::Bending),
                source_module: "equations/beam.rs",
                source_function: "flexural_stress",
            },

            // Torsion
            Equation::TorsionShearStress => EquationMetadata {
                name: "Torsional Shear Stress",
                description: "Maximum shear stress at the outer surface of a circular shaft",
                formula_latex: r"\tau_{max} = \frac{T \cdot r}{I_p}",
                formula_plain: "tau_max = T*r/I_p",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 5 },
                variables: vec![
                    Variable::new("T", "Torque", "N·mm"),
                    Variable::new("r", "Shaft radius", "mm"),
                ],
                assumptions: vec!["Solid circular shaft", "Linear elastic"],
                category: Stresses,
                module: Some(ModuleKind::Torsion),
                source_module: "calculations/torsion.rs",
                source_function: "calculate",
            },

            Equation::AngleOfTwist => EquationMetadata {
                name: "Angle of Twist",
                description: "Relative rotation of the shaft ends",
                formula_latex: r"\varphi = \frac{T \cdot L}{G \cdot I_p}",
                formula_plain: "phi = T*L/(G*I_p)",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 5 },
                variables: vec![
                    Variable::new("L", "Shaft length", "mm"),
                    Variable::new("G", "Shear modulus", "MPa"),
                ],
                assumptions: vec!["Uniform torque and section along the length"],
                category: Deformations,
                module: Some(ModuleKind::Torsion),
                source_module: "calculations/torsion.rs",
                source_function: "calculate",
            },

            // Buckling
            Equation::SlendernessRatio => EquationMetadata {
                name: "Slenderness Ratio",
                description: "Effective length over radius of gyration",
                formula_latex: r"\lambda = \frac{\mu L}{i}",
                formula_plain: "lambda = mu*L/i",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 13 },
                variables: vec![
                    Variable::new("mu", "Effective length factor (1.0, pinned-pinned)", "-"),
                    Variable::new("L", "Column length", "mm"),
                ],
                assumptions: vec![],
                category: Stability,
                module: Some(ModuleKind::Buckling),
                source_module: "calculations/buckling.rs",
                source_function: "calculate",
            },

            Equation::EulerCriticalLoad => EquationMetadata {
                name: "Euler Critical Load",
                description: "Largest axial load a straight elastic column carries without \
                              buckling",
                formula_latex: r"P_{cr} = \frac{\pi^2 E I_{min}}{(\mu L)^2}",
                formula_plain: "P_cr = pi^2*E*I_min/(mu*L)^2",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 13 },
                variables: vec![
                    Variable::new("E", "Young's modulus", "MPa"),
                    Variable::new("I_min", "Weak-axis second moment of area", "mm^4"),
                ],
                assumptions: vec!["Pinned-pinned (mu = 1)", "Elastic buckling only"],
                category: Stability,
                module: Some(ModuleKind::Buckling),
                source_module: "calculations/buckling.rs",
                source_function: "calculate",
            },

            // Stress transformation
            Equation::PlaneStressTransformation => EquationMetadata {
                name: "Plane Stress Transformation",
                description: "Stress components on an element rotated by theta",
                formula_latex: r"\sigma_{x'} = \frac{\sigma_x+\sigma_y}{2} + \frac{\sigma_x-\sigma_y}{2}\cos 2\theta + \tau_{xy}\sin 2\theta,\quad \tau_{x'y'} = -\frac{\sigma_x-\sigma_y}{2}\sin 2\theta + \tau_{xy}\cos 2\theta",
                formula_plain: "sx' = avg + diff*cos2t + txy*sin2t; sy' = avg - diff*cos2t - \
                                txy*sin2t; txy' = -diff*sin2t + txy*cos2t",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 9 },
                variables: vec![
                    Variable::new("theta", "Rotation, counter-clockwise", "deg"),
                    Variable::new("avg", "(sx + sy)/2", "MPa"),
                    Variable::new("diff", "(sx - sy)/2", "MPa"),
                ],
                assumptions: vec!["Plane stress", "sx' + sy' = sx + sy for all theta"],
                category: Transformation,
                module: Some(ModuleKind::Stress),
                source_module: "calculations/stress.rs",
                source_function: "transform",
            },

            Equation::PrincipalStresses => EquationMetadata {
                name: "In-Plane Principal Stresses",
                description: "Extreme normal stresses and maximum in-plane shear (Mohr circle)",
                formula_latex: r"\sigma_{1,2} = \frac{\sigma_x+\sigma_y}{2} \pm R,\quad R = \sqrt{\left(\frac{\sigma_x-\sigma_y}{2}\right)^2 + \tau_{xy}^2}",
                formula_plain: "s1,2 = avg +/- R; R = sqrt(diff^2 + txy^2); tau_max = R",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 9 },
                variables: vec![Variable::new("R", "Mohr circle radius", "MPa")],
                assumptions: vec![],
                category: Transformation,
                module: Some(ModuleKind::Stress),
                source_module: "calculations/stress.rs",
                source_function: "transform",
            },

            Equation::PrincipalPlaneAngle => EquationMetadata {
                name: "Principal Plane Angle",
                description: "Rotation at which the in-plane shear vanishes",
                formula_latex: r"\theta_p = \frac{1}{2}\operatorname{atan2}(2\tau_{xy}, \sigma_x - \sigma_y)",
                formula_plain: "theta_p = atan2(2*txy, sx - sy)/2",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 9 },
                variables: vec![],
                assumptions: vec![],
                category: Transformation,
                module: Some(ModuleKind::Stress),
                source_module: "calculations/stress.rs",
                source_function: "transform",
            },

            Equation::StressInvariants => EquationMetadata {
                name: "Stress Invariants",
                description: "Coefficients of the characteristic equation, independent of axes",
                formula_latex: r"I_1 = \sigma_x+\sigma_y+\sigma_z,\quad I_2 = \sigma_x\sigma_y+\sigma_y\sigma_z+\sigma_z\sigma_x-\tau_{xy}^2-\tau_{yz}^2-\tau_{zx}^2,\quad I_3 = \det\sigma",
                formula_plain: "I1 = trace; I2 = sum of principal minors; I3 = det",
                reference: CodeReference::Mechanics,
                variables: vec![],
                assumptions: vec!["Symmetric stress tensor"],
                category: Transformation,
                module: Some(ModuleKind::Stress),
                source_module: "calculations/stress.rs",
                source_function: "StressTensor3::i1",
            },

            Equation::CharacteristicEquation => EquationMetadata {
                name: "Characteristic Equation",
                description: "Its three real roots are the principal stresses",
                formula_latex: r"\sigma^3 - I_1\sigma^2 + I_2\sigma - I_3 = 0",
                formula_plain: "s^3 - I1*s^2 + I2*s - I3 = 0",
                reference: CodeReference::Mechanics,
                variables: vec![],
                assumptions: vec!["Roots ordered s1 >= s2 >= s3", "tau_abs_max = (s1 - s3)/2"],
                category: Transformation,
                module: Some(ModuleKind::Stress),
                source_module: "calculations/stress.rs",
                source_function: "principal_stresses",
            },

            // Combined loading
            Equation::EccentricMoment => EquationMetadata {
                name: "Eccentric Load Moment",
                description: "Bending moment produced by an axial force offset from the centroid",
                formula_latex: r"M = F \cdot e",
                formula_plain: "M = F*e",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("e", "Eccentricity", "mm")],
                assumptions: vec![],
                category: InternalForces,
                module: Some(ModuleKind::Combined),
                source_module: "calculations/combined.rs",
                source_function: "calculate",
            },

            Equation::ExtremeFibreStress => EquationMetadata {
                name: "Combined Extreme-Fibre Stress",
                description: "Superposition of uniform axial stress and linear bending stress",
                formula_latex: r"\sigma = \frac{F}{A} \pm \frac{M \cdot (h/2)}{I}",
                formula_plain: "sigma_top,bottom = F/A -/+ M*(h/2)/I",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 8 },
                variables: vec![],
                assumptions: vec![
                    "Linear elastic superposition",
                    "Signs preserved to expose reversal",
                ],
                category: Stresses,
                module: Some(ModuleKind::Combined),
                source_module: "calculations/combined.rs",
                source_function: "calculate",
            },

            Equation::KernLimit => EquationMetadata {
                name: "Kern Limit",
                description: "Largest eccentricity without stress reversal for a rectangle",
                formula_latex: r"e \le \frac{h}{6}",
                formula_plain: "e <= h/6",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 8 },
                variables: vec![],
                assumptions: vec!["Rectangular section, eccentricity in the plane of h"],
                category: Stresses,
                module: Some(ModuleKind::Combined),
                source_module: "calculations/combined.rs",
                source_function: "CombinedInput::kern_limit_mm",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Equations a loading mode evaluates, including the section properties it relies on
    pub fn for_module(kind: ModuleKind) -> Vec<Equation> {
        let mut equations: Vec<Equation> = ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().module == Some(kind))
            .copied()
            .collect();
        let shared: &[Equation] = match kind {
            ModuleKind::Bending => &[Equation::RectangularMomentOfInertia],
            ModuleKind::Buckling | ModuleKind::Combined => {
                &[Equation::RectangularArea, Equation::RectangularMomentOfInertia]
            }
            _ => &[],
        };
        for eq in shared {
            if !equations.contains(eq) {
                equations.insert(0, *eq);
            }
        }
        equations
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RectangularArea,
    Equation::RectangularMomentOfInertia,
    Equation::WeakAxisMomentOfInertia,
    Equation::RadiusOfGyration,
    Equation::CircularPolarMoment,
    Equation::PoissonTransverseStrain,
    Equation::EngineeringStressCurve,
    Equation::TrueStress,
    Equation::AxialStress,
    Equation::HookeStrain,
    Equation::PlasticHardeningStrain,
    Equation::AxialElongation,
    Equation::MidspanPointLoadMoment,
    Equation::MidspanPointLoadDeflection,
    Equation::FlexuralStress,
    Equation::TorsionShearStress,
    Equation::AngleOfTwist,
    Equation::SlendernessRatio,
    Equation::EulerCriticalLoad,
    Equation::PlaneStressTransformation,
    Equation::PrincipalStresses,
    Equation::PrincipalPlaneAngle,
    Equation::StressInvariants,
    Equation::CharacteristicEquation,
    Equation::EccentricMoment,
    Equation::ExtremeFibreStress,
    Equation::KernLimit,
];

// ============================================================================
// Theory Panels
// ============================================================================

/// One labelled formula in a theory panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TheoryFormula {
    pub label: &'static str,
    pub latex: &'static str,
    pub description: &'static str,
}

/// Explanatory summary for a loading mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TheoryEntry {
    pub title: &'static str,
    pub definition: &'static str,
    pub formulas: &'static [TheoryFormula],
    pub insight: &'static str,
}

const fn formula(
    label: &'static str,
    latex: &'static str,
    description: &'static str,
) -> TheoryFormula {
    TheoryFormula {
        label,
        latex,
        description,
    }
}

static FUNDAMENTALS_THEORY: TheoryEntry = TheoryEntry {
    title: "Stress & Strain Fundamentals",
    definition: "How a material deforms under load: the Poisson effect (lateral contraction) and \
                 the difference between engineering stress and true stress.",
    formulas: &[
        formula(
            "Poisson's ratio",
            r"\nu = -\frac{\varepsilon_{trans}}{\varepsilon_{axial}}",
            "Ratio of lateral contraction to axial extension under uniaxial tension.",
        ),
        formula(
            "Engineering stress",
            r"\sigma_{eng} = \frac{F}{A_0}",
            "Stress based on the original cross-section of the specimen.",
        ),
        formula(
            "True stress",
            r"\sigma_{true} = \frac{F}{A_{actual}} = \sigma_{eng}(1+\varepsilon_{eng})",
            "Stress based on the instantaneous, deformed cross-section.",
        ),
        formula(
            "Constant volume (plastic)",
            r"A_0 L_0 = A L",
            "During plastic flow the volume is usually taken as unchanged.",
        ),
    ],
    insight: "Most materials get thinner when stretched. Engineering stress is fine for design, \
              but at large strains (metal forming) the shrinking section makes the true stress \
              noticeably higher.",
};

static AXIAL_THEORY: TheoryEntry = TheoryEntry {
    title: "Axial Loading",
    definition: "A bar loaded along its axis lengthens or shortens. The response has an elastic \
                 stage followed by a plastic stage.",
    formulas: &[
        formula("Engineering stress", r"\sigma = \frac{F}{A}", "Internal force per unit area."),
        formula(
            "Engineering strain",
            r"\varepsilon = \frac{\Delta L}{L}",
            "Relative change in length.",
        ),
        formula(
            "Hooke's law (elastic)",
            r"\sigma = E \cdot \varepsilon",
            "Below the yield strength stress is proportional to strain.",
        ),
        formula(
            "Yield criterion",
            r"\sigma \ge \sigma_{yield}",
            "Beyond the yield strength the material deforms permanently.",
        ),
    ],
    insight: "Designs normally keep members elastic (σ < σ_y). Once plastic, the bar keeps a \
              permanent set after unloading, which usually counts as failure.",
};

static BENDING_THEORY: TheoryEntry = TheoryEntry {
    title: "Beam Bending",
    definition: "Loads perpendicular to the axis curve the beam; its axis goes from straight to \
                 bent.",
    formulas: &[
        formula(
            "Maximum moment",
            r"M_{max} = \frac{P \cdot L}{4}",
            "Simply-supported beam with a point load at midspan.",
        ),
        formula(
            "Maximum deflection",
            r"w_{max} = \frac{P \cdot L^3}{48 \cdot E \cdot I}",
            "Largest displacement, at midspan.",
        ),
        formula(
            "Moment of inertia",
            r"I_z = \frac{b \cdot h^3}{12}",
            "Geometric stiffness of a rectangle against bending.",
        ),
        formula(
            "Bending stress",
            r"\sigma = \frac{M \cdot y}{I_z}",
            "Grows with distance from the neutral axis.",
        ),
    ],
    insight: "Section height dominates bending stiffness (h³). A plank on edge is far stiffer than \
              the same plank laid flat.",
};

static TORSION_THEORY: TheoryEntry = TheoryEntry {
    title: "Shaft Torsion",
    definition: "A torque about the axis makes cross-sections rotate relative to each other.",
    formulas: &[
        formula(
            "Maximum shear stress",
            r"\tau_{max} = \frac{T \cdot r}{I_p}",
            "Occurs at the outer surface of the shaft.",
        ),
        formula(
            "Angle of twist",
            r"\varphi = \frac{T \cdot L}{G \cdot I_p}",
            "Relative rotation between the two end sections.",
        ),
        formula(
            "Polar moment",
            r"I_p = \frac{\pi \cdot r^4}{2}",
            "Torsional geometric property of a circle.",
        ),
    ],
    insight: "Radius is the key to torsional stiffness: I_p grows with r⁴, so a slightly thicker \
              shaft twists far less.",
};

static BUCKLING_THEORY: TheoryEntry = TheoryEntry {
    title: "Column Buckling",
    definition: "A slender strut under compression suddenly bows sideways once the load reaches a \
                 critical value, losing its straight equilibrium.",
    formulas: &[
        formula(
            "Euler load",
            r"P_{cr} = \frac{\pi^2 E I}{(\mu L)^2}",
            "Largest axial load that keeps the column straight.",
        ),
        formula(
            "Radius of gyration",
            r"i = \sqrt{\frac{I}{A}}",
            "How the area is spread about the axis.",
        ),
        formula(
            "Slenderness",
            r"\lambda = \frac{\mu L}{i}",
            "Measures how slender the column is; larger λ buckles more easily.",
        ),
    ],
    insight: "Slender columns fail from lack of stiffness, not strength. A smaller radius of \
              gyration (a flatter section) means a larger λ and a lower P_cr.",
};

static STRESS_THEORY: TheoryEntry = TheoryEntry {
    title: "Stress Transformation",
    definition: "The stresses at a point change with the orientation of the cutting plane. The \
                 full state is described by the stress tensor or by Mohr's circle.",
    formulas: &[
        formula(
            "Stress tensor",
            r"\sigma_{ij} = \begin{bmatrix} \sigma_x & \tau_{xy} & \tau_{xz} \\ \tau_{yx} & \sigma_y & \tau_{yz} \\ \tau_{zx} & \tau_{zy} & \sigma_z \end{bmatrix}",
            "Matrix of the stress components acting at the point.",
        ),
        formula(
            "First invariant",
            r"I_1 = \sigma_x + \sigma_y + \sigma_z",
            "Trace of the tensor; unchanged by a rotation of axes.",
        ),
        formula(
            "Characteristic equation",
            r"\sigma^3 - I_1\sigma^2 + I_2\sigma - I_3 = 0",
            "Its three roots are the principal stresses.",
        ),
    ],
    insight: "However complex the loading, some set of axes (the principal axes) carries no shear \
              at all. The normal stresses there are the principal stresses, the basis of every \
              strength criterion.",
};

static COMBINED_THEORY: TheoryEntry = TheoryEntry {
    title: "Combined Loading",
    definition: "A member undergoing two or more basic deformations at once, such as eccentric \
                 tension (axial plus bending) or bending with torsion.",
    formulas: &[
        formula(
            "Superposition",
            r"\sigma = \sigma_{axial} \pm \sigma_{bending}",
            "In the linear-elastic range stresses from each load add algebraically.",
        ),
        formula(
            "Eccentric axial stress",
            r"\sigma = \frac{F}{A} \pm \frac{M \cdot y}{I_z}",
            "Uniform stress from F plus the linear stress from M = F·e.",
        ),
        formula(
            "Kern",
            r"e < \frac{W}{A}",
            "Too large an eccentricity reverses the stress on one side of the section.",
        ),
    ],
    insight: "Superposition can sharply raise the stress on one face while lowering, or even \
              reversing, it on the other. Press frames and other offset-loaded members must be \
              checked for this.",
};

/// Theory panel for a loading mode.
pub fn theory(kind: ModuleKind) -> &'static TheoryEntry {
    match kind {
        ModuleKind::Fundamentals => &FUNDAMENTALS_THEORY,
        ModuleKind::Axial => &AXIAL_THEORY,
        ModuleKind::Bending => &BENDING_THEORY,
        ModuleKind::Torsion => &TORSION_THEORY,
        ModuleKind::Buckling => &BUCKLING_THEORY,
        ModuleKind::Stress => &STRESS_THEORY,
        ModuleKind::Combined => &COMBINED_THEORY,
    }
}

// ============================================================================
// Markdown Export
// ============================================================================

/// Render the registry as a Markdown reference.
///
/// Equations are grouped by category; each lists its formula, variables,
/// reference, source location and assumptions.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Mechlab Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `mechlab equations`

This document lists every formula the mechanics models evaluate.

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Normal stress | Tension |
| Axial force | Tension |
| Bending load | Downward |
| Rotation angle | Counter-clockwise, x toward y |
| Eccentricity | Toward the bottom fibre |

---

"#,
    );

    let mut categories = EquationCategory::ALL.to_vec();
    categories.sort_by_key(|c| c.sort_order());
    let mut used_categories = 0;

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }
        used_categories += 1;

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            if let Some(module) = meta.module {
                output.push_str(&format!("**Module:** {}\n\n", module.display_name()));
            }
            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        used_categories
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_listed_once() {
        let mut seen = std::collections::HashSet::new();
        for eq in ALL_EQUATIONS {
            assert!(seen.insert(*eq), "{:?} listed twice", eq);
        }
        assert_eq!(ALL_EQUATIONS.len(), 27);
    }

    #[test]
    fn test_equation_metadata_has_source_info() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} missing formula_plain", eq);
            assert!(!meta.formula_latex.is_empty(), "Equation {:?} missing formula_latex", eq);
        }
    }

    #[test]
    fn test_every_module_has_equations_and_theory() {
        for kind in ModuleKind::ALL {
            assert!(!Equation::for_module(kind).is_empty(), "{:?} has no equations", kind);
            let panel = theory(kind);
            assert!(!panel.title.is_empty());
            assert!(panel.formulas.len() >= 3);
        }
    }

    #[test]
    fn test_for_module_includes_section_properties() {
        let buckling = Equation::for_module(ModuleKind::Buckling);
        assert!(buckling.contains(&Equation::EulerCriticalLoad));
        assert!(buckling.contains(&Equation::RectangularArea));
        assert!(!buckling.contains(&Equation::AngleOfTwist));
    }

    #[test]
    fn test_categories_sorted() {
        let orders: Vec<u8> = EquationCategory::ALL.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Mechlab Equations Reference"));
        assert!(markdown.contains("## Sign Conventions"));
        assert!(markdown.contains("## Section Properties"));
        assert!(markdown.contains("## Stability"));
        assert!(markdown.contains("### Euler Critical Load"));
        assert!(markdown.contains("`M_max = P*L/4`"));
        assert!(markdown.contains("**Source:**"));
        assert!(markdown.contains("calculations/stress.rs"));
        assert!(markdown.contains("**Total Equations:** 27"));
        assert!(markdown.contains("**Categories:** 7"));
    }
}
