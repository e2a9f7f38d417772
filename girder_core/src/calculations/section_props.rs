//! # Composite Section Properties
//!
//! Computes elastic and cracked section properties for the positive and
//! negative moment regions of a composite steel girder.
//!
//! ## Cases per region
//!
//! - **Steel only** - girder alone
//! - **Composite n** - uncracked, short-term modular ratio
//! - **Composite 3n** - uncracked, long-term (creep) modular ratio
//! - **Cracked negative** - tension concrete ignored, compression concrete at n
//!
//! ## Error policy
//!
//! [`compute_section_props`] never fails. A region with invalid geometry is
//! skipped and a message naming the region is added to `errors`; the other
//! region is still computed. Invalid materials skip every region.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::calculations::section_props::{compute_section_props, default_input};
//! use girder_core::section::ReferenceFiber;
//!
//! let result = compute_section_props(&default_input());
//! assert!(result.is_ok());
//!
//! for region in &result.regions {
//!     let s_bot = region.composite_n.summary.modulus(ReferenceFiber::BottomOfSteel);
//!     println!("{}: I(n) = {:.0} in⁴, Sb = {:?}", region.label, region.composite_n.summary.i_in4, s_bot);
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assumptions::AssumptionTracker;
use crate::materials::composite::{MaterialInput, MaterialProperties};
use crate::materials::rebar::rebar_designations;
use crate::section::components::{compute_bar_layer, MatPosition};
use crate::section::cracked::{compute_cracked_negative, CrackedSection, CrackedSolverConfig};
use crate::section::region::{CrossSectionRegion, ReinforcementMat};
use crate::section::transformed::{
    compute_composite_uncracked, compute_steel_only, RegionBars, SteelSection, TransformedSection,
};

/// Input for a section property calculation.
///
/// ## JSON Example (abbreviated)
///
/// ```json
/// {
///   "materials": { "es_ksi": 29000.0, "fc_ksi": 4.0, "ec_mode": "auto" },
///   "same_regions": false,
///   "mirror_bottom_flange": false,
///   "positive": { "depth_in": 24.0, "tw_in": 0.44, "...": "..." },
///   "negative": { "depth_in": 24.0, "tw_in": 0.44, "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPropsInput {
    /// Steel and concrete properties
    pub materials: MaterialInput,

    /// Positive and negative regions share the positive geometry
    #[serde(default)]
    pub same_regions: bool,

    /// Bottom flange takes the top flange dimensions
    #[serde(default)]
    pub mirror_bottom_flange: bool,

    /// Positive moment region geometry
    pub positive: CrossSectionRegion,

    /// Negative moment region geometry (ignored when `same_regions` is set)
    pub negative: CrossSectionRegion,
}

/// All four section cases for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    /// Stable key: "positive", "negative", or "both"
    pub key: String,
    /// Display label
    pub label: String,
    /// Geometry as computed (after flange mirroring)
    pub region: CrossSectionRegion,
    /// Reinforcement layers
    pub bars: RegionBars,
    pub steel_only: SteelSection,
    pub composite_n: TransformedSection,
    pub composite_3n: TransformedSection,
    pub cracked_negative: CrackedSection,
}

/// Result of a section property calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPropsResult {
    /// Derived materials, `None` when the material input was rejected
    pub materials: Option<MaterialProperties>,
    /// De-duplicated assumption notes in first-seen order
    pub assumptions: Vec<String>,
    /// Computed regions
    pub regions: Vec<RegionResult>,
    /// Region-level (or material) error messages
    pub errors: Vec<String>,
}

impl SectionPropsResult {
    /// No errors were recorded
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Find a computed region by key
    pub fn region(&self, key: &str) -> Option<&RegionResult> {
        self.regions.iter().find(|r| r.key == key)
    }
}

/// One region to evaluate
struct RegionCase<'a> {
    key: &'static str,
    label: &'static str,
    region: &'a CrossSectionRegion,
}

fn region_cases(input: &SectionPropsInput) -> Vec<RegionCase<'_>> {
    if input.same_regions {
        vec![RegionCase {
            key: "both",
            label: "Positive & Negative Moment Regions",
            region: &input.positive,
        }]
    } else {
        vec![
            RegionCase {
                key: "positive",
                label: "Positive Moment Region",
                region: &input.positive,
            },
            RegionCase {
                key: "negative",
                label: "Negative Moment Region",
                region: &input.negative,
            },
        ]
    }
}

/// Fully populated example input.
pub fn default_input() -> SectionPropsInput {
    let positive = CrossSectionRegion {
        depth_in: 24.0,
        tw_in: 0.44,
        tf_top_in: 0.71,
        bf_top_in: 8.0,
        tf_bot_in: 0.71,
        bf_bot_in: 8.0,
        t_haunch_in: 2.0,
        t_slab_in: 5.0,
        b_eff_in: 120.0,
        top_mat: ReinforcementMat::new("#5", 12.0, 2.0),
        bottom_mat: ReinforcementMat::new("#5", 12.0, 1.0),
    };
    let negative = CrossSectionRegion {
        tf_bot_in: 1.0,
        bf_bot_in: 10.0,
        top_mat: ReinforcementMat::new("#5", 12.0, 2.0).with_alternate("#6", 12.0),
        ..positive.clone()
    };

    SectionPropsInput {
        materials: MaterialInput::default(),
        same_regions: false,
        mirror_bottom_flange: false,
        positive,
        negative,
    }
}

/// Bar designations offered for selection, in table order.
pub fn rebar_options() -> Vec<&'static str> {
    rebar_designations()
}

/// Compute section properties with the default solver settings.
pub fn compute_section_props(input: &SectionPropsInput) -> SectionPropsResult {
    compute_section_props_with(input, &CrackedSolverConfig::default())
}

/// Compute section properties with explicit solver settings.
pub fn compute_section_props_with(
    input: &SectionPropsInput,
    config: &CrackedSolverConfig,
) -> SectionPropsResult {
    let mut assumptions = AssumptionTracker::new();
    let mut errors = Vec::new();

    let materials = match MaterialProperties::from_input(&input.materials) {
        Ok(materials) => materials,
        Err(err) => {
            warn!(error = %err, "material input rejected");
            errors.push(format!("Materials: {}", err));
            return SectionPropsResult {
                materials: None,
                assumptions: assumptions.into_notes(),
                regions: Vec::new(),
                errors,
            };
        }
    };

    assumptions.record(materials.ec_assumption());
    assumptions.record(format!(
        "Modular ratio n = Es/Ec = {:.2}; long-term composite section uses 3n = {:.2}.",
        materials.modular_ratio, materials.modular_ratio_long_term
    ));
    if input.same_regions {
        assumptions.record("Positive and negative moment regions share the same geometry.");
    }
    if input.mirror_bottom_flange {
        assumptions.record("Bottom flange dimensions taken equal to the top flange.");
    }

    let mut regions = Vec::new();
    for case in region_cases(input) {
        let region = if input.mirror_bottom_flange {
            case.region.with_mirrored_flanges()
        } else {
            case.region.clone()
        };

        if let Err(err) = region.validate() {
            warn!(region = case.key, error = %err, "region rejected");
            errors.push(format!("{}: {}", case.label, err));
            continue;
        }

        let result = compute_region(&case, region, &materials, config, &mut assumptions);
        regions.push(result);
    }

    info!(
        regions = regions.len(),
        errors = errors.len(),
        modular_ratio = materials.modular_ratio,
        "section properties computed"
    );

    SectionPropsResult {
        materials: Some(materials),
        assumptions: assumptions.into_notes(),
        regions,
        errors,
    }
}

fn compute_region(
    case: &RegionCase<'_>,
    region: CrossSectionRegion,
    materials: &MaterialProperties,
    config: &CrackedSolverConfig,
    assumptions: &mut AssumptionTracker,
) -> RegionResult {
    let slab_bottom = region.slab_bottom_in();
    let concrete_top = region.concrete_top_in();
    let bars = RegionBars {
        top: compute_bar_layer(&region.top_mat, slab_bottom, concrete_top, MatPosition::Top),
        bottom: compute_bar_layer(
            &region.bottom_mat,
            slab_bottom,
            concrete_top,
            MatPosition::Bottom,
        ),
    };
    assumptions.record_opt(bars.top.assumption.as_deref());
    assumptions.record_opt(bars.bottom.assumption.as_deref());
    assumptions.record(
        "Reinforcement smeared over the effective width as line elements with no local inertia.",
    );

    let n = materials.modular_ratio;
    let steel_only = compute_steel_only(&region);
    let composite_n = compute_composite_uncracked(&region, n, &bars, "n");
    let composite_3n =
        compute_composite_uncracked(&region, materials.modular_ratio_long_term, &bars, "3n");
    let cracked_negative = compute_cracked_negative(&region, n, &bars, config);

    assumptions.record(
        "Cracked section ignores concrete below the neutral axis; \
         compression concrete transformed with n.",
    );
    if cracked_negative.approximated {
        assumptions.record(format!(
            "{}: cracked neutral axis could not be bracketed; approximate centroid estimate used.",
            case.label
        ));
    }

    RegionResult {
        key: case.key.to_string(),
        label: case.label.to_string(),
        region,
        bars,
        steel_only,
        composite_n,
        composite_3n,
        cracked_negative,
    }
}
