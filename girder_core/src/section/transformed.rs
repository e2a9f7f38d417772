//! Transformed-Section Assembler
//!
//! Builds the uncracked composite section for a given modular-ratio divisor.
//! Concrete area and inertia are both divided by the divisor (n for short-term,
//! 3n for long-term), converting the deck into equivalent steel.

use serde::{Deserialize, Serialize};

use super::components::{build_steel_components, BarLayer, GeometricComponent};
use super::region::CrossSectionRegion;
use super::summary::{summarize_section, ReferenceFiber, SectionSummary};

/// Concrete block geometry (haunch + slab treated at full effective width)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteGeometry {
    /// Elevation of the bottom of concrete (top of steel) (in)
    pub bottom_y_in: f64,
    /// Elevation of the top of slab (in)
    pub top_y_in: f64,
    /// Haunch + slab depth (in)
    pub depth_in: f64,
    /// Effective width (in)
    pub width_in: f64,
}

impl ConcreteGeometry {
    pub fn from_region(region: &CrossSectionRegion) -> Self {
        ConcreteGeometry {
            bottom_y_in: region.concrete_bottom_in(),
            top_y_in: region.concrete_top_in(),
            depth_in: region.concrete_depth_in(),
            width_in: region.b_eff_in,
        }
    }
}

/// Top and bottom reinforcement layers of one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionBars {
    pub top: BarLayer,
    pub bottom: BarLayer,
}

impl RegionBars {
    /// Smeared reinforcement components over the effective width
    pub fn components(&self, width_in: f64) -> [GeometricComponent; 2] {
        [self.top.component(width_in), self.bottom.component(width_in)]
    }
}

/// Steel-only section case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    pub components: Vec<GeometricComponent>,
    pub summary: SectionSummary,
}

/// Uncracked composite section for one modular-ratio divisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedSection {
    /// Case label (e.g., "n", "3n")
    pub label: String,
    /// Divisor applied to concrete area and inertia
    pub divisor: f64,
    pub concrete: ConcreteGeometry,
    pub components: Vec<GeometricComponent>,
    pub summary: SectionSummary,
}

/// Steel girder alone, moduli at top and bottom of steel.
pub fn compute_steel_only(region: &CrossSectionRegion) -> SteelSection {
    let components = build_steel_components(region);
    let summary = summarize_section(
        &components,
        &[
            (ReferenceFiber::TopOfSteel, region.depth_in),
            (ReferenceFiber::BottomOfSteel, 0.0),
        ],
    );
    SteelSection { components, summary }
}

/// Uncracked composite section with concrete transformed by `divisor`.
///
/// ```rust
/// use girder_core::calculations::section_props::default_input;
/// use girder_core::section::components::{compute_bar_layer, MatPosition};
/// use girder_core::section::transformed::{
///     compute_composite_uncracked, compute_steel_only, RegionBars,
/// };
///
/// let region = default_input().positive;
/// let (slab_bottom, slab_top) = (region.slab_bottom_in(), region.concrete_top_in());
/// let bars = RegionBars {
///     top: compute_bar_layer(&region.top_mat, slab_bottom, slab_top, MatPosition::Top),
///     bottom: compute_bar_layer(&region.bottom_mat, slab_bottom, slab_top, MatPosition::Bottom),
/// };
/// let steel = compute_steel_only(&region);
/// let composite = compute_composite_uncracked(&region, 8.0, &bars, "n");
/// assert!(composite.summary.y_bar_in > steel.summary.y_bar_in);
/// assert!(composite.summary.total_area_in2 > steel.summary.total_area_in2);
/// ```
pub fn compute_composite_uncracked(
    region: &CrossSectionRegion,
    divisor: f64,
    bars: &RegionBars,
    label: &str,
) -> TransformedSection {
    let concrete = ConcreteGeometry::from_region(region);

    let mut components = build_steel_components(region);
    let slab = GeometricComponent::rectangle(
        format!("Concrete ({})", label),
        concrete.width_in,
        concrete.depth_in,
        concrete.bottom_y_in,
    );
    components.push(GeometricComponent {
        area_in2: slab.area_in2 / divisor,
        i_local_in4: slab.i_local_in4 / divisor,
        ..slab
    });
    components.extend(bars.components(region.b_eff_in));

    let summary = summarize_section(
        &components,
        &[
            (ReferenceFiber::TopOfSlab, concrete.top_y_in),
            (ReferenceFiber::TopOfSteel, region.depth_in),
            (ReferenceFiber::BottomOfSteel, 0.0),
        ],
    );

    TransformedSection {
        label: label.to_string(),
        divisor,
        concrete,
        components,
        summary,
    }
}
