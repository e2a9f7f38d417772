//! Cracked-Section Solver
//!
//! Negative-moment section with concrete in tension ignored. The neutral axis
//! is the elevation where the first moment of the participating area vanishes:
//! steel and reinforcement always participate, concrete participates only
//! above the axis, transformed with the short-term ratio n.
//!
//! ## Force Balance
//!
//! ```text
//! F(na) = Σ Aᵢ(yᵢ − na)                       steel + reinforcement
//!       + (b_eff·c / n)(y_c − na)             concrete above na, depth c
//! ```
//!
//! F is found by bisection on [0, top of slab]. When the bracket does not
//! straddle a root, a single-step centroid estimate is returned instead and
//! the result is flagged as approximated.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::components::{build_steel_components, GeometricComponent};
use super::region::CrossSectionRegion;
use super::summary::{summarize_about, ReferenceFiber, SectionSummary};
use super::transformed::{ConcreteGeometry, RegionBars};
use crate::equations::section::{guarded_centroid, SECTION_EPSILON};

/// Bisection settings for the neutral-axis search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackedSolverConfig {
    /// Maximum bisection iterations
    pub max_iters: usize,

    /// Absolute tolerance on the first-moment residual (in³)
    pub residual_tol: f64,
}

impl Default for CrackedSolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 120,
            residual_tol: 1e-8,
        }
    }
}

/// How the neutral axis was obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeutralAxis {
    /// Elevation above the bottom of steel (in)
    pub y_in: f64,
    /// Bisection iterations performed (0 for a bound hit or the estimate)
    pub iterations: usize,
    /// `true` when the root could not be bracketed and the centroid estimate was used
    pub approximated: bool,
}

/// Cracked negative-moment section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackedSection {
    /// Neutral-axis elevation (in)
    pub neutral_axis_in: f64,
    /// Depth of concrete in compression above the axis (in)
    pub compression_depth_in: f64,
    /// Fallback estimate flag, see [`NeutralAxis::approximated`]
    pub approximated: bool,
    /// Bisection iterations performed
    pub iterations: usize,
    pub concrete: ConcreteGeometry,
    /// Steel, reinforcement, and the transformed compression block
    pub components: Vec<GeometricComponent>,
    /// Inertia and moduli about the neutral axis (`y_bar_in` is the axis)
    pub summary: SectionSummary,
}

/// Net first moment about `na` of steel, reinforcement, and compressed concrete.
pub fn force_balance(
    fixed: &[GeometricComponent],
    concrete: &ConcreteGeometry,
    modular_ratio: f64,
    na: f64,
) -> f64 {
    let steel_moment: f64 = fixed.iter().map(|c| c.first_moment_about(na)).sum();
    match compression_block(concrete, modular_ratio, na) {
        Some(block) => steel_moment + block.first_moment_about(na),
        None => steel_moment,
    }
}

/// Transformed concrete above `na`, or `None` when no concrete is compressed
fn compression_block(
    concrete: &ConcreteGeometry,
    modular_ratio: f64,
    na: f64,
) -> Option<GeometricComponent> {
    if na >= concrete.top_y_in {
        return None;
    }
    let bottom = na.max(concrete.bottom_y_in);
    let depth = concrete.top_y_in - bottom;
    if depth <= 0.0 {
        return None;
    }
    let block = GeometricComponent::rectangle(
        "Concrete (compression, n)",
        concrete.width_in,
        depth,
        bottom,
    );
    Some(GeometricComponent {
        area_in2: block.area_in2 / modular_ratio,
        i_local_in4: block.i_local_in4 / modular_ratio,
        ..block
    })
}

/// Locate the cracked neutral axis.
pub fn solve_neutral_axis(
    fixed: &[GeometricComponent],
    concrete: &ConcreteGeometry,
    modular_ratio: f64,
    config: &CrackedSolverConfig,
) -> NeutralAxis {
    let f = |na: f64| force_balance(fixed, concrete, modular_ratio, na);

    let mut low = 0.0;
    let mut high = concrete.top_y_in;
    let mut f_low = f(low);
    let f_high = f(high);

    if f_low == 0.0 {
        return NeutralAxis { y_in: low, iterations: 0, approximated: false };
    }
    if f_high == 0.0 {
        return NeutralAxis { y_in: high, iterations: 0, approximated: false };
    }

    if f_low.signum() == f_high.signum() {
        let y_in = centroid_estimate(fixed, concrete, modular_ratio);
        warn!(
            f_low,
            f_high,
            estimate = y_in,
            "cracked neutral axis not bracketed, using centroid estimate"
        );
        return NeutralAxis { y_in, iterations: 0, approximated: true };
    }

    for iteration in 1..=config.max_iters {
        let mid = 0.5 * (low + high);
        let f_mid = f(mid);
        if f_mid.abs() < config.residual_tol {
            debug!(
                iteration,
                neutral_axis = mid,
                residual = f_mid,
                "cracked neutral axis converged"
            );
            return NeutralAxis { y_in: mid, iterations: iteration, approximated: false };
        }
        if f_mid.signum() == f_low.signum() {
            low = mid;
            f_low = f_mid;
        } else {
            high = mid;
        }
    }

    let y_in = 0.5 * (low + high);
    debug!(
        iterations = config.max_iters,
        neutral_axis = y_in,
        "cracked neutral axis at iteration cap"
    );
    NeutralAxis { y_in, iterations: config.max_iters, approximated: false }
}

/// Single-step estimate: centroid of steel, reinforcement, and the full
/// concrete depth transformed by n. Not an equilibrium solution.
fn centroid_estimate(
    fixed: &[GeometricComponent],
    concrete: &ConcreteGeometry,
    modular_ratio: f64,
) -> f64 {
    let full = GeometricComponent::rectangle(
        "Concrete (full depth, n)",
        concrete.width_in,
        concrete.depth_in,
        concrete.bottom_y_in,
    );
    let full_area = full.area_in2 / modular_ratio;

    let area: f64 = fixed.iter().map(|c| c.area_in2).sum::<f64>() + full_area;
    let moment: f64 =
        fixed.iter().map(|c| c.area_in2 * c.y_in).sum::<f64>() + full_area * full.y_in;
    guarded_centroid(moment, area)
}

/// Cracked negative-moment section about the solved neutral axis.
///
/// ```rust
/// use girder_core::calculations::section_props::default_input;
/// use girder_core::section::components::{compute_bar_layer, MatPosition};
/// use girder_core::section::cracked::{compute_cracked_negative, CrackedSolverConfig};
/// use girder_core::section::transformed::RegionBars;
///
/// let region = default_input().negative;
/// let (slab_bottom, slab_top) = (region.slab_bottom_in(), region.concrete_top_in());
/// let bars = RegionBars {
///     top: compute_bar_layer(&region.top_mat, slab_bottom, slab_top, MatPosition::Top),
///     bottom: compute_bar_layer(&region.bottom_mat, slab_bottom, slab_top, MatPosition::Bottom),
/// };
/// let cracked = compute_cracked_negative(&region, 8.0, &bars, &CrackedSolverConfig::default());
/// assert!(!cracked.approximated);
/// assert!(cracked.neutral_axis_in > 0.0 && cracked.neutral_axis_in < region.concrete_top_in());
/// ```
pub fn compute_cracked_negative(
    region: &CrossSectionRegion,
    modular_ratio: f64,
    bars: &RegionBars,
    config: &CrackedSolverConfig,
) -> CrackedSection {
    let concrete = ConcreteGeometry::from_region(region);

    let mut components = build_steel_components(region);
    components.extend(bars.components(region.b_eff_in));

    let axis = solve_neutral_axis(&components, &concrete, modular_ratio, config);
    let na = axis.y_in;

    let compression_depth_in = (concrete.top_y_in - na.max(concrete.bottom_y_in)).max(0.0);
    if compression_depth_in > SECTION_EPSILON {
        if let Some(block) = compression_block(&concrete, modular_ratio, na) {
            components.push(block);
        }
    }

    let summary = summarize_about(
        &components,
        na,
        &[
            (ReferenceFiber::TopOfSteel, region.depth_in),
            (ReferenceFiber::BottomOfSteel, 0.0),
        ],
    );

    CrackedSection {
        neutral_axis_in: na,
        compression_depth_in,
        approximated: axis.approximated,
        iterations: axis.iterations,
        concrete,
        components,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::components::{compute_bar_layer, MatPosition};
    use crate::section::region::tests::sample_region;
    use approx::assert_relative_eq;

    fn bars_for(region: &CrossSectionRegion) -> RegionBars {
        RegionBars {
            top: compute_bar_layer(
                &region.top_mat,
                region.slab_bottom_in(),
                region.concrete_top_in(),
                MatPosition::Top,
            ),
            bottom: compute_bar_layer(
                &region.bottom_mat,
                region.slab_bottom_in(),
                region.concrete_top_in(),
                MatPosition::Bottom,
            ),
        }
    }

    fn fixed_components(region: &CrossSectionRegion) -> Vec<GeometricComponent> {
        let mut parts = build_steel_components(region);
        parts.extend(bars_for(region).components(region.b_eff_in));
        parts
    }

    #[test]
    fn test_residual_at_solution() {
        let region = sample_region();
        let n = 8.0;
        let cracked = compute_cracked_negative(
            &region,
            n,
            &bars_for(&region),
            &CrackedSolverConfig::default(),
        );
        assert!(!cracked.approximated);

        let residual = force_balance(
            &fixed_components(&region),
            &cracked.concrete,
            n,
            cracked.neutral_axis_in,
        );
        assert!(residual.abs() < 1e-6, "F(na) = {}", residual);
        assert!(cracked.neutral_axis_in >= 0.0);
        assert!(cracked.neutral_axis_in <= region.concrete_top_in());
    }

    #[test]
    fn test_wide_slab_puts_axis_in_concrete() {
        // 120" of concrete at n = 8 outweighs the small girder, axis lands in the deck
        let region = sample_region();
        let cracked = compute_cracked_negative(
            &region,
            8.0,
            &bars_for(&region),
            &CrackedSolverConfig::default(),
        );
        assert!(cracked.neutral_axis_in > region.depth_in);
        assert!(cracked.compression_depth_in > 0.0);
        assert_relative_eq!(
            cracked.compression_depth_in,
            region.concrete_top_in() - cracked.neutral_axis_in,
            epsilon = 1e-12
        );
        assert!(cracked.components.iter().any(|c| c.name == "Concrete (compression, n)"));
    }

    #[test]
    fn test_axis_is_first_moment_centroid() {
        // At equilibrium the participating area has zero first moment about na,
        // so its centroid is na itself.
        let region = sample_region();
        let cracked = compute_cracked_negative(
            &region,
            8.0,
            &bars_for(&region),
            &CrackedSolverConfig::default(),
        );
        let area: f64 = cracked.components.iter().map(|c| c.area_in2).sum();
        let moment: f64 = cracked.components.iter().map(|c| c.area_in2 * c.y_in).sum();
        assert_relative_eq!(moment / area, cracked.neutral_axis_in, epsilon = 1e-6);
        assert_relative_eq!(cracked.summary.total_area_in2, area, epsilon = 1e-12);
    }

    #[test]
    fn test_moduli_about_axis() {
        let region = sample_region();
        let cracked = compute_cracked_negative(
            &region,
            8.0,
            &bars_for(&region),
            &CrackedSolverConfig::default(),
        );
        let na = cracked.neutral_axis_in;
        let i = cracked.summary.i_in4;
        assert_eq!(cracked.summary.y_bar_in, na);
        assert_relative_eq!(
            cracked.summary.modulus(ReferenceFiber::TopOfSteel).unwrap(),
            i / (region.depth_in - na).abs(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            cracked.summary.modulus(ReferenceFiber::BottomOfSteel).unwrap(),
            i / na,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_stiff_concrete_limit_stays_bracketed() {
        // Huge n makes concrete negligible: axis approaches the steel + bar centroid
        let region = sample_region();
        let fixed = fixed_components(&region);
        let concrete = ConcreteGeometry::from_region(&region);
        let axis = solve_neutral_axis(&fixed, &concrete, 1e9, &CrackedSolverConfig::default());
        assert!(!axis.approximated);

        let area: f64 = fixed.iter().map(|c| c.area_in2).sum();
        let centroid = fixed.iter().map(|c| c.area_in2 * c.y_in).sum::<f64>() / area;
        assert_relative_eq!(axis.y_in, centroid, epsilon = 1e-3);
    }

    #[test]
    fn test_unbracketed_root_uses_flagged_estimate() {
        // Material entirely above the search interval: F > 0 at both bounds
        let fixed = vec![GeometricComponent::line("Bar", 2.0, 50.0)];
        let concrete = ConcreteGeometry {
            bottom_y_in: 24.0,
            top_y_in: 31.0,
            depth_in: 7.0,
            width_in: 120.0,
        };
        let axis = solve_neutral_axis(&fixed, &concrete, 8.0, &CrackedSolverConfig::default());
        assert!(axis.approximated);
        assert_eq!(axis.iterations, 0);

        let concrete_area = 120.0 * 7.0 / 8.0;
        let expected = (2.0 * 50.0 + concrete_area * 27.5) / (2.0 + concrete_area);
        assert_relative_eq!(axis.y_in, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_root_on_lower_bound_returned_directly() {
        // Bar exactly at y = 0 with zero-width concrete: F(0) is exactly zero
        let fixed = vec![GeometricComponent::line("Bar", 1.0, 0.0)];
        let concrete = ConcreteGeometry {
            bottom_y_in: 24.0,
            top_y_in: 31.0,
            depth_in: 7.0,
            width_in: 0.0,
        };
        let axis = solve_neutral_axis(&fixed, &concrete, 8.0, &CrackedSolverConfig::default());
        assert_eq!(axis.y_in, 0.0);
        assert_eq!(axis.iterations, 0);
        assert!(!axis.approximated);
    }

    #[test]
    fn test_iteration_cap_respected() {
        let region = sample_region();
        let fixed = fixed_components(&region);
        let concrete = ConcreteGeometry::from_region(&region);
        let config = CrackedSolverConfig { max_iters: 5, residual_tol: 0.0 };
        let axis = solve_neutral_axis(&fixed, &concrete, 8.0, &config);
        assert_eq!(axis.iterations, 5);
        assert!(axis.y_in > 0.0 && axis.y_in < concrete.top_y_in);
    }

    #[test]
    fn test_force_balance_without_concrete_above_top() {
        let fixed = vec![GeometricComponent::line("Bar", 2.0, 10.0)];
        let concrete = ConcreteGeometry {
            bottom_y_in: 24.0,
            top_y_in: 31.0,
            depth_in: 7.0,
            width_in: 120.0,
        };
        assert_relative_eq!(force_balance(&fixed, &concrete, 8.0, 31.0), 2.0 * (10.0 - 31.0));
        assert_relative_eq!(force_balance(&fixed, &concrete, 8.0, 40.0), 2.0 * (10.0 - 40.0));
        // Below the deck the whole 7" block is in compression
        let expected = 2.0 * (10.0 - 20.0) + 105.0 * (27.5 - 20.0);
        assert_relative_eq!(force_balance(&fixed, &concrete, 8.0, 20.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_default_config() {
        let config = CrackedSolverConfig::default();
        assert_eq!(config.max_iters, 120);
        assert_eq!(config.residual_tol, 1e-8);
    }
}
