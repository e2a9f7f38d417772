//! Geometric Components
//!
//! A cross-section is assembled from discrete components, each with an area,
//! a centroid elevation, and an inertia about its own centroid. Components are
//! built fresh for every calculation and consumed by the summarizer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::region::{CrossSectionRegion, ReinforcementMat};
use crate::equations::section::{rectangular_area, rectangular_moment_of_inertia};
use crate::materials::rebar::{find_rebar, lookup_rebar};

/// Assumption note emitted for alternating-bar mats
pub const ALTERNATING_BARS_ASSUMPTION: &str =
    "Alternating bars transformed with As/in = 0.5 * (A1/s1 + A2/s2).";

/// One discrete piece of a cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricComponent {
    /// Descriptive name (e.g., "Top flange", "Concrete (n)")
    pub name: String,
    /// Area (in²)
    pub area_in2: f64,
    /// Centroid elevation above the bottom of steel (in)
    pub y_in: f64,
    /// Moment of inertia about the component's own centroid (in⁴)
    pub i_local_in4: f64,
}

impl GeometricComponent {
    /// Rectangle of width `b` and height `h` whose underside sits at `y_bottom`.
    ///
    /// ```rust
    /// use girder_core::section::components::GeometricComponent;
    ///
    /// let flange = GeometricComponent::rectangle("Bottom flange", 8.0, 0.71, 0.0);
    /// assert!((flange.area_in2 - 5.68).abs() < 1e-12);
    /// assert!((flange.y_in - 0.355).abs() < 1e-12);
    /// ```
    pub fn rectangle(name: impl Into<String>, b: f64, h: f64, y_bottom: f64) -> Self {
        GeometricComponent {
            name: name.into(),
            area_in2: rectangular_area(b, h),
            y_in: y_bottom + h / 2.0,
            i_local_in4: rectangular_moment_of_inertia(b, h),
        }
    }

    /// Line element with area but no local inertia (smeared reinforcement)
    pub fn line(name: impl Into<String>, area_in2: f64, y_in: f64) -> Self {
        GeometricComponent {
            name: name.into(),
            area_in2,
            y_in,
            i_local_in4: 0.0,
        }
    }

    /// First moment of area about an axis at `axis_y`
    pub fn first_moment_about(&self, axis_y: f64) -> f64 {
        self.area_in2 * (self.y_in - axis_y)
    }
}

/// Decompose the steel girder into bottom flange, web, and top flange.
///
/// Web height is clamped to zero when the flanges overlap.
pub fn build_steel_components(region: &CrossSectionRegion) -> Vec<GeometricComponent> {
    let web_height = region.web_height_in();
    vec![
        GeometricComponent::rectangle("Bottom flange", region.bf_bot_in, region.tf_bot_in, 0.0),
        GeometricComponent::rectangle("Web", region.tw_in, web_height, region.tf_bot_in),
        GeometricComponent::rectangle(
            "Top flange",
            region.bf_top_in,
            region.tf_top_in,
            region.depth_in - region.tf_top_in,
        ),
    ]
}

/// Which face of the deck a mat is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatPosition {
    Top,
    Bottom,
}

impl MatPosition {
    pub fn display_name(&self) -> &'static str {
        match self {
            MatPosition::Top => "Top mat",
            MatPosition::Bottom => "Bottom mat",
        }
    }
}

/// Smeared properties of one reinforcement mat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayer {
    /// Which mat this is
    pub position: MatPosition,
    /// Reinforcement area per unit width (in²/in)
    pub area_per_in: f64,
    /// Elevation of the bar centroid above the bottom of steel (in)
    pub y_centroid_in: f64,
    /// Human-readable description of how the layer was derived
    pub detail: String,
    /// Assumption note, present for alternating-bar mats
    pub assumption: Option<String>,
}

impl BarLayer {
    /// Layer that contributes nothing, located at the bottom concrete face
    fn ignored(position: MatPosition, concrete_bottom_y: f64, reason: String) -> Self {
        BarLayer {
            position,
            area_per_in: 0.0,
            y_centroid_in: concrete_bottom_y,
            detail: format!("{} ignored: {}", position.display_name(), reason),
            assumption: None,
        }
    }

    /// Smeared component over an effective width
    pub fn component(&self, width_in: f64) -> GeometricComponent {
        let name = match self.position {
            MatPosition::Top => "Top reinforcement",
            MatPosition::Bottom => "Bottom reinforcement",
        };
        GeometricComponent::line(name, self.area_per_in * width_in, self.y_centroid_in)
    }
}

/// Smear a reinforcement mat into an area per inch at a single elevation.
///
/// Incomplete mats (unknown bar, non-positive spacing, negative cover) degrade
/// to a zero-area layer instead of failing the calculation.
///
/// ```rust
/// use girder_core::section::components::{compute_bar_layer, MatPosition};
/// use girder_core::section::region::ReinforcementMat;
///
/// let mat = ReinforcementMat::new("#5", 12.0, 2.0).with_alternate("#6", 12.0);
/// let layer = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
/// assert!((layer.area_per_in - 0.03125).abs() < 1e-12);
/// assert!(layer.assumption.is_some());
/// ```
pub fn compute_bar_layer(
    mat: &ReinforcementMat,
    concrete_bottom_y: f64,
    concrete_top_y: f64,
    position: MatPosition,
) -> BarLayer {
    let primary = match lookup_rebar(&mat.bar_size) {
        Ok(bar) => bar,
        Err(err) => return BarLayer::ignored(position, concrete_bottom_y, err.to_string()),
    };
    if !(mat.spacing_in.is_finite() && mat.spacing_in > 0.0) {
        return BarLayer::ignored(
            position,
            concrete_bottom_y,
            format!("spacing must be positive (got {})", mat.spacing_in),
        );
    }
    if !(mat.clear_in.is_finite() && mat.clear_in >= 0.0) {
        return BarLayer::ignored(
            position,
            concrete_bottom_y,
            format!("clear distance cannot be negative (got {})", mat.clear_in),
        );
    }

    let alternate = match (mat.alt_bar_size.as_deref(), mat.alt_spacing_in) {
        (Some(size), Some(spacing)) if spacing.is_finite() && spacing > 0.0 => {
            find_rebar(size).map(|bar| (size.trim(), bar, spacing))
        }
        _ => None,
    };

    let (area_per_in, diameter_in, bars, assumption) = match alternate {
        Some((alt_size, alt_bar, alt_spacing)) => (
            0.5 * (primary.area_in2 / mat.spacing_in + alt_bar.area_in2 / alt_spacing),
            0.5 * (primary.diameter_in + alt_bar.diameter_in),
            format!(
                "{} @ {:.2} in alternating with {} @ {:.2} in",
                mat.bar_size.trim(),
                mat.spacing_in,
                alt_size,
                alt_spacing
            ),
            Some(ALTERNATING_BARS_ASSUMPTION.to_string()),
        ),
        None => (
            primary.area_in2 / mat.spacing_in,
            primary.diameter_in,
            format!("{} @ {:.2} in", mat.bar_size.trim(), mat.spacing_in),
            None,
        ),
    };

    let radius = diameter_in / 2.0;
    let y_centroid_in = match position {
        MatPosition::Top => concrete_top_y - (mat.clear_in + radius),
        MatPosition::Bottom => concrete_bottom_y + mat.clear_in + radius,
    };

    let mut detail = format!(
        "{}: {}, clear {:.2} in; As = {:.4} in²/in at y = {:.3} in",
        position.display_name(),
        bars,
        mat.clear_in,
        area_per_in,
        y_centroid_in
    );
    if mat.alt_bar_size.is_some() && alternate.is_none() {
        detail.push_str(" (alternate bar ignored: invalid size or spacing)");
    }
    if !(concrete_bottom_y..=concrete_top_y).contains(&y_centroid_in) {
        debug!(
            position = ?position,
            y_centroid_in,
            concrete_bottom_y,
            concrete_top_y,
            "bar centroid outside slab"
        );
        detail.push_str(" (bar centroid lies outside the slab depth)");
    }

    debug!(position = ?position, area_per_in, y_centroid_in, "bar layer");

    BarLayer {
        position,
        area_per_in,
        y_centroid_in,
        detail,
        assumption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::region::tests::sample_region;
    use approx::assert_relative_eq;

    #[test]
    fn test_steel_components() {
        let region = sample_region();
        let parts = build_steel_components(&region);
        assert_eq!(parts.len(), 3);

        let names: Vec<&str> = parts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bottom flange", "Web", "Top flange"]);

        assert_relative_eq!(parts[0].y_in, 0.355, epsilon = 1e-12);
        assert_relative_eq!(parts[1].y_in, 0.71 + 22.58 / 2.0, epsilon = 1e-12);
        assert_relative_eq!(parts[2].y_in, 24.0 - 0.355, epsilon = 1e-12);
        assert_relative_eq!(parts[1].area_in2, 0.44 * 22.58, epsilon = 1e-12);
        assert_relative_eq!(parts[2].i_local_in4, 8.0 * 0.71_f64.powi(3) / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_overlapping_flanges_give_empty_web() {
        let mut region = sample_region();
        region.depth_in = 1.0;
        let parts = build_steel_components(&region);
        assert_eq!(parts[1].area_in2, 0.0);
        assert_eq!(parts[1].i_local_in4, 0.0);
    }

    #[test]
    fn test_single_bar_layer() {
        let mat = ReinforcementMat::new("#5", 12.0, 2.0);
        let top = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
        assert_relative_eq!(top.area_per_in, 0.31 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(top.y_centroid_in, 31.0 - 2.0 - 0.3125, epsilon = 1e-12);
        assert!(top.assumption.is_none());
        assert!(top.detail.starts_with("Top mat: #5 @ 12.00 in"));

        let bottom = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Bottom);
        assert_relative_eq!(bottom.y_centroid_in, 26.0 + 2.0 + 0.3125, epsilon = 1e-12);
    }

    #[test]
    fn test_alternating_bar_layer() {
        let mat = ReinforcementMat::new("#5", 12.0, 2.0).with_alternate("#6", 12.0);
        let layer = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
        assert_relative_eq!(layer.area_per_in, 0.5 * (0.31 / 12.0 + 0.44 / 12.0), epsilon = 1e-12);
        assert_relative_eq!(layer.area_per_in, 0.03125, epsilon = 1e-12);
        // Average diameter 0.6875, radius 0.34375
        assert_relative_eq!(layer.y_centroid_in, 31.0 - 2.0 - 0.34375, epsilon = 1e-12);
        assert_eq!(layer.assumption.as_deref(), Some(ALTERNATING_BARS_ASSUMPTION));
        assert!(layer.detail.contains("alternating with #6"));
    }

    #[test]
    fn test_invalid_alternate_falls_back_to_single() {
        let mat = ReinforcementMat::new("#5", 12.0, 2.0).with_alternate("#6", 0.0);
        let layer = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
        assert_relative_eq!(layer.area_per_in, 0.31 / 12.0, epsilon = 1e-12);
        assert!(layer.assumption.is_none());
        assert!(layer.detail.contains("alternate bar ignored"));
    }

    #[test]
    fn test_unknown_bar_degrades_to_zero() {
        let mat = ReinforcementMat::new("#13", 12.0, 2.0);
        let layer = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
        assert_eq!(layer.area_per_in, 0.0);
        assert_eq!(layer.y_centroid_in, 26.0);
        assert!(layer.detail.contains("#13"), "detail = {}", layer.detail);
    }

    #[test]
    fn test_bad_spacing_and_cover_degrade_to_zero() {
        let zero_spacing = ReinforcementMat::new("#5", 0.0, 2.0);
        let layer = compute_bar_layer(&zero_spacing, 26.0, 31.0, MatPosition::Bottom);
        assert_eq!(layer.area_per_in, 0.0);
        assert!(layer.detail.contains("spacing"));

        let negative_cover = ReinforcementMat::new("#5", 12.0, -0.5);
        let layer = compute_bar_layer(&negative_cover, 26.0, 31.0, MatPosition::Bottom);
        assert_eq!(layer.area_per_in, 0.0);
        assert!(layer.detail.contains("clear distance"));
    }

    #[test]
    fn test_cover_deeper_than_slab_is_noted() {
        // 5" slab from y = 26 to 31, 6" clear pushes the top bars below the slab
        let mat = ReinforcementMat::new("#5", 12.0, 6.0);
        let layer = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
        assert_relative_eq!(layer.y_centroid_in, 31.0 - 6.0 - 0.3125, epsilon = 1e-12);
        assert!(layer.detail.contains("outside the slab depth"), "detail = {}", layer.detail);

        let shallow = ReinforcementMat::new("#5", 12.0, 2.0);
        let inside = compute_bar_layer(&shallow, 26.0, 31.0, MatPosition::Top);
        assert!(!inside.detail.contains("outside the slab depth"));
    }

    #[test]
    fn test_layer_component_is_line_element() {
        let mat = ReinforcementMat::new("#5", 12.0, 2.0);
        let layer = compute_bar_layer(&mat, 26.0, 31.0, MatPosition::Top);
        let component = layer.component(120.0);
        assert_relative_eq!(component.area_in2, 3.1, epsilon = 1e-12);
        assert_eq!(component.i_local_in4, 0.0);
        assert_eq!(component.name, "Top reinforcement");
    }
}
