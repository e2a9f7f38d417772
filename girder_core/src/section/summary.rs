//! Section Summarizer
//!
//! Aggregates a component list into total area, centroid, moment of inertia
//! (parallel-axis theorem), and section moduli at named reference fibers.

use serde::{Deserialize, Serialize};

use super::components::GeometricComponent;
use crate::equations::section::{guarded_centroid, parallel_axis_transfer, section_modulus_at};

/// Named fiber at which a section modulus is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceFiber {
    TopOfSlab,
    TopOfSteel,
    BottomOfSteel,
}

impl ReferenceFiber {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceFiber::TopOfSlab => "Top of slab",
            ReferenceFiber::TopOfSteel => "Top of steel",
            ReferenceFiber::BottomOfSteel => "Bottom of steel",
        }
    }
}

impl std::fmt::Display for ReferenceFiber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Section modulus at one fiber. `s_in3` is `None` when the fiber coincides
/// with the neutral axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberModulus {
    pub fiber: ReferenceFiber,
    /// Fiber elevation above the bottom of steel (in)
    pub y_in: f64,
    /// Section modulus (in³)
    pub s_in3: Option<f64>,
}

/// Aggregate properties of one section case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    /// Total (transformed) area (in²)
    pub total_area_in2: f64,
    /// Elevation of the axis the inertia is taken about (in)
    pub y_bar_in: f64,
    /// Moment of inertia about `y_bar_in` (in⁴)
    pub i_in4: f64,
    /// Section moduli, in the order the fibers were requested
    pub section_moduli: Vec<FiberModulus>,
}

impl SectionSummary {
    /// Section modulus at a fiber, if requested and finite
    pub fn modulus(&self, fiber: ReferenceFiber) -> Option<f64> {
        self.section_moduli
            .iter()
            .find(|m| m.fiber == fiber)
            .and_then(|m| m.s_in3)
    }
}

/// Summarize components about their own composite centroid.
///
/// ```rust
/// use girder_core::section::components::GeometricComponent;
/// use girder_core::section::summary::{summarize_section, ReferenceFiber};
///
/// let parts = [GeometricComponent::rectangle("Plate", 2.0, 6.0, 0.0)];
/// let summary = summarize_section(&parts, &[(ReferenceFiber::TopOfSteel, 6.0)]);
/// assert!((summary.y_bar_in - 3.0).abs() < 1e-12);
/// assert!((summary.i_in4 - 36.0).abs() < 1e-12);
/// assert_eq!(summary.modulus(ReferenceFiber::TopOfSteel), Some(12.0));
/// ```
pub fn summarize_section(
    components: &[GeometricComponent],
    reference_fibers: &[(ReferenceFiber, f64)],
) -> SectionSummary {
    let total_area: f64 = components.iter().map(|c| c.area_in2).sum();
    let first_moment: f64 = components.iter().map(|c| c.area_in2 * c.y_in).sum();
    let y_bar = guarded_centroid(first_moment, total_area);
    summarize_about(components, y_bar, reference_fibers)
}

/// Summarize components about a prescribed axis elevation.
///
/// Used directly by the cracked-section solver, whose axis comes from
/// equilibrium rather than from the centroid of a fixed component list.
pub fn summarize_about(
    components: &[GeometricComponent],
    axis_y: f64,
    reference_fibers: &[(ReferenceFiber, f64)],
) -> SectionSummary {
    let total_area: f64 = components.iter().map(|c| c.area_in2).sum();
    let i: f64 = components
        .iter()
        .map(|c| c.i_local_in4 + parallel_axis_transfer(c.area_in2, c.y_in, axis_y))
        .sum();

    let section_moduli = reference_fibers
        .iter()
        .map(|&(fiber, y_in)| FiberModulus {
            fiber,
            y_in,
            s_in3: section_modulus_at(i, y_in, axis_y),
        })
        .collect();

    SectionSummary {
        total_area_in2: total_area,
        y_bar_in: axis_y,
        i_in4: i,
        section_moduli,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_rectangle_stack() {
        // 10x2 plate on top of a 2x10 stem: classic T-section
        let parts = [
            GeometricComponent::rectangle("Stem", 2.0, 10.0, 0.0),
            GeometricComponent::rectangle("Flange", 10.0, 2.0, 10.0),
        ];
        let summary = summarize_section(&parts, &[(ReferenceFiber::TopOfSteel, 12.0)]);

        assert_relative_eq!(summary.total_area_in2, 40.0);
        // ȳ = (20*5 + 20*11) / 40 = 8
        assert_relative_eq!(summary.y_bar_in, 8.0, epsilon = 1e-12);
        // I = 166.67 + 20*9 + 6.67 + 20*9 = 533.33
        assert_relative_eq!(summary.i_in4, 1600.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(
            summary.modulus(ReferenceFiber::TopOfSteel).unwrap(),
            1600.0 / 3.0 / 4.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_section_is_finite() {
        let summary = summarize_section(&[], &[(ReferenceFiber::BottomOfSteel, 0.0)]);
        assert_eq!(summary.total_area_in2, 0.0);
        assert!(summary.y_bar_in.is_finite());
        assert_eq!(summary.i_in4, 0.0);
        // Fiber coincides with the guarded centroid
        assert_eq!(summary.modulus(ReferenceFiber::BottomOfSteel), None);
    }

    #[test]
    fn test_fiber_at_centroid_has_no_modulus() {
        let parts = [GeometricComponent::rectangle("Plate", 4.0, 4.0, 0.0)];
        let summary = summarize_section(
            &parts,
            &[(ReferenceFiber::TopOfSteel, 2.0), (ReferenceFiber::BottomOfSteel, 0.0)],
        );
        assert_eq!(summary.section_moduli[0].s_in3, None);
        assert!(summary.section_moduli[1].s_in3.is_some());
    }

    #[test]
    fn test_fiber_order_preserved() {
        let parts = [GeometricComponent::rectangle("Plate", 4.0, 4.0, 0.0)];
        let fibers = [
            (ReferenceFiber::TopOfSlab, 10.0),
            (ReferenceFiber::TopOfSteel, 4.0),
            (ReferenceFiber::BottomOfSteel, 0.0),
        ];
        let summary = summarize_section(&parts, &fibers);
        let order: Vec<ReferenceFiber> = summary.section_moduli.iter().map(|m| m.fiber).collect();
        assert_eq!(
            order,
            vec![ReferenceFiber::TopOfSlab, ReferenceFiber::TopOfSteel, ReferenceFiber::BottomOfSteel]
        );
        assert_eq!(summary.modulus(ReferenceFiber::TopOfSlab), Some(summary.i_in4 / 8.0));
    }

    #[test]
    fn test_summarize_about_offset_axis() {
        let parts = [GeometricComponent::rectangle("Plate", 2.0, 6.0, 0.0)];
        let about_base = summarize_about(&parts, 0.0, &[]);
        // I_base = bh³/3 = 144
        assert_relative_eq!(about_base.i_in4, 144.0, epsilon = 1e-12);
        assert_eq!(about_base.y_bar_in, 0.0);
    }

    #[test]
    fn test_fiber_serialization() {
        let json = serde_json::to_string(&ReferenceFiber::TopOfSlab).unwrap();
        assert_eq!(json, "\"topOfSlab\"");
    }
}
