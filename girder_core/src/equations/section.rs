//! # Cross-Section Property Formulas
//!
//! Geometric formulas used to assemble built-up and composite cross-sections
//! from rectangles. Elevations are measured upward from the bottom of steel.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area (in²)
//! - `I` = Moment of inertia (in⁴)
//! - `S` = Section modulus I/c (in³), c = distance from centroid to fiber
//! - `ȳ` = Centroid elevation (in)
//! - `b` = Width of a rectangle
//! - `h` = Height of a rectangle
//!
//! ## References
//!
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties
//! - AASHTO LRFD Bridge Design Specifications, Article 6.10.1.1 (composite sections)
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

/// Numeric guard for near-zero areas and centroid-to-fiber distances.
pub const SECTION_EPSILON: f64 = 1e-9;

// =============================================================================
// RECTANGLE PROPERTIES
// =============================================================================

/// Calculate area of a rectangle
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use girder_core::equations::section::rectangular_area;
///
/// // 8" x 0.71" flange plate
/// let area = rectangular_area(8.0, 0.71);
/// assert!((area - 5.68).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate moment of inertia of a rectangle about its own centroid
///
/// ```text
///     ┌─────────┐
///   h │ ════════│ ← local axis at h/2
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use girder_core::equations::section::rectangular_moment_of_inertia;
///
/// // 0.44" x 22.58" web
/// let i = rectangular_moment_of_inertia(0.44, 22.58);
/// assert!((i - 422.13).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// COMPOSITE AGGREGATION
// =============================================================================

/// Transfer term of the parallel-axis theorem
///
/// # Formula
/// A × (y − y_axis)²
///
/// Added to a component's local inertia to move it to `y_axis`.
#[inline]
pub fn parallel_axis_transfer(area: f64, y: f64, y_axis: f64) -> f64 {
    area * (y - y_axis).powi(2)
}

/// Centroid from total area and first moment, guarded against zero area
///
/// # Formula
/// ȳ = Σ(A·y) / max(ΣA, ε)
///
/// For an empty or zero-area section the result is `0.0` and carries no
/// meaning; callers check the total area before using it.
///
/// # Example
/// ```rust
/// use girder_core::equations::section::guarded_centroid;
///
/// assert!((guarded_centroid(20.0, 4.0) - 5.0).abs() < 1e-12);
/// assert_eq!(guarded_centroid(0.0, 0.0), 0.0);
/// ```
#[inline]
pub fn guarded_centroid(first_moment: f64, total_area: f64) -> f64 {
    first_moment / total_area.max(SECTION_EPSILON)
}

/// Section modulus at a fiber, or `None` when the fiber sits on the axis
///
/// # Formula
/// S = I / |y_fiber − ȳ|
///
/// # Example
/// ```rust
/// use girder_core::equations::section::section_modulus_at;
///
/// assert_eq!(section_modulus_at(100.0, 10.0, 5.0), Some(20.0));
/// assert_eq!(section_modulus_at(100.0, 5.0, 5.0), None);
/// ```
#[inline]
pub fn section_modulus_at(i: f64, fiber_y: f64, axis_y: f64) -> Option<f64> {
    let c = (fiber_y - axis_y).abs();
    if c < SECTION_EPSILON {
        return None;
    }
    let s = i / c;
    s.is_finite().then_some(s)
}

// =============================================================================
// MATERIAL RELATIONSHIPS
// =============================================================================

/// Concrete modulus of elasticity from compressive strength
///
/// # Formula
/// Ec = 57 × √(f'c × 1000)   (f'c in ksi, Ec in ksi)
///
/// This is the normal-weight form of ACI 318 19.2.2.1 (Ec = 57000√f'c psi).
///
/// # Example
/// ```rust
/// use girder_core::equations::section::concrete_modulus_ksi;
///
/// let ec = concrete_modulus_ksi(4.0);
/// assert!((ec - 3604.997).abs() < 0.01);
/// ```
#[inline]
pub fn concrete_modulus_ksi(fc_ksi: f64) -> f64 {
    57.0 * (fc_ksi * 1000.0).sqrt()
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_rectangular_area() {
        let a = rectangular_area(120.0, 7.0);
        assert!(approx_eq(a, 840.0), "A = {} (expected 840)", a);
    }

    #[test]
    fn test_rectangular_moment_of_inertia() {
        // I = 8 * 0.71^3 / 12 = 0.2386
        let i = rectangular_moment_of_inertia(8.0, 0.71);
        assert!(approx_eq(i, 0.2386), "I = {} (expected 0.2386)", i);
    }

    #[test]
    fn test_parallel_axis_transfer() {
        let term = parallel_axis_transfer(5.68, 23.645, 12.0);
        let expected = 5.68 * 11.645_f64.powi(2);
        assert!(approx_eq(term, expected), "Ad² = {} (expected {})", term, expected);
        // Symmetric about the axis
        assert_eq!(
            parallel_axis_transfer(2.0, 3.0, 5.0),
            parallel_axis_transfer(2.0, 7.0, 5.0)
        );
    }

    #[test]
    fn test_guarded_centroid_zero_area() {
        let y = guarded_centroid(0.0, 0.0);
        assert!(y.is_finite());
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_section_modulus_at_centroid_is_none() {
        assert_eq!(section_modulus_at(500.0, 12.0, 12.0), None);
        assert_eq!(section_modulus_at(500.0, 12.0, 12.0 + 1e-12), None);
    }

    #[test]
    fn test_section_modulus_is_distance_independent_of_side() {
        let above = section_modulus_at(600.0, 24.0, 12.0).unwrap();
        let below = section_modulus_at(600.0, 0.0, 12.0).unwrap();
        assert!(approx_eq(above, 50.0));
        assert!(approx_eq(below, 50.0));
    }

    #[test]
    fn test_concrete_modulus() {
        // 57 * sqrt(4000) = 3605.0 ksi
        let ec = concrete_modulus_ksi(4.0);
        assert!(approx_eq(ec, 3605.0), "Ec = {} (expected 3605)", ec);
        let n = 29000.0 / ec;
        assert!(approx_eq(n, 8.04), "n = {} (expected 8.04)", n);
    }
}
