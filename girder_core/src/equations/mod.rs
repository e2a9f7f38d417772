//! # Structural Engineering Equations
//!
//! Fundamental section-property equations used by the section assembler and
//! the cracked-section solver. Keeping them in one place makes them easy to
//! verify against references and keeps the numeric guards in one spot.
//!
//! ## Sign Conventions
//!
//! - **Elevation**: Positive upward, measured from the bottom of steel (y = 0)
//! - **First moment**: Positive when area lies above the reference axis
//! - **Section modulus**: Always reported as a positive magnitude
//!
//! ## References
//!
//! - AISC 360-22: Specification for Structural Steel Buildings
//! - AASHTO LRFD Bridge Design Specifications, Section 6
//! - ACI 318-19: Building Code Requirements for Structural Concrete

pub mod section;

pub use section::{
    concrete_modulus_ksi,
    guarded_centroid,
    parallel_axis_transfer,
    rectangular_area,
    rectangular_moment_of_inertia,
    section_modulus_at,
    SECTION_EPSILON,
};
