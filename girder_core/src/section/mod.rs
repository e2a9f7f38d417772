//! # Composite Section Engine
//!
//! Builds section properties for a steel girder with a concrete deck:
//!
//! - [`region`] - Girder, deck, and reinforcement mat input
//! - [`components`] - Discrete geometric components and bar-layer smearing
//! - [`summary`] - Area, centroid, inertia, and section moduli from components
//! - [`transformed`] - Steel-only and uncracked transformed sections (n, 3n)
//! - [`cracked`] - Cracked negative-moment section (bisection on the neutral axis)
//!
//! Elevations are measured upward from the bottom of steel.

pub mod components;
pub mod cracked;
pub mod region;
pub mod summary;
pub mod transformed;

pub use components::{BarLayer, GeometricComponent, MatPosition};
pub use cracked::{CrackedSection, CrackedSolverConfig};
pub use region::{CrossSectionRegion, ReinforcementMat};
pub use summary::{FiberModulus, ReferenceFiber, SectionSummary};
pub use transformed::{ConcreteGeometry, RegionBars, SteelSection, TransformedSection};
