//! # girder_core - Composite Girder Section Properties
//!
//! `girder_core` computes elastic and cracked section properties (area,
//! centroid, moment of inertia, section moduli) for a steel girder acting
//! compositely with a concrete deck. All inputs and outputs are
//! JSON-serializable so results can be handed straight to a report layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **No NaN out**: Every number is finite, or `None` when undefined
//! - **Per-region errors**: A bad region is reported, the other one still computes
//!
//! ## Quick Start
//!
//! ```rust
//! use girder_core::{compute_section_props, default_input};
//!
//! let result = compute_section_props(&default_input());
//! assert!(result.is_ok());
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("cracked_negative"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Region orchestration and public entry points
//! - [`section`] - Component builder, summarizer, transformed and cracked sections
//! - [`materials`] - Steel/concrete properties and the rebar table
//! - [`equations`] - Section property formulas
//! - [`assumptions`] - Ordered assumption notes
//! - [`errors`] - Structured error types

pub mod assumptions;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_section_props, compute_section_props_with, default_input, rebar_options, RegionResult,
    SectionPropsInput, SectionPropsResult,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialInput, MaterialProperties};
pub use section::{CrossSectionRegion, ReinforcementMat};
