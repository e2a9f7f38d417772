//! # Section Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function from input to result
//!
//! ## Available Calculations
//!
//! - [`section_props`] - Composite girder section properties (steel, n, 3n, cracked)

pub mod section_props;

pub use section_props::{
    compute_section_props,
    compute_section_props_with,
    default_input,
    rebar_options,
    RegionResult,
    SectionPropsInput,
    SectionPropsResult,
};
