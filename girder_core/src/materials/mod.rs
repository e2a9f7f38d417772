//! # Materials Database
//!
//! Material definitions for composite girder sections.
//!
//! - [`composite`] - Steel/concrete elastic properties and the modular ratio
//! - [`rebar`] - Standard reinforcing bar areas and diameters
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::{MaterialInput, MaterialProperties};
//!
//! let props = MaterialProperties::from_input(&MaterialInput::default()).unwrap();
//! println!("Ec = {:.0} ksi, n = {:.2}", props.ec_ksi, props.modular_ratio);
//! ```

pub mod composite;
pub mod rebar;

pub use composite::{EcMode, MaterialInput, MaterialProperties};
pub use rebar::{find_rebar, lookup_rebar, rebar_designations, RebarProperties, RebarSize};
