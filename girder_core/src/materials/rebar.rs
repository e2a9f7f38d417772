//! Reinforcing Bar Properties (ASTM A615 / A706)
//!
//! Nominal area and diameter for standard inch-pound bar designations.
//! The table is fixed data; designations not in it are reported as absent
//! and the caller decides how to degrade.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::rebar::{find_rebar, RebarSize};
//!
//! let bar = find_rebar("#5").unwrap();
//! assert_eq!(bar.area_in2, 0.31);
//! assert_eq!(bar.diameter_in, 0.625);
//!
//! assert!(find_rebar("#13").is_none());
//! assert_eq!(RebarSize::ALL.len(), 11);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard bar designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarSize {
    #[serde(rename = "#3")]
    No3,
    #[serde(rename = "#4")]
    No4,
    #[serde(rename = "#5")]
    No5,
    #[serde(rename = "#6")]
    No6,
    #[serde(rename = "#7")]
    No7,
    #[serde(rename = "#8")]
    No8,
    #[serde(rename = "#9")]
    No9,
    #[serde(rename = "#10")]
    No10,
    #[serde(rename = "#11")]
    No11,
    #[serde(rename = "#14")]
    No14,
    #[serde(rename = "#18")]
    No18,
}

/// Nominal properties of one bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarProperties {
    /// Nominal cross-sectional area (in²)
    pub area_in2: f64,
    /// Nominal diameter (in)
    pub diameter_in: f64,
}

impl RebarSize {
    /// All bar sizes in the order offered for selection
    pub const ALL: [RebarSize; 11] = [
        RebarSize::No3,
        RebarSize::No4,
        RebarSize::No5,
        RebarSize::No6,
        RebarSize::No7,
        RebarSize::No8,
        RebarSize::No9,
        RebarSize::No10,
        RebarSize::No11,
        RebarSize::No14,
        RebarSize::No18,
    ];

    /// Designation string (e.g., "#5")
    pub fn designation(&self) -> &'static str {
        match self {
            RebarSize::No3 => "#3",
            RebarSize::No4 => "#4",
            RebarSize::No5 => "#5",
            RebarSize::No6 => "#6",
            RebarSize::No7 => "#7",
            RebarSize::No8 => "#8",
            RebarSize::No9 => "#9",
            RebarSize::No10 => "#10",
            RebarSize::No11 => "#11",
            RebarSize::No14 => "#14",
            RebarSize::No18 => "#18",
        }
    }

    /// Nominal area and diameter per ASTM A615 Table 1
    pub fn properties(&self) -> RebarProperties {
        let (area_in2, diameter_in) = match self {
            RebarSize::No3 => (0.11, 0.375),
            RebarSize::No4 => (0.20, 0.500),
            RebarSize::No5 => (0.31, 0.625),
            RebarSize::No6 => (0.44, 0.750),
            RebarSize::No7 => (0.60, 0.875),
            RebarSize::No8 => (0.79, 1.000),
            RebarSize::No9 => (1.00, 1.128),
            RebarSize::No10 => (1.27, 1.270),
            RebarSize::No11 => (1.56, 1.410),
            RebarSize::No14 => (2.25, 1.693),
            RebarSize::No18 => (4.00, 2.257),
        };
        RebarProperties { area_in2, diameter_in }
    }

    /// Parse a designation, tolerating surrounding whitespace and a missing `#`
    pub fn from_designation(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let number = trimmed.strip_prefix('#').unwrap_or(trimmed);
        RebarSize::ALL
            .into_iter()
            .find(|size| &size.designation()[1..] == number)
    }
}

impl std::fmt::Display for RebarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

/// Look up bar properties by designation, `None` if not in the table
pub fn find_rebar(designation: &str) -> Option<RebarProperties> {
    RebarSize::from_designation(designation).map(|size| size.properties())
}

/// Look up bar properties by designation
pub fn lookup_rebar(designation: &str) -> CalcResult<RebarProperties> {
    find_rebar(designation).ok_or_else(|| CalcError::rebar_not_found(designation.trim()))
}

/// Ordered list of valid designations
pub fn rebar_designations() -> Vec<&'static str> {
    RebarSize::ALL.iter().map(|size| size.designation()).collect()
}
