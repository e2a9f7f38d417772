//! Cross-Section Region Input
//!
//! Geometry of one steel plate girder with its concrete deck, plus the top
//! and bottom reinforcement mats in the deck.
//!
//! ```text
//!   ┌──────────────────── b_eff ────────────────────┐  ← top of slab
//!   │  · · · · · · · · top mat · · · · · · · · · ·  │
//!   │                  t_slab                       │
//!   │  · · · · · · · bottom mat · · · · · · · · · · │
//!   └───────────────────────────────────────────────┘  ← bottom of slab
//!                   │   t_haunch    │
//!              ┌────┴───────────────┴────┐  ← top of steel (y = D)
//!              └──────────┬┬──────────────┘  tf_top × bf_top
//!                         ││ tw
//!                         ││
//!              ┌──────────┴┴──────────────┐
//!              └──────────────────────────┘  tf_bot × bf_bot, y = 0
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A smeared reinforcement mat.
///
/// ## JSON Example
///
/// ```json
/// { "bar_size": "#5", "spacing_in": 12.0, "clear_in": 2.0,
///   "alt_bar_size": "#6", "alt_spacing_in": 12.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementMat {
    /// Bar designation (e.g., "#5")
    pub bar_size: String,

    /// Bar spacing (in)
    pub spacing_in: f64,

    /// Clear distance from the concrete face to the bar (in)
    pub clear_in: f64,

    /// Alternating second bar designation
    #[serde(default)]
    pub alt_bar_size: Option<String>,

    /// Spacing of the alternating bars (in)
    #[serde(default)]
    pub alt_spacing_in: Option<f64>,
}

impl ReinforcementMat {
    /// Single-bar mat
    pub fn new(bar_size: impl Into<String>, spacing_in: f64, clear_in: f64) -> Self {
        ReinforcementMat {
            bar_size: bar_size.into(),
            spacing_in,
            clear_in,
            alt_bar_size: None,
            alt_spacing_in: None,
        }
    }

    /// Add an alternating bar to the mat
    pub fn with_alternate(mut self, bar_size: impl Into<String>, spacing_in: f64) -> Self {
        self.alt_bar_size = Some(bar_size.into());
        self.alt_spacing_in = Some(spacing_in);
        self
    }
}

/// Geometry of one girder region (positive or negative moment).
///
/// All dimensions in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionRegion {
    /// Overall steel depth D
    pub depth_in: f64,
    /// Web thickness tw
    pub tw_in: f64,
    /// Top flange thickness
    pub tf_top_in: f64,
    /// Top flange width
    pub bf_top_in: f64,
    /// Bottom flange thickness
    pub tf_bot_in: f64,
    /// Bottom flange width
    pub bf_bot_in: f64,
    /// Haunch thickness between top of steel and bottom of slab
    pub t_haunch_in: f64,
    /// Structural slab thickness
    pub t_slab_in: f64,
    /// Effective slab width
    pub b_eff_in: f64,
    /// Top reinforcement mat
    pub top_mat: ReinforcementMat,
    /// Bottom reinforcement mat
    pub bottom_mat: ReinforcementMat,
}

impl CrossSectionRegion {
    /// Validate that every geometric field is strictly positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("depth_in", self.depth_in, "Girder depth must be positive"),
            ("tw_in", self.tw_in, "Web thickness must be positive"),
            ("tf_top_in", self.tf_top_in, "Top flange thickness must be positive"),
            ("bf_top_in", self.bf_top_in, "Top flange width must be positive"),
            ("tf_bot_in", self.tf_bot_in, "Bottom flange thickness must be positive"),
            ("bf_bot_in", self.bf_bot_in, "Bottom flange width must be positive"),
            ("t_haunch_in", self.t_haunch_in, "Haunch thickness must be positive"),
            ("t_slab_in", self.t_slab_in, "Slab thickness must be positive"),
            ("b_eff_in", self.b_eff_in, "Effective slab width must be positive"),
        ];
        for (field, value, reason) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }
        Ok(())
    }

    /// Copy of this region with the bottom flange set equal to the top flange
    pub fn with_mirrored_flanges(&self) -> Self {
        CrossSectionRegion {
            tf_bot_in: self.tf_top_in,
            bf_bot_in: self.bf_top_in,
            ..self.clone()
        }
    }

    /// Clear web height between flanges, clamped at zero
    pub fn web_height_in(&self) -> f64 {
        (self.depth_in - self.tf_top_in - self.tf_bot_in).max(0.0)
    }

    /// Elevation of the bottom of the haunch (top of steel)
    pub fn concrete_bottom_in(&self) -> f64 {
        self.depth_in
    }

    /// Elevation of the bottom of the structural slab
    pub fn slab_bottom_in(&self) -> f64 {
        self.depth_in + self.t_haunch_in
    }

    /// Elevation of the top of slab
    pub fn concrete_top_in(&self) -> f64 {
        self.depth_in + self.t_haunch_in + self.t_slab_in
    }

    /// Combined haunch + slab depth
    pub fn concrete_depth_in(&self) -> f64 {
        self.t_haunch_in + self.t_slab_in
    }
}
