//! Steel and Concrete Material Properties
//!
//! Elastic properties for a composite steel girder with a concrete deck.
//! `MaterialProperties` is only built through [`MaterialProperties::from_input`],
//! which guarantees a positive, finite modular ratio.

use serde::{Deserialize, Serialize};

use crate::equations::section::{concrete_modulus_ksi, SECTION_EPSILON};
use crate::errors::{CalcError, CalcResult};

/// How the concrete modulus Ec is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EcMode {
    /// Ec = 57·√(f'c·1000) ksi
    #[default]
    Auto,
    /// User-supplied Ec
    Manual,
}

impl EcMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            EcMode::Auto => "Computed from f'c",
            EcMode::Manual => "User-supplied",
        }
    }
}

/// Material input as entered by the user.
///
/// ## JSON Example
///
/// ```json
/// { "es_ksi": 29000.0, "fc_ksi": 4.0, "ec_mode": "auto" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    /// Steel modulus of elasticity Es (ksi)
    pub es_ksi: f64,

    /// Concrete compressive strength f'c (ksi)
    pub fc_ksi: f64,

    /// Ec derivation mode
    #[serde(default)]
    pub ec_mode: EcMode,

    /// Manual Ec (ksi), used only when `ec_mode` is `Manual`
    #[serde(default)]
    pub ec_manual_ksi: Option<f64>,
}

impl Default for MaterialInput {
    fn default() -> Self {
        MaterialInput {
            es_ksi: 29000.0,
            fc_ksi: 4.0,
            ec_mode: EcMode::Auto,
            ec_manual_ksi: None,
        }
    }
}

impl MaterialInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.es_ksi.is_finite() && self.es_ksi > 0.0) {
            return Err(CalcError::invalid_input(
                "es_ksi",
                self.es_ksi.to_string(),
                "Steel modulus must be positive",
            ));
        }
        if !(self.fc_ksi.is_finite() && self.fc_ksi > 0.0) {
            return Err(CalcError::invalid_input(
                "fc_ksi",
                self.fc_ksi.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if self.ec_mode == EcMode::Manual {
            match self.ec_manual_ksi {
                None => return Err(CalcError::missing_field("ec_manual_ksi")),
                Some(ec) if !(ec.is_finite() && ec > 0.0) => {
                    return Err(CalcError::invalid_input(
                        "ec_manual_ksi",
                        ec.to_string(),
                        "Concrete modulus must be positive",
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Derived elastic properties used by every section case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Steel modulus Es (ksi)
    pub es_ksi: f64,
    /// Concrete strength f'c (ksi)
    pub fc_ksi: f64,
    /// Concrete modulus Ec (ksi)
    pub ec_ksi: f64,
    /// How Ec was obtained
    pub ec_mode: EcMode,
    /// Short-term modular ratio n = Es/Ec
    pub modular_ratio: f64,
    /// Long-term modular ratio 3n
    pub modular_ratio_long_term: f64,
}

impl MaterialProperties {
    /// Build derived properties from validated input.
    ///
    /// ```rust
    /// use girder_core::materials::composite::{MaterialInput, MaterialProperties};
    ///
    /// let props = MaterialProperties::from_input(&MaterialInput::default()).unwrap();
    /// assert!((props.modular_ratio - 8.04).abs() < 0.01);
    /// assert!((props.modular_ratio_long_term - 3.0 * props.modular_ratio).abs() < 1e-12);
    /// ```
    pub fn from_input(input: &MaterialInput) -> CalcResult<Self> {
        input.validate()?;

        let ec_ksi = match (input.ec_mode, input.ec_manual_ksi) {
            (EcMode::Manual, Some(ec)) => ec,
            _ => concrete_modulus_ksi(input.fc_ksi),
        };
        let modular_ratio = input.es_ksi / ec_ksi.max(SECTION_EPSILON);

        if !(modular_ratio.is_finite() && modular_ratio > 0.0) {
            return Err(CalcError::calculation_failed(
                "Modular ratio",
                format!("n = Es/Ec is not a positive finite number ({})", modular_ratio),
            ));
        }

        Ok(MaterialProperties {
            es_ksi: input.es_ksi,
            fc_ksi: input.fc_ksi,
            ec_ksi,
            ec_mode: input.ec_mode,
            modular_ratio,
            modular_ratio_long_term: 3.0 * modular_ratio,
        })
    }

    /// Assumption note describing how Ec was obtained
    pub fn ec_assumption(&self) -> String {
        match self.ec_mode {
            EcMode::Auto => format!(
                "Ec = 57 * sqrt(f'c * 1000) = {:.0} ksi (normal-weight concrete).",
                self.ec_ksi
            ),
            EcMode::Manual => format!("Ec taken as user-supplied value of {:.0} ksi.", self.ec_ksi),
        }
    }
}
