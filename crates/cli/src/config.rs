use std::{
    fs, io,
    path::{Path, PathBuf},
};

use powerfuel_chem::{
    Constants, ConstantsError, GAS_CONSTANT, STANDARD_PRESSURE, STANDARD_TEMPERATURE,
};
use powerfuel_table::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{MolarHeatCapacity, Pressure, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Run configuration, read from an optional TOML file.
///
/// ```toml
/// output = "conversions by energy content.csv"
///
/// [conditions]
/// gas_constant = 8.314   # J/(mol·K)
/// temperature = 298.15   # K
/// pressure = 101325.0    # Pa
/// ```
///
/// Every field is optional and defaults to the standard value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: PathBuf,
    pub conditions: Conditions,
}

/// Reference conditions in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conditions {
    pub gas_constant: f64,
    pub temperature: f64,
    pub pressure: f64,
}

/// Errors that can occur when loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_FILE_NAME),
            conditions: Conditions::default(),
        }
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            gas_constant: GAS_CONSTANT,
            temperature: STANDARD_TEMPERATURE,
            pressure: STANDARD_PRESSURE,
        }
    }
}

impl Config {
    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl Conditions {
    /// Validates the conditions and builds a constants bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is zero, negative, or non-finite.
    pub fn constants(&self) -> Result<Constants, ConstantsError> {
        Constants::new(
            MolarHeatCapacity::new::<joule_per_kelvin_mole>(self.gas_constant),
            ThermodynamicTemperature::new::<kelvin>(self.temperature),
            Pressure::new::<pascal>(self.pressure),
        )
    }
}
