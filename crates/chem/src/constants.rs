use thiserror::Error;
use uom::si::{
    f64::{
        MolarConcentration, MolarHeatCapacity, MolarVolume, Pressure, ThermodynamicTemperature,
    },
    molar_concentration::mole_per_cubic_meter,
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_volume::cubic_meter_per_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Ideal gas constant, in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Standard temperature, in K.
pub const STANDARD_TEMPERATURE: f64 = 298.15;

/// Standard pressure, in Pa.
pub const STANDARD_PRESSURE: f64 = 101_325.0;

/// Physical constants shared by every derived fuel property.
///
/// A `Constants` bundle is constructed once, usually with
/// [`Constants::standard`], and borrowed by everything that needs the gas
/// constant or the reference conditions. It is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    gas_constant: MolarHeatCapacity,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

/// Errors that can occur when validating a constants bundle.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConstantsError {
    #[error("gas constant must be finite and positive, got {0} J/(mol·K)")]
    GasConstant(f64),

    #[error("temperature must be finite and positive, got {0} K")]
    Temperature(f64),

    #[error("pressure must be finite and positive, got {0} Pa")]
    Pressure(f64),
}

impl Default for Constants {
    fn default() -> Self {
        Self::standard()
    }
}

impl Constants {
    /// Returns the standard bundle: `R = 8.314 J/(mol·K)`, `T = 298.15 K`,
    /// and `P = 101325 Pa`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(GAS_CONSTANT),
            temperature: ThermodynamicTemperature::new::<kelvin>(STANDARD_TEMPERATURE),
            pressure: Pressure::new::<pascal>(STANDARD_PRESSURE),
        }
    }

    /// Creates a constants bundle from validated values.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is zero, negative, or non-finite.
    pub fn new(
        gas_constant: MolarHeatCapacity,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, ConstantsError> {
        let r = gas_constant.get::<joule_per_kelvin_mole>();
        if !is_positive(r) {
            return Err(ConstantsError::GasConstant(r));
        }

        let t = temperature.get::<kelvin>();
        if !is_positive(t) {
            return Err(ConstantsError::Temperature(t));
        }

        let p = pressure.get::<pascal>();
        if !is_positive(p) {
            return Err(ConstantsError::Pressure(p));
        }

        Ok(Self {
            gas_constant,
            temperature,
            pressure,
        })
    }

    /// Returns the ideal gas constant `R`.
    #[must_use]
    pub fn gas_constant(&self) -> MolarHeatCapacity {
        self.gas_constant
    }

    /// Returns the standard temperature `T`.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the standard pressure `P`.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Computes the ideal gas molar concentration `P / (R·T)`.
    ///
    /// Multiplying a per-mole quantity by this value gives the same quantity
    /// per cubic meter of gas at the reference conditions.
    #[must_use]
    pub fn molar_concentration(&self) -> MolarConcentration {
        let r = self.gas_constant.get::<joule_per_kelvin_mole>();
        let t = self.temperature.get::<kelvin>();
        let p = self.pressure.get::<pascal>();

        MolarConcentration::new::<mole_per_cubic_meter>(p / (r * t))
    }

    /// Computes the ideal gas molar volume `R·T / P`.
    #[must_use]
    pub fn molar_volume(&self) -> MolarVolume {
        let r = self.gas_constant.get::<joule_per_kelvin_mole>();
        let t = self.temperature.get::<kelvin>();
        let p = self.pressure.get::<pascal>();

        MolarVolume::new::<cubic_meter_per_mole>(r * t / p)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::kilopascal, thermodynamic_temperature::degree_celsius};

    #[test]
    fn standard_values() {
        let constants = Constants::standard();

        assert_eq!(
            constants.gas_constant().get::<joule_per_kelvin_mole>(),
            GAS_CONSTANT
        );
        assert_relative_eq!(constants.temperature().get::<kelvin>(), 298.15);
        assert_relative_eq!(constants.pressure().get::<kilopascal>(), 101.325);
        assert_eq!(constants, Constants::default());
    }

    #[test]
    fn molar_concentration_at_standard_conditions() {
        // Hand calculation: 101325 / (8.314 * 298.15) = 40.8760 mol/m³
        let concentration = Constants::standard().molar_concentration();
        assert_relative_eq!(
            concentration.get::<mole_per_cubic_meter>(),
            40.876,
            epsilon = 1e-3
        );
    }

    #[test]
    fn molar_volume_is_inverse_of_concentration() {
        // Hand calculation: 8.314 * 298.15 / 101325 = 0.024464 m³/mol
        let constants = Constants::standard();
        let volume = constants.molar_volume().get::<cubic_meter_per_mole>();
        assert_relative_eq!(volume, 0.024464, epsilon = 1e-6);

        let concentration = constants.molar_concentration().get::<mole_per_cubic_meter>();
        assert_relative_eq!(volume * concentration, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn new_accepts_other_units() {
        let constants = Constants::new(
            MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
            Pressure::new::<kilopascal>(100.0),
        )
        .unwrap();

        assert_relative_eq!(constants.temperature().get::<kelvin>(), 273.15);
        assert_relative_eq!(constants.pressure().get::<pascal>(), 100_000.0);
    }

    #[test]
    fn new_rejects_invalid_values() {
        let r = MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314);
        let t = ThermodynamicTemperature::new::<kelvin>(298.15);
        let p = Pressure::new::<pascal>(101_325.0);

        assert_eq!(
            Constants::new(MolarHeatCapacity::new::<joule_per_kelvin_mole>(0.0), t, p),
            Err(ConstantsError::GasConstant(0.0))
        );
        assert_eq!(
            Constants::new(r, ThermodynamicTemperature::new::<kelvin>(-1.0), p),
            Err(ConstantsError::Temperature(-1.0))
        );
        assert!(matches!(
            Constants::new(r, t, Pressure::new::<pascal>(f64::NAN)),
            Err(ConstantsError::Pressure(_))
        ));
    }
}
