use tracing::debug;
use uom::si::available_energy::kilojoule_per_kilogram;

use crate::{Fuel, FuelTable, Unit, kilojoules_per_cubic_meter};

pub const SECONDS_IN_HOUR: f64 = 3600.0;

/// Hours in a non-leap year.
pub const HOURS_IN_YEAR: f64 = 24.0 * 365.0;

/// Kilojoules in one megawatt-hour.
pub const KJ_IN_MWH: f64 = SECONDS_IN_HOUR * 1e3;

/// Computes the quantity of `unit` equivalent to one megawatt of continuous power.
///
/// Hydrogen and ammonia are converted by specific energy (mass basis) and
/// methane by volumetric energy at the reference conditions. Annual units
/// assume continuous operation for [`HOURS_IN_YEAR`].
#[must_use]
pub fn per_megawatt(unit: Unit, fuels: &FuelTable) -> f64 {
    let by_mass = |fuel: Fuel| {
        KJ_IN_MWH
            / fuels
                .get(fuel)
                .specific_energy
                .get::<kilojoule_per_kilogram>()
    };
    let by_volume =
        |fuel: Fuel| KJ_IN_MWH / kilojoules_per_cubic_meter(fuels.get(fuel).volumetric_energy);

    match unit {
        Unit::Megawatt => 1.0,
        Unit::GigawattHourPerYear => HOURS_IN_YEAR / 1000.0,
        Unit::HydrogenKilogramPerHour => by_mass(Fuel::Hydrogen),
        Unit::HydrogenTonPerYear => by_mass(Fuel::Hydrogen) * HOURS_IN_YEAR / 1000.0,
        Unit::MethaneCubicMeterPerHour => by_volume(Fuel::Methane),
        Unit::MethaneThousandCubicMeterPerYear => {
            by_volume(Fuel::Methane) * HOURS_IN_YEAR / 1000.0
        }
        Unit::AmmoniaKilogramPerHour => by_mass(Fuel::Ammonia),
        Unit::AmmoniaTonPerYear => by_mass(Fuel::Ammonia) * HOURS_IN_YEAR / 1000.0,
    }
}

/// One megawatt of continuous power expressed in every [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerMegawatt {
    factors: [f64; Unit::COUNT],
}

impl PerMegawatt {
    /// Computes the factor for every unit.
    #[must_use]
    pub fn new(fuels: &FuelTable) -> Self {
        let factors = Unit::ALL.map(|unit| per_megawatt(unit, fuels));

        for (unit, factor) in Unit::ALL.iter().zip(&factors) {
            debug!(unit = unit.label(), factor, "per-megawatt factor");
        }

        Self { factors }
    }

    /// Returns the quantity of `unit` equivalent to one megawatt.
    #[must_use]
    pub fn get(&self, unit: Unit) -> f64 {
        self.factors[unit.index()]
    }

    /// Iterates over units and their factors in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL.into_iter().zip(self.factors.iter().copied())
    }
}
