use std::{fmt, str::FromStr};

use thiserror::Error;

/// A unit of power or of fuel production rate.
///
/// Variants are declared in table order, which is also the column order of
/// the exported CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Megawatt,
    GigawattHourPerYear,
    HydrogenKilogramPerHour,
    HydrogenTonPerYear,
    MethaneCubicMeterPerHour,
    MethaneThousandCubicMeterPerYear,
    AmmoniaKilogramPerHour,
    AmmoniaTonPerYear,
}

/// Error returned when a string does not name a [`Unit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit `{0}`")]
pub struct ParseUnitError(pub String);

impl Unit {
    /// Number of units.
    pub const COUNT: usize = 8;

    /// All units in table order.
    pub const ALL: [Unit; Unit::COUNT] = [
        Unit::Megawatt,
        Unit::GigawattHourPerYear,
        Unit::HydrogenKilogramPerHour,
        Unit::HydrogenTonPerYear,
        Unit::MethaneCubicMeterPerHour,
        Unit::MethaneThousandCubicMeterPerYear,
        Unit::AmmoniaKilogramPerHour,
        Unit::AmmoniaTonPerYear,
    ];

    /// Returns the label used in table headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Unit::Megawatt => "MW",
            Unit::GigawattHourPerYear => "GWh/yr",
            Unit::HydrogenKilogramPerHour => "kg(H2)/hr",
            Unit::HydrogenTonPerYear => "ton(H2)/yr",
            Unit::MethaneCubicMeterPerHour => "m^3(CH4)/hr",
            Unit::MethaneThousandCubicMeterPerYear => "1000 m^3(CH4)/yr",
            Unit::AmmoniaKilogramPerHour => "kg(NH3)/hr",
            Unit::AmmoniaTonPerYear => "t(NH3)/yr",
        }
    }

    /// Returns the position of this unit in [`Unit::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.label() == label)
            .ok_or_else(|| ParseUnitError(s.to_owned()))
    }
}
