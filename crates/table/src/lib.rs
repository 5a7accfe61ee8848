//! Energy-content conversion tables between power and fuel production rates.
//!
//! A [`ConversionTable`] answers "how much of unit X corresponds to one of
//! unit Y" for electrical power and for production rates of hydrogen,
//! methane, and ammonia, where fuels are compared by the free energy released
//! on combustion.
//!
//! The table is built in three steps, each a pure function of the previous:
//!
//! 1. [`FuelTable::derive`] computes per-fuel properties from a [`Constants`] bundle.
//! 2. [`PerMegawatt::new`] expresses one megawatt of continuous power in every [`Unit`].
//! 3. [`ConversionTable::build`] takes ratios of those factors for every pair of units.
//!
//! [`build_table`] runs all three, and [`export`] writes the result as CSV.
//!
//! [`Constants`]: powerfuel_chem::Constants

mod export;
mod factors;
mod fuel;
mod table;
mod unit;

pub use export::{DEFAULT_FILE_NAME, ExportError, export, write_csv};
pub use factors::{HOURS_IN_YEAR, KJ_IN_MWH, PerMegawatt, SECONDS_IN_HOUR, per_megawatt};
pub use fuel::{
    AMMONIA_FORMATION_OVERRIDE, Fuel, FuelProperties, FuelTable, VolumetricEnergy,
    kilojoules_per_cubic_meter,
};
pub use table::{ConversionRow, ConversionTable};
pub use unit::{ParseUnitError, Unit};

use powerfuel_chem::{Constants, ReactionError};

/// Builds the full conversion table from a constants bundle.
///
/// # Errors
///
/// Returns an error if a fuel's combustion energy cannot be evaluated.
pub fn build_table(constants: &Constants) -> Result<ConversionTable, ReactionError> {
    let fuels = FuelTable::derive(constants)?;
    let factors = PerMegawatt::new(&fuels);
    Ok(ConversionTable::build(&factors))
}
