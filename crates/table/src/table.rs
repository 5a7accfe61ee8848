use crate::{PerMegawatt, Unit};

/// Conversion factors from one reference unit to every unit.
///
/// Each entry answers: how much of the target unit corresponds to one of
/// the reference unit?
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRow {
    reference: Unit,
    values: [f64; Unit::COUNT],
}

impl ConversionRow {
    /// Builds the row for `reference` from a shared megawatt baseline.
    #[must_use]
    pub fn new(reference: Unit, factors: &PerMegawatt) -> Self {
        let base = factors.get(reference);
        let values = Unit::ALL.map(|target| factors.get(target) / base);
        Self { reference, values }
    }

    #[must_use]
    pub fn reference(&self) -> Unit {
        self.reference
    }

    /// Returns the quantity of `target` equal to one reference unit.
    #[must_use]
    pub fn get(&self, target: Unit) -> f64 {
        self.values[target.index()]
    }

    #[must_use]
    pub fn values(&self) -> &[f64; Unit::COUNT] {
        &self.values
    }

    /// Iterates over target units and their factors in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL.into_iter().zip(self.values.iter().copied())
    }
}

/// A square matrix of conversion factors between every pair of units.
///
/// Rows and columns follow [`Unit::ALL`]. The diagonal is exactly one, and
/// `get(a, b) * get(b, a)` is one up to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    rows: [ConversionRow; Unit::COUNT],
}

impl ConversionTable {
    /// Builds the table by taking ratios of per-megawatt factors.
    #[must_use]
    pub fn build(factors: &PerMegawatt) -> Self {
        Self {
            rows: Unit::ALL.map(|reference| ConversionRow::new(reference, factors)),
        }
    }

    /// Returns the quantity of `to` equal to one `from`.
    #[must_use]
    pub fn get(&self, from: Unit, to: Unit) -> f64 {
        self.rows[from.index()].get(to)
    }

    /// Returns the row whose reference unit is `from`.
    #[must_use]
    pub fn row(&self, from: Unit) -> &ConversionRow {
        &self.rows[from.index()]
    }

    /// Returns all rows in table order.
    #[must_use]
    pub fn rows(&self) -> &[ConversionRow] {
        &self.rows
    }

    /// Returns the units labelling rows and columns.
    #[must_use]
    pub fn units(&self) -> &'static [Unit] {
        &Unit::ALL
    }

    /// Converts `value` expressed in `from` into `to`.
    #[must_use]
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> f64 {
        value * self.get(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use powerfuel_chem::Constants;

    use crate::build_table;

    fn table() -> ConversionTable {
        build_table(&Constants::standard()).unwrap()
    }

    #[test]
    fn diagonal_is_exactly_one() {
        let table = table();
        for unit in Unit::ALL {
            assert_eq!(table.get(unit, unit), 1.0, "{unit}");
        }
    }

    #[test]
    fn reciprocal_symmetry() {
        let table = table();
        for a in Unit::ALL {
            for b in Unit::ALL {
                assert_relative_eq!(table.get(a, b) * table.get(b, a), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn megawatt_to_gigawatt_hours_per_year() {
        let table = table();
        assert_eq!(table.get(Unit::Megawatt, Unit::GigawattHourPerYear), 8.76);
        assert_eq!(table.row(Unit::Megawatt).get(Unit::GigawattHourPerYear), 8.76);
    }

    #[test]
    fn hydrogen_and_megawatt_are_reciprocal() {
        let table = table();
        let forward = table.get(Unit::Megawatt, Unit::HydrogenKilogramPerHour);
        let backward = table.get(Unit::HydrogenKilogramPerHour, Unit::Megawatt);

        assert!(forward.is_finite() && forward > 0.0);
        assert!(backward.is_finite() && backward > 0.0);
        assert_relative_eq!(backward, 1.0 / forward, max_relative = 1e-12);
    }

    #[test]
    fn megawatt_row_matches_factors() {
        let fuels = crate::FuelTable::derive(&Constants::standard()).unwrap();
        let factors = PerMegawatt::new(&fuels);
        let table = ConversionTable::build(&factors);

        for (unit, factor) in factors.iter() {
            assert_eq!(table.get(Unit::Megawatt, unit), factor);
        }
    }

    #[test]
    fn rows_follow_unit_order() {
        let table = table();
        assert_eq!(table.rows().len(), Unit::COUNT);
        assert_eq!(table.units(), &Unit::ALL);
        for (row, unit) in table.rows().iter().zip(Unit::ALL) {
            assert_eq!(row.reference(), unit);
            assert_eq!(row.iter().count(), Unit::COUNT);
        }
    }

    #[test]
    fn convert_round_trip() {
        let table = table();

        // 100 MW of electrolysis is 876 GWh/yr.
        assert_relative_eq!(
            table.convert(100.0, Unit::Megawatt, Unit::GigawattHourPerYear),
            876.0,
            max_relative = 1e-12
        );

        let tons = table.convert(50.0, Unit::Megawatt, Unit::AmmoniaTonPerYear);
        let back = table.convert(tons, Unit::AmmoniaTonPerYear, Unit::Megawatt);
        assert_relative_eq!(back, 50.0, max_relative = 1e-12);
    }
}
