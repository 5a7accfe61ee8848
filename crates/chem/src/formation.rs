use std::collections::BTreeMap;

use uom::si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole};

/// Standard Gibbs energies of formation, in kJ/mol.
///
/// Elements in their reference state are zero. Water is liquid. Ammonia is
/// tabulated at its aqueous value, which is why ammonia combustion is
/// evaluated with an override.
const STANDARD: [(&str, f64); 7] = [
    ("H2", 0.0),
    ("O2", 0.0),
    ("N2", 0.0),
    ("H2O", -237.14),
    ("CO2", -394.36),
    ("CH4", -50.5),
    ("NH3", -26.5),
];

/// A lookup table of standard Gibbs energies of formation by species.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationEnergies {
    entries: BTreeMap<String, MolarEnergy>,
}

impl Default for FormationEnergies {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormationEnergies {
    /// Returns the built-in table.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .map(|&(species, value)| {
                (
                    species.to_owned(),
                    MolarEnergy::new::<kilojoule_per_mole>(value),
                )
            })
            .collect();

        Self { entries }
    }

    /// Returns the table with the given species replaced or added.
    #[must_use]
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a str, MolarEnergy)>,
    ) -> Self {
        for (species, energy) in overrides {
            self.entries.insert(species.to_owned(), energy);
        }
        self
    }

    /// Returns the formation energy of `species`, if tabulated.
    #[must_use]
    pub fn get(&self, species: &str) -> Option<MolarEnergy> {
        self.entries.get(species).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn elements_are_zero() {
        let table = FormationEnergies::standard();
        for species in ["H2", "O2", "N2"] {
            assert_eq!(table.get(species).unwrap().value, 0.0);
        }
    }

    #[test]
    fn overrides_replace_and_extend() {
        let table = FormationEnergies::standard().with_overrides([
            ("NH3", MolarEnergy::new::<kilojoule_per_mole>(-16.5)),
            ("CO", MolarEnergy::new::<kilojoule_per_mole>(-137.17)),
        ]);

        assert_relative_eq!(table.get("NH3").unwrap().get::<kilojoule_per_mole>(), -16.5);
        assert_relative_eq!(table.get("CO").unwrap().get::<kilojoule_per_mole>(), -137.17);
        assert_relative_eq!(table.get("H2O").unwrap().get::<kilojoule_per_mole>(), -237.14);
        assert_eq!(table.get("N2"), FormationEnergies::standard().get("N2"));
    }

    #[test]
    fn unknown_species() {
        assert!(FormationEnergies::standard().get("C8H18").is_none());
    }
}
