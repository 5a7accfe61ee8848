use std::fmt;

use powerfuel_chem::{Constants, ReactionError, reaction_free_energy};
use tracing::info;
use uom::{
    si::{
        ISQ, Quantity, SI,
        available_energy::kilojoule_per_kilogram,
        f64::{AvailableEnergy, MassDensity, MolarEnergy, MolarMass},
        mass_density::kilogram_per_cubic_meter,
        molar_concentration::mole_per_cubic_meter,
        molar_energy::kilojoule_per_mole,
        molar_mass::kilogram_per_mole,
    },
    typenum::{N1, N2, P1, Z0},
};

/// Energy per unit volume, J/m³ in SI.
pub type VolumetricEnergy = Quantity<ISQ<N1, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Returns a volumetric energy in kJ/m³.
///
/// `uom` has no unit for energy per volume, so the value is read as the
/// energy carried by a gas of unit density: `e_v / (1 kg/m³)` in kJ/kg.
#[must_use]
pub fn kilojoules_per_cubic_meter(energy: VolumetricEnergy) -> f64 {
    let unit_density = MassDensity::new::<kilogram_per_cubic_meter>(1.0);
    let per_unit_density: AvailableEnergy = energy / unit_density;
    per_unit_density.get::<kilojoule_per_kilogram>()
}

/// Gibbs energy of formation used for ammonia in its combustion reaction, in kJ/mol.
///
/// This is an empirical correction with no documented derivation. It replaces
/// the tabulated value for ammonia and is kept as-is.
pub const AMMONIA_FORMATION_OVERRIDE: f64 = -16.5;

/// A gaseous fuel compared by its combustion energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fuel {
    Hydrogen,
    Methane,
    Ammonia,
}

impl Fuel {
    pub const ALL: [Fuel; 3] = [Fuel::Hydrogen, Fuel::Methane, Fuel::Ammonia];

    /// Returns the chemical formula, as used in reaction equations.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Fuel::Hydrogen => "H2",
            Fuel::Methane => "CH4",
            Fuel::Ammonia => "NH3",
        }
    }

    /// Returns the molar mass.
    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let kg_per_mol = match self {
            Fuel::Hydrogen => 2e-3,
            Fuel::Methane => 16e-3,
            Fuel::Ammonia => 17e-3,
        };
        MolarMass::new::<kilogram_per_mole>(kg_per_mol)
    }

    /// Returns the balanced combustion equation.
    #[must_use]
    pub fn combustion_equation(self) -> &'static str {
        match self {
            Fuel::Hydrogen => "2 H2 + O2 -> 2 H2O",
            Fuel::Methane => "CH4 + 2 O2 -> CO2 + 2 H2O",
            Fuel::Ammonia => "4 NH3 + 3 O2 -> 6 H2O + 2 N2",
        }
    }

    /// Returns the moles of fuel burned per mole of reaction.
    ///
    /// Matches the fuel's coefficient in [`Fuel::combustion_equation`].
    #[must_use]
    pub fn moles_per_reaction(self) -> f64 {
        match self {
            Fuel::Hydrogen => 2.0,
            Fuel::Methane => 1.0,
            Fuel::Ammonia => 4.0,
        }
    }

    /// Returns formation energies that replace the tabulated values when
    /// evaluating this fuel's combustion.
    #[must_use]
    pub fn formation_overrides(self) -> Vec<(&'static str, MolarEnergy)> {
        match self {
            Fuel::Ammonia => vec![(
                "NH3",
                MolarEnergy::new::<kilojoule_per_mole>(AMMONIA_FORMATION_OVERRIDE),
            )],
            Fuel::Hydrogen | Fuel::Methane => Vec::new(),
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Properties of a fuel derived from its molar mass and combustion energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProperties {
    pub fuel: Fuel,
    pub molar_mass: MolarMass,
    /// Energy released per mole of fuel burned.
    pub combustion_energy: MolarEnergy,
    /// Gas density at the reference conditions.
    pub density: MassDensity,
    pub specific_energy: AvailableEnergy,
    /// Energy released per cubic meter of gas at the reference conditions.
    pub volumetric_energy: VolumetricEnergy,
}

impl FuelProperties {
    /// Derives the properties of `fuel` at the given conditions.
    ///
    /// The combustion energy is the negated reaction free energy divided by
    /// the fuel's coefficient, so it is positive and per mole of fuel:
    ///
    /// - density `ρ = M·P / (R·T)`
    /// - specific energy `e = E / M`
    /// - volumetric energy `e_v = E·P / (R·T)`
    ///
    /// # Errors
    ///
    /// Returns an error if the combustion equation cannot be evaluated.
    pub fn derive(fuel: Fuel, constants: &Constants) -> Result<Self, ReactionError> {
        let delta_g = reaction_free_energy(fuel.combustion_equation(), fuel.formation_overrides())?;
        let combustion_energy = -delta_g / fuel.moles_per_reaction();

        let molar_mass = fuel.molar_mass();
        let concentration = constants.molar_concentration();

        let m = molar_mass.get::<kilogram_per_mole>();
        let c = concentration.get::<mole_per_cubic_meter>();
        let e = combustion_energy.get::<kilojoule_per_mole>();

        Ok(Self {
            fuel,
            molar_mass,
            combustion_energy,
            density: MassDensity::new::<kilogram_per_cubic_meter>(m * c),
            specific_energy: AvailableEnergy::new::<kilojoule_per_kilogram>(e / m),
            volumetric_energy: combustion_energy * concentration,
        })
    }
}

/// Derived properties for every [`Fuel`].
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTable {
    properties: [FuelProperties; 3],
}

impl FuelTable {
    /// Derives the properties of all fuels, in [`Fuel::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns an error if any fuel's combustion energy cannot be evaluated.
    pub fn derive(constants: &Constants) -> Result<Self, ReactionError> {
        let properties = [
            FuelProperties::derive(Fuel::Hydrogen, constants)?,
            FuelProperties::derive(Fuel::Methane, constants)?,
            FuelProperties::derive(Fuel::Ammonia, constants)?,
        ];

        for p in &properties {
            info!(
                fuel = p.fuel.symbol(),
                combustion_kj_per_mol = p.combustion_energy.get::<kilojoule_per_mole>(),
                density_kg_per_m3 = p.density.get::<kilogram_per_cubic_meter>(),
                specific_kj_per_kg = p.specific_energy.get::<kilojoule_per_kilogram>(),
                volumetric_kj_per_m3 = kilojoules_per_cubic_meter(p.volumetric_energy),
                "derived fuel properties"
            );
        }

        Ok(Self { properties })
    }

    /// Returns the properties of `fuel`.
    #[must_use]
    pub fn get(&self, fuel: Fuel) -> &FuelProperties {
        let index = match fuel {
            Fuel::Hydrogen => 0,
            Fuel::Methane => 1,
            Fuel::Ammonia => 2,
        };
        &self.properties[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FuelProperties> {
        self.properties.iter()
    }
}
