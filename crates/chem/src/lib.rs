//! Standard conditions and reaction free energies for fuel combustion.
//!
//! This crate provides the two inputs every energy-content calculation needs:
//!
//! - [`Constants`] — the gas constant together with the standard temperature
//!   and pressure, built once at startup and passed by reference
//! - [`reaction_free_energy`] — the Gibbs free energy of a balanced reaction,
//!   evaluated from a small table of standard formation energies
//!
//! Only the handful of species that appear in hydrogen, methane, and ammonia
//! combustion are tabulated in [`FormationEnergies::standard`]. Callers can
//! supply overrides for any species when the tabulated value does not apply.

mod constants;
mod formation;
mod formula;
mod reaction;

pub use constants::{
    Constants, ConstantsError, GAS_CONSTANT, STANDARD_PRESSURE, STANDARD_TEMPERATURE,
};
pub use formation::FormationEnergies;
pub use reaction::{Reaction, ReactionError, Term, reaction_free_energy};
