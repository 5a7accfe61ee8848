use std::{collections::BTreeMap, fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;
use uom::{
    ConstZero,
    si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole},
};

use crate::{FormationEnergies, formula::element_counts};

/// Tolerance used when comparing element totals across a reaction.
const BALANCE_TOLERANCE: f64 = 1e-9;

/// Errors that can occur when parsing or evaluating a reaction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReactionError {
    /// The equation does not contain exactly one `->`.
    #[error("equation `{0}` must contain exactly one `->`")]
    Arrow(String),

    /// One side of the equation has no terms.
    #[error("equation `{equation}` has no {side}")]
    EmptySide {
        equation: String,
        side: &'static str,
    },

    /// A term is not of the form `[coefficient] species`.
    #[error("invalid term `{0}`")]
    InvalidTerm(String),

    /// A stoichiometric coefficient is not a finite positive number.
    #[error("invalid coefficient `{0}`")]
    InvalidCoefficient(String),

    /// A species name is not a simple molecular formula.
    #[error("invalid formula `{0}`")]
    InvalidFormula(String),

    /// No formation energy is available for a species.
    #[error("no formation energy for species `{0}`")]
    UnknownSpecies(String),

    /// Atoms of an element are not conserved.
    #[error("equation `{equation}` is not balanced in `{element}`")]
    Unbalanced { equation: String, element: String },
}

/// One side's term in a reaction, such as `2 H2O`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub species: String,
}

/// A chemical reaction parsed from an equation like `2 H2 + O2 -> 2 H2O`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    equation: String,
    reactants: Vec<Term>,
    products: Vec<Term>,
}

impl Reaction {
    /// Parses a reaction equation.
    ///
    /// Terms on each side are separated by `+`, and the sides by `->`.
    /// A term is a species optionally preceded by a positive coefficient,
    /// which defaults to one.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation is malformed or a species is not a
    /// simple molecular formula.
    pub fn parse(equation: &str) -> Result<Self, ReactionError> {
        let mut sides = equation.split("->");
        let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
            return Err(ReactionError::Arrow(equation.to_owned()));
        };

        let reactants = parse_side(equation, lhs, "reactants")?;
        let products = parse_side(equation, rhs, "products")?;

        Ok(Self {
            equation: equation.trim().to_owned(),
            reactants,
            products,
        })
    }

    /// Returns the equation as it was parsed.
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }

    #[must_use]
    pub fn reactants(&self) -> &[Term] {
        &self.reactants
    }

    #[must_use]
    pub fn products(&self) -> &[Term] {
        &self.products
    }

    /// Returns the total coefficient of `species` on the reactant side.
    #[must_use]
    pub fn reactant_coefficient(&self, species: &str) -> Option<f64> {
        total_coefficient(&self.reactants, species)
    }

    /// Returns the total coefficient of `species` on the product side.
    #[must_use]
    pub fn product_coefficient(&self, species: &str) -> Option<f64> {
        total_coefficient(&self.products, species)
    }

    /// Verifies that every element is conserved.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionError::Unbalanced`] naming the first element whose
    /// totals differ between the two sides.
    pub fn check_balance(&self) -> Result<(), ReactionError> {
        let lhs = element_totals(&self.reactants)?;
        let rhs = element_totals(&self.products)?;

        let elements = lhs.keys().chain(rhs.keys());
        for element in elements {
            let left = lhs.get(element).copied().unwrap_or(0.0);
            let right = rhs.get(element).copied().unwrap_or(0.0);
            if (left - right).abs() > BALANCE_TOLERANCE {
                return Err(ReactionError::Unbalanced {
                    equation: self.equation.clone(),
                    element: element.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns `true` if every element is conserved.
    ///
    /// Malformed formulas are rejected by [`Reaction::parse`], so this only
    /// reports whether the totals match.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.check_balance().is_ok()
    }

    /// Computes the Gibbs free energy of reaction, `ΣνG(products) − ΣνG(reactants)`.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionError::UnknownSpecies`] if a species is missing from
    /// `energies`.
    pub fn free_energy(&self, energies: &FormationEnergies) -> Result<MolarEnergy, ReactionError> {
        let products = weighted_sum(&self.products, energies)?;
        let reactants = weighted_sum(&self.reactants, energies)?;
        Ok(products - reactants)
    }
}

impl FromStr for Reaction {
    type Err = ReactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.equation)
    }
}

/// Computes the Gibbs free energy of a balanced reaction, in kJ/mol of reaction.
///
/// Formation energies come from [`FormationEnergies::standard`], with any
/// `overrides` taking precedence.
///
/// # Errors
///
/// Returns an error if the equation cannot be parsed, is not balanced, or
/// names a species with no known formation energy.
pub fn reaction_free_energy<'a>(
    equation: &str,
    overrides: impl IntoIterator<Item = (&'a str, MolarEnergy)>,
) -> Result<MolarEnergy, ReactionError> {
    let reaction = Reaction::parse(equation)?;
    reaction.check_balance()?;

    let energies = FormationEnergies::standard().with_overrides(overrides);
    let delta_g = reaction.free_energy(&energies)?;

    debug!(
        equation = reaction.equation(),
        delta_g_kj_per_mol = delta_g.get::<kilojoule_per_mole>(),
        "evaluated reaction free energy"
    );

    Ok(delta_g)
}

fn parse_side(equation: &str, side: &str, name: &'static str) -> Result<Vec<Term>, ReactionError> {
    if side.trim().is_empty() {
        return Err(ReactionError::EmptySide {
            equation: equation.to_owned(),
            side: name,
        });
    }

    side.split('+').map(parse_term).collect()
}

fn parse_term(term: &str) -> Result<Term, ReactionError> {
    let tokens: Vec<&str> = term.split_whitespace().collect();

    let (coefficient, species) = match tokens.as_slice() {
        [species] => (1.0, *species),
        [coefficient, species] => {
            let value = coefficient
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite() && *c > 0.0)
                .ok_or_else(|| ReactionError::InvalidCoefficient((*coefficient).to_owned()))?;
            (value, *species)
        }
        _ => return Err(ReactionError::InvalidTerm(term.trim().to_owned())),
    };

    // Validate the formula up front so malformed species fail at parse time.
    element_counts(species)?;

    Ok(Term {
        coefficient,
        species: species.to_owned(),
    })
}

fn total_coefficient(terms: &[Term], species: &str) -> Option<f64> {
    terms
        .iter()
        .filter(|term| term.species == species)
        .map(|term| term.coefficient)
        .reduce(|a, b| a + b)
}

fn element_totals(terms: &[Term]) -> Result<BTreeMap<String, f64>, ReactionError> {
    let mut totals = BTreeMap::new();
    for term in terms {
        for (element, count) in element_counts(&term.species)? {
            *totals.entry(element).or_insert(0.0) += term.coefficient * f64::from(count);
        }
    }
    Ok(totals)
}

fn weighted_sum(terms: &[Term], energies: &FormationEnergies) -> Result<MolarEnergy, ReactionError> {
    terms.iter().try_fold(MolarEnergy::ZERO, |total, term| {
        let energy = energies
            .get(&term.species)
            .ok_or_else(|| ReactionError::UnknownSpecies(term.species.clone()))?;
        Ok(total + term.coefficient * energy)
    })
}
