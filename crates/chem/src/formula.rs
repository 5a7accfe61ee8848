use std::collections::BTreeMap;

use crate::ReactionError;

/// Counts the atoms of each element in a simple molecular formula.
///
/// Accepts formulas made of element symbols, each an uppercase letter with an
/// optional lowercase letter, followed by an optional count: `H2O`, `CO2`,
/// `NH3`. Groups, charges, and phase annotations are not supported.
pub(crate) fn element_counts(formula: &str) -> Result<BTreeMap<String, u32>, ReactionError> {
    let invalid = || ReactionError::InvalidFormula(formula.to_owned());

    let mut counts = BTreeMap::new();
    let mut chars = formula.chars().peekable();

    if formula.is_empty() {
        return Err(invalid());
    }

    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            return Err(invalid());
        }

        let mut element = String::from(c);
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_lowercase() {
                break;
            }
            element.push(next);
            chars.next();
        }

        let mut digits = String::new();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(next);
            chars.next();
        }

        let count = if digits.is_empty() {
            1
        } else {
            digits.parse::<u32>().map_err(|_| invalid())?
        };
        if count == 0 {
            return Err(invalid());
        }

        *counts.entry(element).or_insert(0) += count;
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs.iter().map(|&(e, n)| (e.to_owned(), n)).collect()
    }

    #[test]
    fn simple_formulas() {
        assert_eq!(element_counts("H2").unwrap(), counts(&[("H", 2)]));
        assert_eq!(
            element_counts("H2O").unwrap(),
            counts(&[("H", 2), ("O", 1)])
        );
        assert_eq!(
            element_counts("CH4").unwrap(),
            counts(&[("C", 1), ("H", 4)])
        );
        assert_eq!(
            element_counts("NH3").unwrap(),
            counts(&[("N", 1), ("H", 3)])
        );
    }

    #[test]
    fn two_letter_elements_and_repeats() {
        assert_eq!(
            element_counts("NaCl").unwrap(),
            counts(&[("Na", 1), ("Cl", 1)])
        );
        assert_eq!(
            element_counts("CH3COOH").unwrap(),
            counts(&[("C", 2), ("H", 4), ("O", 2)])
        );
    }

    #[test]
    fn rejects_malformed_formulas() {
        for bad in ["", "h2o", "2H", "H0", "H2(g)", "O-2"] {
            assert_eq!(
                element_counts(bad),
                Err(ReactionError::InvalidFormula(bad.to_owned())),
                "expected `{bad}` to be rejected"
            );
        }
    }
}
