//! Quantity notation for encounter-table entries.
//!
//! An entry's quantity is either a plain count ("3") or dice notation
//! ("2d4", "d6"). Rolling is driven by an injected closure so the domain
//! never touches an RNG directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A parsed quantity specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantitySpec {
    /// A fixed non-negative count
    Fixed(u32),
    /// `count` dice of `sides` sides, summed
    Dice { count: u32, sides: u32 },
}

impl QuantitySpec {
    /// Parse leniently: anything unparsable degrades to a quantity of 1.
    ///
    /// Encounter setup must never fail on a sloppy table entry, so this is
    /// the entry point used by the initializer.
    pub fn parse_lenient(input: &str) -> Self {
        input.parse().unwrap_or(Self::Fixed(1))
    }

    /// Resolve to a concrete count. `roll` must return a uniform value in
    /// [1, sides] for the given number of sides.
    pub fn resolve(self, roll: &mut dyn FnMut(u32) -> u32) -> u32 {
        match self {
            Self::Fixed(n) => n,
            Self::Dice { count, sides } => (0..count).map(|_| roll(sides)).sum(),
        }
    }

    /// Smallest possible resolved count.
    pub fn min(self) -> u32 {
        match self {
            Self::Fixed(n) => n,
            Self::Dice { count, .. } => count,
        }
    }

    /// Largest possible resolved count.
    pub fn max(self) -> u32 {
        match self {
            Self::Fixed(n) => n,
            Self::Dice { count, sides } => count * sides,
        }
    }
}

impl FromStr for QuantitySpec {
    type Err = DomainError;

    /// Strict parse of a quantity string: a non-negative integer, or
    /// `[N]dM` dice notation where N defaults to 1.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidQuantity(input.to_string()));
        }

        if let Ok(fixed) = trimmed.parse::<u32>() {
            return Ok(Self::Fixed(fixed));
        }

        let Some(d_pos) = trimmed.find('d') else {
            return Err(DomainError::InvalidQuantity(input.to_string()));
        };

        let count_str = &trimmed[..d_pos];
        let count: u32 = if count_str.is_empty() {
            1 // "d6" means "1d6"
        } else {
            count_str
                .parse()
                .map_err(|_| DomainError::InvalidQuantity(input.to_string()))?
        };

        let sides: u32 = trimmed[d_pos + 1..]
            .parse()
            .map_err(|_| DomainError::InvalidQuantity(input.to_string()))?;
        if sides == 0 {
            return Err(DomainError::InvalidDieSize);
        }

        Ok(Self::Dice { count, sides })
    }
}

impl fmt::Display for QuantitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Dice { count, sides } => write!(f, "{count}d{sides}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_count() {
        assert_eq!("3".parse::<QuantitySpec>(), Ok(QuantitySpec::Fixed(3)));
        assert_eq!("0".parse::<QuantitySpec>(), Ok(QuantitySpec::Fixed(0)));
    }

    #[test]
    fn parses_dice_notation() {
        assert_eq!(
            "2d6".parse::<QuantitySpec>(),
            Ok(QuantitySpec::Dice { count: 2, sides: 6 })
        );
    }

    #[test]
    fn count_defaults_to_one() {
        assert_eq!(
            "d4".parse::<QuantitySpec>(),
            Ok(QuantitySpec::Dice { count: 1, sides: 4 })
        );
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(
            "  2D6 ".parse::<QuantitySpec>(),
            Ok(QuantitySpec::Dice { count: 2, sides: 6 })
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<QuantitySpec>().is_err());
        assert!("abc".parse::<QuantitySpec>().is_err());
        assert!("2d".parse::<QuantitySpec>().is_err());
        assert!("d".parse::<QuantitySpec>().is_err());
        assert!("-1".parse::<QuantitySpec>().is_err());
        assert_eq!(
            "2d0".parse::<QuantitySpec>(),
            Err(DomainError::InvalidDieSize)
        );
    }

    #[test]
    fn lenient_parse_degrades_to_one() {
        assert_eq!(QuantitySpec::parse_lenient("banana"), QuantitySpec::Fixed(1));
        assert_eq!(QuantitySpec::parse_lenient(""), QuantitySpec::Fixed(1));
        assert_eq!(QuantitySpec::parse_lenient("4"), QuantitySpec::Fixed(4));
    }

    #[test]
    fn resolve_sums_injected_rolls() {
        let spec = QuantitySpec::Dice { count: 3, sides: 6 };
        let mut rolls = [2u32, 5, 6].into_iter();
        let mut roll = |sides: u32| {
            assert_eq!(sides, 6);
            rolls.next().unwrap_or(1)
        };
        assert_eq!(spec.resolve(&mut roll), 13);
    }

    #[test]
    fn resolve_fixed_ignores_roller() {
        let mut roll = |_sides: u32| panic!("fixed quantity must not roll");
        assert_eq!(QuantitySpec::Fixed(4).resolve(&mut roll), 4);
    }

    #[test]
    fn min_max_bounds() {
        let spec = QuantitySpec::Dice { count: 2, sides: 6 };
        assert_eq!(spec.min(), 2);
        assert_eq!(spec.max(), 12);
        assert_eq!(QuantitySpec::Fixed(5).min(), 5);
        assert_eq!(QuantitySpec::Fixed(5).max(), 5);
    }

    #[test]
    fn display_round_trips() {
        for input in ["3", "2d6", "1d4"] {
            let spec: QuantitySpec = input.parse().expect("parse");
            assert_eq!(spec.to_string(), input);
        }
    }
}
