//! Built-in five-step rating scale.

use std::fmt;
use std::str::FromStr;

use crate::domain::{CaseIterable, Identifiable};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

const ALL_RATINGS: [Rating; 5] = [
    Rating::One,
    Rating::Two,
    Rating::Three,
    Rating::Four,
    Rating::Five,
];

impl CaseIterable for Rating {
    fn all_cases() -> &'static [Self] {
        &ALL_RATINGS
    }
}

impl Identifiable for Rating {
    type Id = Self;

    fn id(&self) -> Self {
        *self
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        };
        f.write_str(name)
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    /// Accepts the case-insensitive name or the digit `1`-`5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| ALL_RATINGS.get(i).copied())
                .ok_or_else(|| DomainError::UnknownElement(s.to_string()));
        }
        ALL_RATINGS
            .iter()
            .copied()
            .find(|rating| rating.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownElement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_in_ascending_order() {
        let cases = Rating::all_cases();
        assert_eq!(cases.len(), 5);
        assert!(cases.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_parse_name_and_digit() {
        assert_eq!("three".parse::<Rating>(), Ok(Rating::Three));
        assert_eq!(" Five".parse::<Rating>(), Ok(Rating::Five));
        assert_eq!("1".parse::<Rating>(), Ok(Rating::One));
        assert!("0".parse::<Rating>().is_err());
        assert!("6".parse::<Rating>().is_err());
        assert!("eleven".parse::<Rating>().is_err());
    }
}
