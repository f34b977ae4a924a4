use crate::LazyLock;
use regex::Regex;
use serde::Serialize;
use std::{cmp::Ordering, fmt};

/// A numeric quality weight.
///
/// The weights `0` and `1` are always represented as integers so that they
/// compare equal no matter whether they were written as `1`, `1.0` or `1.000`.
/// Any other value is a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Weight {
    /// An exact integer weight.
    Integer(i64),
    /// An inexact float weight.
    Float(f64),
}

impl Weight {
    /// The weight `0`, meaning "not acceptable".
    pub const ZERO: Self = Self::Integer(0);

    /// The weight `1`, which is also the default weight.
    pub const ONE: Self = Self::Integer(1);

    /// Creates a new instance from a float, collapsing `0.0` and `1.0` to integers.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        if value == 0.0 {
            Self::ZERO
        } else if value == 1.0 {
            Self::ONE
        } else {
            Self::Float(value)
        }
    }

    /// Parses a numeric string. Returns `None` if the string is not numeric.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if INTEGER_PATTERN.is_match(s) {
            if let Ok(value) = s.parse::<i64>() {
                return Some(Self::Integer(value));
            }
        }
        if FLOAT_PATTERN.is_match(s) {
            s.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Self::from_f64)
        } else {
            None
        }
    }

    /// Returns the weight as `f64`.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Float(value) => *value,
        }
    }

    /// Returns `true` if the weight equals zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }

    /// Returns `true` if the weight lies in the closed interval `[0, 1]`.
    #[inline]
    pub fn is_within_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.as_f64())
    }

    /// Compares the numeric values of two weights.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.as_f64().total_cmp(&other.as_f64())
    }
}

impl Default for Weight {
    #[inline]
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Weight {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Weight {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl fmt::Display for Weight {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Pattern for an optionally signed integer.
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("fail to create the integer pattern"));

/// Pattern for an optionally signed decimal number with an optional exponent.
static FLOAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("fail to create the float pattern")
});

#[cfg(test)]
mod tests {
    use super::Weight;

    #[test]
    fn test_parse_numeric_strings() {
        assert_eq!(Weight::parse("1"), Some(Weight::ONE));
        assert_eq!(Weight::parse("1.000"), Some(Weight::ONE));
        assert_eq!(Weight::parse("0.0"), Some(Weight::ZERO));
        assert_eq!(Weight::parse(" 0.8 "), Some(Weight::Float(0.8)));
        assert_eq!(Weight::parse(".5"), Some(Weight::Float(0.5)));
        assert_eq!(Weight::parse("2"), Some(Weight::Integer(2)));
        assert_eq!(Weight::parse("-0.001"), Some(Weight::Float(-0.001)));
        assert_eq!(Weight::parse("1e-1"), Some(Weight::Float(0.1)));
        assert_eq!(Weight::parse("wrong"), None);
        assert_eq!(Weight::parse("inf"), None);
        assert_eq!(Weight::parse("NaN"), None);
        assert_eq!(Weight::parse("0.5q"), None);
        assert_eq!(Weight::parse(""), None);
    }

    #[test]
    fn test_exact_and_inexact_weights() {
        assert_eq!(Weight::from_f64(1.0), Weight::Integer(1));
        assert_ne!(Weight::from_f64(0.5), Weight::Integer(0));
        assert_ne!(Weight::Float(1.0), Weight::Integer(1));
        assert_eq!(Weight::Float(0.9).to_string(), "0.9");
        assert_eq!(Weight::ONE.to_string(), "1");
    }

    #[test]
    fn test_weight_bounds() {
        assert!(Weight::ZERO.is_within_bounds());
        assert!(Weight::ONE.is_within_bounds());
        assert!(!Weight::Float(1.001).is_within_bounds());
        assert!(!Weight::Float(-0.001).is_within_bounds());
        assert!(Weight::ZERO.is_zero());
    }
}
