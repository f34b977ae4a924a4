//! Quality values of the `Accept-Language` header.
//!
//! A quality value (`q=`) expresses the relative preference of a language
//! in the range `[0, 1]`. See [RFC 7231 §5.3.1](https://www.rfc-editor.org/rfc/rfc7231#section-5.3.1).

use std::fmt;

mod weight;

pub use weight::Weight;

/// A raw quality input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QualityInput<'a> {
    /// There is no `q` parameter at all.
    Absent,
    /// An integer weight.
    Integer(i64),
    /// A float weight.
    Float(f64),
    /// A raw string, possibly empty or non-numeric.
    Text(&'a str),
}

impl<'a> From<&'a str> for QualityInput<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for QualityInput<'a> {
    #[inline]
    fn from(s: Option<&'a str>) -> Self {
        s.map(Self::Text).unwrap_or(Self::Absent)
    }
}

impl From<i64> for QualityInput<'_> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for QualityInput<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Options for constructing a [`QualityValue`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct QualityOptions {
    /// Whether an empty quality string is well-formed.
    pub allow_empty: bool,
    /// The weight used for an allowed empty quality string.
    /// It only takes effect when it lies in `(0, 1]`.
    pub fallback: Option<f64>,
}

impl QualityOptions {
    /// Returns the fallback weight if it is usable.
    #[inline]
    fn valid_fallback(&self) -> Option<Weight> {
        self.fallback
            .filter(|&value| value > 0.0 && value <= 1.0)
            .map(Weight::from_f64)
    }
}

/// A validated quality value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityValue {
    /// The stored weight.
    weight: Weight,
    /// Validity flag.
    valid: bool,
}

impl QualityValue {
    /// Creates a new instance from the raw input.
    ///
    /// Out-of-range numbers are kept as they are and flagged invalid.
    /// A non-numeric string is flagged invalid and stored as `0`.
    pub fn new<'a>(input: impl Into<QualityInput<'a>>, options: QualityOptions) -> Self {
        let (weight, valid) = match input.into() {
            QualityInput::Absent => (Weight::ONE, true),
            QualityInput::Integer(value) => {
                let weight = Weight::Integer(value);
                (weight, weight.is_within_bounds())
            }
            QualityInput::Float(value) if value.is_finite() => {
                let weight = Weight::from_f64(value);
                (weight, weight.is_within_bounds())
            }
            QualityInput::Float(_) => (Weight::ZERO, false),
            QualityInput::Text(s) if s.trim().is_empty() => {
                if options.allow_empty {
                    (options.valid_fallback().unwrap_or(Weight::ZERO), true)
                } else {
                    (Weight::ZERO, false)
                }
            }
            QualityInput::Text(s) => match Weight::parse(s) {
                Some(weight) => (weight, weight.is_within_bounds()),
                None => (Weight::ZERO, false),
            },
        };
        Self { weight, valid }
    }

    /// Creates a new instance with the default options.
    #[inline]
    pub fn parse<'a>(input: impl Into<QualityInput<'a>>) -> Self {
        Self::new(input, QualityOptions::default())
    }

    /// Returns the stored weight.
    #[inline]
    pub fn quality(&self) -> Weight {
        self.weight
    }

    /// Returns `true` if the quality value is well-formed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for QualityValue {
    #[inline]
    fn default() -> Self {
        Self {
            weight: Weight::ONE,
            valid: true,
        }
    }
}

impl fmt::Display for QualityValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::{QualityInput, QualityOptions, QualityValue, Weight};

    #[test]
    fn test_absent_quality() {
        let quality = QualityValue::parse(QualityInput::Absent);
        assert!(quality.is_valid());
        assert_eq!(quality.quality(), Weight::ONE);

        let quality = QualityValue::parse(None::<&str>);
        assert_eq!(quality.quality(), Weight::Integer(1));
    }

    #[test]
    fn test_quality_bounds() {
        for (input, valid) in [
            ("0", true),
            ("0.001", true),
            ("0.5", true),
            ("1", true),
            ("1.0", true),
            ("1.001", false),
            ("-0.001", false),
            ("2", false),
        ] {
            assert_eq!(QualityValue::parse(input).is_valid(), valid, "q={input}");
        }
        for (input, valid) in [(-0.001, false), (0.0, true), (0.3, true), (1.0, true), (1.5, false)] {
            assert_eq!(QualityValue::parse(input).is_valid(), valid, "q={input}");
        }
        assert!(QualityValue::parse(1_i64).is_valid());
        assert!(!QualityValue::parse(-1_i64).is_valid());
        assert!(!QualityValue::parse(f64::NAN).is_valid());
    }

    #[test]
    fn test_out_of_range_numbers() {
        let quality = QualityValue::parse("1.001");
        assert_eq!(quality.quality(), Weight::Float(1.001));

        let quality = QualityValue::parse("2");
        assert_eq!(quality.quality(), Weight::Integer(2));
    }

    #[test]
    fn test_non_numeric_quality() {
        let quality = QualityValue::parse("wrong");
        assert!(!quality.is_valid());
        assert_eq!(quality.quality(), Weight::Integer(0));
    }

    #[test]
    fn test_empty_quality() {
        let quality = QualityValue::parse("");
        assert!(!quality.is_valid());
        assert_eq!(quality.quality(), Weight::ZERO);

        let options = QualityOptions {
            allow_empty: true,
            fallback: None,
        };
        let quality = QualityValue::new("", options);
        assert!(quality.is_valid());
        assert_eq!(quality.quality(), Weight::ZERO);

        let options = QualityOptions {
            allow_empty: true,
            fallback: Some(0.5),
        };
        let quality = QualityValue::new("", options);
        assert!(quality.is_valid());
        assert_eq!(quality.quality(), Weight::Float(0.5));

        let options = QualityOptions {
            allow_empty: true,
            fallback: Some(1.5),
        };
        assert_eq!(QualityValue::new("", options).quality(), Weight::ZERO);

        let options = QualityOptions {
            allow_empty: false,
            fallback: Some(0.5),
        };
        assert!(!QualityValue::new("", options).is_valid());
    }

    #[test]
    fn test_exact_weights() {
        assert_eq!(QualityValue::parse("0.5").quality(), Weight::Float(0.5));
        assert_eq!(QualityValue::parse("1.000").quality(), Weight::Integer(1));
        assert_eq!(QualityValue::parse(0.0).quality(), Weight::Integer(0));
    }
}
