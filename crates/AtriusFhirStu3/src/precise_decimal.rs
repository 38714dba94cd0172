use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::codec::PrimitiveValue;
use crate::error::{DecodeError, DecodeResult};

/// High-precision decimal type that preserves the original number text.
///
/// FHIR requires decimals to keep their precision through a round trip:
/// `12.340` must not come back as `12.34`, and `1.0e2` must not become `100`.
/// This type keeps the JSON number exactly as it was read (the crate enables
/// `serde_json`'s `arbitrary_precision`, so `Number` holds the source text)
/// next to a parsed [`Decimal`] for arithmetic.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_stu3::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::parse("12.340").unwrap();
/// assert_eq!(precise.original_string(), "12.340");
/// assert_eq!(precise.value(), Some(Decimal::new(12340, 3)));
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// The parsed decimal value, `None` if the number is outside the range
    /// `Decimal` can represent
    value: Option<Decimal>,
    /// The number as written in the source
    number: Number,
}

/// Two decimals are equal when their values are equal, regardless of how
/// they were written: `10.0 == 10.00`. Numbers too large for `Decimal`
/// compare by their text.
impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.number == other.number,
            _ => false,
        }
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by value; unrepresentable numbers sort first, by text.
impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, None) => self.number.to_string().cmp(&other.number.to_string()),
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
        }
    }
}

impl PreciseDecimal {
    /// Wraps a JSON number, keeping its text.
    pub fn from_number(number: Number) -> Self {
        let value = parse_decimal_string(&number.to_string());
        Self { value, number }
    }

    /// Parses decimal text in JSON number syntax. Returns `None` for anything
    /// JSON would not accept as a number (`"1."`, `"+2"`, `"0x10"`).
    pub fn parse(text: &str) -> Option<Self> {
        Number::from_str(text).ok().map(Self::from_number)
    }

    /// Returns the parsed decimal value if it fits in a `Decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the number exactly as it was written.
    pub fn original_string(&self) -> String {
        self.number.to_string()
    }

    pub fn as_number(&self) -> &Number {
        &self.number
    }
}

/// Parses decimal text, accepting scientific notation with either `e` or `E`.
fn parse_decimal_string(s: &str) -> Option<Decimal> {
    let normalized = s.replace('E', "e");

    if normalized.contains('e') {
        Decimal::from_scientific(&normalized).ok()
    } else {
        normalized.parse::<Decimal>().ok()
    }
}

impl From<i64> for PreciseDecimal {
    fn from(value: i64) -> Self {
        Self {
            value: Some(Decimal::from(value)),
            number: Number::from(value),
        }
    }
}

impl FromStr for PreciseDecimal {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DecodeError::type_mismatch_text("decimal", format!("\"{s}\"")))
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number, f)
    }
}

/// Decimals must be JSON numbers; a quoted `"1.5"` is a type mismatch.
impl PrimitiveValue for PreciseDecimal {
    const EXPECTED: &'static str = "decimal";

    fn from_json(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::Number(number) => Ok(Self::from_number(number.clone())),
            other => Err(DecodeError::type_mismatch(Self::EXPECTED, other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::Number(self.number.clone())
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Number::deserialize(deserializer).map(Self::from_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_trailing_zeros_survive() {
        let value: Value = serde_json::from_str("12.340").unwrap();
        let precise = PreciseDecimal::from_json(&value).unwrap();
        assert_eq!(precise.value(), Some(dec!(12.340)));
        assert_eq!(precise.original_string(), "12.340");
        assert_eq!(serde_json::to_string(&precise.to_json()).unwrap(), "12.340");
    }

    #[test]
    fn test_scientific_notation() {
        let precise = PreciseDecimal::parse("1.5E2").unwrap();
        assert_eq!(precise.value(), Some(dec!(150)));
        assert_eq!(precise.to_string(), "1.5E2");
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = PreciseDecimal::parse("10.0").unwrap();
        let b = PreciseDecimal::parse("10.00").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.original_string(), b.original_string());
        assert!(PreciseDecimal::parse("9.99").unwrap() < a);
    }

    #[test]
    fn test_out_of_range_keeps_text() {
        let huge = "1e400";
        let precise = PreciseDecimal::parse(huge).unwrap();
        assert_eq!(precise.value(), None);
        assert_eq!(precise.original_string(), huge);
        assert_eq!(serde_json::to_string(&precise).unwrap(), huge);
    }

    #[test]
    fn test_rejects_strings_and_bad_syntax() {
        assert!(PreciseDecimal::from_json(&json!("1.5")).is_err());
        assert!(PreciseDecimal::parse("1.").is_none());
        assert!("abc".parse::<PreciseDecimal>().is_err());
    }

    #[test]
    fn test_from_integer() {
        let precise = PreciseDecimal::from(42);
        assert_eq!(precise.value(), Some(dec!(42)));
        assert_eq!(precise.original_string(), "42");
    }
}
