use serde::Deserialize;

use crate::{prelude::*, quantity::rate::Rate};

/// Field value as supplied by a form or a scenario file.
#[derive(Clone, Debug, PartialEq, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),

    /// Any other value (boolean, date, array, table), always invalid.
    Other(toml::Value),
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl RawValue {
    /// Interpret the value as a number, [`None`] for blank or non-numeric text.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Other(_) => None,
        };
        value.filter(|value| value.is_finite())
    }

    /// Interpret the value as an integer, truncating any fractional part.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn to_i64(&self) -> Option<i64> {
        if let Self::Integer(value) = self {
            return Some(*value);
        }
        if let Self::Text(text) = self
            && let Ok(value) = text.trim().parse()
        {
            return Some(value);
        }
        self.to_f64().map(|value| value.trunc() as i64)
    }

    /// Non-blank text, trimmed.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.trim()).filter(|text| !text.is_empty()).map(String::from),
            Self::Integer(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Other(_) => None,
        }
    }
}

fn fall_back<T: std::fmt::Debug>(field: &str, value: Option<&RawValue>, default: T) -> T {
    if let Some(value) = value {
        debug!(field, ?value, ?default, "invalid input, using the default");
    }
    default
}

fn number_where(
    field: &str,
    value: Option<&RawValue>,
    default: f64,
    is_valid: impl Fn(f64) -> bool,
) -> f64 {
    value
        .and_then(RawValue::to_f64)
        .filter(|value| is_valid(*value))
        .unwrap_or_else(|| fall_back(field, value, default))
}

/// Read a number greater than zero.
pub fn positive_or(field: &str, value: Option<&RawValue>, default: f64) -> f64 {
    number_where(field, value, default, |value| value > 0.0)
}

/// Read a number greater than or equal to zero.
pub fn non_negative_or(field: &str, value: Option<&RawValue>, default: f64) -> f64 {
    number_where(field, value, default, |value| value >= 0.0)
}

/// Read a strictly positive integer.
pub fn count_or(field: &str, value: Option<&RawValue>, default: u32) -> u32 {
    value
        .and_then(RawValue::to_i64)
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| *value != 0)
        .unwrap_or_else(|| fall_back(field, value, default))
}

/// Read a non-negative rate supplied in percent.
pub fn percent_or(field: &str, value: Option<&RawValue>, default: Rate) -> Rate {
    value
        .and_then(RawValue::to_f64)
        .filter(|value| *value >= 0.0)
        .map(Rate::from_percent)
        .unwrap_or_else(|| fall_back(field, value, default))
}

pub fn text_or(field: &str, value: Option<&RawValue>, default: impl FnOnce() -> String) -> String {
    value.and_then(RawValue::to_text).unwrap_or_else(|| fall_back(field, value, default()))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(RawValue::from(3).to_f64(), Some(3.0));
        assert_eq!(RawValue::from(2.5).to_f64(), Some(2.5));
        assert_eq!(RawValue::from(" 0.25 ").to_f64(), Some(0.25));
        assert_eq!(RawValue::from("").to_f64(), None);
        assert_eq!(RawValue::from("abc").to_f64(), None);
        assert_eq!(RawValue::from("NaN").to_f64(), None);
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(RawValue::from("18").to_i64(), Some(18));
        assert_eq!(RawValue::from("3.9").to_i64(), Some(3));
        assert_eq!(RawValue::from(7.9).to_i64(), Some(7));
        assert_eq!(RawValue::from("x").to_i64(), None);
    }

    #[test]
    fn test_other_value_is_invalid() {
        let value = RawValue::from(toml::Value::Boolean(true));
        assert_eq!(value.to_f64(), None);
        assert_eq!(value.to_i64(), None);
        assert_eq!(value.to_text(), None);
        assert_abs_diff_eq!(positive_or("area", Some(&value), 2000.0), 2000.0);
    }

    #[test]
    fn test_positive_or() {
        assert_abs_diff_eq!(positive_or("area", None, 2000.0), 2000.0);
        assert_abs_diff_eq!(positive_or("area", Some(&RawValue::from("")), 2000.0), 2000.0);
        assert_abs_diff_eq!(positive_or("area", Some(&RawValue::from("1500")), 2000.0), 1500.0);
        assert_abs_diff_eq!(positive_or("area", Some(&RawValue::from(0)), 2000.0), 2000.0);
        assert_abs_diff_eq!(positive_or("area", Some(&RawValue::from(-2000)), 2000.0), 2000.0);
    }

    #[test]
    fn test_non_negative_or() {
        assert_abs_diff_eq!(non_negative_or("cost", Some(&RawValue::from(0)), 10.0), 0.0);
        assert_abs_diff_eq!(non_negative_or("cost", Some(&RawValue::from(12.5)), 10.0), 12.5);
        assert_abs_diff_eq!(non_negative_or("cost", Some(&RawValue::from(-1.0)), 10.0), 10.0);
    }

    #[test]
    fn test_count_or() {
        assert_eq!(count_or("events", Some(&RawValue::from(12)), 18), 12);
        assert_eq!(count_or("events", Some(&RawValue::from(0)), 18), 18);
        assert_eq!(count_or("events", Some(&RawValue::from(-4)), 18), 18);
        assert_eq!(count_or("events", Some(&RawValue::from("many")), 18), 18);
    }

    #[test]
    fn test_percent_or() {
        assert_abs_diff_eq!(percent_or("inflation", Some(&RawValue::from(3)), Rate(0.05)).0, 0.03);
        assert_abs_diff_eq!(percent_or("inflation", Some(&RawValue::from("")), Rate(0.05)).0, 0.05);
        assert_abs_diff_eq!(percent_or("inflation", Some(&RawValue::from(0)), Rate(0.05)).0, 0.0);
        assert_abs_diff_eq!(
            percent_or("inflation", Some(&RawValue::from(-250)), Rate(0.05)).0,
            0.05,
        );
    }

    #[test]
    fn test_text_or() {
        assert_eq!(text_or("name", Some(&RawValue::from("  ")), || "Gas 1".into()), "Gas 1");
        assert_eq!(text_or("name", Some(&RawValue::from(" Toro ")), || "Gas 1".into()), "Toro");
    }
}
