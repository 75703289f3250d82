//! Value equality per control kind.
//!
//! The synchronizer and the controls share these rules, so a value the
//! control considers unchanged is also skipped by the synchronizer.

use chrono::{NaiveDate, NaiveTime};
use serde_yaml::Value;

use crate::metadata::display_value;

/// Time format used by time controls.
pub const TIME_FORMAT: &str = "%H:%M";

/// How two metadata values are compared for one kind of control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueEquality {
    /// Booleans, with `"true"`/`"false"` strings coerced.
    Bool,
    /// Numbers, with numeric strings coerced.
    Number,
    /// Display text; absent equals empty.
    Text,
    /// Unordered sets of strings.
    Set,
    /// Dates in the given format.
    Date(String),
    /// `HH:MM` times.
    Time,
}

impl ValueEquality {
    pub fn eq(&self, a: &Value, b: &Value) -> bool {
        match self {
            ValueEquality::Bool => match (as_bool(a), as_bool(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            ValueEquality::Number => match (as_number(a), as_number(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            ValueEquality::Text => display_value(a) == display_value(b),
            ValueEquality::Set => as_string_set(a) == as_string_set(b),
            ValueEquality::Date(format) => match (as_date(a, format), as_date(b, format)) {
                (Some(x), Some(y)) => x == y,
                _ => display_value(a) == display_value(b),
            },
            ValueEquality::Time => match (as_time(a), as_time(b)) {
                (Some(x), Some(y)) => x == y,
                _ => display_value(a) == display_value(b),
            },
        }
    }
}

pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Sorted, deduplicated strings of a sequence (or a single scalar).
pub fn as_string_set(value: &Value) -> Vec<String> {
    let mut items: Vec<String> = match value {
        Value::Null => Vec::new(),
        Value::Sequence(seq) => seq.iter().map(display_value).collect(),
        other => vec![display_value(other)],
    };
    items.sort();
    items.dedup();
    items
}

pub fn as_date(value: &Value, format: &str) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), format).ok())
}

pub fn as_time(value: &Value) -> Option<NaiveTime> {
    value
        .as_str()
        .and_then(|s| NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    #[test]
    fn bool_equality_coerces_strings() {
        assert!(ValueEquality::Bool.eq(&Value::Bool(true), &s("true")));
        assert!(!ValueEquality::Bool.eq(&Value::Bool(true), &Value::Bool(false)));
    }

    #[test]
    fn number_equality_ignores_representation() {
        assert!(ValueEquality::Number.eq(&Value::from(5), &Value::from(5.0)));
        assert!(ValueEquality::Number.eq(&Value::from(5), &s("5")));
        assert!(!ValueEquality::Number.eq(&Value::from(5), &Value::from(6)));
    }

    #[test]
    fn text_equality_treats_absent_as_empty() {
        assert!(ValueEquality::Text.eq(&Value::Null, &s("")));
        assert!(ValueEquality::Text.eq(&Value::from(3), &s("3")));
    }

    #[test]
    fn set_equality_ignores_order() {
        let a: Value = serde_yaml::from_str("[a, b]").unwrap();
        let b: Value = serde_yaml::from_str("[b, a]").unwrap();
        let c: Value = serde_yaml::from_str("[a]").unwrap();
        assert!(ValueEquality::Set.eq(&a, &b));
        assert!(!ValueEquality::Set.eq(&a, &c));
        assert!(ValueEquality::Set.eq(&Value::Null, &Value::Sequence(vec![])));
    }

    #[test]
    fn date_equality_uses_format() {
        let eq = ValueEquality::Date("%Y-%m-%d".to_string());
        assert!(eq.eq(&s("2024-01-05"), &s(" 2024-01-05 ")));
        assert!(!eq.eq(&s("2024-01-05"), &s("05.01.2024")));
        assert!(!eq.eq(&s("2024-01-05"), &s("2024-01-06")));
    }

    #[test]
    fn time_equality() {
        assert!(ValueEquality::Time.eq(&s("09:30"), &s("09:30 ")));
        assert!(!ValueEquality::Time.eq(&s("09:30"), &s("10:30")));
    }
}
