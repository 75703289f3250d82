//! Argument schema for input field declarations.
//!
//! Every argument kind has a fixed name, a value shape and a repeatability
//! flag. [`validate_argument`] turns the raw text of `NAME(VALUE)` into a
//! typed [`InputFieldArgument`], or fails with `ArgumentValue` naming the
//! shape it expected.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::{MetabindError, Result};

/// Regex for CSS class tokens accepted by `class(...)`.
static CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("CLASS_REGEX must compile"));

/// Recognized argument kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArgumentKind {
    Class,
    AddLabels,
    MinValue,
    MaxValue,
    Step,
    Option,
    Title,
    AlignRight,
    Placeholder,
    DefaultValue,
    MinDate,
    MaxDate,
}

/// Shape of the value an argument kind takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// No value: the argument is a flag.
    Flag,
    /// A finite number.
    Number,
    /// A strictly positive number.
    PositiveNumber,
    /// Any text, possibly empty.
    Text,
    /// Non-empty text.
    NonEmptyText,
    /// A CSS class token.
    ClassName,
    /// A date in the configured date format.
    Date,
}

impl ValueShape {
    /// Human-readable description used in error messages.
    pub fn describe(&self, date_format: &str) -> String {
        match self {
            ValueShape::Flag => "no value".to_string(),
            ValueShape::Number => "a number".to_string(),
            ValueShape::PositiveNumber => "a number greater than zero".to_string(),
            ValueShape::Text => "text".to_string(),
            ValueShape::NonEmptyText => "non-empty text".to_string(),
            ValueShape::ClassName => "a class name (letters, digits, '-' or '_')".to_string(),
            ValueShape::Date => format!("a date in the format '{}'", date_format),
        }
    }
}

impl ArgumentKind {
    /// Every kind, in table order.
    pub const ALL: [ArgumentKind; 12] = [
        ArgumentKind::Class,
        ArgumentKind::AddLabels,
        ArgumentKind::MinValue,
        ArgumentKind::MaxValue,
        ArgumentKind::Step,
        ArgumentKind::Option,
        ArgumentKind::Title,
        ArgumentKind::AlignRight,
        ArgumentKind::Placeholder,
        ArgumentKind::DefaultValue,
        ArgumentKind::MinDate,
        ArgumentKind::MaxDate,
    ];

    /// The name used in declaration text.
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentKind::Class => "class",
            ArgumentKind::AddLabels => "addLabels",
            ArgumentKind::MinValue => "minValue",
            ArgumentKind::MaxValue => "maxValue",
            ArgumentKind::Step => "step",
            ArgumentKind::Option => "option",
            ArgumentKind::Title => "title",
            ArgumentKind::AlignRight => "alignRight",
            ArgumentKind::Placeholder => "placeholder",
            ArgumentKind::DefaultValue => "defaultValue",
            ArgumentKind::MinDate => "minDate",
            ArgumentKind::MaxDate => "maxDate",
        }
    }

    /// Look up a kind by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|k| k.name() == name).copied()
    }

    /// The value shape this kind accepts.
    pub fn shape(&self) -> ValueShape {
        match self {
            ArgumentKind::AddLabels | ArgumentKind::AlignRight => ValueShape::Flag,
            ArgumentKind::MinValue | ArgumentKind::MaxValue => ValueShape::Number,
            ArgumentKind::Step => ValueShape::PositiveNumber,
            ArgumentKind::Option | ArgumentKind::Title => ValueShape::NonEmptyText,
            ArgumentKind::Placeholder | ArgumentKind::DefaultValue => ValueShape::Text,
            ArgumentKind::Class => ValueShape::ClassName,
            ArgumentKind::MinDate | ArgumentKind::MaxDate => ValueShape::Date,
        }
    }

    /// Whether the kind may appear more than once on one declaration.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, ArgumentKind::Class | ArgumentKind::Option)
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated, typed argument payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Flag,
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl ArgumentValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ArgumentValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgumentValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ArgumentValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// A single validated argument attached to a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputFieldArgument {
    /// Which argument this is.
    pub kind: ArgumentKind,
    /// The validated value.
    pub value: ArgumentValue,
    /// The literal value text, unquoted. `None` for flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl InputFieldArgument {
    /// Render as declaration text: `name` or `name(value)`.
    pub fn to_declaration_text(&self) -> String {
        match &self.raw {
            None => self.kind.name().to_string(),
            Some(raw) => format!("{}({})", self.kind.name(), quote_value(raw)),
        }
    }
}

/// Quote a raw value if bare text would not survive re-parsing.
pub fn quote_value(raw: &str) -> String {
    let needs_quotes = raw.is_empty()
        || raw.trim() != raw
        || raw.starts_with('"')
        || raw
            .chars()
            .any(|c| matches!(c, '(' | ')' | ',' | ':' | '[' | ']' | '"' | '\\'));
    if !needs_quotes {
        return raw.to_string();
    }
    let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Validate `raw` against the rule for `kind`.
///
/// `raw` is `None` when the argument was written without parentheses.
pub fn validate_argument(
    kind: ArgumentKind,
    raw: Option<&str>,
    date_format: &str,
) -> Result<InputFieldArgument> {
    let shape = kind.shape();
    let fail = || MetabindError::ArgumentValue {
        argument: kind.name().to_string(),
        expected: shape.describe(date_format),
    };

    let value = match (shape, raw) {
        (ValueShape::Flag, None) => ArgumentValue::Flag,
        (ValueShape::Flag, Some(_)) | (_, None) => return Err(fail()),
        (ValueShape::Number, Some(text)) => parse_number(text).ok_or_else(fail)?,
        (ValueShape::PositiveNumber, Some(text)) => match parse_number(text) {
            Some(ArgumentValue::Number(n)) if n > 0.0 => ArgumentValue::Number(n),
            _ => return Err(fail()),
        },
        (ValueShape::Text, Some(text)) => ArgumentValue::Text(text.to_string()),
        (ValueShape::NonEmptyText, Some(text)) => {
            if text.trim().is_empty() {
                return Err(fail());
            }
            ArgumentValue::Text(text.to_string())
        }
        (ValueShape::ClassName, Some(text)) => {
            if !CLASS_REGEX.is_match(text) {
                return Err(fail());
            }
            ArgumentValue::Text(text.to_string())
        }
        (ValueShape::Date, Some(text)) => NaiveDate::parse_from_str(text.trim(), date_format)
            .map(ArgumentValue::Date)
            .map_err(|_| fail())?,
    };

    Ok(InputFieldArgument {
        kind,
        value,
        raw: raw.map(str::to_string),
    })
}

fn parse_number(text: &str) -> Option<ArgumentValue> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(ArgumentValue::Number)
}
