//! Input field types and their argument allow-lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::argument::{ArgumentKind, ArgumentValue};
use crate::error::MetabindError;

/// The kind of control an input field declaration renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFieldType {
    Toggle,
    Slider,
    Text,
    TextArea,
    Select,
    MultiSelect,
    Date,
    Time,
    DatePicker,
    /// Sentinel for "no type"; never produced by a successful parse.
    Invalid,
}

/// Argument kinds every field type accepts.
const COMMON_ARGUMENTS: &[ArgumentKind] = &[
    ArgumentKind::Class,
    ArgumentKind::Title,
    ArgumentKind::AlignRight,
    ArgumentKind::DefaultValue,
];

impl InputFieldType {
    /// All valid types, in declaration order.
    pub const ALL: [InputFieldType; 9] = [
        InputFieldType::Toggle,
        InputFieldType::Slider,
        InputFieldType::Text,
        InputFieldType::TextArea,
        InputFieldType::Select,
        InputFieldType::MultiSelect,
        InputFieldType::Date,
        InputFieldType::Time,
        InputFieldType::DatePicker,
    ];

    /// The keyword used in declaration text.
    pub fn name(&self) -> &'static str {
        match self {
            InputFieldType::Toggle => "toggle",
            InputFieldType::Slider => "slider",
            InputFieldType::Text => "text",
            InputFieldType::TextArea => "text_area",
            InputFieldType::Select => "select",
            InputFieldType::MultiSelect => "multi_select",
            InputFieldType::Date => "date",
            InputFieldType::Time => "time",
            InputFieldType::DatePicker => "date_picker",
            InputFieldType::Invalid => "invalid",
        }
    }

    /// Argument kinds allowed for this type beyond the common ones.
    fn specific_arguments(&self) -> &'static [ArgumentKind] {
        match self {
            InputFieldType::Slider => &[
                ArgumentKind::AddLabels,
                ArgumentKind::MinValue,
                ArgumentKind::MaxValue,
                ArgumentKind::Step,
            ],
            InputFieldType::Text | InputFieldType::TextArea => &[ArgumentKind::Placeholder],
            InputFieldType::Select | InputFieldType::MultiSelect => &[ArgumentKind::Option],
            InputFieldType::Date | InputFieldType::DatePicker => {
                &[ArgumentKind::MinDate, ArgumentKind::MaxDate]
            }
            InputFieldType::Toggle | InputFieldType::Time | InputFieldType::Invalid => &[],
        }
    }

    /// Whether `kind` may appear on a declaration of this type.
    pub fn allows(&self, kind: ArgumentKind) -> bool {
        if *self == InputFieldType::Invalid {
            return false;
        }
        COMMON_ARGUMENTS.contains(&kind) || self.specific_arguments().contains(&kind)
    }

    /// All argument kinds allowed for this type.
    pub fn allowed_arguments(&self) -> Vec<ArgumentKind> {
        if *self == InputFieldType::Invalid {
            return Vec::new();
        }
        COMMON_ARGUMENTS
            .iter()
            .chain(self.specific_arguments())
            .copied()
            .collect()
    }

    /// Built-in default for an argument kind, used when neither the
    /// declaration nor its template provide one.
    pub fn default_argument(&self, kind: ArgumentKind) -> Option<ArgumentValue> {
        match (self, kind) {
            (InputFieldType::Slider, ArgumentKind::MinValue) => Some(ArgumentValue::Number(0.0)),
            (InputFieldType::Slider, ArgumentKind::MaxValue) => Some(ArgumentValue::Number(100.0)),
            (InputFieldType::Slider, ArgumentKind::Step) => Some(ArgumentValue::Number(1.0)),
            _ => None,
        }
    }
}

impl fmt::Display for InputFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFieldType {
    type Err = MetabindError;

    /// Case-insensitive lookup. `invalid` is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        InputFieldType::ALL
            .iter()
            .find(|t| t.name() == lower)
            .copied()
            .ok_or_else(|| MetabindError::UnknownType {
                name: s.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("toggle".parse::<InputFieldType>().unwrap(), InputFieldType::Toggle);
        assert_eq!("TOGGLE".parse::<InputFieldType>().unwrap(), InputFieldType::Toggle);
        assert_eq!(
            "Multi_Select".parse::<InputFieldType>().unwrap(),
            InputFieldType::MultiSelect
        );
    }

    #[test]
    fn rejects_unknown_and_sentinel() {
        assert!(matches!(
            "bogus".parse::<InputFieldType>(),
            Err(MetabindError::UnknownType { name }) if name == "bogus"
        ));
        assert!("invalid".parse::<InputFieldType>().is_err());
    }

    #[test]
    fn name_round_trips_for_every_type() {
        for t in InputFieldType::ALL {
            assert_eq!(t.name().parse::<InputFieldType>().unwrap(), t);
        }
    }

    #[test]
    fn common_arguments_allowed_everywhere() {
        for t in InputFieldType::ALL {
            assert!(t.allows(ArgumentKind::Class));
            assert!(t.allows(ArgumentKind::Title));
        }
    }

    #[test]
    fn option_only_on_selects() {
        assert!(InputFieldType::Select.allows(ArgumentKind::Option));
        assert!(InputFieldType::MultiSelect.allows(ArgumentKind::Option));
        assert!(!InputFieldType::Toggle.allows(ArgumentKind::Option));
        assert!(!InputFieldType::Text.allows(ArgumentKind::Option));
    }

    #[test]
    fn invalid_allows_nothing() {
        assert!(!InputFieldType::Invalid.allows(ArgumentKind::Class));
        assert!(InputFieldType::Invalid.allowed_arguments().is_empty());
    }

    #[test]
    fn slider_has_range_defaults() {
        assert_eq!(
            InputFieldType::Slider.default_argument(ArgumentKind::MaxValue),
            Some(ArgumentValue::Number(100.0))
        );
        assert_eq!(InputFieldType::Toggle.default_argument(ArgumentKind::MaxValue), None);
    }
}
