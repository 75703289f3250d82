use chrono::{NaiveDate, NaiveTime};
use serde_yaml::Value;

use super::equality::{as_date, as_time, ValueEquality, TIME_FORMAT};
use super::{declared_default, ControlState, ControlView, InputControl};
use crate::error::Result;
use crate::metadata::display_value;
use crate::parser::{ArgumentKind, InputFieldDeclaration, InputFieldType};

/// Calendar date, stored as text in the configured date format.
///
/// Serves both `date` and `date_picker`; they differ only in presentation.
#[derive(Debug, Clone)]
pub struct DateField {
    state: ControlState,
    kind: InputFieldType,
    format: String,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    default: Value,
}

impl DateField {
    pub fn new(declaration: &InputFieldDeclaration, date_format: &str) -> Self {
        let bound = |kind| declaration.argument(kind).and_then(|a| a.value.as_date());
        let default = declared_default(declaration)
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), date_format).ok())
            .map(|d| Value::String(d.format(date_format).to_string()))
            .unwrap_or(Value::Null);
        Self {
            state: ControlState::new(declaration, default.clone()),
            kind: declaration.field_type,
            format: date_format.to_string(),
            min: bound(ArgumentKind::MinDate),
            max: bound(ArgumentKind::MaxDate),
            default,
        }
    }

    /// Selectable range, when `minDate` / `maxDate` are given.
    pub fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.min, self.max)
    }
}

impl InputControl for DateField {
    fn kind(&self) -> InputFieldType {
        self.kind
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

    fn set_value(&mut self, value: &Value) -> Result<()> {
        let next = match as_date(value, &self.format) {
            Some(date) => Value::String(date.format(&self.format).to_string()),
            None => {
                if !value.is_null() {
                    tracing::debug!(
                        "date control ignoring unparseable value '{}'",
                        display_value(value)
                    );
                }
                self.default.clone()
            }
        };
        self.state.set(next)
    }

    fn equality(&self) -> ValueEquality {
        ValueEquality::Date(self.format.clone())
    }

    fn default_value(&self) -> Value {
        self.default.clone()
    }

    fn view(&self) -> ControlView {
        self.state.view(display_value(self.state.current()), Vec::new())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}

const MIDNIGHT: &str = "00:00";

/// Time of day as `HH:MM`.
#[derive(Debug, Clone)]
pub struct TimeField {
    state: ControlState,
    default: String,
}

impl TimeField {
    pub fn new(declaration: &InputFieldDeclaration) -> Self {
        let default = declared_default(declaration)
            .and_then(|raw| NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).ok())
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_else(|| MIDNIGHT.to_string());
        Self {
            state: ControlState::new(declaration, Value::String(default.clone())),
            default,
        }
    }
}

impl InputControl for TimeField {
    fn kind(&self) -> InputFieldType {
        InputFieldType::Time
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

    fn set_value(&mut self, value: &Value) -> Result<()> {
        let text = as_time(value)
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_else(|| self.default.clone());
        self.state.set(Value::String(text))
    }

    fn equality(&self) -> ValueEquality {
        ValueEquality::Time
    }

    fn default_value(&self) -> Value {
        Value::String(self.default.clone())
    }

    fn view(&self) -> ControlView {
        self.state.view(display_value(self.state.current()), Vec::new())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{DeclarationParser, ParserSettings};

    fn parse(text: &str) -> InputFieldDeclaration {
        DeclarationParser::new(ParserSettings::default())
            .parse(text)
            .unwrap()
    }

    #[test]
    fn date_defaults_to_null() {
        let d = DateField::new(&parse("INPUT[date]"), "%Y-%m-%d");
        assert_eq!(d.default_value(), Value::Null);
    }

    #[test]
    fn date_default_and_bounds() {
        let d = DateField::new(
            &parse("INPUT[date_picker(defaultValue(2024-03-01), minDate(2024-01-01))]"),
            "%Y-%m-%d",
        );
        assert_eq!(d.kind(), InputFieldType::DatePicker);
        assert_eq!(d.default_value(), Value::String("2024-03-01".into()));
        assert_eq!(d.bounds().0, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(d.bounds().1, None);
    }

    #[test]
    fn date_rejects_unparseable_values() {
        let mut d = DateField::new(&parse("INPUT[date]"), "%Y-%m-%d");
        d.mount();
        d.set_value(&Value::String("2024-02-10".into())).unwrap();
        assert_eq!(d.value().unwrap(), Value::String("2024-02-10".into()));
        d.set_value(&Value::String("soon".into())).unwrap();
        assert_eq!(d.value().unwrap(), Value::Null);
    }

    #[test]
    fn time_defaults_to_midnight() {
        let t = TimeField::new(&parse("INPUT[time]"));
        assert_eq!(t.default_value(), Value::String("00:00".into()));
    }

    #[test]
    fn time_normalizes_input() {
        let mut t = TimeField::new(&parse("INPUT[time]"));
        t.mount();
        t.set_value(&Value::String(" 09:30".into())).unwrap();
        assert_eq!(t.value().unwrap(), Value::String("09:30".into()));
    }
}
