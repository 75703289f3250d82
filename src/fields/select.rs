use serde_yaml::Value;

use super::equality::{as_string_set, ValueEquality};
use super::{declared_default, ControlState, ControlView, InputControl};
use crate::error::Result;
use crate::metadata::display_value;
use crate::parser::{InputFieldDeclaration, InputFieldType};

/// Pick one of the declared options.
#[derive(Debug, Clone)]
pub struct SelectField {
    state: ControlState,
    options: Vec<String>,
    default: String,
}

impl SelectField {
    pub fn new(declaration: &InputFieldDeclaration) -> Self {
        let options = declaration.options();
        let default = declared_default(declaration)
            .map(str::to_string)
            .or_else(|| options.first().cloned())
            .unwrap_or_default();
        Self {
            state: ControlState::new(declaration, Value::String(default.clone())),
            options,
            default,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl InputControl for SelectField {
    fn kind(&self) -> InputFieldType {
        InputFieldType::Select
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

    // Values outside the option list are kept; the metadata may predate
    // the declaration.
    fn set_value(&mut self, value: &Value) -> Result<()> {
        let text = match value {
            Value::Null => self.default.clone(),
            other => display_value(other),
        };
        self.state.set(Value::String(text))
    }

    fn equality(&self) -> ValueEquality {
        ValueEquality::Text
    }

    fn default_value(&self) -> Value {
        Value::String(self.default.clone())
    }

    fn view(&self) -> ControlView {
        self.state
            .view(display_value(self.state.current()), self.options.clone())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}

/// Pick any subset of the declared options.
#[derive(Debug, Clone)]
pub struct MultiSelectField {
    state: ControlState,
    options: Vec<String>,
    default: Vec<String>,
}

impl MultiSelectField {
    pub fn new(declaration: &InputFieldDeclaration) -> Self {
        let default: Vec<String> = declared_default(declaration)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            state: ControlState::new(declaration, sequence(&default)),
            options: declaration.options(),
            default,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

fn sequence(items: &[String]) -> Value {
    Value::Sequence(items.iter().cloned().map(Value::String).collect())
}

impl InputControl for MultiSelectField {
    fn kind(&self) -> InputFieldType {
        InputFieldType::MultiSelect
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

    fn set_value(&mut self, value: &Value) -> Result<()> {
        let items = match value {
            Value::Null => self.default.clone(),
            Value::Sequence(seq) => seq.iter().map(display_value).collect(),
            other => as_string_set(other),
        };
        self.state.set(sequence(&items))
    }

    fn equality(&self) -> ValueEquality {
        ValueEquality::Set
    }

    fn default_value(&self) -> Value {
        sequence(&self.default)
    }

    fn view(&self) -> ControlView {
        let display = as_string_set(self.state.current()).join(", ");
        self.state.view(display, self.options.clone())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}
