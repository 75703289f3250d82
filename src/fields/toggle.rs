use serde_yaml::Value;

use super::equality::{as_bool, ValueEquality};
use super::{declared_default, ControlState, ControlView, InputControl};
use crate::error::Result;
use crate::metadata::display_value;
use crate::parser::{InputFieldDeclaration, InputFieldType};

/// On/off switch bound to a boolean.
#[derive(Debug, Clone)]
pub struct ToggleField {
    state: ControlState,
    default: bool,
}

impl ToggleField {
    pub fn new(declaration: &InputFieldDeclaration) -> Self {
        let default = declared_default(declaration)
            .and_then(|raw| as_bool(&Value::String(raw.to_string())))
            .unwrap_or(false);
        Self {
            state: ControlState::new(declaration, Value::Bool(default)),
            default,
        }
    }
}

impl InputControl for ToggleField {
    fn kind(&self) -> InputFieldType {
        InputFieldType::Toggle
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

    fn set_value(&mut self, value: &Value) -> Result<()> {
        let b = as_bool(value).unwrap_or(self.default);
        self.state.set(Value::Bool(b))
    }

    fn equality(&self) -> ValueEquality {
        ValueEquality::Bool
    }

    fn default_value(&self) -> Value {
        Value::Bool(self.default)
    }

    fn view(&self) -> ControlView {
        self.state.view(display_value(self.state.current()), Vec::new())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}
