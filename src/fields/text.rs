use serde_yaml::Value;

use super::equality::ValueEquality;
use super::{declared_default, ControlState, ControlView, InputControl};
use crate::error::Result;
use crate::metadata::display_value;
use crate::parser::{ArgumentKind, InputFieldDeclaration, InputFieldType};

/// Single- or multi-line free text.
#[derive(Debug, Clone)]
pub struct TextField {
    state: ControlState,
    multiline: bool,
    placeholder: Option<String>,
    default: String,
}

impl TextField {
    pub fn new(declaration: &InputFieldDeclaration) -> Self {
        let default = declared_default(declaration).unwrap_or_default().to_string();
        Self {
            state: ControlState::new(declaration, Value::String(default.clone())),
            multiline: declaration.field_type == InputFieldType::TextArea,
            placeholder: declaration
                .argument(ArgumentKind::Placeholder)
                .and_then(|a| a.value.as_text())
                .map(str::to_string),
            default,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}

impl InputControl for TextField {
    fn kind(&self) -> InputFieldType {
        if self.multiline {
            InputFieldType::TextArea
        } else {
            InputFieldType::Text
        }
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

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
        let display = display_value(self.state.current());
        let display = match (&self.placeholder, display.is_empty()) {
            (Some(placeholder), true) => placeholder.clone(),
            _ => display,
        };
        self.state.view(display, Vec::new())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}
