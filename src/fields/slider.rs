use serde_yaml::Value;

use super::equality::{as_number, ValueEquality};
use super::{declared_default, ControlState, ControlView, InputControl};
use crate::error::Result;
use crate::metadata::display_value;
use crate::parser::{ArgumentKind, InputFieldDeclaration, InputFieldType};

/// Numeric slider between `minValue` and `maxValue`.
#[derive(Debug, Clone)]
pub struct SliderField {
    state: ControlState,
    min: f64,
    max: f64,
    step: f64,
    default: f64,
}

impl SliderField {
    pub fn new(declaration: &InputFieldDeclaration) -> Self {
        let number = |kind: ArgumentKind, fallback: f64| {
            declaration
                .argument_or_default(kind)
                .and_then(|v| v.as_number())
                .unwrap_or(fallback)
        };
        let min = number(ArgumentKind::MinValue, 0.0);
        let max = number(ArgumentKind::MaxValue, 100.0);
        let step = number(ArgumentKind::Step, 1.0);
        let default = declared_default(declaration)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .map(|n| n.clamp(min, max))
            .unwrap_or(min);
        Self {
            state: ControlState::new(declaration, number_value(default)),
            min,
            max,
            step,
            default,
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Integral numbers are stored as integers so they round-trip as `5`, not `5.0`.
pub(crate) fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

impl InputControl for SliderField {
    fn kind(&self) -> InputFieldType {
        InputFieldType::Slider
    }

    fn value(&self) -> Result<Value> {
        self.state.get()
    }

    fn set_value(&mut self, value: &Value) -> Result<()> {
        let n = as_number(value)
            .map(|n| n.clamp(self.min, self.max))
            .unwrap_or(self.default);
        self.state.set(number_value(n))
    }

    fn equality(&self) -> ValueEquality {
        ValueEquality::Number
    }

    fn default_value(&self) -> Value {
        number_value(self.default)
    }

    fn view(&self) -> ControlView {
        self.state.view(display_value(self.state.current()), Vec::new())
    }

    fn mount(&mut self) -> ControlView {
        self.state.mount();
        self.view()
    }
}
