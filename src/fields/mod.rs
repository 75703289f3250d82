//! Concrete input controls.
//!
//! One control per [`InputFieldType`], collected in the closed
//! [`InputField`] enum. Every control implements [`InputControl`]:
//!
//! - `value` / `set_value` - read and write the control's current value
//! - `is_equal_value` - kind-specific equality, shared with the synchronizer
//! - `default_value` - what the control shows when the metadata is absent
//! - `mount` - attach the control and describe it as a [`ControlView`]
//! - `view` - describe it again after a value change
//!
//! Controls hold no reference to the registry. The render layer pairs each
//! control with the [`Uid`](crate::registry::Uid) of its registry entry.

pub mod date;
pub mod equality;
pub mod select;
pub mod slider;
pub mod text;
pub mod toggle;

pub use date::{DateField, TimeField};
pub use equality::ValueEquality;
pub use select::{MultiSelectField, SelectField};
pub use slider::SliderField;
pub use text::TextField;
pub use toggle::ToggleField;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{MetabindError, Result};
use crate::parser::{ArgumentKind, InputFieldDeclaration, InputFieldType};

/// Capability set shared by every control kind.
pub trait InputControl {
    /// The field type this control renders.
    fn kind(&self) -> InputFieldType;

    /// Current value. Fails on an unmounted control.
    fn value(&self) -> Result<Value>;

    /// Set the current value, coercing it to the control's value type.
    /// Fails on an unmounted control.
    fn set_value(&mut self, value: &Value) -> Result<()>;

    /// Equality rule for this control's values.
    fn equality(&self) -> ValueEquality;

    fn is_equal_value(&self, a: &Value, b: &Value) -> bool {
        self.equality().eq(a, b)
    }

    /// Value shown when the bound metadata is absent.
    fn default_value(&self) -> Value;

    /// Describe the control in its current state.
    fn view(&self) -> ControlView;

    /// Mark the control as attached and describe it.
    fn mount(&mut self) -> ControlView;
}

/// Description of a mounted control, for whatever draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlView {
    pub kind: InputFieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    pub align_right: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Current value as display text.
    pub display: String,
}

/// State every control kind carries.
#[derive(Debug, Clone)]
pub struct ControlState {
    kind: InputFieldType,
    mounted: bool,
    value: Value,
    title: Option<String>,
    classes: Vec<String>,
    align_right: bool,
}

impl ControlState {
    pub fn new(declaration: &InputFieldDeclaration, initial: Value) -> Self {
        Self {
            kind: declaration.field_type,
            mounted: false,
            value: initial,
            title: declaration
                .argument(ArgumentKind::Title)
                .and_then(|a| a.value.as_text())
                .map(str::to_string),
            classes: declaration
                .arguments_of(ArgumentKind::Class)
                .filter_map(|a| a.value.as_text().map(str::to_string))
                .collect(),
            align_right: declaration.has_flag(ArgumentKind::AlignRight),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn ensure_mounted(&self, operation: &str) -> Result<()> {
        if self.mounted {
            Ok(())
        } else {
            Err(MetabindError::internal(format!(
                "{} called on a {} control before it was mounted",
                operation, self.kind
            )))
        }
    }

    pub fn get(&self) -> Result<Value> {
        self.ensure_mounted("value")?;
        Ok(self.value.clone())
    }

    pub fn set(&mut self, value: Value) -> Result<()> {
        self.ensure_mounted("set_value")?;
        self.value = value;
        Ok(())
    }

    /// Current value regardless of mount state, for building views.
    pub fn current(&self) -> &Value {
        &self.value
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn view(&self, display: String, options: Vec<String>) -> ControlView {
        ControlView {
            kind: self.kind,
            label: self.title.clone(),
            classes: self.classes.clone(),
            align_right: self.align_right,
            options,
            display,
        }
    }
}

/// The raw `defaultValue(...)` text, if given.
pub(crate) fn declared_default(declaration: &InputFieldDeclaration) -> Option<&str> {
    declaration
        .argument(ArgumentKind::DefaultValue)
        .and_then(|a| a.value.as_text())
}

/// One control per field type.
#[derive(Debug, Clone)]
pub enum InputField {
    Toggle(ToggleField),
    Slider(SliderField),
    Text(TextField),
    Select(SelectField),
    MultiSelect(MultiSelectField),
    Date(DateField),
    Time(TimeField),
}

impl InputField {
    /// Build the control for a declaration.
    ///
    /// # Errors
    ///
    /// `Internal` for the `Invalid` sentinel type, which a parsed
    /// declaration never carries.
    pub fn build(declaration: &InputFieldDeclaration, date_format: &str) -> Result<Self> {
        Ok(match declaration.field_type {
            InputFieldType::Toggle => InputField::Toggle(ToggleField::new(declaration)),
            InputFieldType::Slider => InputField::Slider(SliderField::new(declaration)),
            InputFieldType::Text | InputFieldType::TextArea => {
                InputField::Text(TextField::new(declaration))
            }
            InputFieldType::Select => InputField::Select(SelectField::new(declaration)),
            InputFieldType::MultiSelect => {
                InputField::MultiSelect(MultiSelectField::new(declaration))
            }
            InputFieldType::Date | InputFieldType::DatePicker => {
                InputField::Date(DateField::new(declaration, date_format))
            }
            InputFieldType::Time => InputField::Time(TimeField::new(declaration)),
            InputFieldType::Invalid => {
                return Err(MetabindError::internal(
                    "cannot build a control for an invalid declaration",
                ))
            }
        })
    }

    fn inner(&self) -> &dyn InputControl {
        match self {
            InputField::Toggle(f) => f,
            InputField::Slider(f) => f,
            InputField::Text(f) => f,
            InputField::Select(f) => f,
            InputField::MultiSelect(f) => f,
            InputField::Date(f) => f,
            InputField::Time(f) => f,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn InputControl {
        match self {
            InputField::Toggle(f) => f,
            InputField::Slider(f) => f,
            InputField::Text(f) => f,
            InputField::Select(f) => f,
            InputField::MultiSelect(f) => f,
            InputField::Date(f) => f,
            InputField::Time(f) => f,
        }
    }
}

impl InputControl for InputField {
    fn kind(&self) -> InputFieldType {
        self.inner().kind()
    }

    fn value(&self) -> Result<Value> {
        self.inner().value()
    }

    fn set_value(&mut self, value: &Value) -> Result<()> {
        self.inner_mut().set_value(value)
    }

    fn equality(&self) -> ValueEquality {
        self.inner().equality()
    }

    fn default_value(&self) -> Value {
        self.inner().default_value()
    }

    fn view(&self) -> ControlView {
        self.inner().view()
    }

    fn mount(&mut self) -> ControlView {
        self.inner_mut().mount()
    }
}
