//! Structured input field declarations.

use serde::Serialize;
use std::fmt;

use super::argument::{ArgumentKind, ArgumentValue, InputFieldArgument};
use super::field_type::InputFieldType;

/// A fully parsed and validated input field declaration.
///
/// Invariants: `field_type` is never [`InputFieldType::Invalid`], and when
/// `is_bound` is true `bind_target` is a non-empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputFieldDeclaration {
    pub field_type: InputFieldType,
    pub arguments: Vec<InputFieldArgument>,
    pub is_bound: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

impl InputFieldDeclaration {
    /// First argument of the given kind.
    pub fn argument(&self, kind: ArgumentKind) -> Option<&InputFieldArgument> {
        self.arguments.iter().find(|a| a.kind == kind)
    }

    /// All arguments of the given kind, in declaration order.
    pub fn arguments_of(&self, kind: ArgumentKind) -> impl Iterator<Item = &InputFieldArgument> {
        self.arguments.iter().filter(move |a| a.kind == kind)
    }

    /// The argument's value, falling back to the type's built-in default.
    pub fn argument_or_default(&self, kind: ArgumentKind) -> Option<ArgumentValue> {
        self.argument(kind)
            .map(|a| a.value.clone())
            .or_else(|| self.field_type.default_argument(kind))
    }

    pub fn has_flag(&self, kind: ArgumentKind) -> bool {
        self.argument(kind).is_some()
    }

    /// Text values of every `option(...)` argument.
    pub fn options(&self) -> Vec<String> {
        self.arguments_of(ArgumentKind::Option)
            .filter_map(|a| a.value.as_text().map(str::to_string))
            .collect()
    }
}

impl fmt::Display for InputFieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("INPUT")?;
        if let Some(template) = &self.template_name {
            write!(f, "[{}]", template)?;
        }
        write!(f, "[{}", self.field_type)?;
        if !self.arguments.is_empty() {
            let args: Vec<String> = self
                .arguments
                .iter()
                .map(InputFieldArgument::to_declaration_text)
                .collect();
            write!(f, "({})", args.join(", "))?;
        }
        if let Some(target) = &self.bind_target {
            write!(f, ":{}", target)?;
        }
        f.write_str("]")
    }
}

/// A declaration built in code rather than typed inline.
///
/// Every field is optional; missing fields come from the template or the
/// type defaults when passed through
/// [`DeclarationParser::parse_declaration`](super::DeclarationParser::parse_declaration).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialDeclaration {
    pub field_type: Option<InputFieldType>,
    /// Raw `(name, value)` pairs, validated on parse.
    pub arguments: Vec<(String, Option<String>)>,
    pub is_bound: Option<bool>,
    pub bind_target: Option<String>,
}

impl PartialDeclaration {
    pub fn new(field_type: InputFieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Default::default()
        }
    }

    pub fn with_argument(mut self, name: &str, value: Option<&str>) -> Self {
        self.arguments
            .push((name.to_string(), value.map(str::to_string)));
        self
    }

    pub fn bound_to(mut self, target: &str) -> Self {
        self.bind_target = Some(target.to_string());
        self.is_bound = Some(true);
        self
    }

    pub fn with_bound(mut self, is_bound: bool) -> Self {
        self.is_bound = Some(is_bound);
        self
    }
}
