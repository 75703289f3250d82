//! Named declaration templates.
//!
//! A template is a partial declaration defined once in the settings and
//! referenced as `INPUT[name][...]`. Literal fields on the referencing
//! declaration always win over the template's.

use std::collections::HashMap;

use super::argument::{ArgumentKind, InputFieldArgument};
use super::field_type::InputFieldType;

/// A reusable, already validated partial declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Name used to reference the template.
    pub name: String,
    /// Field type, if the template fixes one.
    pub field_type: Option<InputFieldType>,
    /// Arguments the template provides.
    pub arguments: Vec<InputFieldArgument>,
    /// Bind target, if the template fixes one.
    pub bind_target: Option<String>,
    /// The declaration text the template was defined with.
    pub source: String,
}

impl Template {
    /// Merge template arguments under literal ones.
    ///
    /// A kind given literally drops every template argument of that kind,
    /// so a literal `option(...)` list replaces the template's list.
    pub fn merge_arguments(&self, literal: Vec<InputFieldArgument>) -> Vec<InputFieldArgument> {
        let literal_kinds: Vec<ArgumentKind> = literal.iter().map(|a| a.kind).collect();
        let mut merged: Vec<InputFieldArgument> = self
            .arguments
            .iter()
            .filter(|a| !literal_kinds.contains(&a.kind))
            .cloned()
            .collect();
        merged.extend(literal);
        merged
    }
}

/// Lookup table of templates by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateTable {
    templates: HashMap<String, Template>,
}

impl TemplateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from templates. Later duplicates are ignored.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let mut map = HashMap::new();
        for template in templates {
            map.entry(template.name.clone()).or_insert(template);
        }
        Self { templates: map }
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
