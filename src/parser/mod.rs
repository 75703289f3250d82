//! Declaration parser for inline input fields.
//!
//! Turns `INPUT[...]` text into a validated [`InputFieldDeclaration`]:
//!
//! - [`cursor`] - tokenizing and bracket splitting
//! - [`argument`] - argument kinds and their validation rules
//! - [`field_type`] - the closed set of field types and their allow-lists
//! - [`declaration`] - the structured declaration and its text form
//! - [`template`] - named templates merged into declarations
//!
//! # Syntax
//!
//! ```text
//! INPUT[type(arg, arg(value)):bind.target]
//! INPUT[template][(arg):bind.target]
//! ```
//!
//! # Example
//!
//! ```
//! use metabind::parser::{DeclarationParser, InputFieldType, ParserSettings};
//!
//! let parser = DeclarationParser::new(ParserSettings::default());
//! let decl = parser.parse("INPUT[toggle(title(Done)):done]").unwrap();
//! assert_eq!(decl.field_type, InputFieldType::Toggle);
//! assert!(decl.is_bound);
//! assert_eq!(decl.bind_target.as_deref(), Some("done"));
//! ```

pub mod argument;
pub mod cursor;
pub mod declaration;
pub mod field_type;
pub mod template;

pub use argument::{ArgumentKind, ArgumentValue, InputFieldArgument, ValueShape};
pub use declaration::{InputFieldDeclaration, PartialDeclaration};
pub use field_type::InputFieldType;
pub use template::{Template, TemplateTable};

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

use crate::config::{default_date_format, Settings, TemplateConfig};
use crate::error::{MetabindError, Result};
use argument::validate_argument;
use cursor::{read_declaration, RawArgument};

/// Parser-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// chrono format string for date arguments.
    pub date_format: String,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl From<&Settings> for ParserSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            date_format: settings.date_format.clone(),
        }
    }
}

/// A parsed declaration together with its non-fatal diagnostics.
#[derive(Debug)]
pub struct ParseOutcome {
    pub declaration: InputFieldDeclaration,
    /// Recoverable problems, such as an unknown template.
    pub warnings: Vec<MetabindError>,
}

/// Fields given literally, before template merge.
struct Literal {
    field_type: Option<InputFieldType>,
    arguments: Vec<InputFieldArgument>,
    is_bound: Option<bool>,
    bind_target: Option<String>,
}

/// Parses declarations against a template table and parser settings.
#[derive(Debug, Clone, Default)]
pub struct DeclarationParser {
    settings: ParserSettings,
    templates: TemplateTable,
}

impl DeclarationParser {
    /// Create a parser with an empty template table.
    pub fn new(settings: ParserSettings) -> Self {
        Self {
            settings,
            templates: TemplateTable::new(),
        }
    }

    /// Create a parser from full settings, loading their templates.
    ///
    /// Template errors are logged and the broken templates skipped.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut parser = Self::new(ParserSettings::from(settings));
        for err in parser.parse_templates(&settings.input_templates) {
            warn!("{}", err);
        }
        parser
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Replace parser-level settings.
    pub fn set_settings(&mut self, settings: ParserSettings) {
        debug!("Parser date format set to '{}'", settings.date_format);
        self.settings = settings;
    }

    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    /// Parse declaration text, logging non-fatal warnings.
    pub fn parse(&self, text: &str) -> Result<InputFieldDeclaration> {
        let outcome = self.parse_with_diagnostics(text)?;
        for warning in &outcome.warnings {
            warn!("{} in '{}'", warning, text);
        }
        Ok(outcome.declaration)
    }

    /// Parse declaration text, returning non-fatal warnings alongside.
    pub fn parse_with_diagnostics(&self, text: &str) -> Result<ParseOutcome> {
        debug!("Parsing declaration '{}'", text);
        let raw = read_declaration(text)?;

        let field_type = raw
            .body
            .type_name
            .as_ref()
            .map(|(name, _)| name.parse::<InputFieldType>())
            .transpose()?;
        let type_label = type_label(field_type, raw.template.as_deref());
        let arguments = self.validate_raw_arguments(&raw.body.arguments, &type_label)?;

        self.build(
            Literal {
                field_type,
                arguments,
                is_bound: None,
                bind_target: raw.body.bind_target,
            },
            raw.template,
        )
    }

    /// Validate a declaration built in code.
    ///
    /// `arguments_override`, when given, replaces the partial's arguments.
    /// Tokenization is skipped; validation and template merge are the same
    /// as for [`parse`](Self::parse).
    pub fn parse_declaration(
        &self,
        partial: PartialDeclaration,
        arguments_override: Option<Vec<(String, Option<String>)>>,
        template_name: Option<String>,
    ) -> Result<ParseOutcome> {
        let field_type = partial
            .field_type
            .filter(|t| *t != InputFieldType::Invalid);
        let type_label = type_label(field_type, template_name.as_deref());

        let raw_arguments: Vec<RawArgument> = arguments_override
            .unwrap_or(partial.arguments)
            .into_iter()
            .map(|(name, value)| RawArgument {
                name,
                value,
                position: 0,
            })
            .collect();
        let arguments = self.validate_raw_arguments(&raw_arguments, &type_label)?;

        self.build(
            Literal {
                field_type,
                arguments,
                is_bound: partial.is_bound,
                bind_target: partial.bind_target,
            },
            template_name,
        )
    }

    /// Rebuild the template table from settings and swap it in.
    ///
    /// Broken definitions are skipped and their errors returned; the rest
    /// are installed. The old table stays in place until the new one is
    /// complete.
    pub fn parse_templates(&mut self, configs: &[TemplateConfig]) -> Vec<MetabindError> {
        let mut errors = Vec::new();
        let mut templates: Vec<Template> = Vec::new();

        for config in configs {
            let name = config.name.trim();
            if name.is_empty() {
                errors.push(MetabindError::InvalidTemplate {
                    name: config.name.clone(),
                    message: "template name is empty".to_string(),
                });
                continue;
            }
            if templates.iter().any(|t| t.name == name) {
                errors.push(MetabindError::InvalidTemplate {
                    name: name.to_string(),
                    message: "template is defined more than once".to_string(),
                });
                continue;
            }
            match self.parse_template(name, &config.declaration) {
                Ok(template) => templates.push(template),
                Err(e) => errors.push(MetabindError::InvalidTemplate {
                    name: name.to_string(),
                    message: e.to_string(),
                }),
            }
        }

        info!(
            "Loaded {} template(s), {} rejected",
            templates.len(),
            errors.len()
        );
        self.templates = TemplateTable::from_templates(templates);
        errors
    }

    fn parse_template(&self, name: &str, declaration: &str) -> Result<Template> {
        let raw = read_declaration(declaration)?;
        if raw.template.is_some() {
            return Err(MetabindError::syntax(
                "templates cannot reference other templates",
            ));
        }

        let field_type = raw
            .body
            .type_name
            .as_ref()
            .map(|(n, _)| n.parse::<InputFieldType>())
            .transpose()?;
        let arguments =
            self.validate_raw_arguments(&raw.body.arguments, &type_label(field_type, None))?;
        if let Some(t) = field_type {
            check_allowed(t, &arguments)?;
        }

        Ok(Template {
            name: name.to_string(),
            field_type,
            arguments,
            bind_target: raw.body.bind_target,
            source: declaration.to_string(),
        })
    }

    fn validate_raw_arguments(
        &self,
        raw: &[RawArgument],
        type_label: &str,
    ) -> Result<Vec<InputFieldArgument>> {
        raw.iter()
            .map(|arg| {
                let kind = ArgumentKind::from_name(&arg.name).ok_or_else(|| {
                    MetabindError::UnknownArgument {
                        argument: arg.name.clone(),
                        field_type: type_label.to_string(),
                    }
                })?;
                validate_argument(kind, arg.value.as_deref(), &self.settings.date_format)
            })
            .collect()
    }

    /// Merge with the template and check the result.
    fn build(&self, literal: Literal, template_name: Option<String>) -> Result<ParseOutcome> {
        let mut warnings = Vec::new();

        let template = match &template_name {
            Some(name) => {
                let found = self.templates.get(name);
                if found.is_none() {
                    warnings.push(MetabindError::UnknownTemplate { name: name.clone() });
                }
                found
            }
            None => None,
        };

        let field_type = match literal
            .field_type
            .or_else(|| template.and_then(|t| t.field_type))
        {
            Some(t) => t,
            None => {
                return Err(match (&template_name, template) {
                    (Some(name), None) => MetabindError::UnknownTemplate { name: name.clone() },
                    _ => MetabindError::syntax("missing input field type"),
                })
            }
        };

        let arguments = match template {
            Some(t) => t.merge_arguments(literal.arguments),
            None => literal.arguments,
        };

        let bind_target = literal
            .bind_target
            .or_else(|| template.and_then(|t| t.bind_target.clone()))
            .filter(|t| !t.trim().is_empty());
        let is_bound = bind_target.is_some() || literal.is_bound.unwrap_or(false);
        if is_bound && bind_target.is_none() {
            return Err(MetabindError::MissingBindTarget);
        }

        let declaration = InputFieldDeclaration {
            field_type,
            arguments,
            is_bound,
            bind_target,
            template_name,
        };
        check_allowed(field_type, &declaration.arguments)?;
        check_repeats(&declaration.arguments)?;
        check_ranges(&declaration)?;
        check_default_value(&declaration, &self.settings.date_format)?;

        Ok(ParseOutcome {
            declaration,
            warnings,
        })
    }
}

fn type_label(field_type: Option<InputFieldType>, template: Option<&str>) -> String {
    match (field_type, template) {
        (Some(t), _) => t.name().to_string(),
        (None, Some(name)) => format!("template {}", name),
        (None, None) => "unknown".to_string(),
    }
}

fn check_allowed(field_type: InputFieldType, arguments: &[InputFieldArgument]) -> Result<()> {
    match arguments.iter().find(|a| !field_type.allows(a.kind)) {
        Some(arg) => Err(MetabindError::UnknownArgument {
            argument: arg.kind.name().to_string(),
            field_type: field_type.name().to_string(),
        }),
        None => Ok(()),
    }
}

fn check_repeats(arguments: &[InputFieldArgument]) -> Result<()> {
    for (i, arg) in arguments.iter().enumerate() {
        if arg.kind.is_repeatable() {
            continue;
        }
        if arguments[..i].iter().any(|a| a.kind == arg.kind) {
            return Err(MetabindError::ArgumentValue {
                argument: arg.kind.name().to_string(),
                expected: "at most one occurrence".to_string(),
            });
        }
    }
    Ok(())
}

fn check_ranges(decl: &InputFieldDeclaration) -> Result<()> {
    let min = decl
        .argument_or_default(ArgumentKind::MinValue)
        .and_then(|v| v.as_number());
    let max = decl
        .argument_or_default(ArgumentKind::MaxValue)
        .and_then(|v| v.as_number());
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(MetabindError::ArgumentValue {
                argument: ArgumentKind::MaxValue.name().to_string(),
                expected: format!("a number not less than minValue ({})", min),
            });
        }
    }

    let min_date = decl.argument(ArgumentKind::MinDate).and_then(|a| a.value.as_date());
    let max_date = decl.argument(ArgumentKind::MaxDate).and_then(|a| a.value.as_date());
    if let (Some(min), Some(max)) = (min_date, max_date) {
        if min > max {
            return Err(MetabindError::ArgumentValue {
                argument: ArgumentKind::MaxDate.name().to_string(),
                expected: "a date not before minDate".to_string(),
            });
        }
    }
    Ok(())
}

/// `defaultValue` must be a value the field type can hold.
fn check_default_value(decl: &InputFieldDeclaration, date_format: &str) -> Result<()> {
    let Some(raw) = decl
        .argument(ArgumentKind::DefaultValue)
        .and_then(|a| a.value.as_text())
    else {
        return Ok(());
    };
    let fail = |expected: String| MetabindError::ArgumentValue {
        argument: ArgumentKind::DefaultValue.name().to_string(),
        expected,
    };
    let options = decl.options();

    match decl.field_type {
        InputFieldType::Toggle => {
            if raw != "true" && raw != "false" {
                return Err(fail("'true' or 'false'".to_string()));
            }
        }
        InputFieldType::Slider => {
            let min = decl
                .argument_or_default(ArgumentKind::MinValue)
                .and_then(|v| v.as_number())
                .unwrap_or(f64::MIN);
            let max = decl
                .argument_or_default(ArgumentKind::MaxValue)
                .and_then(|v| v.as_number())
                .unwrap_or(f64::MAX);
            match raw.trim().parse::<f64>() {
                Ok(n) if n >= min && n <= max => {}
                _ => return Err(fail(format!("a number between {} and {}", min, max))),
            }
        }
        InputFieldType::Select => {
            if !options.is_empty() && !options.iter().any(|o| o == raw) {
                return Err(fail(format!("one of: {}", options.join(", "))));
            }
        }
        InputFieldType::MultiSelect => {
            if !options.is_empty() {
                let all_known = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .all(|item| options.iter().any(|o| o == item));
                if !all_known {
                    return Err(fail(format!(
                        "a comma separated list of: {}",
                        options.join(", ")
                    )));
                }
            }
        }
        InputFieldType::Date | InputFieldType::DatePicker => {
            if NaiveDate::parse_from_str(raw.trim(), date_format).is_err() {
                return Err(fail(format!("a date in the format '{}'", date_format)));
            }
        }
        InputFieldType::Time => {
            if NaiveTime::parse_from_str(raw.trim(), "%H:%M").is_err() {
                return Err(fail("a time as HH:MM".to_string()));
            }
        }
        InputFieldType::Text | InputFieldType::TextArea | InputFieldType::Invalid => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> DeclarationParser {
        DeclarationParser::new(ParserSettings::default())
    }

    fn parser_with_templates(templates: &[(&str, &str)]) -> DeclarationParser {
        let mut p = parser();
        let configs: Vec<TemplateConfig> = templates
            .iter()
            .map(|(n, d)| TemplateConfig::new(*n, *d))
            .collect();
        let errors = p.parse_templates(&configs);
        assert!(errors.is_empty(), "template errors: {:?}", errors);
        p
    }

    #[test]
    fn parses_toggle_scenario() {
        let decl = parser().parse("INPUT[toggle(title(\"Done\")):done]").unwrap();
        assert_eq!(decl.field_type, InputFieldType::Toggle);
        assert_eq!(decl.arguments.len(), 1);
        assert_eq!(decl.arguments[0].kind, ArgumentKind::Title);
        assert_eq!(decl.arguments[0].value, ArgumentValue::Text("Done".into()));
        assert!(decl.is_bound);
        assert_eq!(decl.bind_target.as_deref(), Some("done"));
        assert_eq!(decl.template_name, None);
    }

    #[test]
    fn unbound_declaration() {
        let decl = parser().parse("INPUT[text]").unwrap();
        assert!(!decl.is_bound);
        assert_eq!(decl.bind_target, None);
    }

    #[test]
    fn type_is_case_insensitive() {
        let decl = parser().parse("INPUT[Date_Picker]").unwrap();
        assert_eq!(decl.field_type, InputFieldType::DatePicker);
    }

    #[test]
    fn unknown_type_fails() {
        let err = parser().parse("INPUT[bogus]").unwrap_err();
        assert!(matches!(err, MetabindError::UnknownType { name } if name == "bogus"));
    }

    #[test]
    fn argument_not_allowed_for_type() {
        let err = parser().parse("INPUT[toggle(option(a))]").unwrap_err();
        assert!(matches!(
            err,
            MetabindError::UnknownArgument { ref argument, ref field_type }
                if argument == "option" && field_type == "toggle"
        ));
    }

    #[test]
    fn argument_not_in_table() {
        let err = parser().parse("INPUT[toggle(colour(red))]").unwrap_err();
        assert!(matches!(err, MetabindError::UnknownArgument { argument, .. } if argument == "colour"));
    }

    #[test]
    fn bad_argument_value() {
        let err = parser().parse("INPUT[slider(minValue(low))]").unwrap_err();
        assert!(matches!(err, MetabindError::ArgumentValue { argument, .. } if argument == "minValue"));
    }

    #[test]
    fn duplicate_non_repeatable_argument() {
        let err = parser()
            .parse("INPUT[toggle(title(a), title(b))]")
            .unwrap_err();
        assert!(err.to_string().contains("at most one occurrence"));
    }

    #[test]
    fn repeated_options_allowed() {
        let decl = parser()
            .parse("INPUT[select(option(a), option(b), option(c)):status]")
            .unwrap();
        assert_eq!(decl.options(), vec!["a", "b", "c"]);
    }

    #[test]
    fn slider_range_checked_against_defaults() {
        assert!(parser().parse("INPUT[slider(minValue(150))]").is_err());
        assert!(parser().parse("INPUT[slider(minValue(150), maxValue(200))]").is_ok());
    }

    #[test]
    fn default_value_checked_per_type() {
        let p = parser();
        assert!(p.parse("INPUT[toggle(defaultValue(true))]").is_ok());
        assert!(p.parse("INPUT[toggle(defaultValue(yes))]").is_err());
        assert!(p.parse("INPUT[slider(defaultValue(50))]").is_ok());
        assert!(p.parse("INPUT[slider(defaultValue(500))]").is_err());
        assert!(p.parse("INPUT[select(option(a), defaultValue(a))]").is_ok());
        assert!(p.parse("INPUT[select(option(a), defaultValue(b))]").is_err());
        assert!(p.parse("INPUT[date(defaultValue(2024-01-31))]").is_ok());
        assert!(p.parse("INPUT[date(defaultValue(31.01.2024))]").is_err());
        assert!(p.parse("INPUT[time(defaultValue(09:30))]").is_ok());
        assert!(p.parse("INPUT[time(defaultValue(9 am))]").is_err());
    }

    #[test]
    fn date_format_is_configurable() {
        let mut p = parser();
        assert!(p.parse("INPUT[date(minDate(01.02.2024))]").is_err());
        p.set_settings(ParserSettings {
            date_format: "%d.%m.%Y".to_string(),
        });
        assert!(p.parse("INPUT[date(minDate(01.02.2024))]").is_ok());
    }

    #[test]
    fn template_fills_missing_fields() {
        let p = parser_with_templates(&[("rating", "INPUT[slider(minValue(1), maxValue(5))]")]);
        let decl = p.parse("INPUT[rating][:score]").unwrap();
        assert_eq!(decl.field_type, InputFieldType::Slider);
        assert_eq!(
            decl.argument_or_default(ArgumentKind::MaxValue),
            Some(ArgumentValue::Number(5.0))
        );
        assert_eq!(decl.bind_target.as_deref(), Some("score"));
        assert_eq!(decl.template_name.as_deref(), Some("rating"));
    }

    #[test]
    fn literal_beats_template_beats_type_default() {
        let p = parser_with_templates(&[("rating", "INPUT[slider(maxValue(5), step(0.5))]")]);
        let decl = p.parse("INPUT[rating][slider(maxValue(10))]").unwrap();
        // literal
        assert_eq!(
            decl.argument_or_default(ArgumentKind::MaxValue),
            Some(ArgumentValue::Number(10.0))
        );
        // template
        assert_eq!(
            decl.argument_or_default(ArgumentKind::Step),
            Some(ArgumentValue::Number(0.5))
        );
        // type default
        assert_eq!(
            decl.argument_or_default(ArgumentKind::MinValue),
            Some(ArgumentValue::Number(0.0))
        );
    }

    #[test]
    fn literal_type_beats_template_type() {
        let p = parser_with_templates(&[("boxed", "INPUT[text(class(boxed))]")]);
        let decl = p.parse("INPUT[boxed][text_area]").unwrap();
        assert_eq!(decl.field_type, InputFieldType::TextArea);
        assert_eq!(decl.arguments.len(), 1);
    }

    #[test]
    fn template_bind_target_used_when_literal_has_none() {
        let p = parser_with_templates(&[("done", "INPUT[toggle:done]")]);
        let decl = p.parse("INPUT[done][toggle]").unwrap();
        assert!(decl.is_bound);
        assert_eq!(decl.bind_target.as_deref(), Some("done"));

        let decl = p.parse("INPUT[done][:finished]").unwrap();
        assert_eq!(decl.bind_target.as_deref(), Some("finished"));
    }

    #[test]
    fn unknown_template_degrades_to_literal() {
        let outcome = parser()
            .parse_with_diagnostics("INPUT[missing][toggle:done]")
            .unwrap();
        assert_eq!(outcome.declaration.field_type, InputFieldType::Toggle);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            &outcome.warnings[0],
            MetabindError::UnknownTemplate { name } if name == "missing"
        ));
    }

    #[test]
    fn unknown_template_without_type_is_fatal() {
        let err = parser().parse("INPUT[missing][:done]").unwrap_err();
        assert!(matches!(err, MetabindError::UnknownTemplate { .. }));
    }

    #[test]
    fn missing_type_without_template() {
        let err = parser().parse("INPUT[:done]").unwrap_err();
        assert!(err.to_string().contains("missing input field type"));
    }

    #[test]
    fn template_arguments_checked_against_final_type() {
        let p = parser_with_templates(&[("opts", "INPUT[select(option(a))]")]);
        let err = p.parse("INPUT[opts][toggle]").unwrap_err();
        assert!(matches!(err, MetabindError::UnknownArgument { .. }));
    }

    #[test]
    fn parse_templates_reports_and_skips_bad_definitions() {
        let mut p = parser();
        let errors = p.parse_templates(&[
            TemplateConfig::new("good", "INPUT[toggle]"),
            TemplateConfig::new("bad", "INPUT[bogus]"),
            TemplateConfig::new("nested", "INPUT[good][toggle]"),
            TemplateConfig::new("good", "INPUT[text]"),
        ]);
        assert_eq!(errors.len(), 3);
        assert!(p.templates().contains("good"));
        assert!(!p.templates().contains("bad"));
        assert_eq!(
            p.templates().get("good").unwrap().field_type,
            Some(InputFieldType::Toggle)
        );
    }

    #[test]
    fn parse_templates_replaces_table() {
        let mut p = parser_with_templates(&[("a", "INPUT[toggle]")]);
        p.parse_templates(&[TemplateConfig::new("b", "INPUT[text]")]);
        assert!(!p.templates().contains("a"));
        assert!(p.templates().contains("b"));
    }

    #[test]
    fn programmatic_declaration() {
        let partial = PartialDeclaration::new(InputFieldType::Text)
            .with_argument("placeholder", Some("Author"))
            .bound_to("meta.author");
        let outcome = parser().parse_declaration(partial, None, None).unwrap();
        let decl = outcome.declaration;
        assert!(decl.is_bound);
        assert_eq!(decl.bind_target.as_deref(), Some("meta.author"));
        assert_eq!(
            decl.argument(ArgumentKind::Placeholder).unwrap().raw.as_deref(),
            Some("Author")
        );
    }

    #[test]
    fn programmatic_bound_without_target_fails() {
        let partial = PartialDeclaration::new(InputFieldType::Toggle).with_bound(true);
        let err = parser().parse_declaration(partial, None, None).unwrap_err();
        assert!(matches!(err, MetabindError::MissingBindTarget));
    }

    #[test]
    fn programmatic_arguments_override() {
        let partial =
            PartialDeclaration::new(InputFieldType::Select).with_argument("option", Some("x"));
        let outcome = parser()
            .parse_declaration(
                partial,
                Some(vec![("option".to_string(), Some("y".to_string()))]),
                None,
            )
            .unwrap();
        assert_eq!(outcome.declaration.options(), vec!["y"]);
    }

    #[test]
    fn programmatic_declaration_uses_template() {
        let p = parser_with_templates(&[("status", "INPUT[select(option(todo), option(done))]")]);
        let partial = PartialDeclaration::default().bound_to("status");
        let outcome = p
            .parse_declaration(partial, None, Some("status".to_string()))
            .unwrap();
        assert_eq!(outcome.declaration.field_type, InputFieldType::Select);
        assert_eq!(outcome.declaration.options(), vec!["todo", "done"]);
    }

    #[test]
    fn round_trips_through_display() {
        let p = parser_with_templates(&[("rating", "INPUT[slider(maxValue(5))]")]);
        for text in [
            "INPUT[toggle]",
            "INPUT[toggle(title(Done)):done]",
            "INPUT[slider(addLabels, minValue(-1.5), maxValue(10), step(0.5)):meta.score]",
            "INPUT[text(placeholder(\"a, b\"), class(wide)):other#author]",
            "INPUT[text_area(placeholder(\"\"))]",
            "INPUT[select(option(one), option(two words), alignRight):status]",
            "INPUT[multi_select(option(a), option(b), defaultValue(\"a, b\")):tags]",
            "INPUT[date(minDate(2024-01-01), maxDate(2024-12-31)):due]",
            "INPUT[time(defaultValue(\"09:30\")):at]",
            "INPUT[date_picker:when]",
            "INPUT[rating][slider(step(2)):score]",
        ] {
            let decl = p.parse(text).unwrap();
            let reparsed = p.parse(&decl.to_string()).unwrap();
            assert_eq!(reparsed, decl, "round trip of {}", text);
        }
    }
}
