//! Integration tests for the declaration parser public API.

use metabind::config::{Settings, TemplateConfig};
use metabind::parser::{
    ArgumentKind, ArgumentValue, DeclarationParser, InputFieldType, ParserSettings,
    PartialDeclaration,
};
use metabind::MetabindError;

fn parser() -> DeclarationParser {
    DeclarationParser::new(ParserSettings::default())
}

fn parser_with_templates(templates: &[(&str, &str)]) -> DeclarationParser {
    let settings = Settings {
        input_templates: templates
            .iter()
            .map(|(name, decl)| TemplateConfig::new(*name, *decl))
            .collect(),
        ..Settings::default()
    };
    DeclarationParser::from_settings(&settings)
}

#[test]
fn toggle_scenario() {
    let decl = parser().parse(r#"INPUT[toggle(title("Done")):done]"#).unwrap();
    assert_eq!(decl.field_type, InputFieldType::Toggle);
    assert_eq!(decl.arguments.len(), 1);
    assert_eq!(decl.arguments[0].kind, ArgumentKind::Title);
    assert_eq!(decl.arguments[0].value, ArgumentValue::Text("Done".into()));
    assert!(decl.is_bound);
    assert_eq!(decl.bind_target.as_deref(), Some("done"));

    insta::assert_json_snapshot!(decl, @r#"
    {
      "field_type": "toggle",
      "arguments": [
        {
          "kind": "title",
          "value": "Done",
          "raw": "Done"
        }
      ],
      "is_bound": true,
      "bind_target": "done"
    }
    "#);
}

#[test]
fn bogus_type_is_unknown_type_error() {
    let err = parser().parse("INPUT[bogus]").unwrap_err();
    assert!(matches!(err, MetabindError::UnknownType { ref name } if name == "bogus"));
}

#[test]
fn type_names_are_case_insensitive() {
    let decl = parser().parse("INPUT[Multi_Select(option(a))]").unwrap();
    assert_eq!(decl.field_type, InputFieldType::MultiSelect);
}

#[test]
fn argument_not_allowed_for_type() {
    let err = parser().parse("INPUT[toggle(option(a))]").unwrap_err();
    assert!(matches!(err, MetabindError::UnknownArgument { .. }));
}

#[test]
fn display_round_trips() {
    let p = parser();
    for text in [
        "INPUT[toggle]",
        "INPUT[slider(minValue(1), maxValue(10), step(0.5)):meta.score]",
        r#"INPUT[select(option("a, b"), option(c), title(Pick one)):other#choice]"#,
        "INPUT[date(minDate(2024-01-01), alignRight):due]",
    ] {
        let first = p.parse(text).unwrap();
        let second = p.parse(&first.to_string()).unwrap();
        assert_eq!(first, second, "round trip of {text}");
    }
}

#[test]
fn template_precedence_literal_over_template_over_default() {
    let p = parser_with_templates(&[(
        "rating",
        "INPUT[slider(minValue(1), maxValue(5), title(Rating))]",
    )]);
    let decl = p.parse("INPUT[rating][slider(maxValue(10)):score]").unwrap();

    // literal
    assert_eq!(
        decl.argument_or_default(ArgumentKind::MaxValue),
        Some(ArgumentValue::Number(10.0))
    );
    // template
    assert_eq!(
        decl.argument_or_default(ArgumentKind::MinValue),
        Some(ArgumentValue::Number(1.0))
    );
    // type default
    assert_eq!(
        decl.argument_or_default(ArgumentKind::Step),
        Some(ArgumentValue::Number(1.0))
    );
    assert_eq!(decl.template_name.as_deref(), Some("rating"));
}

#[test]
fn unknown_template_is_a_warning_when_type_given() {
    let outcome = parser()
        .parse_with_diagnostics("INPUT[missing][toggle:done]")
        .unwrap();
    assert_eq!(outcome.declaration.field_type, InputFieldType::Toggle);
    assert!(matches!(
        outcome.warnings.as_slice(),
        [MetabindError::UnknownTemplate { .. }]
    ));
}

#[test]
fn unknown_template_without_type_is_fatal() {
    let err = parser().parse("INPUT[missing][:done]").unwrap_err();
    assert!(matches!(err, MetabindError::UnknownTemplate { .. }));
}

#[test]
fn partial_declarations_are_validated() {
    let p = parser();
    let outcome = p
        .parse_declaration(
            PartialDeclaration::new(InputFieldType::Text)
                .with_argument("placeholder", Some("Author"))
                .bound_to("meta.author"),
            None,
            None,
        )
        .unwrap();
    assert!(outcome.declaration.is_bound);
    assert!(outcome.warnings.is_empty());

    let err = p
        .parse_declaration(
            PartialDeclaration::new(InputFieldType::Text).with_bound(true),
            None,
            None,
        )
        .unwrap_err();
    assert!(matches!(err, MetabindError::MissingBindTarget));
}

#[test]
fn reconfiguring_the_date_format() {
    let mut p = parser();
    assert!(p.parse("INPUT[date(minDate(01.02.2024))]").is_err());
    p.set_settings(ParserSettings {
        date_format: "%d.%m.%Y".to_string(),
    });
    assert!(p.parse("INPUT[date(minDate(01.02.2024))]").is_ok());
}
