//! The `metabind templates` command.

use serde_json::json;

use crate::cli::args::TemplatesArgs;
use crate::error::Result;
use crate::parser::{DeclarationParser, ParserSettings};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

pub struct TemplatesCommand {
    context: CommandContext,
    args: TemplatesArgs,
}

impl TemplatesCommand {
    pub fn new(context: &CommandContext, args: TemplatesArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.context.settings()?;
        let mut parser = DeclarationParser::new(ParserSettings::from(&settings));
        let errors = parser.parse_templates(&settings.input_templates);
        let table = parser.templates();

        if self.args.json {
            let templates: Vec<_> = table
                .names()
                .into_iter()
                .filter_map(|name| table.get(name))
                .map(|t| {
                    json!({
                        "name": t.name,
                        "field_type": t.field_type,
                        "declaration": t.source,
                    })
                })
                .collect();
            let errors: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            let out = json!({ "templates": templates, "errors": errors });
            ui.message(&serde_json::to_string_pretty(&out).map_err(anyhow::Error::from)?);
        } else {
            ui.show_header(&format!("{} template(s)", table.len()));
            for name in table.names() {
                if let Some(template) = table.get(name) {
                    ui.key_value(name, &template.source);
                }
            }
            for error in &errors {
                ui.warning(&error.to_string());
            }
        }

        if errors.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
