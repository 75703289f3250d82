//! The `metabind parse` command.

use crate::cli::args::ParseArgs;
use crate::error::Result;
use crate::parser::{DeclarationParser, InputFieldDeclaration};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

pub struct ParseCommand {
    context: CommandContext,
    args: ParseArgs,
}

impl ParseCommand {
    pub fn new(context: &CommandContext, args: ParseArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    fn show(&self, declaration: &InputFieldDeclaration, ui: &mut dyn UserInterface) {
        ui.show_header(&declaration.to_string());
        ui.key_value("type", declaration.field_type.name());
        if let Some(template) = &declaration.template_name {
            ui.key_value("template", template);
        }
        for argument in &declaration.arguments {
            ui.key_value("argument", &argument.to_declaration_text());
        }
        match &declaration.bind_target {
            Some(target) => ui.key_value("bind target", target),
            None => ui.key_value("bind target", "(unbound)"),
        }
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.context.settings()?;
        let parser = DeclarationParser::from_settings(&settings);

        let outcome = match parser.parse_with_diagnostics(&self.args.declaration) {
            Ok(outcome) => outcome,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        for warning in &outcome.warnings {
            ui.warning(&warning.to_string());
        }
        if self.args.json {
            let json = serde_json::to_string_pretty(&outcome.declaration)
                .map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            self.show(&outcome.declaration, ui);
        }
        Ok(CommandResult::success())
    }
}
