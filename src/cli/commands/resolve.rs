//! The `metabind resolve` command.

use crate::bind::{resolve_candidates, resolve_with_policy, AmbiguityPolicy};
use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

pub struct ResolveCommand {
    context: CommandContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    pub fn new(context: &CommandContext, args: ResolveArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    fn policy(&self) -> AmbiguityPolicy {
        if self.args.first {
            AmbiguityPolicy::FirstInPathOrder
        } else {
            AmbiguityPolicy::Reject
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let vault = self.context.vault()?;
        let from = self.context.document(&vault, &self.args.from)?;
        let index = vault.index();

        let candidates = match resolve_candidates(&self.args.bind, &from, &index) {
            Ok(candidates) => candidates,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };
        ui.key_value("field path", &candidates.field_path.to_string());
        for file in &candidates.files {
            ui.key_value("candidate", file.as_str());
        }

        match resolve_with_policy(&self.args.bind, &from, &index, self.policy()) {
            Ok(target) => {
                ui.success(&target.to_string());
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
