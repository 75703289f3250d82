//! The `metabind scan` command.
//!
//! Renders every declaration of one document against the whole vault, the
//! way an editor would when opening it. Exits non-zero if any declaration
//! renders as an error placeholder.

use serde::Serialize;

use crate::cli::args::ScanArgs;
use crate::error::Result;
use crate::fields::ControlView;
use crate::render::{ErrorPlaceholder, RenderedField, Renderer};
use crate::scan::{scan_document, DeclarationSite};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
    Live(ControlView),
    Error(ErrorPlaceholder),
}

#[derive(Debug, Serialize)]
struct ScanReport {
    #[serde(flatten)]
    site: DeclarationSite,
    outcome: Outcome,
}

pub struct ScanCommand {
    context: CommandContext,
    args: ScanArgs,
}

impl ScanCommand {
    pub fn new(context: &CommandContext, args: ScanArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.context.settings()?;
        let vault = self.context.vault()?;
        let file = self.context.document(&vault, &self.args.file)?;
        let store = vault.store();
        let mut renderer = Renderer::from_settings(&settings, vault.index());

        let document = vault.document(&file).unwrap_or_default();
        let mut reports = Vec::new();
        for site in scan_document(document) {
            let outcome = match renderer.render(&site.text, &file, &store) {
                RenderedField::Live(field) => Outcome::Live(field.view().clone()),
                RenderedField::Error(placeholder) => Outcome::Error(placeholder),
            };
            reports.push(ScanReport { site, outcome });
        }

        let failed = reports
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Error(_)))
            .count();

        if self.args.json {
            let json = serde_json::to_string_pretty(&reports).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.show_header(&format!("{} ({} declaration(s))", file, reports.len()));
            for report in &reports {
                let line = report.site.line;
                match &report.outcome {
                    Outcome::Live(view) => {
                        let label = view
                            .label
                            .as_deref()
                            .map(|l| format!(" \"{}\"", l))
                            .unwrap_or_default();
                        ui.success(&format!(
                            "line {}: {}{} = {}",
                            line, view.kind, label, view.display
                        ));
                    }
                    Outcome::Error(placeholder) => {
                        ui.error(&format!("line {}: {}", line, placeholder.message));
                    }
                }
            }
        }

        if failed > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run(doc: &str) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("note.md"), doc).unwrap();
        let context = CommandContext::new(temp.path().to_path_buf(), None);
        let cmd = ScanCommand::new(
            &context,
            ScanArgs {
                file: PathBuf::from("note.md"),
                json: false,
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn renders_live_fields_with_store_values() {
        let (result, ui) = run("---\ndone: true\n---\n`INPUT[toggle(title(Done)):done]`\n");
        assert!(result.success);
        assert_eq!(ui.successes(), &["line 4: toggle \"Done\" = true".to_string()]);
    }

    #[test]
    fn broken_declarations_fail_the_scan() {
        let (result, ui) = run("`INPUT[bogus]`\n`INPUT[toggle]`\n");
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.successes().len(), 1);
        assert!(ui.errors()[0].starts_with("line 1:"));
    }
}
