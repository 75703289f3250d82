//! The `metabind set` command.
//!
//! Behaves like a user editing a bound field. If the document declares a
//! field bound to the path, the value goes through that control, so it is
//! coerced the same way (a toggle turns `"yes"` into its default, a slider
//! clamps). Other live fields bound to the same path are then updated
//! through the synchronizer, and the document is written back to disk.

use serde_yaml::Value;

use crate::bind::{BindTarget, FieldPath};
use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::metadata::{display_value, MetadataStore};
use crate::render::{LiveField, Renderer};
use crate::scan::scan_document;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

pub struct SetCommand {
    context: CommandContext,
    args: SetArgs,
}

impl SetCommand {
    pub fn new(context: &CommandContext, args: SetArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

/// Read a command-line value as a YAML scalar, falling back to plain text.
fn parse_value(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::Sequence(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.context.settings()?;
        let mut vault = self.context.vault()?;
        let file = self.context.document(&vault, &self.args.file)?;
        let field_path = match FieldPath::parse(&self.args.field_path) {
            Ok(path) => path,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };
        let target = BindTarget {
            file: file.clone(),
            field_path,
        };

        let mut store = vault.store();
        let mut renderer = Renderer::from_settings(&settings, vault.index());
        let document = vault.document(&file).unwrap_or_default().to_string();
        let mut fields: Vec<LiveField> = scan_document(&document)
            .iter()
            .filter_map(|site| renderer.render(&site.text, &file, &store).into_live())
            .collect();

        let value = parse_value(&self.args.value);
        let bound = fields.iter().position(|field| {
            renderer
                .synchronizer()
                .registry()
                .get(field.uid())
                .and_then(|entry| entry.target())
                == Some(&target)
        });

        match bound {
            Some(i) => renderer.edit(&mut fields[i], value, &mut store)?,
            None => {
                tracing::debug!("No field bound to {}, writing directly", target);
                store.write(&target.file, &target.field_path, value)?;
            }
        }

        let updated = renderer.deliver(&mut store);
        for field in &mut fields {
            renderer.flush(field)?;
        }
        vault.persist(&store, &file)?;

        let written = store
            .read(&target.file, &target.field_path)
            .map(|v| display_value(&v))
            .unwrap_or_default();
        ui.success(&format!("{} = {}", target, written));
        if !updated.is_empty() {
            ui.message(&format!("{} other live field(s) updated", updated.len()));
        }
        for field in fields {
            renderer.unmount(field);
        }
        Ok(CommandResult::success())
    }
}
