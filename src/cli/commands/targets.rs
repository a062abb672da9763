//! Targets command implementation.
//!
//! The `subflow targets` command lists the inputs, outputs and steps of a
//! workflow that can be passed to `extract`.

use crate::cli::args::TargetsArgs;
use crate::document::load_document;
use crate::error::{Result, SubflowError};
use crate::extract::{list_targets, Target};
use crate::graph::NodeKind;
use crate::ui::theme::SubflowTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The targets command implementation.
pub struct TargetsCommand {
    args: TargetsArgs,
}

impl TargetsCommand {
    /// Create a new targets command.
    pub fn new(args: TargetsArgs) -> Self {
        Self { args }
    }

    fn render_json(targets: &[Target]) -> Result<String> {
        let entries: Vec<_> = targets
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id,
                    "name": t.short_name(),
                    "kind": t.kind.label(),
                })
            })
            .collect();
        let mut json =
            serde_json::to_string_pretty(&entries).map_err(|e| SubflowError::Other(e.into()))?;
        json.push('\n');
        Ok(json)
    }

    fn render_text(targets: &[Target], theme: &SubflowTheme) -> String {
        let mut out = String::new();
        for (kind, heading) in [
            (NodeKind::Input, "Inputs:"),
            (NodeKind::Output, "Outputs:"),
            (NodeKind::Step, "Steps:"),
        ] {
            let section: Vec<_> = targets.iter().filter(|t| t.kind == kind).collect();
            if section.is_empty() {
                continue;
            }
            out.push_str(&format!("{}\n", theme.key.apply_to(heading)));
            for target in section {
                out.push_str(&format!(
                    "  {} {}\n",
                    theme.highlight.apply_to(target.short_name()),
                    theme.dim.apply_to(format!("({})", target.id))
                ));
            }
        }
        out
    }
}

impl Command for TargetsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workflow = match load_document(&self.args.workflow) {
            Ok(doc) => doc,
            Err(SubflowError::DocumentNotFound { path }) => {
                ui.error(&format!("Workflow not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let targets = list_targets(&workflow);
        if self.args.json {
            ui.emit(&Self::render_json(&targets)?);
            return Ok(CommandResult::success());
        }

        if targets.is_empty() {
            ui.warning("Workflow declares no inputs, outputs or steps");
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            SubflowTheme::new()
        } else {
            SubflowTheme::plain()
        };
        ui.emit(&Self::render_text(&targets, &theme));
        Ok(CommandResult::success())
    }
}
