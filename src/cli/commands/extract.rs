//! Extract command implementation.
//!
//! The `subflow extract` command writes the sub-workflow needed by the
//! given targets to stdout or to a file.

use std::fs;

use tracing::debug;

use crate::cli::args::ExtractArgs;
use crate::config::Settings;
use crate::document::{load_document, render_document};
use crate::error::{Result, SubflowError};
use crate::extract::{extract, resolve_targets};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The extract command implementation.
pub struct ExtractCommand {
    args: ExtractArgs,
    settings: Settings,
}

impl ExtractCommand {
    /// Create a new extract command.
    pub fn new(args: ExtractArgs, settings: Settings) -> Self {
        Self { args, settings }
    }
}

impl Command for ExtractCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workflow = match load_document(&self.args.workflow) {
            Ok(doc) => doc,
            Err(SubflowError::DocumentNotFound { path }) => {
                ui.error(&format!("Workflow not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let roots = if self.settings.resolve_short_ids {
            resolve_targets(&self.args.targets, &workflow)
        } else {
            self.args.targets.clone()
        };
        debug!("Extracting roots: {:?}", roots);

        let extraction = extract(&roots, &workflow)?;
        for (source, entry) in &extraction.boundary.rewire {
            ui.detail(&format!("{} -> {}", source, entry.synthetic_id));
        }

        let format = self.args.format.unwrap_or(self.settings.format);
        let rendered = render_document(&extraction.document, format)?;

        let steps = extraction.document.steps().count();
        let summary = format!(
            "Extracted {} of {} steps ({} synthesized inputs)",
            steps,
            workflow.steps().count(),
            extraction.boundary.rewire.len()
        );

        match &self.args.output {
            Some(path) => {
                fs::write(path, rendered)?;
                ui.success(&format!("{} to {}", summary, path.display()));
            }
            None => {
                ui.emit(&rendered);
                ui.success(&summary);
            }
        }

        Ok(CommandResult::success())
    }
}
