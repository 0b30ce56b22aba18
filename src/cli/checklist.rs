//! Checklist rendering command.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::checklist::{ChecklistView, Segment};
use crate::cli::common::{CliContext, CliError, CliResult};

/// Render checklists from templates
#[derive(Debug, Clone, Args)]
pub struct ChecklistArgs {
    /// Checklist subcommand
    #[command(subcommand)]
    pub command: ChecklistCommand,
}

/// Checklist subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ChecklistCommand {
    /// Print a fillable checklist for a template
    Render(RenderArgs),
}

/// Print a checklist
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Mark a row (1-based) as checked; repeatable
    #[arg(long = "check", value_name = "ROW")]
    pub checked: Vec<usize>,

    /// Output rows and segments as JSON
    #[arg(long)]
    pub json: bool,
}

/// Segment in JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentOutput {
    /// Fixed text
    Text {
        /// Display text
        text: String,
    },
    /// Fill-in field
    Blank,
}

/// Row in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct RowOutput {
    /// Checkbox state
    pub checked: bool,
    /// Row segments
    pub segments: Vec<SegmentOutput>,
}

impl ChecklistArgs {
    /// Execute the checklist command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            ChecklistCommand::Render(args) => args.execute(ctx),
        }
    }
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let repository = ctx.open_repository()?;

        let mut view = ChecklistView::new();
        view.select_template(Some(self.name.as_str()));
        if !view.build_checklist(repository.collection()) {
            return Err(CliError::validation(format!(
                "Template '{}' not found",
                self.name
            )));
        }

        for &row in &self.checked {
            if row == 0 || !view.set_checked(row - 1, true) {
                return Err(CliError::validation(format!(
                    "Row {row} is out of range (1-{})",
                    view.rows().len()
                )));
            }
        }

        if self.json {
            let rows: Vec<RowOutput> = view
                .rows()
                .iter()
                .map(|row| RowOutput {
                    checked: row.checked,
                    segments: row
                        .segments
                        .iter()
                        .map(|segment| match segment {
                            Segment::Text(text) => SegmentOutput::Text { text: text.clone() },
                            Segment::Blank => SegmentOutput::Blank,
                        })
                        .collect(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print!("{}", view.render_plain());
        }

        Ok(())
    }
}
