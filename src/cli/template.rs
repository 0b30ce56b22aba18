//! Template management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::editor::{SaveOutcome, TemplateEditor};
use crate::models::ChecklistItem;

/// Manage checklist templates
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Template subcommand
    #[command(subcommand)]
    pub command: TemplateCommand,
}

/// Template subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TemplateCommand {
    /// List available templates
    List(ListArgs),
    /// Print a template's items
    Show(ShowArgs),
    /// Append items to a template, creating it if needed
    Add(AddArgs),
    /// Import a template from a JSON file and save it
    Import(ImportArgs),
    /// Export a template to `<name>.json`
    Export(ExportArgs),
    /// Delete a template
    Delete(DeleteArgs),
}

/// List available templates
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print a template's items
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output the raw item array as JSON
    #[arg(long)]
    pub json: bool,
}

/// Append items to a template
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Item texts (use `\t` to insert a blank)
    #[arg(value_name = "ITEM", required = true)]
    pub items: Vec<String>,
}

/// Import a template file
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// JSON file containing an array of `{"text": ...}` objects
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Export a template file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Delete a template
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Template summary for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    /// Template name
    pub name: String,
    /// Number of items
    pub items: usize,
}

/// Template list response
#[derive(Debug, Clone, Serialize)]
pub struct TemplateListResponse {
    /// List of templates
    pub templates: Vec<TemplateInfo>,
    /// Total number of templates
    pub count: usize,
}

impl TemplateArgs {
    /// Execute the template command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            TemplateCommand::List(args) => args.execute(ctx),
            TemplateCommand::Show(args) => args.execute(ctx),
            TemplateCommand::Add(args) => args.execute(ctx),
            TemplateCommand::Import(args) => args.execute(ctx),
            TemplateCommand::Export(args) => args.execute(ctx),
            TemplateCommand::Delete(args) => args.execute(ctx),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let repository = ctx.open_repository()?;

        let templates: Vec<TemplateInfo> = repository
            .collection()
            .iter()
            .map(|(name, items)| TemplateInfo {
                name: name.clone(),
                items: items.len(),
            })
            .collect();

        let count = templates.len();
        let response = TemplateListResponse { templates, count };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if count == 0 {
            println!("No templates found.");
        } else {
            println!("Available templates ({count}):\n");
            for template in &response.templates {
                println!("  {} ({} items)", template.name, template.items);
            }
        }

        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let repository = ctx.open_repository()?;
        let items = repository
            .get(&self.name)
            .ok_or_else(|| CliError::validation(format!("Template '{}' not found", self.name)))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string(items)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}:", self.name);
            for (index, item) in items.iter().enumerate() {
                println!("  {:>3}. {}", index + 1, item.text);
            }
        }

        Ok(())
    }
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CliError::validation("Template name cannot be empty"));
        }

        let mut repository = ctx.open_repository()?;
        let mut editor = TemplateEditor::new();

        let exists = repository.contains(name);
        if exists {
            editor.select_template(&repository, name)?;
        } else {
            editor.new_template();
        }

        let mut added = 0;
        for text in &self.items {
            editor.set_input(text.as_str());
            if editor.add_item().is_some() {
                added += 1;
            }
        }

        if added == 0 {
            return Err(CliError::validation("No non-blank items given"));
        }

        let outcome = if exists {
            editor.save(&mut repository)?
        } else {
            editor.save_as(&mut repository, Some(name))?
        };

        match outcome {
            SaveOutcome::Saved(name) => {
                println!("✓ Added {added} item(s) to template: {name}");
                Ok(())
            }
            SaveOutcome::NeedsName | SaveOutcome::Cancelled => Err(CliError::validation(
                format!("Invalid template name: '{name}'"),
            )),
        }
    }
}

impl ImportArgs {
    /// Execute the import command
    ///
    /// Unlike the interactive editor, the CLI import saves immediately.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if !self.file.exists() {
            return Err(CliError::validation(format!(
                "Template file not found: {}",
                self.file.display()
            )));
        }

        let mut repository = ctx.open_repository()?;
        let mut editor = TemplateEditor::new();

        let name = editor.import_file(&mut repository, &self.file)?;
        editor.save(&mut repository)?;

        let count = repository.get(&name).map_or(0, <[ChecklistItem]>::len);
        println!("✓ Template imported: {name} ({count} items)");
        Ok(())
    }
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let repository = ctx.open_repository()?;
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, &self.name)?;

        let dir = self
            .out
            .clone()
            .unwrap_or_else(|| ctx.config.export.export_dir());
        let path = editor.export(&repository, &dir)?;

        println!("✓ Template exported: {}", self.name);
        println!("  File: {}", path.display());
        Ok(())
    }
}

impl DeleteArgs {
    /// Execute the delete command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut repository = ctx.open_repository()?;
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, &self.name)?;

        let name = editor.delete_template(&mut repository)?;
        println!("✓ Template deleted: {name}");
        Ok(())
    }
}
