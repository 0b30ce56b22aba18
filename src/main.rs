//! LazyChecklist - Terminal-based checklist template editor
//!
//! Without a subcommand the interactive TUI starts. Subcommands give
//! headless access to templates and checklists for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use lazychecklist::cli::{ChecklistArgs, CliContext, CliError, CliResult, TemplateArgs};
use lazychecklist::config::Config;
use lazychecklist::constants::APP_NAME;
use lazychecklist::logging;
use lazychecklist::services::TemplateRepository;
use lazychecklist::store::{FileStore, KeyValueStore};
use lazychecklist::tui::{self, AppState};

/// LazyChecklist - build checklist templates and fill in checklists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store file to read and write templates (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    store: Option<PathBuf>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage checklist templates
    Template(TemplateArgs),
    /// Render checklists from templates
    Checklist(ChecklistArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(cli: &Cli, command: &Command) -> CliResult<()> {
    let config = load_config(cli.config.as_ref())
        .map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;
    let ctx = CliContext::new(config, cli.store.clone());

    match command {
        Command::Template(args) => args.execute(&ctx),
        Command::Checklist(args) => args.execute(&ctx),
    }
}

fn run_interactive(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init(&Config::config_file_path()?)?,
    };
    logging::init_file(&Config::log_file_path()?, cli.verbose)?;

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => config.storage.store_path()?,
    };
    info!("{} starting with store {}", APP_NAME, store_path.display());

    let store: Box<dyn KeyValueStore> = Box::new(FileStore::open(store_path));
    let repository = TemplateRepository::with_prefix(store, config.storage.key_prefix.clone())
        .context("Failed to load templates")?;
    let mut state = AppState::new(config, repository);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        logging::init_stderr(cli.verbose);
        if let Err(e) = run_command(&cli, command) {
            eprintln!("Error: {}", e.message);
            std::process::exit(e.exit_code.code());
        }
        return Ok(());
    }

    run_interactive(&cli)
}
