//! pathops CLI
//!
//! A thin host around the pathops facade: each subcommand maps to one
//! action, the outcome is printed (text or JSON) and mirrored in the exit
//! code.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pathops_core::{ContentRoot, Outcome, PathOps, RootConfig, StaticRoot};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(outcome) => {
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let ops = PathOps::new(StaticRoot::new(resolve_root(&cli)?));
    let outcome = execute_command(&ops, &cli.command);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{outcome}");
    }
    Ok(outcome)
}

/// Content root precedence: `--root` flag, then the config file if it
/// exists, then the working directory.
fn resolve_root(cli: &Cli) -> Result<String> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }
    if cli.config.is_file() {
        let config = RootConfig::load(&cli.config)?;
        return Ok(config.content_root().to_string());
    }
    Ok(".".to_string())
}

fn execute_command(ops: &PathOps<StaticRoot>, cmd: &Commands) -> Outcome {
    match cmd {
        Commands::CreateDir { path } => ops.create_dir(path),
        Commands::Remove { path, no_force } => ops.remove(path, !no_force),
        Commands::Rename { old_path, new_path } => ops.rename(old_path, new_path),
        Commands::CurrentPath => ops.current_path(),
        Commands::ExePath => ops.executable_path(),
        Commands::Root { absolute } => ops.absolute_dir(*absolute),
        Commands::Print { path } => ops.print(path),
    }
}
