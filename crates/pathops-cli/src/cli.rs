//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pathops - run filesystem path actions with uniform diagnostics
#[derive(Parser, Debug)]
#[command(name = "pathops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output the outcome as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Content root override (otherwise read from config, default ".")
    #[arg(long, global = true, env = "PATHOPS_ROOT")]
    pub root: Option<String>,

    /// Config file with the content root
    #[arg(long, global = true, default_value = "pathops.toml")]
    pub config: PathBuf,

    /// The action to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a directory and any missing ancestors
    CreateDir {
        /// Directory to create
        path: String,
    },

    /// Remove a path (recursively by default)
    Remove {
        /// Path to remove
        path: String,

        /// Remove only an empty directory or a single file
        #[arg(long)]
        no_force: bool,
    },

    /// Rename a path (OS atomic-rename semantics)
    Rename {
        /// Existing path
        old_path: String,

        /// Target path
        new_path: String,
    },

    /// Show the process's current working directory
    CurrentPath,

    /// Show the path of this executable
    ExePath,

    /// Show the content root
    Root {
        /// Resolve to an absolute, OS-normalized form
        #[arg(long)]
        absolute: bool,
    },

    /// Send a file to the default print handler
    Print {
        /// File to print
        path: String,
    },
}
