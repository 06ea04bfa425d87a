//! CLI argument parsing for the ranking workflow.
//!
//! The CLI only seeds the workflow; any value left out here is asked for
//! interactively.
use crate::config::CONFIG_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "pairrank",
    version,
    about = "Rank CSV rows by answering pairwise comparisons",
    after_help = "Commands:\n  <FILE> add <FIELD>... [--header|--no-header]  Insert one row at the position your answers pick\n  <FILE> reorder [--header|--no-header]         Rebuild the whole order from your answers\n\nWith neither header flag the config's `header` value applies (default: no header).\nWith no command, every step is prompted for.\n\nExamples:\n  pairrank movies.csv add \"Alien\" 1979 --header\n  pairrank movies.csv reorder --header\n  pairrank"
)]
pub struct RootArgs {
    /// CSV file holding the ranked rows
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// JSON config file
    #[arg(long, value_name = "PATH", env = CONFIG_ENV, global = true)]
    pub config: Option<PathBuf>,

    /// Log workflow steps and comparisons to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Add(AddArgs),
    Reorder(ReorderArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Add a new row using binary insertion")]
pub struct AddArgs {
    /// Fields of the new row
    #[arg(value_name = "FIELD", required = true, num_args = 1..)]
    pub row: Vec<String>,

    /// Treat the first row as a header
    #[arg(long)]
    pub header: bool,

    /// Treat the first row as data, even if the config says otherwise
    #[arg(long, conflicts_with = "header")]
    pub no_header: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Reorder every row in the file")]
pub struct ReorderArgs {
    /// Treat the first row as a header
    #[arg(long)]
    pub header: bool,

    /// Treat the first row as data, even if the config says otherwise
    #[arg(long, conflicts_with = "header")]
    pub no_header: bool,
}
