//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::lookup::LookupArgs;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "breedcache")]
#[command(about = "Look up Dog CEO sub-breeds through a memoizing cache", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Read configuration from this YAML file instead of .breedcache/
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the sub-breeds of one or more breeds
    Lookup(LookupArgs),
}
