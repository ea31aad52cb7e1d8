pub mod diff;
pub mod patch;
pub mod read;
pub mod unpatch;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "spatch", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the delta between two JSON documents
    Diff(DiffArgs),

    /// Apply a delta to a JSON document
    Patch(PatchArgs),

    /// Reverse a delta against a JSON document
    Unpatch(UnpatchArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ArrayModeArg {
    Efficient,
    Simple,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the left-hand JSON file
    pub left: PathBuf,

    /// Path to the right-hand JSON file
    pub right: PathBuf,

    /// Dotted path to exclude from the delta (case-insensitive, repeatable)
    #[arg(long = "exclude")]
    pub exclude_paths: Vec<String>,

    /// Do not emit a deletion entry for keys missing on the right
    #[arg(long, env = "SPATCH_IGNORE_MISSING")]
    pub ignore_missing: bool,

    /// Do not emit an addition entry for keys new on the right
    #[arg(long, env = "SPATCH_IGNORE_NEW")]
    pub ignore_new: bool,

    /// Array diffing strategy
    #[arg(long = "array-mode", value_enum, default_value_t = ArrayModeArg::Efficient)]
    pub array_mode: ArrayModeArg,
}

#[derive(Debug, Args)]
pub struct PatchArgs {
    /// Path to the left-hand JSON file
    pub left: PathBuf,

    /// Path to the delta JSON file
    pub delta: PathBuf,
}

#[derive(Debug, Args)]
pub struct UnpatchArgs {
    /// Path to the right-hand JSON file
    pub right: PathBuf,

    /// Path to the delta JSON file
    pub delta: PathBuf,
}
