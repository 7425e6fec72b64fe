//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Burnish static site HTML post-processor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: burnish.toml)
    #[arg(short = 'C', long, default_value = "burnish.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    // Long-only: the auto-generated version flag owns -V
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Enhance site pages in place
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Report pages whose markup would change, without writing
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Arguments for the Run command
#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Site HTML directory (overrides [site].dir from the config)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Parse and enhance without writing anything back
    #[arg(short, long)]
    pub dry: bool,
}

/// Arguments for the Check command
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Site HTML directory (overrides [site].dir from the config)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,
}
