//! Burnish - a post-processor for static site HTML.

mod cli;
mod config;
mod core;
mod dom;
mod enhance;
mod logger;
mod site;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use cli::run::{Mode, enhance_site};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Run { args } => {
            enhance_site(&config, args.dir.as_deref(), Mode::Write { dry: args.dry })
        }
        Commands::Check { args } => enhance_site(&config, args.dir.as_deref(), Mode::Check),
    }
}
