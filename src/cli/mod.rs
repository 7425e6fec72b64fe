//! Command-line interface.

mod args;
pub mod run;

pub use args::{CheckArgs, Cli, Commands, RunArgs};
