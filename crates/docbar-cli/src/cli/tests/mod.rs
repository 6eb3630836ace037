//! CLI parse tests and command runs against temp config files.

use super::{Cli, CliCommand};
use clap::Parser;

mod parse;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}
