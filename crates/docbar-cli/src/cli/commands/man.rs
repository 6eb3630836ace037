//! `docbar man` – print the roff man page.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout()).context("write man page")?;
    Ok(())
}
