//! ak2espanso: AutoKey to Espanso phrase converter
//!
//! A command-line tool that converts AutoKey phrase expansion definitions
//! into Espanso match entries, printed to stdout for pasting into an
//! Espanso configuration file.

mod cli;
mod convert;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let indent = cli.indent_unit();
    convert::run_convert(&cli.autokey_cfg_directory, cli.preserve_case, &indent)
}
