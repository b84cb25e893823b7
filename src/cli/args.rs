//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// ak2espanso - Convert AutoKey phrase expansions into Espanso match entries
#[derive(Parser, Debug)]
#[command(name = "ak2espanso")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the AutoKey configuration directory.
    /// Each <name>.txt replacement file must have a matching hidden
    /// .<name>.json metadata file alongside it.
    pub autokey_cfg_directory: PathBuf,

    /// The number of spaces per indent level in the emitted YAML
    #[arg(long, default_value = "2")]
    pub indent: usize,

    /// Preserve case, w->with and W->WITH, or not.
    /// Controls the propagate_case flag on every emitted match.
    #[arg(long, default_value = "true", action = ArgAction::Set)]
    pub preserve_case: bool,
}

impl Cli {
    /// Get the one-level indentation string derived from `--indent`.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }
}
