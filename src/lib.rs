//! ak2espanso: AutoKey to Espanso phrase converter
//!
//! A library for converting AutoKey phrase expansion definitions
//! (paired `.txt` replacement files and hidden `.json` metadata files)
//! into Espanso match entries.

pub mod cli;
pub mod convert;
pub mod utils;
