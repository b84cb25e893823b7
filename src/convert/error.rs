//! Error types for the conversion pipeline.
//!
//! Only the top-level input precondition is fatal; everything that can go
//! wrong with an individual definition pair is handled as a recoverable
//! skip and never surfaces as an error.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path is missing or is not a directory.
    #[error("{} is not a directory. directory required", .0.display())]
    NotADirectory(PathBuf),
}
