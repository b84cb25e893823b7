//! Directory scanning and metadata-file pairing.
//!
//! AutoKey stores each phrase as a `<name>.txt` file holding the
//! replacement text, with a hidden `.<name>.json` file alongside it
//! holding the trigger abbreviations and matching rules.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ConvertError;

/// List the candidate `<name>.txt` phrase files in `dir`, sorted by file
/// name so output order is reproducible across platforms.
///
/// Hidden files and subdirectories are ignored. Fails with
/// [`ConvertError::NotADirectory`] if `dir` is not a directory.
pub fn list_phrase_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::NotADirectory(dir.to_path_buf()).into());
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(".txt") {
            continue;
        }
        sources.push(path);
    }

    sources.sort();
    Ok(sources)
}

/// Derive the expected metadata path for a phrase file: strip the `.txt`
/// extension, prefix the name with `.`, and append `.json`.
///
/// `/cfg/greeting.txt` pairs with `/cfg/.greeting.json`.
pub fn metadata_path_for(txt_path: &Path) -> PathBuf {
    let parent = txt_path.parent().unwrap_or_else(|| Path::new("."));
    let stem = txt_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    parent.join(format!(".{}.json", stem))
}
