//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// Write a `<name>.txt` replacement file and its paired `.<name>.json`
/// metadata file into `dir`. Returns the path of the `.txt` file.
pub fn write_phrase_pair(dir: &Path, name: &str, replacement: &str, metadata: &Value) -> PathBuf {
    let txt_path = write_replacement(dir, name, replacement);
    fs::write(
        dir.join(format!(".{}.json", name)),
        serde_json::to_string(metadata).unwrap(),
    )
    .unwrap();
    txt_path
}

/// Write only the `<name>.txt` replacement file (no metadata pair).
pub fn write_replacement(dir: &Path, name: &str, replacement: &str) -> PathBuf {
    let txt_path = dir.join(format!("{}.txt", name));
    fs::write(&txt_path, replacement).unwrap();
    txt_path
}

/// Metadata for a phrase definition with the given triggers.
pub fn phrase_metadata(triggers: &[&str], word_chars: bool) -> Value {
    json!({
        "type": "phrase",
        "abbreviation": {
            "abbreviations": triggers,
            "wordChars": word_chars,
        }
    })
}

/// Metadata for a non-phrase definition kind (e.g. an AutoKey script).
pub fn non_phrase_metadata(kind: &str) -> Value {
    json!({ "type": kind })
}
