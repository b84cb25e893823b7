//! Typed model of AutoKey's per-phrase JSON metadata.
//!
//! AutoKey writes these files itself, but older versions and hand edits
//! leave fields missing or loosely typed (`wordChars` in particular shows
//! up as a bool, a number, or a character-class string). Everything is
//! therefore optional with explicit defaults, validated once at parse time.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Parsed contents of a `.<name>.json` metadata file.
#[derive(Debug, Default, Deserialize)]
pub struct PhraseMetadata {
    /// Definition kind; only `"phrase"` definitions are converted.
    #[serde(rename = "type")]
    kind: Option<String>,

    #[serde(default)]
    abbreviation: Abbreviation,
}

/// The `abbreviation` sub-object: trigger strings and matching rules.
#[derive(Debug, Default, Deserialize)]
struct Abbreviation {
    #[serde(default)]
    abbreviations: Vec<String>,

    /// Bool-like flag; any truthy value means the trigger only fires at
    /// word boundaries.
    #[serde(rename = "wordChars", default)]
    word_chars: Value,
}

impl PhraseMetadata {
    /// Load and parse a metadata file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;
        let meta = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse metadata file: {}", path.display()))?;
        Ok(meta)
    }

    /// Whether this definition is a phrase (case-insensitive on the
    /// `type` field). A missing `type` counts as not a phrase.
    pub fn is_phrase(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("phrase"))
    }

    /// Whether the triggers should only fire at word boundaries, from the
    /// truthiness of `abbreviation.wordChars`.
    pub fn word_only(&self) -> bool {
        truthy(&self.abbreviation.word_chars)
    }

    /// Take ownership of the trigger list. Absent in the file means empty.
    pub fn into_triggers(self) -> Vec<String> {
        self.abbreviation.abbreviations
    }
}

/// JSON truthiness: null, false, 0, "", [] and {} are false, everything
/// else is true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
