//! Conversion pipeline - orchestrates the scan, extract, and render steps

pub mod error;
pub mod metadata;
pub mod record;
pub mod scan;

pub use error::ConvertError;
pub use metadata::PhraseMetadata;
pub use record::PhraseRecord;
pub use scan::{list_phrase_sources, metadata_path_for};

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::utils::print_skip;

/// Result of scanning an AutoKey configuration directory: the phrase
/// records to emit, in sorted source-file order, plus one notice line
/// per skipped file.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<PhraseRecord>,
    pub notices: Vec<String>,
}

/// Scan `input_dir` for phrase definition pairs and extract a
/// [`PhraseRecord`] from each valid one.
///
/// Per-file problems (missing or unparseable metadata, unreadable
/// replacement text) produce a notice and skip that file; definitions of a
/// non-phrase kind are skipped silently. Only a missing or non-directory
/// `input_dir` fails the whole scan.
pub fn scan_directory(input_dir: &Path) -> Result<ScanReport> {
    let sources = list_phrase_sources(input_dir)?;

    let mut report = ScanReport::default();
    for txt_path in sources {
        let json_path = metadata_path_for(&txt_path);
        if !json_path.is_file() {
            report.notices.push(format!(
                "{} has no matching .json file. skipping",
                txt_path.display()
            ));
            continue;
        }

        let meta = match PhraseMetadata::load(&json_path) {
            Ok(meta) => meta,
            Err(_) => {
                report.notices.push(format!(
                    "{}'s .json file is invalid json. skipping",
                    txt_path.display()
                ));
                continue;
            }
        };

        // Other definition kinds (scripts, folders, ...) are recognized
        // and intentionally excluded, so no notice.
        if !meta.is_phrase() {
            continue;
        }

        // Replacement text is taken verbatim, trailing whitespace included.
        let replacement = match fs::read_to_string(&txt_path) {
            Ok(text) => text,
            Err(_) => {
                report.notices.push(format!(
                    "{} could not be read as text. skipping",
                    txt_path.display()
                ));
                continue;
            }
        };

        let word_only = meta.word_only();
        report.records.push(PhraseRecord {
            triggers: meta.into_triggers(),
            word_only,
            replacement,
        });
    }

    Ok(report)
}

/// Run the full conversion: scan `input_dir`, print skip notices, then
/// print one rendered Espanso match block per phrase record.
pub fn run_convert(input_dir: &Path, preserve_case: bool, indent: &str) -> Result<()> {
    let report = scan_directory(input_dir)?;

    for notice in &report.notices {
        print_skip(notice);
    }

    for record in &report.records {
        println!("{}", record.render(indent, preserve_case));
    }

    Ok(())
}
