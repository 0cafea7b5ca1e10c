//! Word list loading
//!
//! Reads a newline-delimited word list into a [`Dictionary`].

use super::{Dictionary, LoadReport};
use crate::error::FinderError;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default word list file name, looked up relative to the working directory
pub const DEFAULT_WORDLIST: &str = "words_alpha.txt";

/// Load a dictionary from a file
///
/// Lines are trimmed and blank lines ignored. Lines that are not lowercase
/// alphabetic are skipped (and reported in the log).
///
/// # Errors
///
/// Returns `FinderError::DictionaryUnavailable` if the file cannot be read
/// or contains no usable words.
///
/// # Examples
/// ```no_run
/// use wordslot::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("words_alpha.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, FinderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FinderError::DictionaryUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (dict, report) = parse_word_list(&content);
    log_report(path, &report);

    if dict.is_empty() {
        return Err(FinderError::DictionaryUnavailable {
            path: path.to_path_buf(),
            reason: "no usable words".to_string(),
        });
    }

    Ok(dict)
}

/// Parse newline-delimited text into a dictionary
///
/// Handles `\n` and `\r\n` line endings.
///
/// # Examples
/// ```
/// use wordslot::dictionary::loader::parse_word_list;
///
/// let (dict, report) = parse_word_list("crane\ncrate\n\nnot a word\n");
/// assert_eq!(dict.len(), 2);
/// assert_eq!(report.rejected, 1);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> (Dictionary, LoadReport) {
    let lines = content.lines().map(str::trim).filter(|line| !line.is_empty());
    Dictionary::from_words_with_report(lines)
}

fn log_report(path: &Path, report: &LoadReport) {
    info!(
        path = %path.display(),
        words = report.accepted,
        "loaded word list"
    );
    if report.rejected > 0 {
        warn!(
            path = %path.display(),
            rejected = report.rejected,
            "skipped entries that are not lowercase alphabetic"
        );
    }
    if report.duplicates > 0 {
        debug!(duplicates = report.duplicates, "collapsed duplicate entries");
    }
}
