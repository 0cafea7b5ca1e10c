//! One-shot search command
//!
//! Parses the shell's inputs, runs a single query and returns sorted words.

use crate::core::{LetterConstraint, SlotSpec};
use crate::dictionary::Dictionary;
use crate::error::FinderError;
use crate::finder::Query;
use std::time::{Duration, Instant};
use tracing::warn;

/// Configuration for a single search
pub struct FindConfig {
    /// Compact pattern such as `cr__e`
    pub pattern: String,
    /// Letters that must appear somewhere
    pub require: String,
    /// Letters that must not appear
    pub exclude: String,
    /// Show at most this many words
    pub limit: Option<usize>,
    /// Lowercase all inputs before searching
    pub lowercase: bool,
}

impl FindConfig {
    #[must_use]
    pub const fn new(pattern: String) -> Self {
        Self {
            pattern,
            require: String::new(),
            exclude: String::new(),
            limit: None,
            lowercase: true,
        }
    }

    /// Build the query, applying case normalization if enabled
    ///
    /// # Errors
    /// Returns a pattern error if the compact pattern is empty or malformed.
    pub fn to_query(&self) -> Result<Query, FinderError> {
        let normalize = |s: &str| {
            if self.lowercase {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };

        Ok(Query::new(
            SlotSpec::parse_compact(&normalize(&self.pattern))?,
            LetterConstraint::from_raw(&normalize(&self.require)),
            LetterConstraint::from_raw(&normalize(&self.exclude)),
        ))
    }
}

/// Result of a single search
pub struct FindResult<'a> {
    pub query: Query,
    /// Matching words, sorted, truncated to the limit
    pub words: Vec<&'a str>,
    /// Number of matches before truncation
    pub total: usize,
    /// Letters both required and excluded
    pub conflicts: Vec<char>,
    pub duration: Duration,
}

impl FindResult<'_> {
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.words.len() < self.total
    }
}

/// Run one search against the dictionary
///
/// # Errors
///
/// Returns an error if the pattern is empty or contains an invalid slot.
pub fn run_find<'a>(
    config: &FindConfig,
    dictionary: &'a Dictionary,
) -> Result<FindResult<'a>, FinderError> {
    let query = config.to_query()?;

    let conflicts = query.conflicting_letters();
    if !conflicts.is_empty() {
        warn!(
            letters = %conflicts.iter().collect::<String>(),
            "letters are both required and excluded; no word can match"
        );
    }

    let start = Instant::now();
    let matches = query.run(dictionary);
    let duration = start.elapsed();

    let total = matches.len();
    let mut words = matches.sorted();
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    Ok(FindResult {
        query,
        words,
        total,
        conflicts,
        duration,
    })
}
