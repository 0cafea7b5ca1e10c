//! Dictionary statistics command

use crate::dictionary::Dictionary;

/// Summary of a loaded dictionary
pub struct DictionaryStats {
    pub total_words: usize,
    /// `(length, count)` sorted by length
    pub distribution: Vec<(usize, usize)>,
    pub shortest: Option<usize>,
    pub longest: Option<usize>,
    pub average_length: f64,
}

/// Collect statistics for a dictionary
#[must_use]
pub fn dictionary_stats(dictionary: &Dictionary) -> DictionaryStats {
    let distribution = dictionary.length_distribution();
    let total_words = dictionary.len();

    let total_chars: usize = distribution.iter().map(|&(len, count)| len * count).sum();
    let average_length = if total_words == 0 {
        0.0
    } else {
        total_chars as f64 / total_words as f64
    };

    DictionaryStats {
        total_words,
        shortest: distribution.first().map(|&(len, _)| len),
        longest: distribution.last().map(|&(len, _)| len),
        distribution,
        average_length,
    }
}
