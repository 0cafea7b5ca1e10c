//! Benchmark command
//!
//! Generates random queries from dictionary words and runs them in parallel
//! over the shared dictionary.

use crate::core::{LetterConstraint, Slot, SlotSpec};
use crate::dictionary::Dictionary;
use crate::finder::Query;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    /// Query count keyed by pattern length
    pub by_length: HashMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Build `count` random queries, each derived from a dictionary word
///
/// Every position of the source word is pinned with probability 1/2, up to
/// two of its letters are required, and up to three letters absent from it
/// are excluded. The source word therefore always matches its own query.
#[must_use]
pub fn generate_queries(dictionary: &Dictionary, count: usize, seed: u64) -> Vec<Query> {
    let mut words: Vec<&str> = dictionary.iter().collect();
    words.sort_unstable();

    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet: Vec<char> = ('a'..='z').collect();

    (0..count)
        .filter_map(|_| {
            let word = *words.choose(&mut rng)?;
            let letters: Vec<char> = word.chars().collect();

            let slots = letters
                .iter()
                .map(|&ch| {
                    if rng.random_bool(0.5) {
                        Slot::Letter(ch)
                    } else {
                        Slot::Any
                    }
                })
                .collect();

            let required_count = rng.random_range(0..=2);
            let required: Vec<char> = letters
                .choose_multiple(&mut rng, required_count)
                .copied()
                .collect();

            let absent: Vec<char> = alphabet
                .iter()
                .copied()
                .filter(|ch| !letters.contains(ch))
                .collect();
            let excluded_count = rng.random_range(0..=3);
            let excluded: Vec<char> = absent
                .choose_multiple(&mut rng, excluded_count)
                .copied()
                .collect();

            Some(Query::new(
                SlotSpec::new(slots).ok()?,
                LetterConstraint::from_letters(required),
                LetterConstraint::from_letters(excluded),
            ))
        })
        .collect()
}

/// Run every query in parallel and aggregate result sizes
pub fn run_benchmark(
    dictionary: &Dictionary,
    queries: &[Query],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(queries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("searching");

    let start = Instant::now();
    let sizes: Vec<(usize, usize)> = queries
        .par_iter()
        .map(|query| {
            let size = query.run(dictionary).len();
            pb.inc(1);
            (query.slots().len(), size)
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let total_queries = sizes.len();
    let total_matches: usize = sizes.iter().map(|&(_, size)| size).sum();
    let mut by_length: HashMap<usize, usize> = HashMap::new();
    for &(len, _) in &sizes {
        *by_length.entry(len).or_insert(0) += 1;
    }

    BenchmarkResult {
        total_queries,
        total_matches,
        average_matches: if total_queries == 0 {
            0.0
        } else {
            total_matches as f64 / total_queries as f64
        },
        min_matches: sizes.iter().map(|&(_, size)| size).min().unwrap_or(0),
        max_matches: sizes.iter().map(|&(_, size)| size).max().unwrap_or(0),
        by_length,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
