//! Command implementations

pub mod benchmark;
pub mod find;
pub mod interactive;
pub mod stats;

pub use benchmark::{BenchmarkResult, generate_queries, run_benchmark};
pub use find::{FindConfig, FindResult, run_find};
pub use interactive::{run_interactive, run_session};
pub use stats::{DictionaryStats, dictionary_stats};
