//! Search pipeline
//!
//! Three stages over a shared, read-only dictionary:
//! 1. positional matching against the compiled slot pattern
//! 2. required-letters filter
//! 3. excluded-letters filter

mod filters;
mod matcher;
mod query;

use rustc_hash::FxHashSet;

pub use filters::{filter_excluded, filter_required};
pub use matcher::{match_dictionary, match_words};
pub use query::{Matches, Query, search};

/// Set of words borrowed from a dictionary
pub type WordSet<'a> = FxHashSet<&'a str>;
