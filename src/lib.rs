//! Word Pattern Finder
//!
//! Finds every dictionary word that fits a fixed-length slot pattern, contains
//! a set of required letters and avoids a set of excluded letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordslot::dictionary::Dictionary;
//! use wordslot::finder::search;
//!
//! // Load once, share for every query
//! let dict = Dictionary::from_words(["crane", "crate", "grate", "plane"]);
//!
//! // c r _ _ e, no required letters, exclude 't'
//! let matches = search(&dict, &["c", "r", "", "", "e"], "t", "").unwrap();
//! assert_eq!(matches.sorted(), vec!["crane"]);
//! ```

// Core domain types
pub mod core;

// Word list storage and loading
pub mod dictionary;

// Error type
pub mod error;

// Search pipeline
pub mod finder;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Log subscriber setup
pub mod logging;

pub use error::FinderError;
