//! Core domain types for pattern search
//!
//! This module contains the request-side value types with no I/O.
//! All types here are immutable once built and cheap to test in isolation.

mod letters;
mod pattern;
mod slot;

pub use letters::LetterConstraint;
pub use pattern::CompiledPattern;
pub use slot::{Slot, SlotSpec, WILDCARDS};
