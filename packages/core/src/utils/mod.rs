//! Utility functions

pub mod markup;

pub use markup::{progress_percent, strip_markup, word_count, DEFAULT_WORD_GOAL};
