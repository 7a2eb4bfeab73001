//! Top-level module for the n-gram language model.
//!
//! - Model settings (`Config`)
//! - Text to token conversion (`Tokenizer`)
//! - Internal prefix entries (`State`)
//! - Training and generation (`NGramModel`)

/// Immutable model settings: order `n`, token delimiter and formatting policy.
///
/// Serializable so a driver can read it from a JSON file.
pub mod config;

/// Converts raw text into tokens and joins tokens back into text.
pub mod tokenizer;

/// Word-level n-gram model (`n >= 2`).
///
/// Handles training on a corpus, random-walk generation and model merging.
pub mod ngram_model;

/// Internal representation of a single prefix and its observed continuations.
///
/// This module is not exposed publicly.
mod state;

/// A single unit of text as produced by the tokenizer.
pub type Token = String;

/// An ordered run of `n - 1` tokens used as an index key.
pub type Prefix = Vec<Token>;
