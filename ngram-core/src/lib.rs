//! Word-level n-gram text generation library.
//!
//! This crate provides a small statistical language model:
//! - Configurable tokenization (normalized prose or verbatim source code)
//! - A prefix -> continuations index learned from a corpus
//! - Random-walk generation over that index with an injectable RNG
//! - Corpus loading from a single file or a directory tree
//!
//! ```no_run
//! use ngram_core::io::load_training_text;
//! use ngram_core::model::ngram_model::NGramModel;
//!
//! # fn main() -> ngram_core::Result<()> {
//! let corpus = load_training_text("english_dataset/", "txt")?;
//! let mut model = NGramModel::new(3)?;
//! model.fit(&corpus.text);
//! println!("{}", model.generate(30)?);
//! # Ok(())
//! # }
//! ```

/// Configuration, tokenizer and the n-gram model itself.
pub mod model;

/// Corpus loading (single file or recursive directory).
pub mod io;

/// Crate error type.
pub mod error;

pub use error::{NGramError, Result};
pub use model::config::Config;
pub use model::ngram_model::{NGramModel, TrainingSummary};
pub use model::tokenizer::Tokenizer;
