use std::collections::BTreeMap;

use log::{debug, info, warn};
use rand::Rng;
use rand::prelude::IteratorRandom;

use super::config::Config;
use super::state::State;
use super::tokenizer::Tokenizer;
use super::{Prefix, Token};
use crate::error::{NGramError, Result};

/// Outcome of a call to [`NGramModel::fit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingSummary {
	/// Number of tokens produced by the tokenizer.
	pub tokens: usize,
	/// Number of n-gram windows added to the index (0 when the text was too short).
	pub windows: usize,
	/// Number of distinct prefixes in the index after training.
	pub unique_prefixes: usize,
}

/// Represents a word-level n-gram model.
///
/// The `NGramModel` maps every prefix of `n - 1` tokens seen in the corpus
/// to the tokens that followed it, and generates text by walking that map.
///
/// # Responsibilities
/// - Tokenize a corpus and index its n-gram windows
/// - Generate text by a random walk from a random starting prefix
/// - Merge with another model built with the same configuration
///
/// # Invariants
/// - `config.n` is always >= 2 and never changes
/// - Every key in `states` has exactly `n - 1` tokens
/// - Every state has at least one continuation
///
/// The index is ordered so that a seeded RNG reproduces the same output.
#[derive(Clone, Debug, PartialEq)]
pub struct NGramModel {
	config: Config,
	tokenizer: Tokenizer,
	/// Mapping from a prefix (length n-1) to its corresponding state
	states: BTreeMap<Prefix, State>,
}

impl NGramModel {
	/// Creates an empty prose model of order `n`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `n < 2`.
	pub fn new(n: usize) -> Result<Self> {
		Self::with_config(Config::new(n))
	}

	/// Creates an empty model from explicit settings.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if the settings do not validate.
	pub fn with_config(config: Config) -> Result<Self> {
		config.validate()?;
		let tokenizer = Tokenizer::new(&config);
		Ok(Self { config, tokenizer, states: BTreeMap::new() })
	}

	/// Order of the model.
	pub fn n(&self) -> usize {
		self.config.n
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn tokenizer(&self) -> &Tokenizer {
		&self.tokenizer
	}

	/// Number of distinct prefixes in the index.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Iterates over the learned prefixes in key order.
	pub fn prefixes(&self) -> impl Iterator<Item = &[Token]> {
		self.states.keys().map(Vec::as_slice)
	}

	/// Returns every continuation recorded after `prefix`, duplicates included.
	pub fn continuations(&self, prefix: &[Token]) -> Option<&[Token]> {
		self.states.get(prefix).map(State::continuations)
	}

	/// Trains the model on a text.
	///
	/// The text is tokenized with the model's configuration, then every window
	/// of `n` tokens adds its last token to the continuations of its first
	/// `n - 1` tokens. Calling `fit` again accumulates into the same index.
	///
	/// # Notes
	/// - A text with fewer than `n` tokens is skipped with a warning and the
	///   index is left untouched.
	pub fn fit(&mut self, text: &str) -> TrainingSummary {
		let tokens = self.tokenizer.tokenize(text);
		self.fit_tokens(&tokens)
	}

	/// Trains the model on already tokenized input.
	pub fn fit_tokens<T: AsRef<str>>(&mut self, tokens: &[T]) -> TrainingSummary {
		let n = self.config.n;
		if tokens.len() < n {
			warn!(
				"text is too short to train: {} token(s) for n={}, model left unchanged",
				tokens.len(),
				n
			);
			return TrainingSummary { tokens: tokens.len(), windows: 0, unique_prefixes: self.states.len() };
		}

		let mut windows = 0;
		for window in tokens.windows(n) {
			let prefix: Prefix = window[..n - 1].iter().map(|t| t.as_ref().to_owned()).collect();
			let next = window[n - 1].as_ref();

			self.states
				.entry(prefix)
				.or_insert_with_key(|key| State::new(key))
				.add_continuation(next);
			windows += 1;
		}

		info!("model trained with {} unique prefixes", self.states.len());
		TrainingSummary { tokens: tokens.len(), windows, unique_prefixes: self.states.len() }
	}

	/// Generates text using the thread-local RNG.
	///
	/// See [`NGramModel::generate_with_rng`].
	pub fn generate(&self, max_words: usize) -> Result<String> {
		self.generate_with_rng(max_words, &mut rand::rng())
	}

	/// Generates up to `max_words` tokens joined with the delimiter.
	///
	/// # Behavior
	/// - Starts from a prefix chosen uniformly among the learned keys.
	/// - Then, at most `max_words - (n - 1)` times, looks up the last `n - 1`
	///   tokens and appends a continuation chosen uniformly among its occurrences.
	/// - Stops early when the current prefix was never followed by anything.
	///
	/// The output always contains the full starting prefix, even when
	/// `max_words < n - 1`.
	///
	/// # Errors
	/// Returns `EmptyModel` if nothing has been learned.
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, max_words: usize, rng: &mut R) -> Result<String> {
		let context = self.config.n - 1;

		let start = self.states.keys().choose(rng).ok_or(NGramError::EmptyModel)?;
		let mut result: Vec<Token> = start.clone();

		for _ in 0..max_words.saturating_sub(context) {
			let current = &result[result.len() - context..];
			let Some(state) = self.states.get(current) else {
				debug!("dead end after {} token(s)", result.len());
				break;
			};
			match state.predict(rng) {
				Some(next) => result.push(next.clone()),
				None => break,
			}
		}

		Ok(self.tokenizer.join(&result))
	}

	/// Merges another model into this one.
	///
	/// Continuations of matching prefixes are appended, exactly as if the
	/// other model's corpus had been passed to `fit`.
	///
	/// # Errors
	/// Returns `ConfigMismatch` if the configurations differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.config != other.config {
			return Err(NGramError::ConfigMismatch(format!(
				"self={:?}, other={:?}",
				self.config, other.config
			)));
		}

		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}

		Ok(())
	}
}
