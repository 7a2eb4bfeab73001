use rand::Rng;
use rand::seq::IndexedRandom;

use super::{Prefix, Token};
use crate::error::{NGramError, Result};

/// Represents a prefix entry of an n-gram model.
///
/// A `State` corresponds to a fixed `n - 1` token prefix (`key`) and stores
/// every continuation observed after it, in corpus order.
///
/// Conceptually, this is a node in a Markov chain. Duplicates are kept, so a
/// continuation seen k times is k times more likely to be sampled.
///
/// ## Invariants
/// - All continuations belong to the same `key`
/// - A state stored in a model has at least one continuation
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct State {
	/// Identifier of the state (`n - 1` token prefix).
	key: Prefix,
	/// Observed continuations, one entry per occurrence.
	continuations: Vec<Token>,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub(crate) fn new(key: &[Token]) -> Self {
		Self {
			key: key.to_vec(),
			continuations: Vec::new(),
		}
	}

	/// Records one occurrence of `next` after this prefix.
	pub(crate) fn add_continuation(&mut self, next: &str) {
		self.continuations.push(next.to_owned());
	}

	pub(crate) fn continuations(&self) -> &[Token] {
		&self.continuations
	}

	/// Picks a continuation uniformly over all recorded occurrences.
	///
	/// Returns `None` if the state has no continuations.
	pub(crate) fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Token> {
		self.continuations.choose(rng)
	}

	/// Appends the continuations of another state with the same key.
	///
	/// # Errors
	/// Returns an error if the state keys do not match.
	pub(crate) fn merge(&mut self, other: &Self) -> Result<()> {
		if self.key != other.key {
			return Err(NGramError::PrefixMismatch(format!(
				"cannot merge state {:?} into {:?}",
				other.key, self.key
			)));
		}
		self.continuations.extend_from_slice(&other.continuations);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn key(tokens: &[&str]) -> Prefix {
		tokens.iter().map(|t| t.to_string()).collect()
	}

	#[test]
	fn keeps_duplicate_continuations() {
		let mut state = State::new(&key(&["the"]));
		state.add_continuation("cat");
		state.add_continuation("dog");
		state.add_continuation("cat");
		assert_eq!(state.continuations(), ["cat", "dog", "cat"]);
	}

	#[test]
	fn predict_on_empty_state_is_none() {
		let state = State::new(&key(&["x"]));
		assert!(state.predict(&mut StdRng::seed_from_u64(1)).is_none());
	}

	#[test]
	fn predict_follows_observed_frequency() {
		let mut state = State::new(&key(&["a"]));
		for _ in 0..3 {
			state.add_continuation("b");
		}
		state.add_continuation("c");

		let mut rng = StdRng::seed_from_u64(7);
		let draws = 4000;
		let b = (0..draws)
			.filter(|_| state.predict(&mut rng).map(String::as_str) == Some("b"))
			.count();
		// Expected 3000.
		assert!((2700..3300).contains(&b), "b drawn {b} times");
	}

	#[test]
	fn merge_requires_same_key() {
		let mut left = State::new(&key(&["a"]));
		left.add_continuation("b");
		let mut right = State::new(&key(&["a"]));
		right.add_continuation("c");
		left.merge(&right).expect("same key");
		assert_eq!(left.continuations(), ["b", "c"]);

		let other = State::new(&key(&["z"]));
		assert!(matches!(left.merge(&other), Err(NGramError::PrefixMismatch(_))));
	}
}
