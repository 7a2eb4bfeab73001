use serde::{Deserialize, Serialize};

use crate::error::{NGramError, Result};

/// Default n-gram order.
pub const DEFAULT_N: usize = 7;

/// Default token delimiter (words separated by a single space).
pub const DEFAULT_DELIMITER: &str = " ";

/// Settings fixed before a model is built.
///
/// # Fields
/// - `n`: order of the model; prefixes hold `n - 1` tokens.
/// - `delimiter`: string used both to split the corpus and to join generated tokens.
/// - `keep_formatting`: `true` splits the raw text verbatim (source code corpora),
///   `false` lowercases and keeps only `a-z` and whitespace before splitting.
///
/// # Invariants
/// - `n >= 2`
/// - `delimiter` is not empty
///
/// Both are checked by [`Config::validate`], which every model constructor calls.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	pub n: usize,
	pub delimiter: String,
	pub keep_formatting: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			n: DEFAULT_N,
			delimiter: DEFAULT_DELIMITER.to_owned(),
			keep_formatting: false,
		}
	}
}

impl Config {
	/// Prose settings (normalized text, space delimiter) with order `n`.
	pub fn new(n: usize) -> Self {
		Self { n, ..Self::default() }
	}

	/// Python source: verbatim text, one token per line.
	pub fn python(n: usize) -> Self {
		Self::new(n).with_keep_formatting(true).with_delimiter("\n")
	}

	/// JavaScript source: verbatim text, one token per statement.
	pub fn javascript(n: usize) -> Self {
		Self::new(n).with_keep_formatting(true).with_delimiter(";")
	}

	/// Replaces the token delimiter.
	pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
		self.delimiter = delimiter.into();
		self
	}

	/// Replaces the formatting policy.
	pub fn with_keep_formatting(mut self, keep_formatting: bool) -> Self {
		self.keep_formatting = keep_formatting;
		self
	}

	/// Checks the invariants required to build a model.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `n < 2` or the delimiter is empty.
	pub fn validate(&self) -> Result<()> {
		if self.n < 2 {
			return Err(NGramError::InvalidConfiguration(format!(
				"n must be at least 2, got {}",
				self.n
			)));
		}
		if self.delimiter.is_empty() {
			return Err(NGramError::InvalidConfiguration(
				"delimiter must not be empty".to_owned(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_matches_prose_settings() {
		let config = Config::default();
		assert_eq!(config.n, 7);
		assert_eq!(config.delimiter, " ");
		assert!(!config.keep_formatting);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn source_code_presets_keep_formatting() {
		let python = Config::python(4);
		assert_eq!(python.n, 4);
		assert_eq!(python.delimiter, "\n");
		assert!(python.keep_formatting);

		let javascript = Config::javascript(3);
		assert_eq!(javascript.delimiter, ";");
		assert!(javascript.keep_formatting);
	}

	#[test]
	fn validate_rejects_small_n() {
		for n in 0..2 {
			let err = Config::new(n).validate().expect_err("n < 2 must fail");
			assert!(matches!(err, NGramError::InvalidConfiguration(_)));
		}
	}

	#[test]
	fn validate_rejects_empty_delimiter() {
		let err = Config::new(3).with_delimiter("").validate().expect_err("empty delimiter");
		assert!(matches!(err, NGramError::InvalidConfiguration(_)));
	}

	#[test]
	fn missing_json_fields_use_defaults() {
		let config: Config = serde_json::from_str(r#"{ "n": 3 }"#).expect("parse config");
		assert_eq!(config, Config::new(3));

		let config: Config =
			serde_json::from_str(r#"{ "keep_formatting": true, "delimiter": ";" }"#).expect("parse config");
		assert_eq!(config, Config::javascript(DEFAULT_N));
	}
}
