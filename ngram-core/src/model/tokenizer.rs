use super::Token;
use super::config::Config;

/// Splits text into tokens according to a [`Config`] formatting policy.
///
/// # Behavior
/// - `keep_formatting == false`: lowercase the text, drop every character that is
///   neither `a-z` nor whitespace, then split on the delimiter.
/// - `keep_formatting == true`: split the raw text on the delimiter.
///
/// Empty segments are kept: consecutive delimiters produce empty tokens, and
/// an empty text produces a single empty token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
	delimiter: String,
	keep_formatting: bool,
}

impl Tokenizer {
	/// Builds a tokenizer from the delimiter and formatting policy of `config`.
	pub fn new(config: &Config) -> Self {
		Self {
			delimiter: config.delimiter.clone(),
			keep_formatting: config.keep_formatting,
		}
	}

	/// Returns the delimiter used to split and join tokens.
	pub fn delimiter(&self) -> &str {
		&self.delimiter
	}

	/// Converts `text` into an ordered sequence of tokens.
	pub fn tokenize(&self, text: &str) -> Vec<Token> {
		if self.keep_formatting {
			self.split(text)
		} else {
			self.split(&Self::normalize(text))
		}
	}

	/// Joins tokens with the delimiter.
	pub fn join<T: AsRef<str>>(&self, tokens: &[T]) -> String {
		let mut out = String::new();
		for (i, token) in tokens.iter().enumerate() {
			if i > 0 {
				out.push_str(&self.delimiter);
			}
			out.push_str(token.as_ref());
		}
		out
	}

	/// Lowercases and keeps only `a-z` and whitespace.
	///
	/// Lowercasing happens first, so uppercase ASCII survives as lowercase while
	/// accented letters, digits and punctuation are removed.
	fn normalize(text: &str) -> String {
		text.chars()
			.flat_map(char::to_lowercase)
			.filter(|c| c.is_ascii_lowercase() || is_separator(*c))
			.collect()
	}

	fn split(&self, text: &str) -> Vec<Token> {
		text.split(self.delimiter.as_str()).map(str::to_owned).collect()
	}
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
	c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
