use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = NGramError> = std::result::Result<T, E>;

/// Failures raised by model construction, generation and corpus loading.
///
/// Too-short training text is not represented here: `fit` treats it as a
/// warning and leaves the model unchanged.
#[derive(Debug, Error)]
pub enum NGramError {
	/// The configuration cannot produce a usable model (ex. `n < 2`).
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// Generation was requested before any prefix was learned.
	#[error("model is empty, fit it on a long enough text before generating")]
	EmptyModel,

	/// Two models with different settings cannot be merged.
	#[error("configuration mismatch: {0}")]
	ConfigMismatch(String),

	/// Two prefix entries with different keys cannot be merged.
	#[error("prefix mismatch: {0}")]
	PrefixMismatch(String),

	/// The corpus path does not exist.
	#[error("path {0:?} does not exist")]
	PathNotFound(PathBuf),

	/// The corpus path is neither a regular file nor a directory.
	#[error("path {0:?} is not a valid file or directory")]
	InvalidPath(PathBuf),

	/// Filesystem error with the path it happened on.
	#[error("io error while reading {path:?}: {source}")]
	Io {
		source: std::io::Error,
		path: PathBuf,
	},
}

impl NGramError {
	/// Wraps an IO error with the path it was raised for.
	pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
		Self::Io { source, path: path.into() }
	}
}
