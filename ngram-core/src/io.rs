use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::error::{NGramError, Result};

/// Default extension of training files when loading a directory.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Training text gathered from a file or a directory.
#[derive(Debug, Default)]
pub struct Corpus {
	/// Concatenated contents of every loaded file.
	pub text: String,
	/// Files that were loaded, in load order.
	pub files: Vec<PathBuf>,
	/// Files or directories that could not be read, with the reason.
	pub skipped: Vec<(PathBuf, String)>,
}

impl Corpus {
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}
}

/// Loads training text from a single file or a directory tree.
///
/// - A file is read entirely as UTF-8.
/// - A directory is walked recursively in file-name order; every file (or
///   symlink to a file) whose extension is `extension` is read, invalid UTF-8
///   is dropped, and the text is appended followed by a newline. Unreadable
///   files and subdirectories are skipped and listed in [`Corpus::skipped`].
///
/// # Errors
/// - `PathNotFound` if `path` does not exist
/// - `InvalidPath` if `path` is neither a file nor a directory
/// - `Io` if a single input file cannot be read
pub fn load_training_text<P: AsRef<Path>>(path: P, extension: &str) -> Result<Corpus> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(NGramError::PathNotFound(path.to_path_buf()));
	}

	if path.is_dir() {
		load_directory(path, extension)
	} else if path.is_file() {
		info!("loading training data from file {}", path.display());
		let text = fs::read_to_string(path).map_err(|err| NGramError::io(err, path))?;
		Ok(Corpus { text, files: vec![path.to_path_buf()], skipped: Vec::new() })
	} else {
		Err(NGramError::InvalidPath(path.to_path_buf()))
	}
}

fn load_directory(dir: &Path, extension: &str) -> Result<Corpus> {
	info!("loading training data from directory {}", dir.display());
	let mut corpus = Corpus::default();

	for entry in WalkDir::new(dir).sort_by_file_name() {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
				warn!("  - error walking {}: {}", path.display(), err);
				corpus.skipped.push((path, err.to_string()));
				continue;
			}
		};
		let file_path = entry.path();
		// is_file() follows symlinks
		if !file_path.is_file() || file_path.extension() != Some(OsStr::new(extension)) {
			continue;
		}

		match fs::read(file_path) {
			Ok(bytes) => {
				push_valid_utf8(&mut corpus.text, &bytes);
				corpus.text.push('\n');
				info!("  - loaded {}", relative(file_path, dir).display());
				corpus.files.push(file_path.to_path_buf());
			}
			Err(err) => {
				warn!("  - error loading {}: {}", file_path.display(), err);
				corpus.skipped.push((file_path.to_path_buf(), err.to_string()));
			}
		}
	}

	if corpus.files.is_empty() {
		warn!("no .{} files were found in {} or its subdirectories", extension, dir.display());
	} else {
		info!("finished loading {} file(s)", corpus.files.len());
	}
	Ok(corpus)
}

/// Appends the valid UTF-8 parts of `bytes`, dropping invalid sequences.
fn push_valid_utf8(text: &mut String, bytes: &[u8]) {
	for chunk in bytes.utf8_chunks() {
		text.push_str(chunk.valid());
	}
}

fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
	path.strip_prefix(base).unwrap_or(path)
}
