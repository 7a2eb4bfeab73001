use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn temp_workspace() -> TempDir {
	tempfile::tempdir().expect("create tempdir")
}

fn ngram() -> Command {
	Command::cargo_bin("ngram").expect("binary exists")
}

fn stdout_of(cmd: &mut Command) -> String {
	let output = cmd.assert().success().get_output().stdout.clone();
	String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn generates_from_directory_corpus() {
	let workspace = temp_workspace();
	let corpus = workspace.path().join("corpus");
	fs::create_dir(&corpus).expect("create corpus dir");
	fs::write(corpus.join("a.txt"), "The cat sat on the mat.").expect("write a");

	let out = stdout_of(ngram().args([
		"--quiet",
		corpus.to_str().expect("utf-8 path"),
		"-n",
		"2",
		"-w",
		"3",
		"--seed",
		"5",
	]));

	// Files loaded from a directory end with a newline, which may end up in the last token.
	let separator = format!("{}\n", "-".repeat(50));
	let text = out.strip_suffix(&separator).expect("separator line");
	assert!(!text.trim().is_empty());
	assert!(text.split_whitespace().count() <= 3);
	assert!(text.chars().all(|c| c.is_ascii_lowercase() || c.is_whitespace()));
}

#[test]
fn same_seed_gives_same_output() {
	let workspace = temp_workspace();
	let file = workspace.path().join("book.txt");
	fs::write(&file, "a b c a c b a a b c c a b b a c").expect("write book");
	let path = file.to_str().expect("utf-8 path");

	let args = ["-q", path, "-n", "2", "-w", "12", "--seed", "99", "--samples", "3"];
	let first = stdout_of(ngram().args(args));
	let second = stdout_of(ngram().args(args));
	assert_eq!(first, second);
	assert_eq!(first.lines().count(), 6);
}

#[test]
fn javascript_preset_keeps_statements() {
	let workspace = temp_workspace();
	let file = workspace.path().join("app.js");
	fs::write(&file, "let a = 1;let b = 2").expect("write source");

	let out = stdout_of(ngram().args([
		"-q",
		file.to_str().expect("utf-8 path"),
		"--preset",
		"javascript",
		"-n",
		"2",
		"-w",
		"2",
	]));
	assert_eq!(out.lines().next(), Some("let a = 1;let b = 2"));
}

#[test]
fn config_file_sets_model() {
	let workspace = temp_workspace();
	let file = workspace.path().join("source.py");
	fs::write(&file, "x = 1\ny = 2").expect("write source");
	let config = workspace.path().join("config.json");
	fs::write(&config, r#"{ "n": 2, "delimiter": "\n", "keep_formatting": true }"#).expect("write config");

	let out = stdout_of(ngram().args([
		"-q",
		file.to_str().expect("utf-8 path"),
		"--config",
		config.to_str().expect("utf-8 path"),
	]));
	assert!(out.starts_with("x = 1\ny = 2\n"));
}

#[test]
fn too_short_corpus_prints_nothing() {
	let workspace = temp_workspace();
	let file = workspace.path().join("short.txt");
	fs::write(&file, "two words").expect("write short");

	let out = stdout_of(ngram().args(["-q", file.to_str().expect("utf-8 path"), "-n", "5"]));
	assert!(out.is_empty());
}

#[test]
fn invalid_ngram_size_fails() {
	let workspace = temp_workspace();
	let file = workspace.path().join("book.txt");
	fs::write(&file, "a b c").expect("write book");

	ngram().args(["-q", file.to_str().expect("utf-8 path"), "-n", "1"]).assert().failure();
}

#[test]
fn missing_corpus_fails() {
	let workspace = temp_workspace();
	ngram()
		.args(["-q", workspace.path().join("missing").to_str().expect("utf-8 path")])
		.assert()
		.failure();
}
