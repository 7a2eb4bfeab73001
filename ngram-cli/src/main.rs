use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Env;
use log::{LevelFilter, info, warn};
use ngram_core::io::{DEFAULT_EXTENSION, load_training_text};
use ngram_core::model::config::DEFAULT_N;
use ngram_core::{Config, NGramModel};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DEFAULT_CORPUS: &str = "english_dataset/";
const DEFAULT_MAX_WORDS: usize = 30;

/// Corpus presets selecting the delimiter and formatting policy.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
	/// Normalized prose split on spaces
	English,
	/// Verbatim source split on newlines
	Python,
	/// Verbatim source split on semicolons
	Javascript,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Train a word n-gram model and generate text", long_about = None)]
struct Cli {
	/// Training file or directory
	#[arg(default_value = DEFAULT_CORPUS)]
	corpus: PathBuf,

	/// N-gram size (prefix length + 1, at least 2)
	#[arg(short = 'n', long, value_name = "N")]
	ngram_size: Option<usize>,

	/// Maximum number of generated tokens
	#[arg(short = 'w', long, value_name = "COUNT", default_value_t = DEFAULT_MAX_WORDS)]
	max_words: usize,

	/// Token delimiter used to split and join text
	#[arg(short = 'd', long, value_name = "STR")]
	delimiter: Option<String>,

	/// Split the corpus verbatim instead of normalizing it
	#[arg(long)]
	keep_formatting: bool,

	/// Delimiter and formatting preset
	#[arg(long, value_enum)]
	preset: Option<Preset>,

	/// JSON file holding `n`, `delimiter` and `keep_formatting`
	#[arg(long, value_name = "PATH", conflicts_with = "preset")]
	config: Option<PathBuf>,

	/// Extension of training files when the corpus is a directory
	#[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
	extension: String,

	/// Number of texts to generate
	#[arg(long, value_name = "COUNT", default_value_t = 1)]
	samples: usize,

	/// Seed for reproducible generation
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	quiet: u8,
}

impl Cli {
	/// Builds the model configuration.
	///
	/// The preset or config file gives the base values, explicit flags override them.
	fn model_config(&self) -> Result<Config> {
		let n = self.ngram_size.unwrap_or(DEFAULT_N);
		let mut config = match (&self.config, self.preset) {
			(Some(path), _) => {
				let raw = fs::read_to_string(path)
					.with_context(|| format!("unable to read config {}", path.display()))?;
				let mut config: Config = serde_json::from_str(&raw)
					.with_context(|| format!("invalid config {}", path.display()))?;
				if let Some(n) = self.ngram_size {
					config.n = n;
				}
				config
			}
			(None, Some(Preset::Python)) => Config::python(n),
			(None, Some(Preset::Javascript)) => Config::javascript(n),
			(None, Some(Preset::English) | None) => Config::new(n),
		};

		if let Some(delimiter) = &self.delimiter {
			config.delimiter = delimiter.clone();
		}
		if self.keep_formatting {
			config.keep_formatting = true;
		}
		Ok(config)
	}
}

fn init_logging(verbose: u8, quiet: u8) {
	let level = if quiet > 0 {
		match quiet {
			1 => LevelFilter::Warn,
			_ => LevelFilter::Error,
		}
	} else {
		match verbose {
			0 => LevelFilter::Info,
			1 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	};

	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
	builder.format_timestamp_millis();
	builder.filter_level(level);
	let _ = builder.try_init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let config = cli.model_config()?;
	let mut model = NGramModel::with_config(config).context("unable to build model")?;

	let corpus = load_training_text(&cli.corpus, &cli.extension)
		.with_context(|| format!("unable to load training data from {}", cli.corpus.display()))?;
	if corpus.is_empty() {
		warn!("no training text loaded from {}, nothing to do", cli.corpus.display());
		return Ok(());
	}

	info!("training a n-gram model (n={})", model.n());
	let summary = model.fit(&corpus.text);
	if summary.windows == 0 {
		warn!("training produced no n-grams, nothing to generate");
		return Ok(());
	}

	let mut rng = match cli.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	info!("generating text");
	for _ in 0..cli.samples {
		println!("{}", model.generate_with_rng(cli.max_words, &mut rng)?);
		println!("{}", "-".repeat(50));
	}

	Ok(())
}
