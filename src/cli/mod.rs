//! CLI definition and handler

mod summary;

use crate::config::{AnalysisConfig, ConfigOverrides};
use crate::models::{PosTag, Query};
use crate::pipeline::Pipeline;
use crate::significance::Alpha;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Parse and validate a significance level in (0, 1)
fn parse_alpha(s: &str) -> Result<f64, String> {
    let alpha: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    Alpha::new(alpha).map(|a| a.value()).map_err(|e| e.to_string())
}

/// Parse and validate a corpus size (at least 1 token)
fn parse_corpus_size(s: &str) -> Result<u64, String> {
    let n: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid token count", s))?;
    if n == 0 {
        Err("corpus size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// collocate - Bigram collocation statistics
#[derive(Parser, Debug)]
#[command(name = "collocate")]
#[command(
    version,
    about = "Rank the collocations of a word with t-test, chi-square, log-likelihood, PMI and MI",
    long_about = "Reads a ';'-delimited bigram contingency table, keeps the bigrams that contain \
the target word with the given part-of-speech tag, filters them by syntactic template, \
and ranks them with five association measures. The t-test, chi-square and log-likelihood \
rankings are additionally filtered by significance.\n\n\
Input columns: frequency;word1;pos1;word2;pos2;o11;o12;o21;o22",
    after_help = "\
Examples:
  collocate bigrams.csv tea N                     Write results to ./output_tea/
  collocate bigrams.csv run V --alpha 0.001       Stricter significance level
  collocate bigrams.csv tea N --corpus-size 1000000
  collocate bigrams.csv tea N --output-root results"
)]
pub struct Cli {
    /// Path to the bigram contingency table
    pub input: PathBuf,

    /// Target word
    pub word: String,

    /// Part-of-speech tag of the target word (N, V, J, I, ...)
    pub tag: String,

    /// Config file (default: ./collocate.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Total token count of the corpus the table was built from
    #[arg(long, env = "COLLOCATE_CORPUS_SIZE", value_parser = parse_corpus_size)]
    pub corpus_size: Option<u64>,

    /// Significance level for the t-test and chi-square filters
    #[arg(long, env = "COLLOCATE_ALPHA", value_parser = parse_alpha)]
    pub alpha: Option<f64>,

    /// Directory in which output_<word>/ is created
    #[arg(long, short = 'o')]
    pub output_root: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Do not print the run summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let overrides = ConfigOverrides {
        corpus_size: cli.corpus_size,
        alpha: cli.alpha,
        output_root: cli.output_root.clone(),
    };
    let config = AnalysisConfig::load(cli.config.as_deref(), &cwd, overrides)
        .context("Failed to load configuration")?;

    let query = Query::new(cli.word.clone(), Some(PosTag::from(cli.tag.as_str())));
    let report = Pipeline::new(config)
        .run(&cli.input, &query)
        .with_context(|| format!("Collocation analysis of '{}' failed", cli.word))?;

    if !cli.quiet {
        summary::print(&query, &report);
    }
    Ok(())
}
