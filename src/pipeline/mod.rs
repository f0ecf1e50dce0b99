//! Collocation pipeline
//!
//! Orchestrates one run for one query word:
//! 1. Load the rows mentioning the word, split by slot
//! 2. Combine both slots and sort by bigram frequency
//! 3. Keep only bigrams matching a part-of-speech template
//! 4. Rank the survivors with each association measure
//! 5. Filter the t-test, chi-square and likelihood-ratio rankings by significance
//! 6. Write every stage to `<output_root>/output_<word>/`
//!
//! Steps 1-5 finish before the first file is written, so a failure in any of
//! them leaves no output behind.

use crate::config::AnalysisConfig;
use crate::corpus::{self, PositionSplit};
use crate::error::CollocateResult;
use crate::measures::Measure;
use crate::models::{ContingencyRecord, Query, ScoredEntry};
use crate::reporters::{write_stage, StageFile};
use crate::significance::{self, Filtered, SignificanceTest};
use crate::template::filter_by_templates;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runs the full analysis for a config.
pub struct Pipeline {
    config: AnalysisConfig,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load `input`, analyze it for `query` and write every stage file.
    pub fn run(&self, input: &Path, query: &Query) -> CollocateResult<PipelineReport> {
        let output_dir = self.config.output_dir(&query.word)?;
        let split = corpus::load_matches(input, query, self.config.corpus_size)?;
        let analysis = self.analyze(split, query)?;
        analysis.write(&output_dir)?;

        info!("Wrote results to {}", output_dir.display());
        Ok(PipelineReport {
            output_dir,
            analysis,
        })
    }

    /// Everything after loading, in memory.
    pub fn analyze(&self, split: PositionSplit, query: &Query) -> CollocateResult<Analysis> {
        let alpha = self.config.alpha()?;
        let corpus_size = self.config.corpus_size;

        let combined = split.combined_by_frequency();
        let excluded = filter_by_templates(&combined, &self.config.templates);
        info!(
            "{} combined bigrams, {} match the templates",
            combined.len(),
            excluded.len()
        );

        let mut outcomes = Vec::with_capacity(Measure::all().len());
        for &measure in Measure::all() {
            let ranked = measure.rank(&excluded, query, corpus_size);
            let filtered = match SignificanceTest::for_measure(measure, corpus_size) {
                Some(test) => Some(significance::apply(test, &ranked, alpha)?),
                None => None,
            };
            if let Some(f) = &filtered {
                info!(
                    "{}: {} of {} significant (critical value {})",
                    measure,
                    f.entries.len(),
                    ranked.len(),
                    f.quantile
                );
            }
            outcomes.push(MeasureOutcome {
                measure,
                ranked,
                filtered,
            });
        }

        Ok(Analysis {
            split,
            combined,
            excluded,
            outcomes,
        })
    }
}

/// Ranking and optional significance filter for one measure.
#[derive(Debug, Clone)]
pub struct MeasureOutcome {
    pub measure: Measure,
    pub ranked: Vec<ScoredEntry>,
    pub filtered: Option<Filtered>,
}

/// In-memory result of every stage.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub split: PositionSplit,
    pub combined: Vec<ContingencyRecord>,
    pub excluded: Vec<ContingencyRecord>,
    pub outcomes: Vec<MeasureOutcome>,
}

impl Analysis {
    pub fn outcome(&self, measure: Measure) -> Option<&MeasureOutcome> {
        self.outcomes.iter().find(|o| o.measure == measure)
    }

    /// Write all twelve stage files into `dir`.
    pub fn write(&self, dir: &Path) -> CollocateResult<()> {
        write_stage(dir, StageFile::AsFirstWord, &self.split.as_first_word, None)?;
        write_stage(dir, StageFile::AsSecondWord, &self.split.as_second_word, None)?;
        write_stage(dir, StageFile::CombinedSorted, &self.combined, None)?;
        write_stage(dir, StageFile::Excluded, &self.excluded, None)?;

        for outcome in &self.outcomes {
            write_stage(dir, StageFile::Scores(outcome.measure), &outcome.ranked, None)?;
        }
        for outcome in &self.outcomes {
            if let Some(filtered) = &outcome.filtered {
                write_stage(
                    dir,
                    StageFile::Filtered(outcome.measure),
                    &filtered.entries,
                    Some(filtered.quantile),
                )?;
            }
        }
        Ok(())
    }
}

/// What a finished run produced and where.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub output_dir: PathBuf,
    pub analysis: Analysis,
}

impl PipelineReport {
    /// Get a summary string.
    pub fn summary(&self) -> String {
        let a = &self.analysis;
        let mut parts = vec![
            format!("{} as first word", a.split.as_first_word.len()),
            format!("{} as second word", a.split.as_second_word.len()),
            format!("{} combined", a.combined.len()),
            format!("{} after templates", a.excluded.len()),
        ];
        for outcome in &a.outcomes {
            if let Some(f) = &outcome.filtered {
                parts.push(format!("{} {} significant", f.entries.len(), outcome.measure));
            }
        }
        parts.join(", ")
    }
}
