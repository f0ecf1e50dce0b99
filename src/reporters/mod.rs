//! Stage file writers
//!
//! Every pipeline stage is persisted as its own `;`-delimited file under the
//! per-word output directory:
//! - record stages (`as_first_word`, `as_second_word`, `combined_n_sorted`, `excluded`)
//! - one `data_*` ranking per measure
//! - one `filtered_*` ranking per tested measure, ending with its critical value

mod delimited;

pub use delimited::write_stage;

use crate::measures::Measure;
use crate::models::{ContingencyRecord, ScoredEntry};

/// One output file of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageFile {
    AsFirstWord,
    AsSecondWord,
    CombinedSorted,
    Excluded,
    /// Full ranking for a measure
    Scores(Measure),
    /// Ranking after significance filtering
    Filtered(Measure),
}

impl StageFile {
    pub fn file_name(&self) -> String {
        match self {
            StageFile::AsFirstWord => "as_first_word.csv".to_string(),
            StageFile::AsSecondWord => "as_second_word.csv".to_string(),
            StageFile::CombinedSorted => "combined_n_sorted.csv".to_string(),
            StageFile::Excluded => "excluded.csv".to_string(),
            StageFile::Scores(m) => format!("data_{}.csv", measure_stem(*m)),
            StageFile::Filtered(m) => format!("filtered_{}.csv", measure_stem(*m)),
        }
    }
}

fn measure_stem(measure: Measure) -> &'static str {
    match measure {
        Measure::TTest => "t_test",
        Measure::ChiSquare => "chi2",
        Measure::LikelihoodRatio => "lr",
        Measure::Pmi => "pmi",
        Measure::Mi => "mi",
    }
}

/// Anything that can be written as one delimited row.
pub trait StageRow {
    fn fields(&self) -> Vec<String>;
}

impl StageRow for ContingencyRecord {
    fn fields(&self) -> Vec<String> {
        self.to_fields().to_vec()
    }
}

impl StageRow for ScoredEntry {
    fn fields(&self) -> Vec<String> {
        self.to_fields().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(StageFile::CombinedSorted.file_name(), "combined_n_sorted.csv");
        assert_eq!(StageFile::Scores(Measure::ChiSquare).file_name(), "data_chi2.csv");
        assert_eq!(StageFile::Scores(Measure::Mi).file_name(), "data_mi.csv");
        assert_eq!(
            StageFile::Filtered(Measure::TTest).file_name(),
            "filtered_t_test.csv"
        );
        assert_eq!(
            StageFile::Filtered(Measure::LikelihoodRatio).file_name(),
            "filtered_lr.csv"
        );
    }
}
