//! Corpus loader
//!
//! Streams the bigram table once and keeps only the rows that contain the
//! query word. A row whose first slot matches is kept as a first-word record
//! and is never also considered for the second slot.

mod row;

pub use row::{parse_row, FIELD_COUNT};

use crate::error::{CollocateError, CollocateResult};
use crate::models::{ContingencyRecord, Query};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Matching records split by the slot the query word occupies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSplit {
    pub as_first_word: Vec<ContingencyRecord>,
    pub as_second_word: Vec<ContingencyRecord>,
}

impl PositionSplit {
    /// Both lists concatenated (first-word records first), then stably sorted
    /// by `o11` descending.
    pub fn combined_by_frequency(&self) -> Vec<ContingencyRecord> {
        let mut combined: Vec<ContingencyRecord> = self
            .as_first_word
            .iter()
            .chain(self.as_second_word.iter())
            .cloned()
            .collect();
        combined.sort_by(|a, b| b.o11.cmp(&a.o11));
        combined
    }

    pub fn len(&self) -> usize {
        self.as_first_word.len() + self.as_second_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load every row mentioning the query from the file at `path`.
///
/// Rows are checked against `corpus_size`, so one table row whose marginals
/// exceed it fails the load.
pub fn load_matches(path: &Path, query: &Query, corpus_size: u64) -> CollocateResult<PositionSplit> {
    let file = File::open(path).map_err(|source| CollocateError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let split = read_matches(BufReader::new(file), query, corpus_size)?;
    info!(
        "Loaded {} matching bigrams from {} ({} as first word, {} as second word)",
        split.len(),
        path.display(),
        split.as_first_word.len(),
        split.as_second_word.len()
    );
    Ok(split)
}

/// Same as [`load_matches`] over any reader. Every row is parsed, so one
/// malformed row anywhere fails the whole load.
pub fn read_matches<R: Read>(
    reader: R,
    query: &Query,
    corpus_size: u64,
) -> CollocateResult<PositionSplit> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut split = PositionSplit::default();
    let mut raw = csv::StringRecord::new();
    let mut rows = 0u64;

    loop {
        let more = csv_reader.read_record(&mut raw).map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(rows + 1);
            CollocateError::Format {
                line,
                reason: e.to_string(),
            }
        })?;
        if !more {
            break;
        }
        rows += 1;
        let line = raw.position().map(|p| p.line()).unwrap_or(rows);
        let record = parse_row(&raw, line, corpus_size)?;

        if query.matches(&record.word1, &record.pos1) {
            split.as_first_word.push(record);
        } else if query.matches(&record.word2, &record.pos2) {
            split.as_second_word.push(record);
        }
    }

    debug!("Scanned {} rows", rows);
    Ok(split)
}
