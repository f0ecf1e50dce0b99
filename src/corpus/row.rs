//! Row parsing for the `;`-delimited bigram table

use crate::error::{CollocateError, CollocateResult};
use crate::models::{ContingencyRecord, PosTag};
use csv::StringRecord;

/// Columns per row: frequency, word1, pos1, word2, pos2, o11, o12, o21, o22
pub const FIELD_COUNT: usize = 9;

const COUNT_NAMES: [&str; 4] = ["o11", "o12", "o21", "o22"];

/// Parse one raw row. `line` is 1-based and only used for error messages.
///
/// Both marginals `o11 + o12` and `o11 + o21` must fit within `corpus_size`.
pub fn parse_row(
    row: &StringRecord,
    line: u64,
    corpus_size: u64,
) -> CollocateResult<ContingencyRecord> {
    if row.len() != FIELD_COUNT {
        return Err(CollocateError::Format {
            line,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
        });
    }

    let mut counts = [0u64; 4];
    for (i, slot) in counts.iter_mut().enumerate() {
        let raw = &row[5 + i];
        *slot = raw.trim().parse().map_err(|_| CollocateError::Format {
            line,
            reason: format!("{} is not a non-negative integer: '{}'", COUNT_NAMES[i], raw),
        })?;
    }

    for (name, other) in [("o12", counts[1]), ("o21", counts[2])] {
        match counts[0].checked_add(other) {
            Some(marginal) if marginal <= corpus_size => {}
            _ => {
                return Err(CollocateError::Format {
                    line,
                    reason: format!("o11 + {} exceeds corpus size {}", name, corpus_size),
                })
            }
        }
    }

    Ok(ContingencyRecord {
        frequency: row[0].to_string(),
        word1: row[1].to_string(),
        pos1: PosTag::from(&row[2]),
        word2: row[3].to_string(),
        pos2: PosTag::from(&row[4]),
        o11: counts[0],
        o12: counts[1],
        o21: counts[2],
        o22: counts[3],
    })
}
