//! `;`-delimited writer shared by every stage file

use super::{StageFile, StageRow};
use crate::error::{CollocateError, CollocateResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `rows` to `dir/<stage file name>`, creating `dir` if needed and
/// replacing any previous content.
///
/// Layout: one empty line, one line per row, then `trailer` on its own line
/// when given.
pub fn write_stage<R: StageRow>(
    dir: &Path,
    stage: StageFile,
    rows: &[R],
    trailer: Option<f64>,
) -> CollocateResult<PathBuf> {
    let path = dir.join(stage.file_name());
    let io_err = |source: std::io::Error| CollocateError::Output {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(|source| CollocateError::Output {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(File::create(&path).map_err(io_err)?);
    out.write_all(b"\n").map_err(io_err)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    for row in rows {
        writer
            .write_record(row.fields())
            .map_err(|e| io_err(e.into()))?;
    }
    if let Some(value) = trailer {
        writer
            .write_record([value.to_string()])
            .map_err(|e| io_err(e.into()))?;
    }
    writer.flush().map_err(io_err)?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::Measure;
    use crate::models::tests::record;
    use crate::models::ScoredEntry;

    #[test]
    fn test_record_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = record("strong", "J", "tea", "N", [4, 1, 1, 4]);
        r.frequency = "17".into();

        let path = write_stage(dir.path(), StageFile::Excluded, &[r], None).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "\n17;strong;J;tea;N;4;1;1;4\n");
    }

    #[test]
    fn test_trailer_and_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("output_tea");
        let entries = vec![ScoredEntry {
            word1: "strong".into(),
            word2: "tea".into(),
            partner: "strong".into(),
            score: 3.6,
        }];

        let path = write_stage(
            &nested,
            StageFile::Filtered(Measure::ChiSquare),
            &entries,
            Some(12.5),
        )
        .unwrap();
        assert_eq!(path, nested.join("filtered_chi2.csv"));
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "\nstrong;tea;strong;3.6\n12.5\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![record("a", "N", "b", "N", [1, 2, 3, 4])];
        write_stage(dir.path(), StageFile::AsFirstWord, &rows, None).unwrap();
        let empty: Vec<ScoredEntry> = Vec::new();
        let path = write_stage(dir.path(), StageFile::AsFirstWord, &empty, None).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "\n");
    }
}
