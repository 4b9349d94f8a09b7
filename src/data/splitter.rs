// ============================================================
// Layer 4: Train/Test/Validation Splitter
// ============================================================
// Reads a delimited corpus and writes its data rows into
// train.csv / test.csv / val.csv by contiguous index ranges.
//
//   source.csv                  out_dir/
//     header          ──────▶     train.csv  header + rows [0, n_train)
//     row 0                       test.csv   header + rows [n_train, n_train+n_test)
//     row 1                       val.csv    header + rows [n_train+n_test, total)
//     ...
//
// Rows keep their original relative order and are copied
// field-for-field. The header is repeated in every output.
// Blank lines are not records: they are neither counted nor
// written.
//
// Sizing:
//   Derive   → buffer all rows, plan over their count
//   Strict   → buffer all rows, fail before writing on mismatch
//   Truncate → stream rows against a fixed plan

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::{
    fs::{self, File},
    io::Read,
    path::PathBuf,
};

use crate::domain::error::CorpusError;
use crate::domain::partition::{Partition, PartitionCounts, PartitionPlan, Sizing};

/// Writes partitions of a delimited corpus into a directory.
pub struct CsvSplitter {
    delimiter: u8,
    out_dir:   PathBuf,
}

impl CsvSplitter {
    pub fn new(delimiter: u8, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            delimiter,
            out_dir: out_dir.into(),
        }
    }

    /// Path of a partition file inside the output directory
    pub fn partition_path(&self, partition: Partition) -> PathBuf {
        self.out_dir.join(partition.file_name())
    }

    /// Split `input` into the three partition files.
    /// Returns how many rows went where.
    pub fn split<R: Read>(&self, input: R, sizing: Sizing) -> Result<PartitionCounts> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut records = reader.records();

        let header = records
            .next()
            .ok_or(CorpusError::EmptyInput)?
            .context("Cannot read header row")?;

        match sizing {
            Sizing::Truncate(total) => {
                let plan   = PartitionPlan::for_total(total);
                let rows   = records.map(|r| r.context("Cannot read input row"));
                let counts = self.write_partitions(&header, rows, &plan)?;

                if counts.rows_read() != total {
                    tracing::warn!(
                        "Input has {} data rows but the split was planned for {} \
                         ({} rows dropped, {} planned rows missing)",
                        counts.rows_read(),
                        total,
                        counts.dropped,
                        total.saturating_sub(counts.rows_read()),
                    );
                }
                Ok(counts)
            }
            Sizing::Derive | Sizing::Strict(_) => {
                let rows: Vec<StringRecord> = records
                    .collect::<Result<Vec<_>, _>>()
                    .context("Cannot read input row")?;

                let total = match sizing {
                    Sizing::Strict(expected) if expected != rows.len() => {
                        return Err(CorpusError::RowCountMismatch {
                            expected,
                            actual: rows.len(),
                        }
                        .into());
                    }
                    _ => rows.len(),
                };

                let plan = PartitionPlan::for_total(total);
                self.write_partitions(&header, rows.into_iter().map(Ok), &plan)
            }
        }
    }

    /// Route each row to its partition writer. Writers are flushed
    /// before returning; on error they are dropped (and flushed) as
    /// the function unwinds.
    fn write_partitions<I>(
        &self,
        header: &StringRecord,
        rows:   I,
        plan:   &PartitionPlan,
    ) -> Result<PartitionCounts>
    where
        I: Iterator<Item = Result<StringRecord>>,
    {
        fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Cannot create output directory '{}'", self.out_dir.display())
        })?;

        let mut writers = PartitionWriters::create(self, header)?;
        let mut counts  = PartitionCounts::default();

        for (index, row) in rows.enumerate() {
            let row       = row?;
            let partition = plan.partition_for(index);

            if let Some(p) = partition {
                writers
                    .get_mut(p)
                    .write_record(&row)
                    .with_context(|| format!("Cannot write row {index} to {}", p.file_name()))?;
            }
            counts.record(partition);
        }

        writers.finish()?;

        tracing::debug!(
            "Split rows: {} train, {} test, {} val, {} dropped",
            counts.train,
            counts.test,
            counts.val,
            counts.dropped,
        );

        Ok(counts)
    }

    fn open_writer(&self, partition: Partition) -> Result<Writer<File>> {
        let path = self.partition_path(partition);
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))
    }
}

/// The three open output files of one split run.
struct PartitionWriters {
    train: Writer<File>,
    test:  Writer<File>,
    val:   Writer<File>,
}

impl PartitionWriters {
    /// Create (or truncate) all three files and write the header to each
    fn create(splitter: &CsvSplitter, header: &StringRecord) -> Result<Self> {
        let mut writers = Self {
            train: splitter.open_writer(Partition::Train)?,
            test:  splitter.open_writer(Partition::Test)?,
            val:   splitter.open_writer(Partition::Val)?,
        };

        for p in Partition::ALL {
            writers
                .get_mut(p)
                .write_record(header)
                .with_context(|| format!("Cannot write header to {}", p.file_name()))?;
        }

        Ok(writers)
    }

    fn get_mut(&mut self, partition: Partition) -> &mut Writer<File> {
        match partition {
            Partition::Train => &mut self.train,
            Partition::Test  => &mut self.test,
            Partition::Val   => &mut self.val,
        }
    }

    fn finish(mut self) -> Result<()> {
        for p in Partition::ALL {
            self.get_mut(p)
                .flush()
                .with_context(|| format!("Cannot flush {}", p.file_name()))?;
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    /// Read back the data rows (header excluded) of a partition file.
    fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<StringRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Cannot open '{}'", path.display()))?;

        reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Cannot read rows of '{}'", path.display()))
    }

    /// Header `id,text` followed by `n` rows `i,row i`
    fn corpus(n: usize) -> String {
        let mut s = String::from("id,text\n");
        for i in 0..n {
            s.push_str(&format!("{i},row {i}\n"));
        }
        s
    }

    fn ids(path: &Path) -> Vec<usize> {
        read_rows(path, b',')
            .unwrap()
            .iter()
            .map(|r| r[0].parse().unwrap())
            .collect()
    }

    #[test]
    fn test_derived_split_sizes() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let counts   = splitter.split(corpus(100).as_bytes(), Sizing::Derive).unwrap();

        assert_eq!((counts.train, counts.test, counts.val), (95, 3, 2));
        assert_eq!(counts.dropped, 0);
        assert_eq!(ids(&splitter.partition_path(Partition::Train)).len(), 95);
        assert_eq!(ids(&splitter.partition_path(Partition::Test)),  vec![95, 96, 97]);
        assert_eq!(ids(&splitter.partition_path(Partition::Val)),   vec![98, 99]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        splitter.split(corpus(57).as_bytes(), Sizing::Derive).unwrap();

        let all: Vec<usize> = Partition::ALL
            .iter()
            .flat_map(|p| ids(&splitter.partition_path(*p)))
            .collect();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn test_header_repeated_in_every_partition() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        splitter.split(corpus(20).as_bytes(), Sizing::Derive).unwrap();

        for p in Partition::ALL {
            let text = fs::read_to_string(splitter.partition_path(p)).unwrap();
            assert_eq!(text.lines().next(), Some("id,text"));
        }
    }

    #[test]
    fn test_truncate_drops_rows_past_total() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let counts   = splitter.split(corpus(110).as_bytes(), Sizing::Truncate(100)).unwrap();

        assert_eq!(counts.written(), 100);
        assert_eq!(counts.dropped,   10);
        assert_eq!(ids(&splitter.partition_path(Partition::Val)), vec![98, 99]);
    }

    #[test]
    fn test_truncate_short_input_leaves_ranges_empty() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let counts   = splitter.split(corpus(50).as_bytes(), Sizing::Truncate(100)).unwrap();

        assert_eq!((counts.train, counts.test, counts.val), (50, 0, 0));
        assert!(ids(&splitter.partition_path(Partition::Test)).is_empty());
        assert!(ids(&splitter.partition_path(Partition::Val)).is_empty());
    }

    #[test]
    fn test_strict_mismatch_writes_nothing() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let err      = splitter.split(corpus(10).as_bytes(), Sizing::Strict(12)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::RowCountMismatch { expected: 12, actual: 10 })
        ));
        assert!(!splitter.partition_path(Partition::Train).exists());
    }

    #[test]
    fn test_strict_match_splits() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let counts   = splitter.split(corpus(100).as_bytes(), Sizing::Strict(100)).unwrap();
        assert_eq!(counts.written(), 100);
    }

    #[test]
    fn test_custom_delimiter_and_quoted_fields() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b';', dir.path());
        let input    = "Question;Answer\n\"a;b?\";yes\n";
        let counts   = splitter.split(input.as_bytes(), Sizing::Derive).unwrap();

        // a single row lands in val: floor(0.95) = 0, floor(0.6) = 0
        assert_eq!(counts.val, 1);
        let rows = read_rows(&splitter.partition_path(Partition::Val), b';').unwrap();
        assert_eq!(&rows[0][0], "a;b?");
        assert_eq!(&rows[0][1], "yes");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let err      = splitter.split("".as_bytes(), Sizing::Derive).unwrap_err();
        assert!(matches!(err.downcast_ref::<CorpusError>(), Some(CorpusError::EmptyInput)));
    }

    #[test]
    fn test_blank_lines_are_not_rows() {
        let dir      = tempdir().unwrap();
        let splitter = CsvSplitter::new(b',', dir.path());
        let counts   = splitter.split("id\n0\n\n2\n".as_bytes(), Sizing::Derive).unwrap();

        assert_eq!(counts.rows_read(), 2);
        let all: Vec<usize> = Partition::ALL
            .iter()
            .flat_map(|p| ids(&splitter.partition_path(*p)))
            .collect();
        assert_eq!(all, vec![0, 2]);
    }
}
