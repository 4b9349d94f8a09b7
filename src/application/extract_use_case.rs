// ============================================================
// Layer 2: ExtractUseCase
// ============================================================
// Separates the Question and Answer columns of a partition:
//
//   Step 1: Load Question/Answer rows        (Layer 4 - data)
//   Step 2: Write <stem>questions.csv        (Layer 4 - data)
//   Step 3: Write <stem>answers.csv          (Layer 4 - data)
//   Step 4: Cross-check the split manifest   (Layer 6 - infra)

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::data::column_writer::{column_output_path, write_column, ANSWERS_SUFFIX, QUESTIONS_SUFFIX};
use crate::data::loader::CsvQaLoader;
use crate::domain::partition::Partition;
use crate::domain::qa_pair::QaColumns;
use crate::domain::traits::QaSource;
use crate::infra::manifest::ManifestStore;

/// Partition files extracted when none are named, in extraction order
pub fn default_partition_files() -> Vec<PathBuf> {
    Partition::EXTRACT_ORDER
        .iter()
        .map(|p| PathBuf::from(p.file_name()))
        .collect()
}

pub struct ExtractUseCase {
    delimiter: u8,
}

impl ExtractUseCase {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Extract every file in order, stopping at the first failure.
    pub fn execute(&self, files: &[PathBuf]) -> Result<Vec<QaColumns>> {
        files.iter().map(|f| self.extract(f)).collect()
    }

    /// Extract the columns of one partition file and return them.
    pub fn extract(&self, input: &Path) -> Result<QaColumns> {
        let loader = CsvQaLoader::new(input, self.delimiter);
        self.extract_with(&loader, input)
    }

    /// Same as [`ExtractUseCase::extract`] but rows come from `source`;
    /// `input` only decides where the column files are written.
    pub fn extract_with(&self, source: &dyn QaSource, input: &Path) -> Result<QaColumns> {
        tracing::info!("Extracting columns from '{}'", input.display());

        let columns: QaColumns = source.load_all()?.into_iter().collect();

        let questions_path = column_output_path(input, QUESTIONS_SUFFIX);
        let answers_path   = column_output_path(input, ANSWERS_SUFFIX);

        write_column(&questions_path, &columns.questions)?;
        write_column(&answers_path, &columns.answers)?;

        tracing::info!(
            "Wrote {} rows to '{}' and '{}'",
            columns.len(),
            questions_path.display(),
            answers_path.display(),
        );

        if let Some(m) = check_against_manifest(input, columns.len()) {
            tracing::warn!(
                "'{}' has {} rows but the split manifest recorded {}",
                input.display(),
                m.extracted,
                m.recorded,
            );
        }
        Ok(columns)
    }
}

/// Row count of a partition that disagrees with its split manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestMismatch {
    pub recorded:  usize,
    pub extracted: usize,
}

/// Compare `rows` against the manifest next to `input`, if there is one
/// and `input` is a partition file. Never fails the extraction.
fn check_against_manifest(input: &Path, rows: usize) -> Option<ManifestMismatch> {
    let partition = input
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(Partition::from_file_name)?;

    let dir = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    match ManifestStore::new(dir).load() {
        Ok(Some(manifest)) => {
            let recorded = manifest.counts.get(partition);
            (recorded != rows).then_some(ManifestMismatch {
                recorded,
                extracted: rows,
            })
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Ignoring split manifest: {e:#}");
            None
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::split_use_case::SplitConfig;
    use crate::domain::error::CorpusError;
    use crate::domain::partition::PartitionCounts;
    use crate::domain::qa_pair::QaPair;
    use crate::infra::manifest::SplitManifest;
    use std::fs;
    use tempfile::tempdir;

    struct FixedSource(Vec<QaPair>);

    impl QaSource for FixedSource {
        fn load_all(&self) -> Result<Vec<QaPair>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_question_answer_scenario() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("a.csv");
        fs::write(&path, "Question,Answer\n2+2?,4\n3+3?,6\n").unwrap();

        let columns = ExtractUseCase::new(b',').extract(&path).unwrap();

        assert_eq!(columns.questions, vec!["2+2?", "3+3?"]);
        assert_eq!(columns.answers,   vec!["4", "6"]);
        assert_eq!(
            fs::read_to_string(dir.path().join("aquestions.csv")).unwrap(),
            "2+2?\n3+3?\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("aanswers.csv")).unwrap(),
            "4\n6\n"
        );
    }

    #[test]
    fn test_files_match_returned_columns() {
        let dir   = tempdir().unwrap();
        let input = dir.path().join("val.csv");
        let pairs: Vec<QaPair> = (0..25)
            .map(|i| QaPair::new(format!("question {i}"), format!("answer {i}")))
            .collect();

        let columns = ExtractUseCase::new(b',')
            .extract_with(&FixedSource(pairs), &input)
            .unwrap();

        let questions = fs::read_to_string(dir.path().join("valquestions.csv")).unwrap();
        let answers   = fs::read_to_string(dir.path().join("valanswers.csv")).unwrap();
        assert_eq!(questions.lines().collect::<Vec<_>>(), columns.questions);
        assert_eq!(answers.lines().collect::<Vec<_>>(),   columns.answers);
        assert_eq!(columns.len(), 25);
    }

    #[test]
    fn test_missing_question_column_fails() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("test.csv");
        fs::write(&path, "Prompt,Answer\np,a\n").unwrap();

        let err = ExtractUseCase::new(b',').extract(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::MissingColumn { .. })
        ));
        assert!(!dir.path().join("testquestions.csv").exists());
    }

    #[test]
    fn test_execute_stops_at_first_missing_file() {
        let dir   = tempdir().unwrap();
        let first = dir.path().join("test.csv");
        fs::write(&first, "Question,Answer\nq,a\n").unwrap();

        let files = vec![first, dir.path().join("val.csv")];
        assert!(ExtractUseCase::new(b',').execute(&files).is_err());
        assert!(dir.path().join("testquestions.csv").exists());
    }

    #[test]
    fn test_default_files_order() {
        assert_eq!(
            default_partition_files(),
            vec![PathBuf::from("test.csv"), PathBuf::from("val.csv"), PathBuf::from("train.csv")]
        );
    }

    #[test]
    fn test_manifest_mismatch_is_reported() {
        let dir   = tempdir().unwrap();
        let input = dir.path().join("test.csv");
        fs::write(&input, "Question,Answer\nq1,a1\nq2,a2\n").unwrap();

        let counts = PartitionCounts { train: 10, test: 3, val: 1, dropped: 0 };
        ManifestStore::new(dir.path())
            .save(&SplitManifest::new(SplitConfig::default(), counts))
            .unwrap();

        assert_eq!(
            check_against_manifest(&input, 2),
            Some(ManifestMismatch { recorded: 3, extracted: 2 })
        );
        assert_eq!(check_against_manifest(&input, 3), None);
        // extraction still succeeds
        assert_eq!(ExtractUseCase::new(b',').extract(&input).unwrap().len(), 2);
    }

    #[test]
    fn test_no_manifest_or_non_partition_file() {
        let dir = tempdir().unwrap();
        assert_eq!(check_against_manifest(&dir.path().join("val.csv"), 5), None);

        ManifestStore::new(dir.path())
            .save(&SplitManifest::new(SplitConfig::default(), PartitionCounts::default()))
            .unwrap();
        assert_eq!(check_against_manifest(&dir.path().join("other.csv"), 5), None);
    }
}
