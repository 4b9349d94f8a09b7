// ============================================================
// Layer 2: SplitUseCase
// ============================================================
// Orchestrates the partition phase:
//
//   Step 1: Open the source corpus         (file or stdin)
//   Step 2: Split into train/test/val      (Layer 4 - data)
//   Step 3: Record what was written        (Layer 6 - infra)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use crate::data::splitter::CsvSplitter;
use crate::domain::error::CorpusError;
use crate::domain::partition::{Partition, PartitionCounts, Sizing, DEFAULT_TOTAL_SAMPLES};
use crate::infra::manifest::{ManifestStore, SplitManifest};

/// Source path that means "read standard input"
pub const STDIN_SOURCE: &str = "-";

// ─── Size Policy ─────────────────────────────────────────────────────────────
/// What to do when the configured total and the input row count disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePolicy {
    /// Ignore the configured total and plan over the actual row count
    #[default]
    Derive,
    /// Fail without writing anything
    Strict,
    /// Plan over the configured total, dropping or leaving rows short
    Truncate,
}

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything a split run needs. Serialisable so it can be
// recorded next to the partitions it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub delimiter:     u8,
    pub total_samples: usize,
    pub policy:        SizePolicy,
    pub out_dir:       PathBuf,
}

impl SplitConfig {
    pub fn sizing(&self) -> Sizing {
        match self.policy {
            SizePolicy::Derive   => Sizing::Derive,
            SizePolicy::Strict   => Sizing::Strict(self.total_samples),
            SizePolicy::Truncate => Sizing::Truncate(self.total_samples),
        }
    }

    /// Where a partition file of this run lands
    pub fn partition_path(&self, partition: Partition) -> PathBuf {
        self.out_dir.join(partition.file_name())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiter:     b',',
            total_samples: DEFAULT_TOTAL_SAMPLES,
            policy:        SizePolicy::Derive,
            out_dir:       PathBuf::from("."),
        }
    }
}

// ─── SplitUseCase ────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split the corpus at `source` (`-` for stdin).
    pub fn execute(&self, source: &str) -> Result<PartitionCounts> {
        if source == STDIN_SOURCE {
            tracing::info!("Splitting corpus from stdin");
            return self.execute_reader(io::stdin().lock());
        }

        tracing::info!("Splitting corpus '{}'", source);
        self.ensure_source_not_overwritten(Path::new(source))?;

        let file = File::open(source)
            .with_context(|| format!("Cannot open source corpus '{source}'"))?;
        self.execute_reader(BufReader::new(file))
    }

    /// Refuse a source that is one of the partition files this run
    /// would create, since creating it truncates the input.
    fn ensure_source_not_overwritten(&self, source: &Path) -> Result<()> {
        // a source that cannot be resolved fails later on open
        let Ok(source) = source.canonicalize() else {
            return Ok(());
        };

        for p in Partition::ALL {
            let output = self.config.partition_path(p);
            if output.canonicalize().is_ok_and(|o| o == source) {
                return Err(CorpusError::SourceIsPartition { path: output }.into());
            }
        }
        Ok(())
    }

    /// Split an already opened corpus stream.
    pub fn execute_reader<R: Read>(&self, input: R) -> Result<PartitionCounts> {
        let cfg      = &self.config;
        let splitter = CsvSplitter::new(cfg.delimiter, &cfg.out_dir);
        let counts   = splitter.split(input, cfg.sizing())?;

        tracing::info!(
            "Split {} rows: {} train, {} test, {} val",
            counts.written(),
            counts.train,
            counts.test,
            counts.val,
        );

        ManifestStore::new(&cfg.out_dir).save(&SplitManifest::new(cfg.clone(), counts))?;

        Ok(counts)
    }
}
