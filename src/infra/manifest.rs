// ============================================================
// Layer 6: Split Manifest
// ============================================================
// Records what a split run did, next to the partitions:
//
//   out_dir/
//     train.csv
//     test.csv
//     val.csv
//     split_manifest.json   ← config used + rows written
//
// The extractor reads it back to cross-check partition sizes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::application::split_use_case::{SizePolicy, SplitConfig};
use crate::domain::partition::{PartitionCounts, PartitionPlan};

/// File name of the manifest inside the output directory
pub const MANIFEST_FILE: &str = "split_manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitManifest {
    pub config: SplitConfig,
    /// Ranges the rows were routed by
    pub plan:   PartitionPlan,
    /// Rows actually written
    pub counts: PartitionCounts,
}

impl SplitManifest {
    pub fn new(config: SplitConfig, counts: PartitionCounts) -> Self {
        let total = match config.policy {
            SizePolicy::Derive => counts.rows_read(),
            _ => config.total_samples,
        };
        Self {
            plan: PartitionPlan::for_total(total),
            config,
            counts,
        }
    }
}

/// Reads and writes the manifest of one output directory.
pub struct ManifestStore {
    dir: PathBuf,
}

impl ManifestStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    pub fn save(&self, manifest: &SplitManifest) -> Result<()> {
        let path = self.path();
        let json = serde_json::to_string_pretty(manifest)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved split manifest to '{}'", path.display());
        Ok(())
    }

    /// Load the manifest, or `None` if the directory has none.
    pub fn load(&self) -> Result<Option<SplitManifest>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;
        let manifest = serde_json::from_str(&json)
            .with_context(|| format!("Malformed manifest '{}'", path.display()))?;

        Ok(Some(manifest))
    }
}
