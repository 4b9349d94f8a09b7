// ============================================================
// Layer 3: Partition Plan
// ============================================================
// Describes how the data rows of a corpus are divided into the
// train / test / validation partitions.
//
// The split is contiguous and order-preserving:
//
//   row index:  0 ........ n_train ...... n_train+n_test ...... total
//               [  train  ) [    test     ) [       val         )
//
//   n_train = floor(total * 0.95)
//   n_test  = floor((total - n_train) * 0.6)
//   n_val   = total - n_train - n_test
//
// Rows at index >= total belong to no partition.

use serde::{Deserialize, Serialize};

/// Share of all rows that go to the training partition
pub const TRAIN_FRACTION: f64 = 0.95;

/// Share of the non-training rows that go to the test partition
pub const TEST_FRACTION_OF_REST: f64 = 0.6;

/// Row count the corpus was originally prepared for
pub const DEFAULT_TOTAL_SAMPLES: usize = 38_269;

// ─── Partition ────────────────────────────────────────────────────────────────

/// One of the three subsets of the source corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Train,
    Test,
    Val,
}

impl Partition {
    /// Order in which partitions are laid out over the source rows
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Test, Partition::Val];

    /// Order in which partitions are column-extracted
    pub const EXTRACT_ORDER: [Partition; 3] = [Partition::Test, Partition::Val, Partition::Train];

    /// Fixed file name the partition is written to, e.g. `train.csv`
    pub fn file_name(self) -> &'static str {
        match self {
            Partition::Train => "train.csv",
            Partition::Test  => "test.csv",
            Partition::Val   => "val.csv",
        }
    }

    /// Reverse of [`Partition::file_name`].
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.file_name() == name)
    }
}

// ─── PartitionPlan ────────────────────────────────────────────────────────────

/// The three range sizes for a given total. They always sum to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionPlan {
    pub n_train: usize,
    pub n_test:  usize,
    pub n_val:   usize,
}

impl PartitionPlan {
    /// Compute range sizes from the fixed fractions using floor division.
    pub fn for_total(total: usize) -> Self {
        let n_train = ((total as f64) * TRAIN_FRACTION).floor() as usize;
        let n_train = n_train.min(total);
        let rest    = total - n_train;
        let n_test  = ((rest as f64) * TEST_FRACTION_OF_REST).floor() as usize;
        let n_test  = n_test.min(rest);
        let n_val   = rest - n_test;

        Self { n_train, n_test, n_val }
    }

    pub fn total(&self) -> usize {
        self.n_train + self.n_test + self.n_val
    }

    /// Which partition the zero-based data row `index` falls in,
    /// or `None` if it lies beyond the planned total.
    pub fn partition_for(&self, index: usize) -> Option<Partition> {
        if index < self.n_train {
            Some(Partition::Train)
        } else if index < self.n_train + self.n_test {
            Some(Partition::Test)
        } else if index < self.total() {
            Some(Partition::Val)
        } else {
            None
        }
    }
}

// ─── Sizing ───────────────────────────────────────────────────────────────────

/// How the planned total relates to the number of rows actually read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Plan over the actual row count
    Derive,
    /// Plan over the given total; refuse to write if the input disagrees
    Strict(usize),
    /// Plan over the given total regardless of the input.
    /// Excess rows are dropped, missing rows leave later ranges short.
    Truncate(usize),
}

// ─── PartitionCounts ──────────────────────────────────────────────────────────

/// Rows actually written by a split run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionCounts {
    pub train:   usize,
    pub test:    usize,
    pub val:     usize,
    /// Rows read past the planned total and written nowhere
    pub dropped: usize,
}

impl PartitionCounts {
    pub fn record(&mut self, partition: Option<Partition>) {
        match partition {
            Some(Partition::Train) => self.train   += 1,
            Some(Partition::Test)  => self.test    += 1,
            Some(Partition::Val)   => self.val     += 1,
            None                   => self.dropped += 1,
        }
    }

    pub fn get(&self, partition: Partition) -> usize {
        match partition {
            Partition::Train => self.train,
            Partition::Test  => self.test,
            Partition::Val   => self.val,
        }
    }

    pub fn written(&self) -> usize {
        self.train + self.test + self.val
    }

    /// Every data row that was read, written or not
    pub fn rows_read(&self) -> usize {
        self.written() + self.dropped
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_total_plan() {
        let plan = PartitionPlan::for_total(DEFAULT_TOTAL_SAMPLES);
        assert_eq!(plan.n_train, 36_355);
        assert_eq!(plan.n_test,  1_148);
        assert_eq!(plan.n_val,   766);
        assert_eq!(plan.total(), DEFAULT_TOTAL_SAMPLES);
    }

    #[test]
    fn test_hundred_rows() {
        let plan = PartitionPlan::for_total(100);
        assert_eq!((plan.n_train, plan.n_test, plan.n_val), (95, 3, 2));
    }

    #[test]
    fn test_tiny_totals_sum_up() {
        for total in 0..50 {
            assert_eq!(PartitionPlan::for_total(total).total(), total);
        }
        assert_eq!(PartitionPlan::for_total(1).n_val, 1);
    }

    #[test]
    fn test_partition_for_boundaries() {
        let plan = PartitionPlan::for_total(100);
        assert_eq!(plan.partition_for(0),   Some(Partition::Train));
        assert_eq!(plan.partition_for(94),  Some(Partition::Train));
        assert_eq!(plan.partition_for(95),  Some(Partition::Test));
        assert_eq!(plan.partition_for(97),  Some(Partition::Test));
        assert_eq!(plan.partition_for(98),  Some(Partition::Val));
        assert_eq!(plan.partition_for(99),  Some(Partition::Val));
        assert_eq!(plan.partition_for(100), None);
    }

    #[test]
    fn test_file_name_round_trip() {
        for p in Partition::ALL {
            assert_eq!(Partition::from_file_name(p.file_name()), Some(p));
        }
        assert_eq!(Partition::from_file_name("other.csv"), None);
    }

    #[test]
    fn test_counts_record() {
        let mut counts = PartitionCounts::default();
        counts.record(Some(Partition::Train));
        counts.record(Some(Partition::Val));
        counts.record(None);
        assert_eq!(counts.written(),   2);
        assert_eq!(counts.rows_read(), 3);
        assert_eq!(counts.get(Partition::Test), 0);
    }
}
