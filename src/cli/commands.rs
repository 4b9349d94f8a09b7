// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Defines the subcommands `split`, `extract`, `inspect` and
// `prepare`, and all their flags.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::split_use_case::{SizePolicy, SplitConfig};
use crate::data::inspector::{DEFAULT_INSPECT_FILE, DEFAULT_INSPECT_LINES};
use crate::domain::partition::DEFAULT_TOTAL_SAMPLES;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a labelled CSV corpus into train.csv, test.csv and val.csv
    Split(SplitArgs),

    /// Write the Question and Answer columns of partition files to their own files
    Extract(ExtractArgs),

    /// Print the first lines of an extracted column file
    Inspect(InspectArgs),

    /// Split a corpus, then extract the columns of every partition
    Prepare(SplitArgs),
}

/// Mismatch policy as seen on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    /// Size the partitions from the rows actually present
    Derive,
    /// Fail if the input row count differs from --total-samples
    Strict,
    /// Use --total-samples as-is; extra rows are dropped
    Truncate,
}

impl From<PolicyArg> for SizePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Derive   => SizePolicy::Derive,
            PolicyArg::Strict   => SizePolicy::Strict,
            PolicyArg::Truncate => SizePolicy::Truncate,
        }
    }
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Source corpus; `-` reads standard input
    #[arg(long, short)]
    pub input: String,

    /// Directory receiving train.csv, test.csv and val.csv
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Single-byte field delimiter
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Expected number of data rows (header excluded)
    #[arg(long, default_value_t = DEFAULT_TOTAL_SAMPLES)]
    pub total_samples: usize,

    /// What to do when the input does not have --total-samples rows
    #[arg(long, value_enum, default_value_t = PolicyArg::Derive)]
    pub policy: PolicyArg,
}

/// The application layer never sees clap types
impl From<&SplitArgs> for SplitConfig {
    fn from(a: &SplitArgs) -> Self {
        SplitConfig {
            delimiter:     a.delimiter,
            total_samples: a.total_samples,
            policy:        a.policy.into(),
            out_dir:       a.out_dir.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Partition files to extract; defaults to test.csv val.csv train.csv
    pub files: Vec<PathBuf>,

    /// Single-byte field delimiter
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Text file to peek at
    #[arg(long, default_value = DEFAULT_INSPECT_FILE)]
    pub file: PathBuf,

    /// Number of lines to print
    #[arg(long, short = 'n', default_value_t = DEFAULT_INSPECT_LINES)]
    pub lines: usize,
}

/// Accepts exactly one ASCII character, or `\t` for tab.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        },
    }
}
