// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses command line arguments with `clap` and hands the work
// to Layer 2 (application). Printing results happens here.
//
// Typical two-phase run:
//   qa-corpus-prep split --input corpus.csv
//   qa-corpus-prep extract
// or both at once:
//   qa-corpus-prep prepare --input corpus.csv

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, InspectArgs, SplitArgs};

use crate::application::{
    extract_use_case::{default_partition_files, ExtractUseCase},
    inspect_use_case::InspectUseCase,
    split_use_case::{SplitConfig, SplitUseCase},
};
use crate::domain::partition::{Partition, PartitionCounts};

#[derive(Parser, Debug)]
#[command(
    name = "qa-corpus-prep",
    version,
    about = "Split a Question/Answer CSV corpus into train/test/val and extract its columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)   => run_split(&args).map(|_| ()),
            Commands::Extract(args) => run_extract(args),
            Commands::Inspect(args) => run_inspect(args),
            Commands::Prepare(args) => run_prepare(args),
        }
    }
}

fn run_split(args: &SplitArgs) -> Result<SplitConfig> {
    let use_case = SplitUseCase::new(args.into());
    let counts   = use_case.execute(&args.input)?;

    print_counts(&counts);
    Ok(use_case.config().clone())
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let files = if args.files.is_empty() {
        default_partition_files()
    } else {
        args.files
    };

    let columns = ExtractUseCase::new(args.delimiter).execute(&files)?;

    for (file, cols) in files.iter().zip(&columns) {
        if cols.is_empty() {
            println!("{}: no question/answer rows", file.display());
        } else {
            println!("{}: {} question/answer rows", file.display(), cols.len());
        }
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    for line in InspectUseCase::new(args.file, args.lines).execute()? {
        println!("{line}");
    }
    Ok(())
}

/// Both phases in one go: split, then extract test, val, train.
fn run_prepare(args: SplitArgs) -> Result<()> {
    let cfg = run_split(&args)?;

    let files: Vec<_> = Partition::EXTRACT_ORDER
        .iter()
        .map(|p| cfg.partition_path(*p))
        .collect();

    run_extract(ExtractArgs {
        files,
        delimiter: cfg.delimiter,
    })
}

fn print_counts(counts: &PartitionCounts) {
    println!("train: {} rows", counts.train);
    println!("test:  {} rows", counts.test);
    println!("val:   {} rows", counts.val);
    if counts.dropped > 0 {
        println!("dropped: {} rows past the planned total", counts.dropped);
    }
}
