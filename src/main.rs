// ============================================================
// File: main.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 15, 2025
//
// Description:
//   Entry point for the index benchmark. Builds one AVL, one BST
//   and one B-tree index, runs the same random insert / search /
//   remove workload against each and prints the elapsed times
//   (microseconds) as a table on stdout.
//
//   Logging goes to stderr; pass --verbose for per-phase detail.
// ============================================================
use std::process::ExitCode;

use record_index::{BenchConfig, bench, logger};
use record_index::{error, info};

const USAGE: &str = "\
Usage: record-index [OPTIONS]

Options:
  -n, --records <N>   inserts, searches and removals per index (default 100000)
  -d, --degree <D>    B-tree degree, at least 3 (default 3)
  -s, --seed <S>      seed for a reproducible workload
  -v, --verbose       print debug detail to stderr
  -h, --help          show this message";


fn main() -> ExitCode {
    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if config.verbose {
        logger::enable_verbose();
    }

    let result =
        bench::run(&config).and_then(|report| report.write_to(&mut std::io::stdout().lock()));

    match result {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Benchmark failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
