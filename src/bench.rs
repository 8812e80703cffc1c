// =====================================================================
// File: bench.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 15, 2025
//
// Description:
//   Benchmark driver comparing the three indexes. For each index it
//   times a bulk load of random records, then the same number of
//   random-id searches, then the same number of random-id removals,
//   and reports the elapsed microseconds as a table:
//
//     Operation      AVL       BST       BTREE
//     --------------------------------------------------
//     Insertion      ...
//     Searching      ...
//     Deletion       ...
//
// Notes:
//   * Every index gets an identically seeded generator, so all three
//     see the same records and the same probe ids.
//   * Probe ids are drawn from a narrower range than record ids, so a
//     share of the searches and removals miss.
// =====================================================================
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::btree::MIN_DEGREE;
use crate::{AvlIndex, BTreeIndex, BstIndex, IndexError, IndexResult, Record, RecordIndex};
use crate::{debug, info};


/// Settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of inserts, searches and removals per index.
    pub record_count: usize,
    /// B-tree degree.
    pub degree: usize,
    /// Record ids are drawn from `0..=max_id`.
    pub max_id: i64,
    /// Search/remove probes are drawn from `0..=max_probe_id`.
    pub max_probe_id: i64,
    /// Ages are drawn from `0..max_age`.
    pub max_age: i32,
    /// Length of the random uppercase names.
    pub name_len: usize,
    /// Fixed seed for reproducible runs; `None` picks one at random.
    pub seed: Option<u64>,
    pub verbose: bool,
}


impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            record_count: 100_000,
            degree: 3,
            max_id: 50_000,
            max_probe_id: 5_000,
            max_age: 100,
            name_len: 4,
            seed: None,
            verbose: false,
        }
    }
}


impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    pub fn max_id(mut self, max_id: i64) -> Self {
        self.max_id = max_id;
        self
    }

    pub fn max_probe_id(mut self, max_probe_id: i64) -> Self {
        self.max_probe_id = max_probe_id;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Rejects settings the driver cannot run with.
    pub fn validate(&self) -> IndexResult<()> {
        if self.record_count == 0 {
            return Err(IndexError::InvalidConfig("record count must be positive".into()));
        }
        if self.degree < MIN_DEGREE {
            return Err(IndexError::InvalidDegree {
                degree: self.degree,
                min: MIN_DEGREE,
            });
        }
        if self.max_id < 0 || self.max_probe_id < 0 {
            return Err(IndexError::InvalidConfig("id ranges must not be negative".into()));
        }
        if self.max_age <= 0 {
            return Err(IndexError::InvalidConfig("max age must be positive".into()));
        }
        if self.name_len == 0 {
            return Err(IndexError::InvalidConfig("name length must be positive".into()));
        }
        Ok(())
    }

    /// Builds a config from command line arguments (program name already
    /// skipped). Returns `Ok(None)` when help was requested.
    ///
    /// # Example
    /// ```
    /// use record_index::BenchConfig;
    ///
    /// let args = ["--records", "500", "--degree", "5", "--seed", "9"];
    /// let config = BenchConfig::from_args(args.iter().map(|s| s.to_string()))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(config.record_count, 500);
    /// assert_eq!(config.degree, 5);
    /// assert_eq!(config.seed, Some(9));
    /// ```
    pub fn from_args<I>(args: I) -> IndexResult<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "-h" | "--help" => return Ok(None),
                "-v" | "--verbose" => config.verbose = true,
                "-n" | "--records" => config.record_count = parse_value(&flag, args.next())?,
                "-d" | "--degree" => config.degree = parse_value(&flag, args.next())?,
                "-s" | "--seed" => config.seed = Some(parse_value(&flag, args.next())?),
                other => {
                    return Err(IndexError::InvalidConfig(format!("unknown argument '{other}'")));
                }
            }
        }

        config.validate()?;
        Ok(Some(config))
    }
}


fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> IndexResult<T> {
    let value = value.ok_or_else(|| IndexError::InvalidConfig(format!("{flag} requires a value")))?;
    value
        .parse()
        .map_err(|_| IndexError::InvalidConfig(format!("invalid value '{value}' for {flag}")))
}


/// Random record and probe-id source.
pub struct RecordGenerator {
    rng: StdRng,
    max_id: i64,
    max_probe_id: i64,
    max_age: i32,
    name_len: usize,
}


impl RecordGenerator {
    pub fn new(config: &BenchConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_id: config.max_id,
            max_probe_id: config.max_probe_id,
            max_age: config.max_age,
            name_len: config.name_len,
        }
    }

    /// Random uppercase name, e.g. `"QZKA"`.
    pub fn name(&mut self) -> String {
        (0..self.name_len)
            .map(|_| char::from(self.rng.random_range(b'A'..=b'Z')))
            .collect()
    }

    pub fn record(&mut self) -> Record {
        let id = self.rng.random_range(0..=self.max_id);
        let age = self.rng.random_range(0..self.max_age);
        let name = self.name();
        Record::new(id, name, age)
    }

    /// Id used for a search or a removal.
    pub fn probe_id(&mut self) -> i64 {
        self.rng.random_range(0..=self.max_probe_id)
    }
}


/// Elapsed time of each phase for one index.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timings {
    pub insertion: Duration,
    pub searching: Duration,
    pub deletion: Duration,
}


/// Runs the insert, search and remove phases against `index`.
pub fn run_workload<T: RecordIndex>(index: &mut T, config: &BenchConfig, seed: u64) -> Timings {
    let mut generator = RecordGenerator::new(config, seed);
    let count = config.record_count;

    let start = Instant::now();
    let mut inserted = 0usize;
    for _ in 0..count {
        if index.insert(generator.record()) {
            inserted += 1;
        }
    }
    let insertion = start.elapsed();
    debug!(
        "{}: {} of {} inserts stored ({} duplicates)",
        index.name(),
        inserted,
        count,
        count - inserted
    );

    let start = Instant::now();
    let mut hits = 0usize;
    for _ in 0..count {
        if index.search(generator.probe_id()).is_some() {
            hits += 1;
        }
    }
    let searching = start.elapsed();
    debug!("{}: {} of {} searches hit", index.name(), hits, count);

    let start = Instant::now();
    let mut removed = 0usize;
    for _ in 0..count {
        if index.remove(generator.probe_id()) {
            removed += 1;
        }
    }
    let deletion = start.elapsed();
    debug!("{}: {} removals, {} records left", index.name(), removed, index.len());

    Timings {
        insertion,
        searching,
        deletion,
    }
}


/// Timings of all three indexes, printable as the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    pub avl: Timings,
    pub bst: Timings,
    pub btree: Timings,
}


impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15}{:<10}{:<10}{:<10}", "Operation", "AVL", "BST", "BTREE")?;
        writeln!(f, "{}", "-".repeat(50))?;

        let rows: [(&str, fn(&Timings) -> Duration); 3] = [
            ("Insertion", |t| t.insertion),
            ("Searching", |t| t.searching),
            ("Deletion", |t| t.deletion),
        ];
        for (label, phase) in rows {
            writeln!(
                f,
                "{:<15}{:<10.3}{:<10.3}{:<10.3}",
                label,
                micros(phase(&self.avl)),
                micros(phase(&self.bst)),
                micros(phase(&self.btree)),
            )?;
        }
        Ok(())
    }
}


fn micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}


impl BenchReport {
    /// Writes the comparison table to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> IndexResult<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}


/// Runs the full comparison described by `config`.
pub fn run(config: &BenchConfig) -> IndexResult<BenchReport> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "Running {} inserts/searches/removals per index (B-tree degree {}, seed {})",
        config.record_count, config.degree, seed
    );

    let mut avl = AvlIndex::new();
    let avl_timings = run_workload(&mut avl, config, seed);
    debug!("AVL height after run: {}", avl.height());

    let mut bst = BstIndex::new();
    let bst_timings = run_workload(&mut bst, config, seed);
    debug!("BST height after run: {}", bst.height());

    let mut btree = BTreeIndex::new(config.degree)?;
    let btree_timings = run_workload(&mut btree, config, seed);
    debug!("B-tree height after run: {}", btree.height());

    Ok(BenchReport {
        avl: avl_timings,
        bst: bst_timings,
        btree: btree_timings,
    })
}
