//! Workload Generator
//!
//! Synthesizes workload traces in the evaluator's command grammar.
//! Generation is deterministic: the same seed and spec produce a
//! byte-identical trace.
//!
//! Operations are drawn at random among the kinds with remaining quota.
//! Gets draw from previously inserted keys (or miss on purpose), with
//! an optional skew toward re-querying hot keys; deletes draw from
//! previously inserted keys; range bounds are an ordered random pair.
//! In external-puts mode each maximal run of consecutive puts is
//! written to a numbered binary `.dat` file and replaced by a single
//! `l` command.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ReplayError, Result};

/// Operation quotas and shape knobs for one generated workload
#[derive(Debug, Clone)]
pub struct GenSpec {
    /// Number of put operations (must be non-zero)
    pub puts: usize,

    /// Number of get operations
    pub gets: usize,

    /// Number of range operations
    pub ranges: usize,

    /// Number of delete operations
    pub deletes: usize,

    /// Probability (0-1) that a get re-queries a previously queried key
    pub gets_skewness: f64,

    /// Probability (0-1) that a fresh get targets a random, probably
    /// absent key instead of a previously inserted one
    pub gets_misses_ratio: f64,

    /// Write puts into numbered binary files referenced by `l` commands
    pub external_puts: bool,

    /// Random number generator seed
    pub seed: u64,
}

impl Default for GenSpec {
    fn default() -> Self {
        Self {
            puts: 0,
            gets: 0,
            ranges: 0,
            deletes: 0,
            gets_skewness: 0.0,
            gets_misses_ratio: 0.5,
            external_puts: false,
            seed: 13141,
        }
    }
}

/// The four generated operation kinds
///
/// Loads are an encoding of puts, not a kind of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpKind {
    Put,
    Get,
    Range,
    Delete,
}

/// Deterministic workload generator
pub struct WorkloadGenerator {
    spec: GenSpec,
    rng: StdRng,

    /// Previously inserted keys, drawn on for gets and deletes
    put_pool: Vec<i32>,

    /// Previously queried keys, drawn on for skewed gets
    get_pool: Vec<i32>,
}

impl WorkloadGenerator {
    /// Create a generator seeded from the spec
    pub fn new(spec: GenSpec) -> Self {
        let rng = StdRng::seed_from_u64(spec.seed);
        Self {
            spec,
            rng,
            put_pool: Vec::new(),
            get_pool: Vec::new(),
        }
    }

    /// Generate a complete workload
    ///
    /// Commands are written to `out`. In external-puts mode the binary
    /// `.dat` files land in `dir`, and the emitted `l` commands carry
    /// the bare file names: the trace is meant to be replayed with
    /// `dir` as the working directory.
    pub fn generate<W: Write>(&mut self, mut out: W, dir: &Path) -> Result<()> {
        self.validate()?;

        let mut puts = 0usize;
        let mut gets = 0usize;
        let mut ranges = 0usize;
        let mut deletes = 0usize;

        let mut data_file: Option<BufWriter<File>> = None;
        let mut file_index = 0usize;

        while puts < self.spec.puts
            || gets < self.spec.gets
            || ranges < self.spec.ranges
            || deletes < self.spec.deletes
        {
            let op = match self.rng.gen_range(0..4) {
                0 => OpKind::Put,
                1 => OpKind::Get,
                2 => OpKind::Range,
                _ => OpKind::Delete,
            };

            // Skip kinds with an exhausted quota; queries and deletes
            // wait until at least one key exists.
            match op {
                OpKind::Put if puts >= self.spec.puts => continue,
                OpKind::Get if gets >= self.spec.gets => continue,
                OpKind::Range if ranges >= self.spec.ranges => continue,
                OpKind::Delete if deletes >= self.spec.deletes => continue,
                OpKind::Get | OpKind::Range | OpKind::Delete if puts == 0 => continue,
                _ => {}
            }

            // A non-put ends the current run of puts and with it the
            // current external data file.
            if op != OpKind::Put {
                if let Some(mut file) = data_file.take() {
                    file.flush()?;
                }
            }

            match op {
                OpKind::Put => {
                    let key: i32 = self.rng.gen();
                    let value: i32 = self.rng.gen();

                    if self.spec.external_puts {
                        if data_file.is_none() {
                            let name = format!("{}.dat", file_index);
                            file_index += 1;
                            let file = File::create(dir.join(&name))?;
                            writeln!(out, "l {}", name)?;
                            data_file = Some(BufWriter::new(file));
                        }
                        if let Some(file) = data_file.as_mut() {
                            file.write_all(&key.to_ne_bytes())?;
                            file.write_all(&value.to_ne_bytes())?;
                        }
                    } else {
                        writeln!(out, "p {} {}", key, value)?;
                    }

                    self.put_pool.push(key);
                    puts += 1;
                }
                OpKind::Get => {
                    let key = self.pick_get_key();
                    writeln!(out, "g {}", key)?;
                    gets += 1;
                }
                OpKind::Range => {
                    let a: i32 = self.rng.gen();
                    let b: i32 = self.rng.gen();
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    writeln!(out, "r {} {}", lo, hi)?;
                    ranges += 1;
                }
                OpKind::Delete => {
                    let key = self.pick_put_key();
                    writeln!(out, "d {}", key)?;
                    deletes += 1;
                }
            }
        }

        if let Some(mut file) = data_file.take() {
            file.flush()?;
        }
        out.flush()?;

        tracing::info!(puts, gets, ranges, deletes, files = file_index, "workload generated");
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.spec.puts == 0 {
            return Err(ReplayError::Generate(
                "a workload needs at least one put".to_string(),
            ));
        }
        for (name, ratio) in [
            ("gets-skewness", self.spec.gets_skewness),
            ("gets-misses-ratio", self.spec.gets_misses_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ReplayError::Generate(format!(
                    "{} must be within 0-1, got {}",
                    name, ratio
                )));
            }
        }
        Ok(())
    }

    /// Pick a key for a get per the skew and miss knobs
    fn pick_get_key(&mut self) -> i32 {
        // Re-query a previously queried key with probability `gets_skewness`
        if !self.get_pool.is_empty() && self.rng.gen_bool(self.spec.gets_skewness) {
            let index = self.rng.gen_range(0..self.get_pool.len());
            return self.get_pool[index];
        }

        // Fresh key: a probable miss with probability `gets_misses_ratio`,
        // otherwise one of the previously inserted keys
        let key = if self.rng.gen_bool(self.spec.gets_misses_ratio) {
            self.rng.gen()
        } else {
            self.pick_put_key()
        };
        self.get_pool.push(key);
        key
    }

    /// Pick one of the previously inserted keys
    ///
    /// Callers guarantee at least one put has been generated.
    fn pick_put_key(&mut self) -> i32 {
        let index = self.rng.gen_range(0..self.put_pool.len());
        self.put_pool[index]
    }
}
