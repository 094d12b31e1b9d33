//! Alignment Aggregator stage
//!
//! Consumes the SAM-style alignment records produced by an external aligner
//! and folds them into per-candidate, per-mismatch-level accession buckets.
//! Record-level problems are dropped silently (lenient-parser policy);
//! missing or unreadable files and invalid serialized state are fatal.

pub mod aggregate;
pub mod args;
pub mod genemap;
pub mod sam;

pub use aggregate::{
    aggregate, find_accessions, merge, AggregateMap, CandidateAggregate, MismatchBucket,
};
pub use args::{AggregateArgs, LookupArgs};
pub use genemap::{load_gene_map, GeneMap};
pub use sam::{parse_alignment_line, AlignmentRecord};

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Load serialized aggregate state. Unreadable or invalid state is fatal.
pub fn load_aggregates(path: &Path) -> Result<AggregateMap> {
    let file = File::open(path)
        .with_context(|| format!("failed to open aggregate state {}", path.display()))?;
    let map = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("invalid aggregate state in {}", path.display()))?;
    Ok(map)
}

/// Serialize aggregate state as pretty-printed JSON.
pub fn save_aggregates(aggregates: &AggregateMap, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create aggregate state {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), aggregates)
        .with_context(|| format!("failed to write aggregate state {}", path.display()))?;
    Ok(())
}

/// Shard the record stream across worker threads and merge the partial
/// maps in chunk order. Bucket union is commutative and associative, and
/// ordered merging keeps the first-seen sequence capture deterministic.
fn aggregate_sharded(lines: &[&str], num_threads: usize) -> Result<AggregateMap> {
    let chunk_size = lines.len().div_ceil(num_threads).max(1);
    let num_chunks = lines.len().div_ceil(chunk_size);

    let bar = ProgressBar::new(num_chunks as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("failed to build worker thread pool")?;

    let partials: Vec<AggregateMap> = pool.install(|| {
        lines
            .par_chunks(chunk_size)
            .map(|chunk| {
                let partial = aggregate(chunk.iter().filter_map(|l| parse_alignment_line(l)));
                bar.inc(1);
                partial
            })
            .collect()
    });
    bar.finish_and_clear();

    let mut result = AggregateMap::default();
    for partial in partials {
        merge(&mut result, partial);
    }
    Ok(result)
}

pub fn run_aggregate(args: AggregateArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };

    if args.verbose {
        eprintln!("Reading alignment records from {}...", args.sam.display());
    }
    let contents = std::fs::read_to_string(&args.sam)
        .with_context(|| format!("failed to read alignment file {}", args.sam.display()))?;
    let lines: Vec<&str> = contents.lines().collect();

    let aggregates = if num_threads <= 1 {
        aggregate(lines.iter().filter_map(|l| parse_alignment_line(l)))
    } else {
        if args.verbose {
            eprintln!("[INFO] Sharding {} lines across {} threads", lines.len(), num_threads);
        }
        aggregate_sharded(&lines, num_threads)?
    };

    save_aggregates(&aggregates, &args.out)?;
    eprintln!(
        "Aggregated {} candidate(s) from {} line(s) into {}",
        aggregates.len(),
        lines.len(),
        args.out.display()
    );
    Ok(())
}

pub fn run_lookup(args: LookupArgs) -> Result<()> {
    let aggregates = load_aggregates(&args.aggregates)?;
    match find_accessions(&aggregates, &args.id, args.mismatch_level) {
        Some(accessions) => {
            for accession in accessions {
                println!("{accession}");
            }
            Ok(())
        }
        None => bail!(
            "no accessions recorded for id '{}' at mismatch level {}",
            args.id,
            args.mismatch_level
        ),
    }
}
