//! Candidate Generator stage
//!
//! Enumerates fixed-length windows over a trimmed target transcript,
//! deduplicates them and applies antisense-strand filters, then writes the
//! surviving candidates as `oligo_{n}` FASTA records in first-seen order.

pub mod args;
pub mod filter;
pub mod generator;

pub use args::GenerateArgs;
pub use filter::{ForbiddenMotifFilter, GcContentFilter, SequenceFilter};
pub use generator::{generate, trim_ends, Candidate, GenerateError};

use anyhow::{Context, Result};
use bio::io::fasta;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Read the single-record input FASTA and return its sequence.
fn read_transcript(args: &GenerateArgs) -> Result<String> {
    let reader = fasta::Reader::from_file(&args.input)
        .with_context(|| format!("failed to open input FASTA {}", args.input.display()))?;
    let record = reader
        .records()
        .next()
        .transpose()
        .with_context(|| format!("failed to parse FASTA {}", args.input.display()))?
        .ok_or(GenerateError::EmptySequence)?;
    let sequence = String::from_utf8_lossy(record.seq()).into_owned();
    if sequence.is_empty() {
        return Err(GenerateError::EmptySequence.into());
    }
    Ok(sequence)
}

pub fn run(args: GenerateArgs) -> Result<()> {
    if args.verbose {
        eprintln!("Reading target transcript...");
    }
    let sequence = read_transcript(&args)?;

    let mut filters: Vec<Box<dyn SequenceFilter>> =
        vec![Box::new(GcContentFilter::new(args.min_gc, args.max_gc))];
    let motif_filter = ForbiddenMotifFilter::from_list(&args.forbidden_motifs);
    if !motif_filter.is_empty() {
        filters.push(Box::new(motif_filter));
    }

    // Validation failures surface before the output file is created.
    let candidates = generate(
        &sequence,
        args.oligo_length,
        args.trim_5prime,
        args.trim_3prime,
        &filters,
    )?;

    let file = File::create(&args.out)
        .with_context(|| format!("failed to create output FASTA {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(writer, ">oligo_{}", i + 1)?;
        writeln!(writer, "{}", candidate.sequence)?;
    }
    writer.flush()?;

    eprintln!(
        "Wrote {} candidate(s) to {}",
        candidates.len(),
        args.out.display()
    );
    Ok(())
}
