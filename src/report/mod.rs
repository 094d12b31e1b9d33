//! Cross-reactivity report rendering
//!
//! Flattens the aggregate map into one row per (candidate, mismatch level)
//! pair. The cap threshold and sentinel string are part of the wire
//! contract consumed by downstream tooling and must not change.

pub mod args;

pub use args::ReportArgs;

use anyhow::Result;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::crossreact::{load_aggregates, load_gene_map, AggregateMap, GeneMap};

/// Joined lists longer than this are replaced by the cap sentinel.
pub const LIST_CAP: usize = 10;
/// Literal emitted in place of an overlong joined list.
pub const CAP_SENTINEL: &str = "too_many_to_record";
/// Literal emitted when no gene id resolved for a bucket.
pub const NO_MATCH: &str = "NA";

pub const REPORT_HEADER: &str =
    "#ID\tmismatch_level\tnum_of_matched_accessions\tnum_of_matched_geneids\tmatched_geneid\tmatched_accession";

/// One output row of the cross-reactivity report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub oligo_id: String,
    pub mismatch_level: u32,
    pub num_accessions: usize,
    pub num_geneids: usize,
    pub geneids: String,
    pub accessions: String,
}

/// Sort key that orders `oligo_2` before `oligo_10`: the non-digit prefix,
/// then the trailing number, then the full id as a tie-break.
fn candidate_sort_key(id: &str) -> (&str, Option<u64>, &str) {
    let digits = id
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let (prefix, suffix) = id.split_at(id.len() - digits);
    (prefix, suffix.parse().ok(), id)
}

fn capped_geneid_field(geneids: &BTreeSet<&String>) -> String {
    if geneids.len() > LIST_CAP {
        CAP_SENTINEL.to_string()
    } else if geneids.is_empty() {
        NO_MATCH.to_string()
    } else {
        geneids.iter().join(",")
    }
}

fn capped_accession_field(accessions: &BTreeSet<String>) -> String {
    if accessions.len() > LIST_CAP {
        CAP_SENTINEL.to_string()
    } else {
        accessions.iter().join(",")
    }
}

/// Flatten the aggregates into report rows.
///
/// Candidates are visited in numeric-suffix-aware id order; mismatch
/// levels ascend numerically within a candidate. When a gene map is
/// supplied, each bucket's accessions resolve to the union of their gene-id
/// sets; without a map (or without any match) the gene-id list is `NA`.
pub fn render(aggregates: &AggregateMap, gene_map: Option<&GeneMap>) -> Vec<ReportRow> {
    let mut ids: Vec<&String> = aggregates.keys().collect();
    ids.sort_by(|a, b| candidate_sort_key(a).cmp(&candidate_sort_key(b)));

    let mut rows = Vec::new();
    for id in ids {
        let aggregate = &aggregates[id];
        for (level, bucket) in &aggregate.mismatches {
            let mut geneids: BTreeSet<&String> = BTreeSet::new();
            if let Some(map) = gene_map {
                for accession in &bucket.accessions {
                    if let Some(matched) = map.get(accession) {
                        geneids.extend(matched);
                    }
                }
            }

            rows.push(ReportRow {
                oligo_id: id.clone(),
                mismatch_level: *level,
                num_accessions: bucket.accessions.len(),
                num_geneids: geneids.len(),
                geneids: capped_geneid_field(&geneids),
                accessions: capped_accession_field(&bucket.accessions),
            });
        }
    }
    rows
}

/// Write the report as TSV with a single header row.
pub fn write_report<W: Write>(rows: &[ReportRow], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{REPORT_HEADER}")?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.oligo_id,
            row.mismatch_level,
            row.num_accessions,
            row.num_geneids,
            row.geneids,
            row.accessions
        )?;
    }
    Ok(())
}

pub fn run(args: ReportArgs) -> Result<()> {
    let aggregates = load_aggregates(&args.aggregates)?;
    let gene_map = match &args.gene_map {
        Some(path) => Some(load_gene_map(path)?),
        None => None,
    };
    if args.verbose {
        eprintln!(
            "[INFO] Rendering report for {} candidate(s){}",
            aggregates.len(),
            if gene_map.is_some() {
                " with gene-id mapping"
            } else {
                ""
            }
        );
    }

    let rows = render(&aggregates, gene_map.as_ref());

    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = &args.out {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };
    write_report(&rows, &mut writer)?;
    writer.flush()?;

    eprintln!("Wrote {} report row(s)", rows.len());
    Ok(())
}
