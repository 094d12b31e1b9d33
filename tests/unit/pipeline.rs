//! File-level runs of the pipeline stages
//!
//! These tests drive the stage `run()` functions the way the binary does,
//! on real files in a temp directory.

use ocra::candidate::{self, GenerateArgs};
use ocra::crossreact::{self, load_aggregates, AggregateArgs};
use ocra::report::{self, ReportArgs};
use std::fs;
use std::path::Path;

fn write_fasta(path: &Path, header: &str, seq: &str) {
    fs::write(path, format!(">{header}\n{seq}\n")).unwrap();
}

fn sam_line(id: &str, acc: &str, tags: &str) -> String {
    format!("{id}\t0\t{acc}\t100\t42\t4M\t*\t0\t0\tACGT\tIIII\t{tags}")
}

#[test]
fn test_generate_stage_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("target.fasta");
    let out = dir.path().join("oligos.fasta");
    write_fasta(&input, "target", "ACGTACGTAC");

    candidate::run(GenerateArgs {
        input: input.clone(),
        out: out.clone(),
        oligo_length: 4,
        trim_5prime: 0,
        trim_3prime: 0,
        min_gc: 0.0,
        max_gc: 100.0,
        forbidden_motifs: String::new(),
        verbose: false,
    })
    .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        ">oligo_1\nACGT\n>oligo_2\nCGTA\n>oligo_3\nGTAC\n>oligo_4\nTACG\n"
    );
}

#[test]
fn test_generate_validation_precedes_output_creation() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("target.fasta");
    let out = dir.path().join("oligos.fasta");
    write_fasta(&input, "target", "ACGT");

    let err = candidate::run(GenerateArgs {
        input: input.clone(),
        out: out.clone(),
        oligo_length: 10,
        trim_5prime: 0,
        trim_3prime: 0,
        min_gc: 0.0,
        max_gc: 100.0,
        forbidden_motifs: String::new(),
        verbose: false,
    })
    .unwrap_err();

    assert!(err.to_string().contains("less than the oligo length"));
    assert!(!out.exists());
}

#[test]
fn test_aggregate_and_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let sam = dir.path().join("hits.sam");
    let state = dir.path().join("state.json");
    let gene_map = dir.path().join("gene2accession.tsv");
    let out = dir.path().join("report.tsv");

    let sam_text = [
        "@HD\tVN:1.6".to_string(),
        "@SQ\tSN:NC_001\tLN:1000".to_string(),
        sam_line("oligo_1", "NC_001", "NM:i:0"),
        // duplicate accession for the same bucket collapses
        sam_line("oligo_1", "NC_001", "XA:i:1\tNM:i:0"),
        sam_line("oligo_1", "NC_002", "NM:i:1"),
        sam_line("oligo_2", "NC_999", "NM:i:0"),
        // malformed records are dropped silently
        "oligo_3\t0\tNC_001".to_string(),
        sam_line("oligo_3", "NC_001", "MD:Z:4"),
        sam_line("oligo_3", "NC_001", "NM:i:bad"),
    ]
    .join("\n");
    fs::write(&sam, sam_text).unwrap();

    fs::write(
        &gene_map,
        "#GeneID\ttax_id\tAccession\n\
         101\t9606\tNC_001\n\
         102\t9606\tNC_001\n\
         101\t9606\tNC_002\n",
    )
    .unwrap();

    crossreact::run_aggregate(AggregateArgs {
        sam: sam.clone(),
        out: state.clone(),
        num_threads: 1,
        verbose: false,
    })
    .unwrap();

    let aggregates = load_aggregates(&state).unwrap();
    assert_eq!(aggregates.len(), 2);
    assert!(!aggregates.contains_key("oligo_3"));

    report::run(ReportArgs {
        aggregates: state.clone(),
        gene_map: Some(gene_map.clone()),
        out: Some(out.clone()),
        verbose: false,
    })
    .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let expected = "\
#ID\tmismatch_level\tnum_of_matched_accessions\tnum_of_matched_geneids\tmatched_geneid\tmatched_accession
oligo_1\t0\t1\t2\t101,102\tNC_001
oligo_1\t1\t1\t1\t101\tNC_002
oligo_2\t0\t1\t0\tNA\tNC_999
";
    assert_eq!(written, expected);
}

#[test]
fn test_sharded_aggregation_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let sam = dir.path().join("hits.sam");
    let seq_state = dir.path().join("seq.json");
    let par_state = dir.path().join("par.json");

    let lines: Vec<String> = (0..100)
        .map(|i| sam_line(&format!("oligo_{}", i % 7), &format!("NC_{:03}", i % 13), &format!("NM:i:{}", i % 4)))
        .collect();
    fs::write(&sam, lines.join("\n")).unwrap();

    crossreact::run_aggregate(AggregateArgs {
        sam: sam.clone(),
        out: seq_state.clone(),
        num_threads: 1,
        verbose: false,
    })
    .unwrap();
    crossreact::run_aggregate(AggregateArgs {
        sam: sam.clone(),
        out: par_state.clone(),
        num_threads: 4,
        verbose: false,
    })
    .unwrap();

    assert_eq!(
        load_aggregates(&seq_state).unwrap(),
        load_aggregates(&par_state).unwrap()
    );
}
