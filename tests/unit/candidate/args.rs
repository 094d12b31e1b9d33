//! Unit tests for candidate/args.rs

use clap::{Args, Command, FromArgMatches};
use ocra::candidate::GenerateArgs;
use std::path::PathBuf;

fn parse_args(args: &[&str]) -> GenerateArgs {
    let mut all_args = vec!["ocra".to_string(), "generate".to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd = Command::new("ocra").subcommand(GenerateArgs::augment_args(Command::new("generate")));

    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches("generate").unwrap();

    GenerateArgs::from_arg_matches(sub_matches).unwrap()
}

#[test]
fn test_default_values() {
    let args = parse_args(&["-i", "target.fasta", "-o", "oligos.fasta", "-l", "19"]);

    assert_eq!(args.input, PathBuf::from("target.fasta"));
    assert_eq!(args.out, PathBuf::from("oligos.fasta"));
    assert_eq!(args.oligo_length, 19);
    assert_eq!(args.trim_5prime, 0);
    assert_eq!(args.trim_3prime, 0);
    assert_eq!(args.min_gc, 0.0);
    assert_eq!(args.max_gc, 100.0);
    assert_eq!(args.forbidden_motifs, "");
    assert_eq!(args.verbose, false);
}

#[test]
fn test_custom_trims() {
    let args = parse_args(&[
        "-i",
        "t.fasta",
        "-o",
        "o.fasta",
        "-l",
        "21",
        "--trim-5prime",
        "30",
        "--trim-3prime",
        "50",
    ]);
    assert_eq!(args.trim_5prime, 30);
    assert_eq!(args.trim_3prime, 50);
}

#[test]
fn test_custom_gc_range() {
    let args = parse_args(&[
        "-i", "t.fasta", "-o", "o.fasta", "-l", "19", "--min-gc", "40", "--max-gc", "60",
    ]);
    assert_eq!(args.min_gc, 40.0);
    assert_eq!(args.max_gc, 60.0);
}

#[test]
fn test_forbidden_motifs() {
    let args = parse_args(&[
        "-i",
        "t.fasta",
        "-o",
        "o.fasta",
        "-l",
        "19",
        "--forbidden-motifs",
        "GGGG,TTTT",
    ]);
    assert_eq!(args.forbidden_motifs, "GGGG,TTTT");
}

#[test]
fn test_verbose_flag() {
    let args = parse_args(&["-i", "t.fasta", "-o", "o.fasta", "-l", "19", "-v"]);
    assert_eq!(args.verbose, true);
}
