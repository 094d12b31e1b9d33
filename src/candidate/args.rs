use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input FASTA containing the target transcript
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output FASTA for surviving oligo candidates
    #[arg(short, long)]
    pub out: PathBuf,
    /// Length of each candidate oligo
    #[arg(short = 'l', long)]
    pub oligo_length: usize,
    /// Bases trimmed from the 5' end before enumeration
    #[arg(long, default_value_t = 0)]
    pub trim_5prime: usize,
    /// Bases trimmed from the 3' end (0 = keep the full 3' end)
    #[arg(long, default_value_t = 0)]
    pub trim_3prime: usize,
    /// Minimum antisense GC content in percent, inclusive
    #[arg(long, default_value_t = 0.0)]
    pub min_gc: f64,
    /// Maximum antisense GC content in percent, inclusive
    #[arg(long, default_value_t = 100.0)]
    pub max_gc: f64,
    /// Comma-separated motifs rejected anywhere in the antisense strand
    #[arg(long, default_value = "")]
    pub forbidden_motifs: String,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
