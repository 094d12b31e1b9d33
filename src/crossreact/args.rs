use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Input SAM-style alignment file (tab-delimited, '@' headers ignored)
    #[arg(short, long)]
    pub sam: PathBuf,
    /// Output JSON file for the aggregated per-candidate state
    #[arg(short, long)]
    pub out: PathBuf,
    /// Worker threads for sharded aggregation (0 = all cores)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// JSON aggregate state produced by the aggregate stage
    #[arg(short, long)]
    pub aggregates: PathBuf,
    /// Candidate id to look up (e.g. oligo_16)
    #[arg(long)]
    pub id: String,
    /// Mismatch level to look up
    #[arg(short, long)]
    pub mismatch_level: u32,
}
