use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON aggregate state produced by the aggregate stage
    #[arg(short, long)]
    pub aggregates: PathBuf,
    /// Optional tab-delimited accession -> gene-id table
    #[arg(short, long)]
    pub gene_map: Option<PathBuf>,
    /// Output TSV path (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
