use anyhow::Result;
use clap::{Parser, Subcommand};
use ocra::{candidate, crossreact, report};

#[derive(Parser)]
#[command(name = "ocra")]
#[command(version = "0.1.0")]
#[command(about = "Oligo candidate design and genome-wide cross-reactivity reporting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate and filter oligo candidates from a target transcript
    Generate(candidate::GenerateArgs),

    /// Aggregate genome-alignment records into per-candidate mismatch buckets
    Aggregate(crossreact::AggregateArgs),

    /// Render the cross-reactivity report from aggregated state
    Report(report::ReportArgs),

    /// Look up the accessions recorded for one candidate and mismatch level
    Lookup(crossreact::LookupArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            candidate::run(args)?;
        }
        Commands::Aggregate(args) => {
            crossreact::run_aggregate(args)?;
        }
        Commands::Report(args) => {
            report::run(args)?;
        }
        Commands::Lookup(args) => {
            crossreact::run_lookup(args)?;
        }
    }
    Ok(())
}
