use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lattice-verify",
    version,
    about = "Lattice agreement input generator and output checker"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one randomized proposal file per process.
    Generate {
        #[arg(long, help = "Directory receiving procNN.config files")]
        directory: PathBuf,
        #[arg(long, help = "Size of the value universe [0, values)")]
        values: u32,
        #[arg(long, help = "Proposals per process")]
        proposals: usize,
        #[arg(long, help = "Number of processes")]
        processes: usize,
        #[arg(long, alias = "max_length", help = "Upper bound on proposal length")]
        max_length: usize,
        #[arg(long, help = "Seed for a reproducible run")]
        seed: Option<u64>,
    },
    /// Validate decision outputs against their proposal configs.
    Check {
        #[arg(
            long,
            num_args = 1..,
            required_unless_present = "log_dir",
            conflicts_with = "log_dir",
            requires = "output",
            help = "Config files, paired positionally with --output"
        )]
        config: Vec<PathBuf>,
        #[arg(long, num_args = 1.., requires = "config", help = "Output files")]
        output: Vec<PathBuf>,
        #[arg(long, requires = "processes", help = "Directory holding procNN.config/output")]
        log_dir: Option<PathBuf>,
        #[arg(long, requires = "log_dir", help = "Number of processes in --log-dir")]
        processes: Option<usize>,
        #[arg(
            long,
            default_value_t = false,
            help = "Tolerate outputs whose length differs from their config"
        )]
        allow_incomplete: bool,
        #[arg(
            long,
            default_value_t = false,
            help = "Report every violation instead of stopping at the first"
        )]
        keep_going: bool,
    },
}
