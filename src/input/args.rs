//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Minimal CDR3 edit distances vs a reference FASTA, computed independently
/// on the nucleotide and amino-acid alphabets.
#[derive(Parser, Debug)]
#[command(name = "cdr3dist")]
#[command(version)]
#[command(
    about = "Minimal edit distances of CDR3s vs a reference FASTA (nucleotide + amino acid)",
    long_about = None
)]
pub struct DistArgs {
    /// Query TSV with clonotypeKey, nSeqCDR3 and aaSeqCDR3 columns
    #[arg(short, long)]
    pub tsv: PathBuf,

    /// Reference FASTA with in-frame nucleotide CDR3 sequences
    #[arg(short, long)]
    pub ref_fasta: PathBuf,

    /// Output TSV path; '-' or absent writes to stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// NCBI genetic code ID used to translate the reference sequences
    #[arg(long, default_value_t = 1)]
    pub gencode: u8,

    /// Worker threads; 0 uses all available cores
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,

    /// Print progress and timing to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
