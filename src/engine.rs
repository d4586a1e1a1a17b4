//! Search orchestration.
//!
//! Builds the reference set once, then fans query rows out over a rayon
//! pool. Each row runs two independent nearest-reference searches (one per
//! alphabet); results flow through a channel to a writer thread that
//! restores input order by row index before writing.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::mpsc::channel;
use std::time::Instant;

use crate::common::{write_output, RowResult};
use crate::core::gencode::GeneticCode;
use crate::input::args::DistArgs;
use crate::input::table::read_query_table;
use crate::refset::ReferenceSet;
use crate::search::Nearest;

pub fn run(args: DistArgs) -> Result<()> {
    let t_total = Instant::now();
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };

    let code = GeneticCode::from_id(args.gencode)?;

    if args.verbose {
        eprintln!("Reading references...");
    }
    let t_refs = Instant::now();
    let refs = ReferenceSet::build(&args.ref_fasta, &code)?;
    if args.verbose {
        eprintln!("  {} references in {:.2?}", refs.len(), t_refs.elapsed());
    }

    if args.verbose {
        eprintln!("Reading queries...");
    }
    let queries = read_query_table(&args.tsv)?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("Failed to build thread pool")?;

    if args.verbose {
        eprintln!(
            "Searching {} queries vs {} references on {} threads...",
            queries.len(),
            refs.len(),
            num_threads
        );
    }

    let bar = if args.verbose {
        let bar = ProgressBar::new(queries.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap(),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let (tx, rx) = channel::<RowResult>();
    let out_path = args.out.clone();
    let writer = std::thread::spawn(move || -> Result<()> {
        let mut all: Vec<RowResult> = Vec::new();
        while let Ok(r) = rx.recv() {
            all.push(r);
        }
        // Rows were evaluated in arbitrary order; the index tag restores
        // input order.
        all.sort_by_key(|r| r.row);
        write_output(&all, out_path.as_ref())?;
        Ok(())
    });

    let refs_ref = &refs;
    let bar_ref = &bar;
    queries
        .par_iter()
        .enumerate()
        .for_each_with(tx, |tx, (row, q)| {
            let nt = refs_ref.nearest_nucleotide(&q.nt_seq);
            let aa = refs_ref.nearest_amino_acid(&q.aa_seq);
            let result = RowResult {
                row,
                key: q.key.clone(),
                nt_distance: nt.distance,
                aa_distance: aa.distance,
                nt_rate: mutation_rate(&nt, q.nt_seq.len()),
                aa_rate: mutation_rate(&aa, q.aa_seq.len()),
            };
            // The receiver outlives every sender; send cannot fail here.
            let _ = tx.send(result);
            bar_ref.inc(1);
        });
    bar.finish_and_clear();

    writer
        .join()
        .map_err(|_| anyhow::anyhow!("Writer thread panicked"))??;

    if args.verbose {
        eprintln!(
            "Done: {} rows vs {} references in {:.2?}",
            queries.len(),
            refs.len(),
            t_total.elapsed()
        );
    }
    Ok(())
}

/// Normalized mutation rate: distance over the longer of the two sequences.
/// Undefined (reported as a missing value) when both are empty.
fn mutation_rate(hit: &Nearest, query_len: usize) -> Option<f64> {
    let denom = query_len.max(hit.ref_len);
    if denom == 0 {
        None
    } else {
        Some(hit.distance as f64 / denom as f64)
    }
}
