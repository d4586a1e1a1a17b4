//! Row-level records shared between the query reader, the search engine and
//! the output writer, plus sequence normalization helpers.

use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// One query row: an opaque key passed through to the output, and the two
/// CDR3 sequences (either may be empty).
#[derive(Debug, Clone)]
pub struct QueryRecord {
    pub key: String,
    pub nt_seq: Vec<u8>,
    pub aa_seq: Vec<u8>,
}

/// One output row. `row` is the input-order index used to restore ordering
/// after parallel evaluation.
#[derive(Debug, Clone)]
pub struct RowResult {
    pub row: usize,
    pub key: String,
    pub nt_distance: usize,
    pub aa_distance: usize,
    /// `nt_distance / max(query_len, matched_ref_len)`; `None` when the
    /// denominator is 0 (both sequences empty).
    pub nt_rate: Option<f64>,
    pub aa_rate: Option<f64>,
}

pub const OUTPUT_COLUMNS: [&str; 5] = [
    "clonotypeKey",
    "nMutationsCountCDR3",
    "aaMutationsCountCDR3",
    "nMutationsRateCDR3",
    "aaMutationsRateCDR3",
];

/// Write the result table, tab-separated with a header line, to `out_path`
/// or stdout when the path is absent or "-".
pub fn write_output(results: &[RowResult], out_path: Option<&PathBuf>) -> Result<()> {
    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = match out_path {
        Some(path) if path.as_os_str() != "-" => Box::new(BufWriter::new(File::create(path)?)),
        _ => Box::new(BufWriter::new(stdout.lock())),
    };

    writeln!(writer, "{}", OUTPUT_COLUMNS.join("\t"))?;
    for r in results {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            r.key,
            r.nt_distance,
            r.aa_distance,
            fmt_rate(r.nt_rate),
            fmt_rate(r.aa_rate),
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// An undefined rate is an empty field, not a zero.
fn fmt_rate(rate: Option<f64>) -> String {
    match rate {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Uppercase, drop whitespace, normalize RNA U to T.
pub fn normalize_nucleotide(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|&b| match b.to_ascii_uppercase() {
            b'U' => b'T',
            up => up,
        })
        .collect()
}

/// Uppercase, drop whitespace.
pub fn normalize_amino_acid(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect()
}
