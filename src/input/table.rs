//! Query table reading.
//!
//! The query table is tab-separated with a header line. The three required
//! columns are located by name, so the table may carry extra columns in any
//! order. Missing values are empty sequences, not errors.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::{normalize_amino_acid, normalize_nucleotide, QueryRecord};

pub const KEY_COLUMN: &str = "clonotypeKey";
pub const NT_COLUMN: &str = "nSeqCDR3";
pub const AA_COLUMN: &str = "aaSeqCDR3";

pub fn read_query_table(path: &Path) -> Result<Vec<QueryRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open query TSV {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => bail!("Query TSV is empty: {}", path.display()),
    };
    let columns: Vec<&str> = header.split('\t').map(str::trim).collect();
    let key_idx = columns.iter().position(|&c| c == KEY_COLUMN);
    let nt_idx = columns.iter().position(|&c| c == NT_COLUMN);
    let aa_idx = columns.iter().position(|&c| c == AA_COLUMN);

    let (Some(key_idx), Some(nt_idx), Some(aa_idx)) = (key_idx, nt_idx, aa_idx) else {
        let missing: Vec<&str> = [
            (KEY_COLUMN, key_idx),
            (NT_COLUMN, nt_idx),
            (AA_COLUMN, aa_idx),
        ]
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect();
        bail!(
            "Missing required columns in query TSV {}: {}",
            path.display(),
            missing.join(", ")
        );
    };

    let mut records = Vec::new();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        // Rows shorter than the header read as empty fields.
        let field = |idx: usize| fields.get(idx).copied().unwrap_or("");
        records.push(QueryRecord {
            key: field(key_idx).to_string(),
            nt_seq: normalize_nucleotide(field(nt_idx).as_bytes()),
            aa_seq: normalize_amino_acid(field(aa_idx).as_bytes()),
        });
    }
    Ok(records)
}
