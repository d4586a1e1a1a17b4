//! Reference set construction.
//!
//! Each FASTA record contributes one entry holding the nucleotide sequence,
//! its translation and a compiled pattern per alphabet. The set is built
//! once at startup, is immutable afterwards and is shared read-only across
//! worker threads. It cannot be constructed empty, so the nearest-neighbor
//! accessors always have a candidate to return.

use anyhow::{bail, Context, Result};
use bio::io::fasta;
use std::path::Path;

use crate::common::normalize_nucleotide;
use crate::core::gencode::GeneticCode;
use crate::core::pattern::CompiledPattern;
use crate::search::{self, Nearest};

#[derive(Debug, Clone)]
pub struct RefEntry {
    pub id: String,
    pub nt_seq: Vec<u8>,
    pub aa_seq: Vec<u8>,
    pub nt_pattern: CompiledPattern,
    pub aa_pattern: CompiledPattern,
}

#[derive(Debug, Clone)]
pub struct ReferenceSet {
    entries: Vec<RefEntry>,
}

impl ReferenceSet {
    /// Build from a nucleotide FASTA file. Reference sequences are expected
    /// in-frame; a length that is not a multiple of 3 loses its trailing
    /// partial codon at translation, nothing else.
    pub fn build(path: &Path, code: &GeneticCode) -> Result<Self> {
        let reader = fasta::Reader::from_file(path)
            .with_context(|| format!("Failed to open reference FASTA {}", path.display()))?;
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Invalid FASTA record in {}", path.display()))?;
            records.push((record.id().to_string(), record.seq().to_vec()));
        }
        Self::from_records(records, code)
            .with_context(|| format!("Unusable reference FASTA {}", path.display()))
    }

    /// Build from (id, nucleotide sequence) pairs. Empty sequences are
    /// skipped; yielding no usable entry at all is an error.
    pub fn from_records<I>(records: I, code: &GeneticCode) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let mut entries = Vec::new();
        let mut total = 0usize;
        for (id, raw_seq) in records {
            total += 1;
            let nt_seq = normalize_nucleotide(&raw_seq);
            if nt_seq.is_empty() {
                continue;
            }
            let aa_seq = code.translate(&nt_seq);
            entries.push(RefEntry {
                id,
                nt_pattern: CompiledPattern::new(&nt_seq),
                aa_pattern: CompiledPattern::new(&aa_seq),
                nt_seq,
                aa_seq,
            });
        }
        if total == 0 {
            bail!("No reference sequences found");
        }
        if entries.is_empty() {
            bail!("All reference sequences were empty");
        }
        Ok(ReferenceSet { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RefEntry] {
        &self.entries
    }

    /// Minimal edit distance of `query` to any reference nucleotide
    /// sequence, with the length of the reference that achieved it.
    pub fn nearest_nucleotide(&self, query: &[u8]) -> Nearest {
        search::nearest(query, self.entries.iter().map(|e| &e.nt_pattern))
            .expect("reference set is non-empty by construction")
    }

    /// Minimal edit distance of `query` to any translated reference
    /// sequence, with the length of the reference that achieved it.
    pub fn nearest_amino_acid(&self, query: &[u8]) -> Nearest {
        search::nearest(query, self.entries.iter().map(|e| &e.aa_pattern))
            .expect("reference set is non-empty by construction")
    }
}
