//! Genetic code translation tables.
//!
//! Maps nucleotide codons to amino-acid letters. Tables are stored as
//! 64-character strings in TCAG order (index = 16*b1 + 4*b2 + b3 with
//! T=0, C=1, A=2, G=3), the layout used by the NCBI genetic code listings.

use anyhow::{bail, Result};

/// One genetic code, resolved from its NCBI ID.
#[derive(Debug)]
pub struct GeneticCode {
    table: [u8; 64],
}

impl GeneticCode {
    /// Resolve an NCBI genetic code ID.
    ///
    /// Supported IDs: 1 (standard), 2 (vertebrate mitochondrial),
    /// 5 (invertebrate mitochondrial), 11 (bacterial/archaeal).
    pub fn from_id(id: u8) -> Result<Self> {
        let table_str: &[u8; 64] = match id {
            1 => b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            2 => b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
            5 => b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
            11 => b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            _ => bail!("Unsupported genetic code ID: {}", id),
        };
        Ok(GeneticCode { table: *table_str })
    }

    /// Amino acid for one codon; any base outside {T,U,C,A,G} yields 'X'.
    fn aa(&self, codon: &[u8]) -> u8 {
        let mut idx = 0usize;
        for &b in codon {
            idx <<= 2;
            match b.to_ascii_uppercase() {
                b'T' | b'U' => {}
                b'C' => idx |= 1,
                b'A' => idx |= 2,
                b'G' => idx |= 3,
                _ => return b'X',
            }
        }
        self.table[idx]
    }

    /// Translate a nucleotide sequence over its complete codons.
    ///
    /// A trailing partial codon is dropped, not padded. Stop codons
    /// translate to '*' and stay in the output.
    pub fn translate(&self, seq: &[u8]) -> Vec<u8> {
        seq.chunks_exact(3).map(|codon| self.aa(codon)).collect()
    }
}
