//! Query table parsing tests.

use std::io::Write;

use cdr3dist::input::table::read_query_table;

fn write_tsv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_rows_in_order() {
    let file = write_tsv(
        "clonotypeKey\tnSeqCDR3\taaSeqCDR3\n\
         k1\tTGTGCC\tCA\n\
         k2\tTGCGCA\tCA\n",
    );
    let records = read_query_table(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].key, "k1");
    assert_eq!(records[0].nt_seq, b"TGTGCC");
    assert_eq!(records[1].key, "k2");
}

#[test]
fn columns_resolved_by_name_in_any_order() {
    let file = write_tsv(
        "aaSeqCDR3\textra\tclonotypeKey\tnSeqCDR3\n\
         CASS\tnoise\tk1\tTGTGCC\n",
    );
    let records = read_query_table(file.path()).unwrap();
    assert_eq!(records[0].key, "k1");
    assert_eq!(records[0].nt_seq, b"TGTGCC");
    assert_eq!(records[0].aa_seq, b"CASS");
}

#[test]
fn missing_values_are_empty_sequences() {
    let file = write_tsv(
        "clonotypeKey\tnSeqCDR3\taaSeqCDR3\n\
         k1\t\t\n\
         k2\n",
    );
    let records = read_query_table(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].nt_seq.is_empty());
    assert!(records[0].aa_seq.is_empty());
    // Row shorter than the header: trailing fields read as empty.
    assert_eq!(records[1].key, "k2");
    assert!(records[1].nt_seq.is_empty());
}

#[test]
fn sequences_are_normalized() {
    let file = write_tsv(
        "clonotypeKey\tnSeqCDR3\taaSeqCDR3\n\
         k1\tugu gcc\tcass\n",
    );
    let records = read_query_table(file.path()).unwrap();
    assert_eq!(records[0].nt_seq, b"TGTGCC");
    assert_eq!(records[0].aa_seq, b"CASS");
}

#[test]
fn missing_columns_are_reported_together() {
    let file = write_tsv("clonotypeKey\tsomething\n k1\tx\n");
    let err = read_query_table(file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("nSeqCDR3"));
    assert!(msg.contains("aaSeqCDR3"));
    assert!(!msg.contains("clonotypeKey,"));
}
