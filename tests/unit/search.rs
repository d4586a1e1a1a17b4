//! Nearest-reference scan tests.

use cdr3dist::core::myers::distance;
use cdr3dist::core::pattern::CompiledPattern;
use cdr3dist::search::{nearest, Nearest};

fn patterns(seqs: &[&[u8]]) -> Vec<CompiledPattern> {
    seqs.iter().map(|s| CompiledPattern::new(s)).collect()
}

/// Unpruned minimum: scan everything, no skips, no early exit.
fn naive_nearest(query: &[u8], ps: &[CompiledPattern]) -> Option<Nearest> {
    ps.iter()
        .map(|p| Nearest {
            distance: distance(p, query),
            ref_len: p.len(),
        })
        .min_by_key(|n| n.distance)
}

#[test]
fn empty_candidate_list_yields_none() {
    assert_eq!(nearest(b"ACGT", []), None);
}

#[test]
fn exact_match_after_a_close_candidate() {
    // The first reference is close (distance 1); the scan must still reach
    // the second, which matches exactly.
    let ps = patterns(&[b"ATGC", b"ATG"]);
    let hit = nearest(b"ATG", ps.iter()).unwrap();
    assert_eq!(hit, Nearest { distance: 0, ref_len: 3 });
}

#[test]
fn prune_does_not_change_the_minimum() {
    let refs: &[&[u8]] = &[
        b"TGTGCCAGCAGCTTAGGA",
        b"TGTGCCAGC",
        b"TGT",
        b"TGCGCAAGAGGGTTT",
        b"",
        b"TGTGCCAGCAGCTTAGGAACA",
    ];
    let ps = patterns(refs);
    let queries: [&[u8]; 5] = [b"TGTGCCAGCAGCTTAGGA", b"TGTGCCAGT", b"", b"A", b"CASSLG"];
    for query in queries {
        let pruned = nearest(query, ps.iter());
        let full = naive_nearest(query, &ps);
        assert_eq!(
            pruned.map(|n| n.distance),
            full.map(|n| n.distance),
            "query={:?}",
            query
        );
    }
}

#[test]
fn empty_query_distance_is_reference_length() {
    let ps = patterns(&[b"ATGCGA", b"ATG"]);
    let hit = nearest(b"", ps.iter()).unwrap();
    assert_eq!(hit, Nearest { distance: 3, ref_len: 3 });
}

#[test]
fn ties_keep_the_earliest_reference() {
    // Both references are at distance 1; the first one's length must win.
    let ps = patterns(&[b"ATGA", b"ATGC"]);
    let hit = nearest(b"ATG", ps.iter()).unwrap();
    assert_eq!(hit, Nearest { distance: 1, ref_len: 4 });
}
