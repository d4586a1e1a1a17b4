//! Nearest-reference scan.

use crate::core::myers;
use crate::core::pattern::CompiledPattern;

/// Best match found by [`nearest`]: the minimal edit distance over the
/// scanned patterns and the length of the pattern that achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nearest {
    pub distance: usize,
    pub ref_len: usize,
}

/// Minimal edit distance of `query` to any pattern, in iteration order.
///
/// A candidate whose length differs from the query's by at least the current
/// best cannot improve on it (edit distance is bounded below by the length
/// difference), so it is skipped without running the engine. The skip never
/// changes the result, only the work done. A distance of exactly 0 ends the
/// scan. Ties keep the earliest candidate.
///
/// Returns `None` only when `patterns` yields nothing.
pub fn nearest<'p, I>(query: &[u8], patterns: I) -> Option<Nearest>
where
    I: IntoIterator<Item = &'p CompiledPattern>,
{
    let mut best: Option<Nearest> = None;
    for pattern in patterns {
        if let Some(b) = &best {
            let bound = query.len().abs_diff(pattern.len());
            if bound >= b.distance {
                continue;
            }
        }
        let d = myers::distance(pattern, query);
        if best.as_ref().map_or(true, |b| d < b.distance) {
            let hit = Nearest {
                distance: d,
                ref_len: pattern.len(),
            };
            if d == 0 {
                return Some(hit);
            }
            best = Some(hit);
        }
    }
    best
}
