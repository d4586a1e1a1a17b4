//! Myers bit-parallel edit distance.
//!
//! Exact global Levenshtein distance between a compiled pattern and a text
//! (Myers, JACM 1999): each column of the dynamic-programming matrix is held
//! as a pair of bit vectors (`Pv` positive and `Mv` negative vertical
//! deltas) and advanced one text character at a time with word-level bitwise
//! arithmetic. The whole pattern is compared against the whole text; this is
//! a string distance, not a substring search.
//!
//! Patterns up to 64 symbols run on a scalar `u64` state; longer patterns
//! use the word-sliced state with explicit carry propagation, so pattern
//! length is unbounded.

use super::pattern::{CompiledPattern, WORD_BITS};

/// Exact Levenshtein distance between `pattern` and `text`, unit costs for
/// substitution, insertion and deletion.
pub fn distance(pattern: &CompiledPattern, text: &[u8]) -> usize {
    if pattern.is_empty() {
        return text.len();
    }
    if pattern.words() == 1 {
        distance_single_word(pattern, text)
    } else {
        distance_multi_word(pattern, text)
    }
}

/// Fast path for m <= 64: the whole column state fits one machine word.
fn distance_single_word(pattern: &CompiledPattern, text: &[u8]) -> usize {
    let mask = pattern.last_mask();
    let top = pattern.top_bit();
    let mut pv: u64 = mask;
    let mut mv: u64 = 0;
    let mut score = pattern.len();

    for &ch in text {
        let eq = pattern.eq_word(ch);
        let xv = eq | mv;
        // The addition carries matches along runs of set Pv bits; the carry
        // out of the top bit is irrelevant and may wrap.
        let xh = (((eq & pv).wrapping_add(pv)) ^ pv) | eq;

        let ph = mv | (!(xh | pv) & mask);
        let mh = pv & xh;

        if ph & top != 0 {
            score += 1;
        } else if mh & top != 0 {
            score -= 1;
        }

        let ph = ((ph << 1) | 1) & mask;
        let mh = (mh << 1) & mask;
        pv = mh | (!(xv | ph) & mask);
        mv = ph & xv;
    }
    score
}

/// Word-sliced path for m > 64. Three carries cross each word boundary: the
/// adder carry of the `(Eq & Pv) + Pv` step and the bits shifted out of
/// `Ph`/`Mh`. The complement step sets garbage above bit m - 1 in the last
/// word, so `Pv`/`Mv` are re-masked to the valid bits after each character.
fn distance_multi_word(pattern: &CompiledPattern, text: &[u8]) -> usize {
    let words = pattern.words();
    let last = words - 1;
    let last_mask = pattern.last_mask();
    let top = pattern.top_bit();

    let mut pv = vec![u64::MAX; words];
    pv[last] = last_mask;
    let mut mv = vec![0u64; words];
    let mut score = pattern.len();

    for &ch in text {
        let eq_masks = pattern.eq_masks(ch);
        let mut add_carry: u64 = 0;
        // Bit 0 of Ph is forced to 1 after the shift, so the first word's
        // shift-in starts at 1.
        let mut ph_carry: u64 = 1;
        let mut mh_carry: u64 = 0;

        for w in 0..words {
            let eq = eq_masks.map_or(0, |masks| masks[w]);
            let pvw = pv[w];
            let mvw = mv[w];

            let xv = eq | mvw;
            let (sum, c1) = (eq & pvw).overflowing_add(add_carry);
            let (sum, c2) = sum.overflowing_add(pvw);
            add_carry = (c1 as u64) | (c2 as u64);
            let xh = (sum ^ pvw) | eq;

            let ph = mvw | !(xh | pvw);
            let mh = pvw & xh;

            if w == last {
                if ph & top != 0 {
                    score += 1;
                } else if mh & top != 0 {
                    score -= 1;
                }
            }

            let ph_shift = (ph << 1) | ph_carry;
            let mh_shift = (mh << 1) | mh_carry;
            ph_carry = ph >> (WORD_BITS - 1);
            mh_carry = mh >> (WORD_BITS - 1);

            // pv[w]/mv[w] were read above; carries only flow forward, so the
            // update is safe in place.
            pv[w] = mh_shift | !(xv | ph_shift);
            mv[w] = ph_shift & xv;
        }
        pv[last] &= last_mask;
        mv[last] &= last_mask;
    }
    score
}
