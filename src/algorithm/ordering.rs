//! Placement order for the search
//!
//! Longer words go first: they offer more letters to cross and cut the
//! branching factor early. Words of equal length keep their input order unless
//! a seed is supplied, in which case each equal-length group is shuffled
//! reproducibly.

use std::cmp::Reverse;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::spatial::Word;

/// Indices into `words` in the order the search will place them
pub fn placement_order(words: &[Word], seed: Option<u64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&index| Reverse(word_len(words, index)));

    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        for group in order.chunk_by_mut(|&a, &b| word_len(words, a) == word_len(words, b)) {
            group.shuffle(&mut rng);
        }
    }

    order
}

fn word_len(words: &[Word], index: usize) -> usize {
    words.get(index).map_or(0, Word::len)
}
