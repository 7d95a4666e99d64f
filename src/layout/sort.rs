//! Reading-order sort: top-to-bottom lines, left-to-right within a line,
//! as defined by the position relation.

use std::cmp::Ordering;

use crate::core::model::{WordList, WordListPage};
use crate::layout::position::relate;

pub fn sort_word_list(word_list: &mut WordList) {
    for page in &mut word_list.pages {
        sort_page(page);
    }
}

/// Stable sort by the heuristic relation. The relation is not a strict
/// weak ordering (overlapping tall/short words break transitivity, equal
/// left edges break asymmetry), and `slice::sort_by` panics when it
/// detects such a comparator. A plain insertion sort only ever asks
/// `relate(prev, moving)` and takes every verdict at face value, so
/// degenerate layouts come out in a heuristic order instead of aborting.
/// Page word counts are small enough that quadratic cost is irrelevant.
pub fn sort_page(page: &mut WordListPage) {
    let words = &mut page.words;
    for i in 1..words.len() {
        let mut j = i;
        while j > 0 && relate(&words[j - 1].quad, &words[j].quad).order == Ordering::Greater {
            words.swap(j - 1, j);
            j -= 1;
        }
    }
}
