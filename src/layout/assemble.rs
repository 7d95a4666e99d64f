//! Partitions each page's sorted words into same-line clusters and drives
//! the line-word and phrase stages over each cluster.

use crate::core::model::{Line, LineList, LineListPage, PlacedWord, WordList};
use crate::layout::line_word::build_line_words;
use crate::layout::phrase::segment_phrases;
use crate::layout::position::relate;

/// Expects reading-order-sorted input. Clustering compares each word with
/// its successor, so the cluster's representative is always the word most
/// recently admitted. A textless page yields zero lines.
pub fn assemble_line_list(word_list: &WordList) -> LineList {
    let mut pages = Vec::with_capacity(word_list.pages.len());

    for page in &word_list.pages {
        let mut lines = Vec::new();
        if let Some(dims) = page.dims {
            let mut cluster: Vec<PlacedWord> = Vec::new();
            for (i, word) in page.words.iter().enumerate() {
                cluster.push(word.clone());
                if let Some(next) = page.words.get(i + 1) {
                    if relate(&word.quad, &next.quad).same_line {
                        continue;
                    }
                }
                let line_words = build_line_words(&cluster, dims);
                lines.push(Line {
                    phrases: segment_phrases(line_words, dims),
                });
                cluster.clear();
            }
        }
        pages.push(LineListPage { lines });
    }

    LineList { pages }
}
