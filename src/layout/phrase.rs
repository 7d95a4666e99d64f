//! Segments a line's line-words into phrases. Two neighbors stay in one
//! phrase while the horizontal gap between them is smaller than the left
//! neighbor's height; a gap at or beyond the height starts a new phrase.

use crate::core::geometry::{CoordSpace, DualQuad, PageDims, Quad};
use crate::core::model::{LineWord, Phrase};
use crate::layout::line_word::PlacedLineWord;

/// The gap-vs-height rule, on pixel rectangles.
fn is_phrase_break(a: &Quad, b: &Quad) -> bool {
    let gap = b.top_left.x - a.top_right.x;
    let height = a.bottom_left.y - a.top_left.y;
    gap >= height
}

/// In-flight phrase. Emitted by value once its extent is known.
struct PhraseBuilder {
    words: Vec<LineWord>,
    text: String,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PhraseBuilder {
    fn new() -> Self {
        Self {
            words: Vec::new(),
            text: String::new(),
            left: 0.0,
            right: 0.0,
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }

    fn push(&mut self, placed: PlacedLineWord) {
        // left edge comes from the first member, right from the last;
        // top/bottom span all members.
        if self.words.is_empty() {
            self.left = placed.rect.top_left.x;
        }
        self.right = placed.rect.top_right.x;
        self.top = self.top.min(placed.rect.top_left.y);
        self.bottom = self.bottom.max(placed.rect.bottom_left.y);
        self.text.push_str(&placed.word.text);
        self.words.push(placed.word);
    }

    fn join_space(&mut self) {
        self.text.push(' ');
    }

    fn finish(self, dims: PageDims) -> Phrase {
        let rect = Quad::from_bounds(self.left, self.top, self.right, self.bottom);
        let dual = DualQuad::from_quad(rect, CoordSpace::Pixel, dims);
        Phrase {
            words: self.words,
            bounding_box: dual.to_bounding_box(),
            text: self.text,
        }
    }
}

pub fn segment_phrases(line_words: Vec<PlacedLineWord>, dims: PageDims) -> Vec<Phrase> {
    let rects: Vec<Quad> = line_words.iter().map(|placed| placed.rect).collect();
    let mut phrases = Vec::new();
    let mut builder = PhraseBuilder::new();

    for (i, placed) in line_words.into_iter().enumerate() {
        let rect = placed.rect;
        builder.push(placed);
        let joins_next = rects
            .get(i + 1)
            .is_some_and(|next| !is_phrase_break(&rect, next));
        if joins_next {
            builder.join_space();
            continue;
        }
        phrases.push(builder.finish(dims));
        builder = PhraseBuilder::new();
    }

    phrases
}
