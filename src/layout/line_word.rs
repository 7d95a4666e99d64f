//! Merges a same-line run of words into rectangular line-words. Adjacent
//! words with no detected break between them are OCR tokens that were
//! split without whitespace; they collapse into one unit with no
//! separating space in the text.

use crate::core::geometry::{CoordSpace, DualQuad, PageDims, Quad};
use crate::core::model::{LineWord, PlacedWord, Symbol};

/// A finalized line-word together with its pixel rectangle, which the
/// phrase segmenter needs for its gap rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLineWord {
    pub word: LineWord,
    pub rect: Quad,
}

/// In-flight accumulator for one line-word. Finalized and emitted by
/// value; nothing mutates a line-word after it is built.
struct LineWordBuilder {
    symbols: Vec<Symbol>,
    text: String,
    space: CoordSpace,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl LineWordBuilder {
    fn new(space: CoordSpace) -> Self {
        Self {
            symbols: Vec::new(),
            text: String::new(),
            space,
            left: f64::INFINITY,
            top: f64::INFINITY,
            right: f64::NEG_INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }

    fn push(&mut self, word: &PlacedWord) {
        for symbol in &word.symbols {
            self.text.push_str(&symbol.text);
        }
        self.symbols.extend(word.symbols.iter().cloned());

        // The merged box is a strict rectangle over the accumulated
        // corners: left/top edges take minima, right/bottom take maxima.
        let quad = &word.quad;
        self.left = self.left.min(quad.top_left.x).min(quad.bottom_left.x);
        self.top = self.top.min(quad.top_left.y).min(quad.top_right.y);
        self.right = self.right.max(quad.top_right.x).max(quad.bottom_right.x);
        self.bottom = self.bottom.max(quad.bottom_right.y).max(quad.bottom_left.y);
    }

    fn finish(self, dims: PageDims) -> PlacedLineWord {
        let rect = Quad::from_bounds(self.left, self.top, self.right, self.bottom);
        let dual = DualQuad::from_quad(rect, self.space, dims);
        PlacedLineWord {
            word: LineWord {
                symbols: self.symbols,
                bounding_box: dual.to_bounding_box(),
                text: self.text,
            },
            rect: dual.pixel,
        }
    }
}

/// Input is one same-line cluster in left-to-right order. A detected break
/// on a word's final symbol terminates the current line-word; the end of
/// the run closes a trailing line-word even without one.
pub fn build_line_words(words: &[PlacedWord], dims: PageDims) -> Vec<PlacedLineWord> {
    let mut line_words = Vec::new();
    let mut builder: Option<LineWordBuilder> = None;

    for (i, word) in words.iter().enumerate() {
        builder
            .get_or_insert_with(|| LineWordBuilder::new(word.space))
            .push(word);

        let breaks_here = word.symbols.last().is_some_and(Symbol::has_break);
        let run_ends = i + 1 == words.len();
        if breaks_here || run_ends {
            if let Some(done) = builder.take() {
                line_words.push(done.finish(dims));
            }
        }
    }

    line_words
}
