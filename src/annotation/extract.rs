//! Flattens the nested block/paragraph/word annotation into a flat,
//! page-ordered word list. This is the only stage that reads raw geometry,
//! so all malformed-input checks live here; once a word is placed, every
//! later stage can rely on a well-formed quad.

use crate::annotation::model::{AnnotationRecord, AnnotationWord};
use crate::core::error::{AnnotationError, WordProblem};
use crate::core::geometry::{CoordSpace, PageDims, Quad};
use crate::core::model::{PlacedWord, WordList, WordListPage};

pub fn word_list(batch: &[AnnotationRecord]) -> Result<WordList, AnnotationError> {
    let mut pages = Vec::with_capacity(batch.len());
    for (page_idx, record) in batch.iter().enumerate() {
        pages.push(extract_page(record, page_idx)?);
    }
    Ok(WordList { pages })
}

fn extract_page(
    record: &AnnotationRecord,
    page_idx: usize,
) -> Result<WordListPage, AnnotationError> {
    let mut width = None;
    let mut height = None;
    let mut words = Vec::new();

    // fullTextAnnotation is absent for a document page with no text.
    if let Some(annotation) = &record.full_text_annotation {
        for page in &annotation.pages {
            width = page.width;
            height = page.height;
            for block in &page.blocks {
                for paragraph in &block.paragraphs {
                    for word in &paragraph.words {
                        let word_idx = words.len();
                        words.push(place_word(word, page_idx, word_idx)?);
                    }
                }
            }
        }
    }

    let dims = match (width, height) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some(PageDims {
            width: w,
            height: h,
        }),
        _ => None,
    };
    if dims.is_none() && !words.is_empty() {
        return Err(AnnotationError::MalformedPage {
            page: page_idx,
            width,
            height,
        });
    }

    Ok(WordListPage { dims, words })
}

fn place_word(
    word: &AnnotationWord,
    page_idx: usize,
    word_idx: usize,
) -> Result<PlacedWord, AnnotationError> {
    let malformed = |problem| AnnotationError::MalformedWord {
        page: page_idx,
        word: word_idx,
        problem,
    };

    if word.symbols.is_empty() {
        return Err(malformed(WordProblem::NoSymbols));
    }

    let bbox = &word.bounding_box;
    let (vertices, space) = match (
        bbox.vertices.is_empty(),
        bbox.normalized_vertices.is_empty(),
    ) {
        (true, true) => return Err(malformed(WordProblem::NoVertices)),
        (false, false) => return Err(malformed(WordProblem::BothVertexSets)),
        (false, true) => (&bbox.vertices, CoordSpace::Pixel),
        (true, false) => (&bbox.normalized_vertices, CoordSpace::Normalized),
    };
    let quad = Quad::from_vertices(vertices)
        .ok_or_else(|| malformed(WordProblem::WrongVertexCount(vertices.len())))?;

    Ok(PlacedWord {
        symbols: word.symbols.clone(),
        quad,
        space,
    })
}
