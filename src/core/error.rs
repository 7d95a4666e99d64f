use std::fmt;

use thiserror::Error;

/// What exactly is wrong with a malformed word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordProblem {
    /// Neither pixel nor normalized vertices are populated.
    NoVertices,
    /// Both vertex arrays are populated at once.
    BothVertexSets,
    /// The populated vertex array does not hold exactly four points.
    WrongVertexCount(usize),
    /// The word carries no symbols.
    NoSymbols,
}

impl fmt::Display for WordProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordProblem::NoVertices => write!(f, "no vertex array is populated"),
            WordProblem::BothVertexSets => write!(f, "both vertex arrays are populated"),
            WordProblem::WrongVertexCount(n) => write!(f, "expected 4 vertices, found {n}"),
            WordProblem::NoSymbols => write!(f, "word has zero symbols"),
        }
    }
}

/// Precondition violations in the supplied annotation. Detected while the
/// word list is first flattened; the whole call aborts, no partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnotationError {
    #[error("malformed word {word} on page {page}: {problem}")]
    MalformedWord {
        page: usize,
        word: usize,
        problem: WordProblem,
    },
    #[error("page {page} holds words but reports unusable dimensions ({width:?} x {height:?})")]
    MalformedPage {
        page: usize,
        width: Option<f64>,
        height: Option<f64>,
    },
}
