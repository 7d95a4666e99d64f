use serde::{Deserialize, Serialize};

use crate::annotation::model::AnnotationRecord;
use crate::core::geometry::{BoundingBox, CoordSpace, PageDims, Quad};

/// Break marker kinds reported by the recognition service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakType {
    Unknown,
    Space,
    SureSpace,
    EolSureSpace,
    Hyphen,
    LineBreak,
}

/// Marker on a symbol indicating a space/line/paragraph boundary follows
/// it (or precedes it, when `is_prefix` is set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedBreak {
    #[serde(rename = "type")]
    pub break_type: BreakType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_prefix: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_break: Option<DetectedBreak>,
}

/// A single recognized glyph. The merge logic only ever asks whether a
/// break marker is present; the marker's kind rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<TextProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Symbol {
    pub fn has_break(&self) -> bool {
        self.property
            .as_ref()
            .and_then(|p| p.detected_break.as_ref())
            .is_some()
    }
}

/// A word flattened out of the nested annotation, with its populated
/// coordinate system already resolved into a named-corner quad. Extraction
/// validates geometry once so everything downstream is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub symbols: Vec<Symbol>,
    pub quad: Quad,
    pub space: CoordSpace,
}

/// One page's flat word list. `dims` is `None` for a page with no detected
/// text; extraction guarantees it is `Some` whenever `words` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct WordListPage {
    pub dims: Option<PageDims>,
    pub words: Vec<PlacedWord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    pub pages: Vec<WordListPage>,
}

/// One or more words merged across no-space boundaries into a single
/// rectangular unit, carried in both coordinate systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineWord {
    pub symbols: Vec<Symbol>,
    pub bounding_box: BoundingBox,
    pub text: String,
}

/// A run of line-words separated from its neighbors by a horizontal gap
/// exceeding the line height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub words: Vec<LineWord>,
    pub bounding_box: BoundingBox,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub phrases: Vec<Phrase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineListPage {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineList {
    pub pages: Vec<LineListPage>,
}

/// Final result: the reconstructed structure next to the untouched input
/// and the rendered transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationFormats {
    pub filename: String,
    pub batch_file_annotation: Vec<AnnotationRecord>,
    pub line_list: LineList,
    pub line_list_text: String,
}
