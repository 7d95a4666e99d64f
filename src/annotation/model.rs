//! Wire shape of the text-recognition service response, one record per
//! scanned page. A record with no detected text carries no
//! `fullTextAnnotation` at all.

use serde::{Deserialize, Serialize};

use crate::core::geometry::BoundingBox;
use crate::core::model::Symbol;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,
    /// Request context echoed back by the service (source URI, page
    /// number). Preserved for traceability, never read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    #[serde(default)]
    pub pages: Vec<AnnotationPage>,
    /// The service's own flat rendition of the page text. Unused: the
    /// whole point of this crate is rebuilding it with geometry attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub blocks: Vec<AnnotationBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationBlock {
    #[serde(default)]
    pub paragraphs: Vec<AnnotationParagraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationParagraph {
    #[serde(default)]
    pub words: Vec<AnnotationWord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationWord {
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub bounding_box: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}
