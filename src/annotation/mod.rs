pub mod extract;
pub mod model;

pub use model::{AnnotationRecord, TextAnnotation};
