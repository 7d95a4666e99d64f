pub mod annotation;
pub mod core;
pub mod export;
pub mod layout;
pub mod pipeline;

pub use crate::annotation::model::AnnotationRecord;
pub use crate::core::model::{AnnotationFormats, LineList};
pub use crate::pipeline::annotation_formats;
