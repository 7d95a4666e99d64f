use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::AnnotationFormats;
use crate::export::Exporter;

/// Writes the full result (input annotation, line list, transcript) as
/// pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, formats: &AnnotationFormats) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("annotation_formats.json");
        let data = serde_json::to_string_pretty(formats)?;
        fs::write(path, data)?;
        Ok(())
    }
}
