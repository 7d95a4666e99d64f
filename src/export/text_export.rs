use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::AnnotationFormats;
use crate::export::Exporter;

/// Writes the rendered transcript on its own, for consumers that only
/// want the text.
#[derive(Debug, Clone)]
pub struct TextExporter {
    out_dir: PathBuf,
}

impl TextExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for TextExporter {
    fn export(&self, formats: &AnnotationFormats) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("transcript.txt");
        fs::write(path, &formats.line_list_text)?;
        Ok(())
    }
}
