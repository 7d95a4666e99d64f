use anyhow::Result;

use crate::annotation::extract;
use crate::annotation::model::AnnotationRecord;
use crate::core::model::AnnotationFormats;
use crate::layout::{assemble_line_list, sort_word_list, transcript};

/// Rebuilds reading-order structure for one document: flatten the batch
/// into per-page word lists, sort each page into reading order, cluster
/// into lines/phrases, render the transcript. Pure and synchronous; the
/// input batch is returned untouched inside the result.
pub fn annotation_formats(batch: Vec<AnnotationRecord>, filename: &str) -> Result<AnnotationFormats> {
    let mut word_list = extract::word_list(&batch)?;
    sort_word_list(&mut word_list);
    let line_list = assemble_line_list(&word_list);
    let line_list_text = transcript(&line_list);
    Ok(AnnotationFormats {
        filename: filename.to_string(),
        batch_file_annotation: batch,
        line_list,
        line_list_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::model::{
        AnnotationBlock, AnnotationPage, AnnotationParagraph, AnnotationWord, TextAnnotation,
    };
    use crate::core::geometry::{BoundingBox, Quad, Vertex};
    use crate::core::model::{BreakType, DetectedBreak, Symbol, TextProperty};
    use pretty_assertions::assert_eq;

    fn word(
        text: &str,
        terminal_break: Option<BreakType>,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> AnnotationWord {
        let chars: Vec<char> = text.chars().collect();
        let symbols = chars
            .iter()
            .enumerate()
            .map(|(i, c)| Symbol {
                text: c.to_string(),
                property: (i + 1 == chars.len())
                    .then_some(terminal_break)
                    .flatten()
                    .map(|break_type| TextProperty {
                        detected_break: Some(DetectedBreak {
                            break_type,
                            is_prefix: false,
                        }),
                    }),
                confidence: None,
            })
            .collect();
        AnnotationWord {
            symbols,
            bounding_box: BoundingBox {
                vertices: Quad::from_bounds(left, top, right, bottom).to_vertices(),
                normalized_vertices: vec![],
            },
            confidence: None,
            text: text.to_string(),
        }
    }

    fn record(words: Vec<AnnotationWord>) -> AnnotationRecord {
        AnnotationRecord {
            full_text_annotation: Some(TextAnnotation {
                pages: vec![AnnotationPage {
                    width: Some(800.0),
                    height: Some(600.0),
                    blocks: vec![AnnotationBlock {
                        paragraphs: vec![AnnotationParagraph { words }],
                    }],
                }],
                text: None,
            }),
            context: None,
        }
    }

    fn assert_rectangle(vertices: &[Vertex]) {
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0].x, vertices[3].x);
        assert_eq!(vertices[1].x, vertices[2].x);
        assert_eq!(vertices[0].y, vertices[1].y);
        assert_eq!(vertices[2].y, vertices[3].y);
    }

    #[test]
    fn two_rows_become_two_lines() -> Result<()> {
        let batch = vec![record(vec![
            word("World", Some(BreakType::LineBreak), 10.0, 50.0, 60.0, 70.0),
            word("Hello", Some(BreakType::EolSureSpace), 10.0, 10.0, 60.0, 30.0),
        ])];
        let formats = annotation_formats(batch, "scan.pdf")?;

        assert_eq!(formats.line_list_text, "Hello\nWorld\n");
        let lines = &formats.line_list.pages[0].lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].phrases.len(), 1);
        assert_eq!(lines[0].phrases[0].text, "Hello");
        assert_eq!(lines[1].phrases[0].text, "World");
        Ok(())
    }

    #[test]
    fn no_break_fragments_merge_into_one_line_word() -> Result<()> {
        let batch = vec![record(vec![
            word("Hello", None, 10.0, 10.0, 60.0, 30.0),
            word(",", Some(BreakType::LineBreak), 60.0, 10.0, 66.0, 30.0),
        ])];
        let formats = annotation_formats(batch, "scan.pdf")?;

        let phrase = &formats.line_list.pages[0].lines[0].phrases[0];
        assert_eq!(phrase.words.len(), 1);
        assert_eq!(phrase.words[0].text, "Hello,");
        assert_eq!(formats.line_list_text, "Hello,\n");
        Ok(())
    }

    #[test]
    fn produced_boxes_are_rectangles_in_both_systems() -> Result<()> {
        let batch = vec![record(vec![
            word("Hello", Some(BreakType::Space), 10.0, 10.0, 60.0, 30.0),
            word("World", Some(BreakType::LineBreak), 70.0, 12.0, 120.0, 28.0),
        ])];
        let formats = annotation_formats(batch, "scan.pdf")?;

        for page in &formats.line_list.pages {
            for line in &page.lines {
                for phrase in &line.phrases {
                    assert_rectangle(&phrase.bounding_box.vertices);
                    assert_rectangle(&phrase.bounding_box.normalized_vertices);
                    for line_word in &phrase.words {
                        assert_rectangle(&line_word.bounding_box.vertices);
                        assert_rectangle(&line_word.bounding_box.normalized_vertices);
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn identical_input_yields_identical_output() -> Result<()> {
        let batch = vec![record(vec![
            word("Hello", Some(BreakType::Space), 10.0, 10.0, 60.0, 30.0),
            word("World", Some(BreakType::LineBreak), 70.0, 12.0, 120.0, 28.0),
        ])];
        let first = annotation_formats(batch.clone(), "scan.pdf")?;
        let second = annotation_formats(batch, "scan.pdf")?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn input_batch_is_preserved_verbatim() -> Result<()> {
        let batch = vec![record(vec![word(
            "Hi",
            Some(BreakType::LineBreak),
            10.0,
            10.0,
            30.0,
            30.0,
        )])];
        let formats = annotation_formats(batch.clone(), "scan.pdf")?;
        assert_eq!(formats.batch_file_annotation, batch);
        assert_eq!(formats.filename, "scan.pdf");
        Ok(())
    }

    #[test]
    fn blank_batch_renders_nothing() -> Result<()> {
        let formats = annotation_formats(vec![AnnotationRecord::default()], "blank.tiff")?;
        assert_eq!(formats.line_list.pages.len(), 1);
        assert!(formats.line_list.pages[0].lines.is_empty());
        assert_eq!(formats.line_list_text, "");
        Ok(())
    }
}
