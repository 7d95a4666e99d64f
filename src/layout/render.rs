//! Renders the reconstructed line list as a plain transcript: every
//! phrase's text on its own output line, across pages in order.

use crate::core::model::LineList;

pub fn transcript(line_list: &LineList) -> String {
    let mut text = String::new();
    for page in &line_list.pages {
        for line in &page.lines {
            for phrase in &line.phrases {
                text.push_str(&phrase.text);
                text.push('\n');
            }
        }
    }
    text
}
