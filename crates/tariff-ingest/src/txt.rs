//! TXT (supplementary text) document reader.

use std::path::PathBuf;

use tracing::{info, warn};

use tariff_model::TextRecord;

use crate::Ingested;
use crate::xml::read_xml_tree;

/// Parse a batch of TXT files into text records.
pub fn read_texts(paths: &[PathBuf]) -> Ingested<TextRecord> {
    let mut ingested = Ingested::default();
    for path in paths {
        let root = match read_xml_tree(path) {
            Ok(root) => root,
            Err(error) => {
                warn!(file = %path.display(), %error, "skipping malformed TXT file");
                ingested.errors.push(format!("{}: {error}", path.display()));
                continue;
            }
        };
        let before = ingested.records.len();
        for node in root.descendants("texts") {
            let mut record = TextRecord {
                text_element_id: node.child_text("text_element_id").to_string(),
                ..TextRecord::default()
            };
            if let Some(text) = node
                .children
                .iter()
                .find(|child| child.name == "text_element")
                .and_then(|element| element.find("text"))
            {
                record.text_content = text.text.clone();
            }
            ingested.records.push(record);
        }
        info!(
            file = %path.display(),
            record_count = ingested.records.len() - before,
            "parsed TXT file"
        );
    }
    ingested
}
