//! NOM (nomenclature) document reader.
//!
//! Each `number_data` element maps its direct children onto record fields.
//! The validity and version children carry feed-specific names
//! (`validity_begin`, `validity_end`, `date_of_physical_update`); they land
//! on the canonical `valid_from` / `valid_to` / `version_date` fields so the
//! flagging engine sees one vocabulary for both document types.

use std::path::PathBuf;

use tracing::{info, warn};

use tariff_model::NomenclatureRecord;

use crate::Ingested;
use crate::xml::{XmlElement, read_xml_tree};

/// Parse a batch of NOM files into nomenclature records.
pub fn read_nomenclature(paths: &[PathBuf]) -> Ingested<NomenclatureRecord> {
    let mut ingested = Ingested::default();
    for path in paths {
        let root = match read_xml_tree(path) {
            Ok(root) => root,
            Err(error) => {
                warn!(file = %path.display(), %error, "skipping malformed NOM file");
                ingested.errors.push(format!("{}: {error}", path.display()));
                continue;
            }
        };
        let before = ingested.records.len();
        for node in root.descendants("number_data") {
            ingested.records.push(record_from_node(node));
        }
        info!(
            file = %path.display(),
            record_count = ingested.records.len() - before,
            "parsed NOM file"
        );
    }
    ingested
}

fn record_from_node(node: &XmlElement) -> NomenclatureRecord {
    let mut record = NomenclatureRecord::default();
    for child in &node.children {
        let value = child.text.clone();
        match child.name.as_str() {
            "id" => record.id = value,
            "parent_id" => record.parent_id = value,
            "number" => record.number = value,
            "level_id" => record.level_id = value,
            "alternate_unit_1" => record.alternate_unit_1 = value,
            "alternate_unit_2" => record.alternate_unit_2 = value,
            "alternate_unit_3" => record.alternate_unit_3 = value,
            "validity_begin" => record.valid_from = value,
            "validity_end" => record.valid_to = value,
            "version_number" => record.version_number = value,
            "date_of_physical_update" => record.version_date = value,
            "texts" => {
                if let Some(text) = child
                    .find("official_description")
                    .and_then(|desc| desc.find("text"))
                {
                    record.official_description = text.text.clone();
                }
            }
            _ => {}
        }
    }
    record
}
