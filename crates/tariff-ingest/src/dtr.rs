//! DTR (duty rate) document reader.
//!
//! A `duty_rate_entity` element carries the HS code and validity window as
//! attributes and nests one `country_group` per tariff treatment. Each
//! country group contributes one flat record; within it the first occurrence
//! of each rate-type element supplies the rate value and its free-text
//! description.

use std::path::PathBuf;

use tracing::{info, warn};

use tariff_model::DutyRateRecord;

use crate::Ingested;
use crate::xml::{XmlElement, read_xml_tree};

/// Parse a batch of DTR files into duty-rate records.
pub fn read_duty_rates(paths: &[PathBuf]) -> Ingested<DutyRateRecord> {
    let mut ingested = Ingested::default();
    for path in paths {
        let root = match read_xml_tree(path) {
            Ok(root) => root,
            Err(error) => {
                warn!(file = %path.display(), %error, "skipping malformed DTR file");
                ingested.errors.push(format!("{}: {error}", path.display()));
                continue;
            }
        };
        let before = ingested.records.len();
        collect_entities(&root, &mut ingested.records);
        info!(
            file = %path.display(),
            record_count = ingested.records.len() - before,
            "parsed DTR file"
        );
    }
    ingested
}

fn collect_entities(root: &XmlElement, records: &mut Vec<DutyRateRecord>) {
    for entity in root.descendants("duty_rate_entity") {
        for group in entity.descendants("country_group") {
            records.push(record_for_group(entity, group));
        }
    }
}

fn record_for_group(entity: &XmlElement, group: &XmlElement) -> DutyRateRecord {
    let mut record = DutyRateRecord {
        hs: entity.attr("hs_id").to_string(),
        duty_rate_type: entity.attr("duty_rate_type").to_string(),
        valid_from: entity.attr("valid_from").to_string(),
        valid_to: entity.attr("valid_to").to_string(),
        version_date: entity.attr("version_date").to_string(),
        deleted: entity.attr("deleted").to_string(),
        country_group: group.attr("id").to_string(),
        ..DutyRateRecord::default()
    };

    if let Some(rate) = group.find("adValoremRate") {
        record.ad_valorem_rate = rate.attr("percentage").to_string();
        record.ad_valorem_text = description_text(rate);
    }
    if let Some(rate) = group.find("specificRate") {
        record.specific_rate = rate.attr("ratePerUOM").to_string();
        record.specific_rate_multiplier = rate.attr("multiplier").to_string();
        record.specific_text = description_text(rate);
    }
    if let Some(rate) = group.find("compoundRate") {
        record.compound_rate = rate.attr("percentage").to_string();
        record.compound_text = description_text(rate);
    }
    if let Some(rate) = group.find("freeRate") {
        record.free_text = description_text(rate);
    }
    if let Some(rate) = group.find("complexRate") {
        record.complex_text = description_text(rate);
    }

    if let Some(note) = group
        .find("preference_note")
        .and_then(|pref| pref.find("note"))
    {
        record.regulation = note.attr("text").to_string();
    }

    record
}

fn description_text(rate: &XmlElement) -> String {
    rate.find("description")
        .map(|desc| desc.attr("text").to_string())
        .unwrap_or_default()
}
