//! Export-direction HS table: nomenclature only, no duty rates.
//!
//! The reverse flow publishes the active 8-digit classification lines with
//! their full descriptions and units. Canada uploads a synthetic validity
//! window spanning the processing year to the far-future sentinel; the
//! United States carries the actual feed dates, compacted to `YYYYMMDD`.

use tracing::{info, warn};

use tariff_model::{Config, HsFlag, NomenclatureRecord};

use crate::format::reformat_date_compact;
use crate::table::UploadRecord;

const FAR_FUTURE: &str = "99991231";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportHsRecord {
    pub hs_number: String,
    pub level: String,
    pub description: String,
    pub valid_from: String,
    pub valid_to: String,
    pub unit_1: String,
    pub unit_2: String,
    pub unit_3: String,
}

impl UploadRecord for ExportHsRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "HS Number",
            "Level",
            "Description",
            "Valid from",
            "Valid to",
            "Unit 1",
            "Unit 2",
            "Unit 3",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.hs_number.clone(),
            self.level.clone(),
            self.description.clone(),
            self.valid_from.clone(),
            self.valid_to.clone(),
            self.unit_1.clone(),
            self.unit_2.clone(),
            self.unit_3.clone(),
        ]
    }
}

/// Build the export HS table from flagged, described nomenclature.
pub fn generate_export_hs(
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<ExportHsRecord> {
    if config.country != "CA" && config.country != "US" {
        warn!(country = %config.country, "export HS format only applies to CA and US");
        return Vec::new();
    }

    let mut records: Vec<ExportHsRecord> = nomenclature
        .iter()
        .filter(|record| record.flag == Some(HsFlag::Active) && record.number.len() == 8)
        .map(|record| {
            let (valid_from, valid_to) = if config.country == "CA" {
                (format!("{}0101", config.year), FAR_FUTURE.to_string())
            } else {
                (
                    reformat_date_compact(&record.valid_from),
                    reformat_date_compact(&record.valid_to),
                )
            };
            let unit_1 = config.map_uom(&record.alternate_unit_1);
            ExportHsRecord {
                hs_number: record.number.clone(),
                level: record.level_id.clone(),
                description: record.full_description.clone().unwrap_or_default(),
                valid_from,
                valid_to,
                unit_1: if unit_1.is_empty() {
                    config.default_uom.clone()
                } else {
                    unit_1
                },
                unit_2: config.map_uom(&record.alternate_unit_2),
                unit_3: config.map_uom(&record.alternate_unit_3),
            }
        })
        .collect();
    records.sort_by(|a, b| a.hs_number.cmp(&b.hs_number));
    info!(record_count = records.len(), "generated export HS table");
    records
}
