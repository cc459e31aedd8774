//! Country-restricted upload variants.
//!
//! Each variant narrows the base join to the rows of the configuration's
//! main ("3rd") country group, drops placeholder rows the left join could
//! not describe, and re-maps the surviving cells into its own schema. A
//! generator invoked for the wrong country, or with an undetermined main
//! group, logs the condition and returns an empty table.

use std::collections::BTreeSet;

use tracing::{info, warn};

use tariff_model::{Config, DutyRateRecord, MainCountryGroup, NomenclatureRecord};

use crate::format::{format_unit_rate, normalize_tonne_code};
use crate::join::{BaseRow, build_base_rows};
use crate::table::UploadRecord;
use crate::zd14::{Zd14Record, record_from_base};

/// CAPDR: Canadian duty-rate upload with a per-unit rate column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapdrRecord {
    pub country: String,
    pub hs_number: String,
    pub date_from: String,
    pub date_to: String,
    pub description: String,
    pub unit_of_measure: String,
    pub base_rate_pct: String,
    pub unit_rate: String,
    pub cert_ori: String,
}

impl UploadRecord for CapdrRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "Country",
            "HS Number",
            "Date from",
            "Date to",
            "Description",
            "Unit of measure",
            "Base rate %",
            "Unit rate",
            "Cert Ori",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.country.clone(),
            self.hs_number.clone(),
            self.date_from.clone(),
            self.date_to.clone(),
            self.description.clone(),
            self.unit_of_measure.clone(),
            self.base_rate_pct.clone(),
            self.unit_rate.clone(),
            self.cert_ori.clone(),
        ]
    }
}

/// ZZDE: the second Canadian variant, a narrower rate-centric layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZzdeRecord {
    pub hs_number: String,
    pub rate_type: String,
    pub date_from: String,
    pub date_to: String,
    pub base_rate_pct: String,
    pub unit_rate: String,
    pub unit_of_measure: String,
}

impl UploadRecord for ZzdeRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "HS Number",
            "Rate type",
            "Date from",
            "Date to",
            "Base rate %",
            "Unit rate",
            "Unit of measure",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.hs_number.clone(),
            self.rate_type.clone(),
            self.date_from.clone(),
            self.date_to.clone(),
            self.base_rate_pct.clone(),
            self.unit_rate.clone(),
            self.unit_of_measure.clone(),
        ]
    }
}

/// MX6Digits: Mexican upload keyed on 6-digit codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mx6Record {
    pub country: String,
    pub hs_number: String,
    pub date_from: String,
    pub date_to: String,
    pub description: String,
    pub base_rate_pct: String,
}

impl UploadRecord for Mx6Record {
    fn headers() -> &'static [&'static str] {
        &[
            "Country",
            "HS Number",
            "Date from",
            "Date to",
            "Description",
            "Base rate %",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.country.clone(),
            self.hs_number.clone(),
            self.date_from.clone(),
            self.date_to.clone(),
            self.description.clone(),
            self.base_rate_pct.clone(),
        ]
    }
}

/// Base rows restricted to the main country group, placeholders removed.
/// `None` when the country or the main-group designation rules the format
/// out.
fn main_group_rows(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
    format: &str,
    country: &str,
) -> Option<Vec<BaseRow>> {
    if config.country != country {
        warn!(format, expected = country, configured = %config.country, "format does not apply to this country");
        return None;
    }
    let group = match config.main_country_group() {
        MainCountryGroup::Single(group) => group,
        sentinel => {
            warn!(format, condition = %sentinel, "cannot determine main country group");
            return None;
        }
    };
    let rows: Vec<BaseRow> = build_base_rows(duty, nomenclature, config)
        .into_iter()
        .filter(|row| row.country_group == group && !row.is_placeholder())
        .collect();
    Some(rows)
}

/// Build the CAPDR table (Canada only).
pub fn generate_capdr(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<CapdrRecord> {
    let Some(rows) = main_group_rows(duty, nomenclature, config, "CAPDR", "CA") else {
        return Vec::new();
    };
    let records: Vec<CapdrRecord> = rows
        .into_iter()
        .map(|row| CapdrRecord {
            country: config.country.clone(),
            hs_number: row.hs,
            date_from: row.date_from,
            date_to: row.date_to,
            description: row.description,
            unit_of_measure: row.unit_of_measure,
            base_rate_pct: row.base_rate_pct,
            unit_rate: format_unit_rate(&row.specific_rate, &row.specific_rate_multiplier),
            cert_ori: row.regulation,
        })
        .collect();
    info!(record_count = records.len(), "generated CAPDR");
    records
}

/// Build the ZZDE table (Canada only).
pub fn generate_zzde(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<ZzdeRecord> {
    let Some(rows) = main_group_rows(duty, nomenclature, config, "ZZDE", "CA") else {
        return Vec::new();
    };
    let records: Vec<ZzdeRecord> = rows
        .into_iter()
        .map(|row| ZzdeRecord {
            hs_number: row.hs,
            rate_type: row.country_group,
            date_from: row.date_from,
            date_to: row.date_to,
            base_rate_pct: row.base_rate_pct,
            unit_rate: format_unit_rate(&row.specific_rate, &row.specific_rate_multiplier),
            unit_of_measure: row.unit_of_measure,
        })
        .collect();
    info!(record_count = records.len(), "generated ZZDE");
    records
}

/// Build the MX6Digits table (Mexico only): codes truncated to 6 digits,
/// duplicate truncated codes removed keep-first.
pub fn generate_mx6digits(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<Mx6Record> {
    let Some(rows) = main_group_rows(duty, nomenclature, config, "MX6Digits", "MX") else {
        return Vec::new();
    };
    let mut seen = BTreeSet::new();
    let records: Vec<Mx6Record> = rows
        .into_iter()
        .filter_map(|row| {
            let truncated: String = row.hs.chars().take(6).collect();
            if !seen.insert(truncated.clone()) {
                return None;
            }
            Some(Mx6Record {
                country: config.country.clone(),
                hs_number: truncated,
                date_from: row.date_from,
                date_to: row.date_to,
                description: row.description,
                base_rate_pct: row.base_rate_pct,
            })
        })
        .collect();
    info!(record_count = records.len(), "generated MX6Digits");
    records
}

/// Build the ZZDF table (United States only): the ZD14 layout with the
/// tonne-code substitution applied to every cell, not just the unit column.
pub fn generate_zzdf(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<Zd14Record> {
    let Some(rows) = main_group_rows(duty, nomenclature, config, "ZZDF", "US") else {
        return Vec::new();
    };
    let records: Vec<Zd14Record> = rows
        .into_iter()
        .map(|row| {
            let mut record = record_from_base(row, config);
            substitute_whole_record(&mut record);
            record
        })
        .collect();
    info!(record_count = records.len(), "generated ZZDF");
    records
}

fn substitute_whole_record(record: &mut Zd14Record) {
    for field in [
        &mut record.country,
        &mut record.hs_number,
        &mut record.date_from,
        &mut record.date_to,
        &mut record.description,
        &mut record.unit_of_measure,
        &mut record.rate_type,
        &mut record.base_rate_pct,
        &mut record.rate_amount,
        &mut record.cert_ori,
    ] {
        *field = normalize_tonne_code(field);
    }
}
