//! Base join shared by the import-direction generators.
//!
//! Active duty records are left-joined to the processed nomenclature on HS
//! code. The lookup is first-match-wins per code, so a duplicated
//! nomenclature number can never fan a duty record out into several rows:
//! the join always yields exactly one base row per duty record.

use std::collections::BTreeMap;

use tariff_model::{Config, DutyRateRecord, NomenclatureRecord};

use crate::format::{format_date_from, format_date_to, format_rate};

const RATE_DECIMALS: usize = 1;

/// First-match lookup from HS code to description and primary unit.
pub struct NomLookup<'a> {
    map: BTreeMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> NomLookup<'a> {
    pub fn new(records: &'a [NomenclatureRecord]) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            map.entry(record.number.as_str()).or_insert((
                record.full_description.as_deref().unwrap_or(""),
                record.alternate_unit_1.as_str(),
            ));
        }
        Self { map }
    }

    pub fn description(&self, hs: &str) -> &str {
        self.map.get(hs).map(|(desc, _)| *desc).unwrap_or("")
    }

    pub fn unit(&self, hs: &str) -> &str {
        self.map.get(hs).map(|(_, unit)| *unit).unwrap_or("")
    }
}

/// One joined and formatted row, the common substrate of every
/// import-direction format. Raw specific-rate values are kept alongside the
/// formatted cells because the restricted formats derive a unit rate from
/// them.
#[derive(Debug, Clone)]
pub struct BaseRow {
    pub hs: String,
    pub date_from: String,
    pub date_to: String,
    pub description: String,
    /// Primary unit, already mapped through the configuration's UOM table.
    pub unit_of_measure: String,
    pub country_group: String,
    pub base_rate_pct: String,
    pub rate_amount: String,
    pub specific_rate: String,
    pub specific_rate_multiplier: String,
    pub regulation: String,
}

impl BaseRow {
    /// A placeholder row is one the left join could not describe; the
    /// restricted formats drop these.
    pub fn is_placeholder(&self) -> bool {
        self.description.is_empty()
    }
}

/// Join active duty records to the nomenclature and format the shared cells.
pub fn build_base_rows(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<BaseRow> {
    let lookup = NomLookup::new(nomenclature);
    duty.iter()
        .map(|record| {
            let unit = lookup.unit(&record.hs);
            BaseRow {
                hs: record.hs.clone(),
                date_from: format_date_from(&record.valid_from, &config.year),
                date_to: format_date_to(&record.valid_to),
                description: lookup.description(&record.hs).to_string(),
                unit_of_measure: config.map_uom(unit),
                country_group: record.country_group.clone(),
                base_rate_pct: format_rate(&record.ad_valorem_rate, RATE_DECIMALS),
                rate_amount: format_rate(&record.specific_rate, RATE_DECIMALS),
                specific_rate: record.specific_rate.clone(),
                specific_rate_multiplier: record.specific_rate_multiplier.clone(),
                regulation: record.regulation.clone(),
            }
        })
        .collect()
}
