//! Record flagging: active / invalid / duplicate classification.
//!
//! The classification is an explicit first-wins deduplication over a total
//! sort order, not a heuristic. The sort key list is the contract:
//!
//! | # | key            | direction | notes                              |
//! |---|----------------|-----------|------------------------------------|
//! | 1 | group key      | ascending | DTR: `country_group`; NOM import: `version_number`; NOM export: none |
//! | 2 | HS code        | ascending |                                    |
//! | 3 | `version_date` | descending| newest extract first               |
//! | 4 | `valid_from`   | descending| latest start first                 |
//! | 5 | `valid_to`     | ascending | earliest end first                 |
//! | 6 | rate magnitudes| descending| DTR only: ad-valorem, specific, compound |
//!
//! All keys compare as strings; a missing value is the empty string and is
//! indistinguishable from a present-but-empty one (the business rule does
//! not separate the two cases). After the sort, the first record of each
//! (group key, HS code) run is the winner and is classified by validity
//! year; every later record in the run is a duplicate. The result depends
//! only on the record multiset, never on input order.

use std::cmp::Ordering;

use tracing::debug;

use tariff_model::{DutyRateRecord, HsFlag, NomenclatureRecord};

/// Grouping behavior for nomenclature flagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NomFlagMode {
    /// Import direction: uniqueness per `version_number`.
    Import,
    /// Export direction: global uniqueness, no grouping.
    Export,
}

/// Sort and flag a duty-rate table in place. The table is left in sort
/// order.
pub fn flag_duty_rates(records: &mut [DutyRateRecord], year: &str) {
    records.sort_by(duty_rate_order);
    let mut current: Option<(String, String)> = None;
    let mut winners = 0usize;
    for record in records.iter_mut() {
        let key = (record.country_group.clone(), record.hs.clone());
        if current.as_ref() == Some(&key) {
            record.flag = Some(HsFlag::Duplicate);
        } else {
            record.flag = Some(classify_validity(&record.valid_to, year));
            current = Some(key);
            winners += 1;
        }
    }
    debug!(record_count = records.len(), winners, "flagged duty rates");
}

/// Sort and flag a nomenclature table in place. The table is left in sort
/// order.
pub fn flag_nomenclature(records: &mut [NomenclatureRecord], year: &str, mode: NomFlagMode) {
    records.sort_by(|a, b| nomenclature_order(a, b, mode));
    let mut current: Option<(String, String)> = None;
    let mut winners = 0usize;
    for record in records.iter_mut() {
        let group = match mode {
            NomFlagMode::Import => record.version_number.clone(),
            NomFlagMode::Export => String::new(),
        };
        let key = (group, record.number.clone());
        if current.as_ref() == Some(&key) {
            record.flag = Some(HsFlag::Duplicate);
        } else {
            record.flag = Some(classify_validity(&record.valid_to, year));
            current = Some(key);
            winners += 1;
        }
    }
    debug!(record_count = records.len(), winners, "flagged nomenclature");
}

fn duty_rate_order(a: &DutyRateRecord, b: &DutyRateRecord) -> Ordering {
    a.country_group
        .cmp(&b.country_group)
        .then_with(|| a.hs.cmp(&b.hs))
        .then_with(|| b.version_date.cmp(&a.version_date))
        .then_with(|| b.valid_from.cmp(&a.valid_from))
        .then_with(|| a.valid_to.cmp(&b.valid_to))
        .then_with(|| b.ad_valorem_rate.cmp(&a.ad_valorem_rate))
        .then_with(|| b.specific_rate.cmp(&a.specific_rate))
        .then_with(|| b.compound_rate.cmp(&a.compound_rate))
}

fn nomenclature_order(a: &NomenclatureRecord, b: &NomenclatureRecord, mode: NomFlagMode) -> Ordering {
    let group = match mode {
        NomFlagMode::Import => a.version_number.cmp(&b.version_number),
        NomFlagMode::Export => Ordering::Equal,
    };
    group
        .then_with(|| a.number.cmp(&b.number))
        .then_with(|| b.version_date.cmp(&a.version_date))
        .then_with(|| b.valid_from.cmp(&a.valid_from))
        .then_with(|| a.valid_to.cmp(&b.valid_to))
}

/// A winner is active when its `valid_to` year reaches the processing year.
/// Both sides are zero-padded 4-digit years, so the lexicographic compare is
/// the numeric one. Unparseable or short values classify as invalid.
fn classify_validity(valid_to: &str, year: &str) -> HsFlag {
    match valid_to.get(..4) {
        Some(prefix) if prefix >= year => HsFlag::Active,
        _ => HsFlag::Invalid,
    }
}
