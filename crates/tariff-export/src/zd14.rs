//! ZD14: the primary upload format, generated for every country.

use tracing::{info, warn};

use tariff_model::{Config, DutyRateRecord, NomenclatureRecord};

use crate::format::normalize_tonne_code;
use crate::join::{BaseRow, build_base_rows};
use crate::table::UploadRecord;

const HEADERS: &[&str] = &[
    "Country",
    "HS Number",
    "Date from",
    "Date to",
    "Lang 1",
    "Desc 1",
    "Desc 2",
    "Desc 3",
    "Desc 4",
    "Desc 5",
    "Desc 6",
    "Desc 7",
    "Lang 2",
    "Desc 21",
    "Desc 22",
    "Desc 23",
    "Desc 24",
    "Desc 25",
    "Desc 26",
    "Desc 27",
    "Unit of measure",
    "Restriction code",
    "Rate type",
    "Champ24",
    "Champ25",
    "Base rate %",
    "Rate amount",
    "Rate curr",
    "Rate qty",
    "Rate qty uom",
    "Spec App",
    "Cert Ori",
    "Cty Grp",
];

/// One ZD14 row. The secondary language block and the rate qualifier
/// columns are structurally blank; only the populated cells are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zd14Record {
    pub country: String,
    pub hs_number: String,
    pub date_from: String,
    pub date_to: String,
    pub description: String,
    pub unit_of_measure: String,
    pub rate_type: String,
    pub base_rate_pct: String,
    pub rate_amount: String,
    pub cert_ori: String,
}

impl UploadRecord for Zd14Record {
    fn headers() -> &'static [&'static str] {
        HEADERS
    }

    fn to_row(&self) -> Vec<String> {
        let blank = String::new;
        vec![
            self.country.clone(),
            self.hs_number.clone(),
            self.date_from.clone(),
            self.date_to.clone(),
            "EN".to_string(),
            self.description.clone(),
            blank(),
            blank(),
            blank(),
            blank(),
            blank(),
            blank(),
            "ES".to_string(),
            blank(),
            blank(),
            blank(),
            blank(),
            blank(),
            blank(),
            blank(),
            self.unit_of_measure.clone(),
            blank(),
            self.rate_type.clone(),
            // Champ24/25 repeat the validity window.
            self.date_from.clone(),
            self.date_to.clone(),
            self.base_rate_pct.clone(),
            self.rate_amount.clone(),
            blank(),
            blank(),
            blank(),
            blank(),
            self.cert_ori.clone(),
            blank(),
        ]
    }
}

/// Build the ZD14 table from active duty records and the described
/// nomenclature.
///
/// Country quirks: `BR` uploads no specific-rate amounts at all, and `US`
/// normalizes the bare tonne code in the unit-of-measure column (and only
/// there; ZZDF widens the same substitution to the whole table).
pub fn generate_zd14(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> Vec<Zd14Record> {
    if duty.is_empty() {
        warn!("no active duty records, ZD14 output is empty");
        return Vec::new();
    }
    let rows = build_base_rows(duty, nomenclature, config);
    let records: Vec<Zd14Record> = rows
        .into_iter()
        .map(|row| record_from_base(row, config))
        .collect();
    info!(record_count = records.len(), "generated ZD14");
    records
}

pub(crate) fn record_from_base(row: BaseRow, config: &Config) -> Zd14Record {
    let mut record = Zd14Record {
        country: config.country.clone(),
        hs_number: row.hs,
        date_from: row.date_from,
        date_to: row.date_to,
        description: row.description,
        unit_of_measure: row.unit_of_measure,
        rate_type: row.country_group,
        base_rate_pct: row.base_rate_pct,
        rate_amount: row.rate_amount,
        cert_ori: row.regulation,
    };
    if config.country == "BR" {
        record.rate_amount = String::new();
    }
    if config.country == "US" {
        record.unit_of_measure = normalize_tonne_code(&record.unit_of_measure);
    }
    record
}
