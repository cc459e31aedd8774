//! Flat record types produced by XML ingestion.
//!
//! All source values are kept as strings; the empty string stands for a value
//! that was absent in the XML. That convention carries through the whole
//! pipeline so sort keys and output cells never need a separate null state.

use serde::{Deserialize, Serialize};

use crate::flag::HsFlag;

/// One duty-rate row: a `duty_rate_entity` element crossed with one of its
/// `country_group` children. An entity declaring several country groups
/// expands into several records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRateRecord {
    /// HS code (`hs_id` attribute), possibly still carrying the "00" prefix.
    pub hs: String,
    pub duty_rate_type: String,
    pub country_group: String,
    pub valid_from: String,
    pub valid_to: String,
    pub version_date: String,
    pub deleted: String,
    /// Ad-valorem percentage as found in the XML.
    pub ad_valorem_rate: String,
    pub ad_valorem_text: String,
    /// Specific rate per unit of measure.
    pub specific_rate: String,
    /// Units the specific rate is quoted per; blank means 1.
    pub specific_rate_multiplier: String,
    pub specific_text: String,
    pub compound_rate: String,
    pub compound_text: String,
    pub free_text: String,
    pub complex_text: String,
    /// Preference-note text, carried into outputs as the regulation column.
    pub regulation: String,
    pub flag: Option<HsFlag>,
}

impl DutyRateRecord {
    /// Composite key matched against the configuration's rate-type table.
    pub fn composite_key(&self) -> String {
        format!("{} {}", self.country_group, self.duty_rate_type)
    }

    /// True when none of the rate description texts nor the regulation is
    /// populated.
    pub fn has_rate_text(&self) -> bool {
        [
            &self.complex_text,
            &self.compound_text,
            &self.specific_text,
            &self.ad_valorem_text,
            &self.free_text,
            &self.regulation,
        ]
        .iter()
        .any(|value| !value.trim().is_empty())
    }
}

/// One nomenclature row: a `number_data` element. `parent_id` links records
/// into a forest whose roots are the level-"10" chapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomenclatureRecord {
    pub id: String,
    pub parent_id: String,
    /// HS code (`number` element), possibly still carrying the "00" prefix.
    pub number: String,
    /// Hierarchy depth marker: "10" chapter, "20"/"30"/"40" intermediate,
    /// "50" leaf / unit-of-measure line.
    pub level_id: String,
    pub official_description: String,
    pub alternate_unit_1: String,
    pub alternate_unit_2: String,
    pub alternate_unit_3: String,
    /// Source `validity_begin`.
    pub valid_from: String,
    /// Source `validity_end`.
    pub valid_to: String,
    pub version_number: String,
    /// Source `date_of_physical_update`.
    pub version_date: String,
    /// Concatenated ancestor descriptions, set by the description builder.
    pub full_description: Option<String>,
    pub flag: Option<HsFlag>,
}

/// Supplementary note from a TXT document. Carried for completeness; not
/// joined into any output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub text_element_id: String,
    pub text_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_key_joins_group_and_type() {
        let record = DutyRateRecord {
            country_group: "NZFTA".to_string(),
            duty_rate_type: "FTA".to_string(),
            ..DutyRateRecord::default()
        };
        assert_eq!(record.composite_key(), "NZFTA FTA");
    }

    #[test]
    fn rate_text_detection() {
        let mut record = DutyRateRecord::default();
        assert!(!record.has_rate_text());
        record.regulation = "  ".to_string();
        assert!(!record.has_rate_text());
        record.free_text = "Free".to_string();
        assert!(record.has_rate_text());
    }
}
