//! Per-country run configuration.
//!
//! The configuration is supplied as a JSON document with the same fields the
//! operator maintains in the master workbook: global settings (country, year,
//! chapter floor, CSV row budget) plus the rate-type table and the
//! unit-of-measure mapping. Everything the pipeline derives from those tables
//! (chapter list, active group list, main country group) is computed here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TariffError};

fn default_uom() -> String {
    "EA".to_string()
}

/// One row of the rate-type table. `descartes_cg` is the composite
/// "country_group duty_rate_type" key as it appears in the source feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTypeDef {
    #[serde(alias = "Descartes CG")]
    pub descartes_cg: String,
    /// "keep", "remove", or "3rd" (the designated general-duty group).
    #[serde(default, alias = "Comment")]
    pub comment: String,
    #[serde(default, alias = "Description")]
    pub description: String,
}

/// The configuration-designated default/general duty-rate group, or the
/// sentinel describing why it could not be determined. Kept as a value, not
/// an error: generators that need the group detect the sentinel and produce
/// an empty table instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainCountryGroup {
    Single(String),
    Missing,
    Multiple,
}

impl MainCountryGroup {
    pub fn group(&self) -> Option<&str> {
        match self {
            MainCountryGroup::Single(group) => Some(group),
            MainCountryGroup::Missing | MainCountryGroup::Multiple => None,
        }
    }
}

impl fmt::Display for MainCountryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainCountryGroup::Single(group) => f.write_str(group),
            MainCountryGroup::Missing => f.write_str("Missing 3rd country group"),
            MainCountryGroup::Multiple => f.write_str("Multiple 3rd country group"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target country code (NZ, CA, US, MX, BR, EU, ...).
    pub country: String,
    /// Processing year as a zero-padded 4-digit string.
    pub year: String,
    /// Inclusive lower bound on the 2-digit chapter prefix.
    pub min_chapter: u8,
    /// Row budget per output CSV file before splitting.
    pub max_csv: usize,
    /// Unit code substituted when a nomenclature record has no primary unit.
    #[serde(default = "default_uom")]
    pub default_uom: String,
    #[serde(default)]
    pub rate_type_defs: Vec<RateTypeDef>,
    /// Source unit code -> target unit code.
    #[serde(default)]
    pub uom_dict: BTreeMap<String, String>,
}

impl Config {
    /// Check the global settings a run cannot proceed without. Table
    /// completeness is deliberately not checked here; that is the validation
    /// stage's job and is informational.
    pub fn ensure_valid(&self) -> Result<()> {
        if self.country.trim().is_empty() {
            return Err(TariffError::Message("config has no country".to_string()));
        }
        if self.year.len() != 4 || !self.year.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(TariffError::Message(format!(
                "config year must be a 4-digit string, got {:?}",
                self.year
            )));
        }
        if self.max_csv == 0 {
            return Err(TariffError::Message(
                "config max_csv must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// All chapters from `min_chapter` through 99, zero-padded.
    pub fn chapter_list(&self) -> Vec<String> {
        (self.min_chapter..=99).map(|ch| format!("{ch:02}")).collect()
    }

    /// Composite keys of rate-type entries not marked "remove".
    pub fn active_country_groups(&self) -> Vec<String> {
        self.rate_type_defs
            .iter()
            .filter(|def| def.comment != "remove")
            .map(|def| def.descartes_cg.clone())
            .collect()
    }

    /// Every composite key in the rate-type table.
    pub fn all_country_groups(&self) -> Vec<String> {
        self.rate_type_defs
            .iter()
            .map(|def| def.descartes_cg.clone())
            .collect()
    }

    /// Target unit for a source unit code; unmapped codes pass through.
    pub fn map_uom(&self, unit: &str) -> String {
        if unit.is_empty() {
            return String::new();
        }
        self.uom_dict
            .get(unit)
            .cloned()
            .unwrap_or_else(|| unit.to_string())
    }

    /// The single country group whose rate-type entry is marked "3rd".
    ///
    /// The group is the text before the first space of the composite key.
    /// Zero marked entries yield `Missing`, more than one yields `Multiple`.
    pub fn main_country_group(&self) -> MainCountryGroup {
        let mut groups = self
            .rate_type_defs
            .iter()
            .filter(|def| def.comment == "3rd")
            .map(|def| group_prefix(&def.descartes_cg));
        match (groups.next(), groups.next()) {
            (None, _) => MainCountryGroup::Missing,
            (Some(group), None) => MainCountryGroup::Single(group.to_string()),
            (Some(_), Some(_)) => MainCountryGroup::Multiple,
        }
    }
}

fn group_prefix(composite: &str) -> &str {
    composite.split(' ').next().unwrap_or(composite)
}
