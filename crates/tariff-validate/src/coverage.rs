//! Configuration-coverage check.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;

use tariff_model::{Config, DutyRateRecord, NomenclatureRecord};

/// Country groups and unit codes seen in the XML but absent from the
/// configuration. Both are processed anyway (groups pass through, units map
/// to themselves); the check exists so the operator can extend the config.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConfigCheck {
    pub unmapped_country_groups: Vec<String>,
    pub unmapped_uoms: Vec<String>,
}

impl ConfigCheck {
    pub fn has_findings(&self) -> bool {
        !self.unmapped_country_groups.is_empty() || !self.unmapped_uoms.is_empty()
    }

    /// Ready-to-paste JSON fragment covering every unmapped item: rate-type
    /// rows marked "keep" and identity unit mappings, for the operator to
    /// review and merge into the configuration file.
    pub fn config_fragment(&self) -> String {
        let rate_type_defs: Vec<serde_json::Value> = self
            .unmapped_country_groups
            .iter()
            .map(|key| {
                serde_json::json!({
                    "Descartes CG": key,
                    "Comment": "keep",
                    "Description": "",
                })
            })
            .collect();
        let uom_dict: serde_json::Map<String, serde_json::Value> = self
            .unmapped_uoms
            .iter()
            .map(|unit| (unit.clone(), serde_json::Value::String(unit.clone())))
            .collect();
        let fragment = serde_json::json!({
            "rate_type_defs": rate_type_defs,
            "uom_dict": uom_dict,
        });
        serde_json::to_string_pretty(&fragment).unwrap_or_default()
    }
}

/// Compare the composite keys and unit codes found in the batch against the
/// configuration tables. Skipped for country groups when the rate-type table
/// is empty (everything would be unmapped and the filter is off anyway).
pub fn check_config_coverage(
    duty: &[DutyRateRecord],
    nomenclature: &[NomenclatureRecord],
    config: &Config,
) -> ConfigCheck {
    let mut check = ConfigCheck::default();

    if !config.rate_type_defs.is_empty() {
        let known: BTreeSet<String> = config.all_country_groups().into_iter().collect();
        let mut seen = BTreeSet::new();
        for record in duty {
            let key = record.composite_key();
            if key.trim().is_empty() || known.contains(&key) {
                continue;
            }
            if seen.insert(key.clone()) {
                check.unmapped_country_groups.push(key);
            }
        }
    }

    let mut units = BTreeSet::new();
    for record in nomenclature {
        for unit in [
            &record.alternate_unit_1,
            &record.alternate_unit_2,
            &record.alternate_unit_3,
        ] {
            if !unit.is_empty() && !config.uom_dict.contains_key(unit) {
                units.insert(unit.clone());
            }
        }
    }
    check.unmapped_uoms = units.into_iter().collect();

    info!(
        unmapped_groups = check.unmapped_country_groups.len(),
        unmapped_uoms = check.unmapped_uoms.len(),
        "configuration coverage checked"
    );
    check
}

#[cfg(test)]
mod tests {
    use super::*;
    use tariff_model::RateTypeDef;

    #[test]
    fn finds_unmapped_groups_and_units() {
        let config = Config {
            rate_type_defs: vec![RateTypeDef {
                descartes_cg: "NZFTA FTA".to_string(),
                comment: "keep".to_string(),
                description: String::new(),
            }],
            uom_dict: [("KGM".to_string(), "KG".to_string())].into_iter().collect(),
            ..Config::default()
        };
        let duty = vec![
            DutyRateRecord {
                country_group: "NZFTA".to_string(),
                duty_rate_type: "FTA".to_string(),
                ..DutyRateRecord::default()
            },
            DutyRateRecord {
                country_group: "NZNEW".to_string(),
                duty_rate_type: "GEN".to_string(),
                ..DutyRateRecord::default()
            },
        ];
        let nomenclature = vec![NomenclatureRecord {
            alternate_unit_1: "KGM".to_string(),
            alternate_unit_2: "DZN".to_string(),
            ..NomenclatureRecord::default()
        }];

        let check = check_config_coverage(&duty, &nomenclature, &config);
        assert_eq!(check.unmapped_country_groups, vec!["NZNEW GEN".to_string()]);
        assert_eq!(check.unmapped_uoms, vec!["DZN".to_string()]);
        assert!(check.has_findings());

        let fragment = check.config_fragment();
        assert!(fragment.contains("NZNEW GEN"));
        assert!(fragment.contains("\"DZN\": \"DZN\""));
    }

    #[test]
    fn empty_rate_table_skips_group_check() {
        let config = Config::default();
        let duty = vec![DutyRateRecord {
            country_group: "ANY".to_string(),
            duty_rate_type: "GEN".to_string(),
            ..DutyRateRecord::default()
        }];
        let check = check_config_coverage(&duty, &[], &config);
        assert!(check.unmapped_country_groups.is_empty());
    }
}
