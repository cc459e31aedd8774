//! Rate-completeness check.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{info, warn};

use tariff_model::DutyRateRecord;

/// HS codes whose records carry no rate text and no regulation reference.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RateCheck {
    pub missing_hs: Vec<String>,
}

impl RateCheck {
    pub fn has_findings(&self) -> bool {
        !self.missing_hs.is_empty()
    }
}

/// Every kept duty record should explain its rate somewhere: one of the
/// five rate description texts or the preference-note regulation. Codes
/// where none is populated are reported in first-seen order.
pub fn check_rate_texts(records: &[DutyRateRecord]) -> RateCheck {
    let mut missing = Vec::new();
    let mut seen = BTreeSet::new();
    for record in records {
        if record.has_rate_text() {
            continue;
        }
        if seen.insert(record.hs.clone()) {
            missing.push(record.hs.clone());
        }
    }
    if missing.is_empty() {
        info!("all duty records carry rate text or regulation");
    } else {
        warn!(
            missing_count = missing.len(),
            "duty records without rate text or regulation"
        );
    }
    RateCheck { missing_hs: missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_codes_without_any_text_once() {
        let with_text = DutyRateRecord {
            hs: "25010000".to_string(),
            free_text: "Free".to_string(),
            ..DutyRateRecord::default()
        };
        let bare = DutyRateRecord {
            hs: "25020000".to_string(),
            ..DutyRateRecord::default()
        };
        let bare_again = DutyRateRecord {
            hs: "25020000".to_string(),
            country_group: "OTHER".to_string(),
            ..DutyRateRecord::default()
        };
        let check = check_rate_texts(&[with_text, bare, bare_again]);
        assert_eq!(check.missing_hs, vec!["25020000".to_string()]);
        assert!(check.has_findings());
    }
}
