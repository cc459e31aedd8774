//! HS-code cleansing.
//!
//! Some extracts left-pad HS codes with a "00" artifact (a 10-digit field
//! holding an 8-digit code). Stripping is idempotent: an already-clean code
//! is never shortened twice because the cleansed forms start with a chapter
//! digit pair, not "00".

use tariff_model::{DutyRateRecord, NomenclatureRecord};

const ARTIFACT_PREFIX: &str = "00";

/// Strip one leading "00" artifact prefix; other codes pass through.
pub fn strip_artifact_prefix(code: &str) -> &str {
    code.strip_prefix(ARTIFACT_PREFIX).unwrap_or(code)
}

/// Cleanse the `hs` column of a duty-rate table in place.
pub fn cleanse_duty_rates(records: &mut [DutyRateRecord]) {
    for record in records {
        record.hs = strip_artifact_prefix(&record.hs).to_string();
    }
}

/// Cleanse the `number` column of a nomenclature table in place.
pub fn cleanse_nomenclature(records: &mut [NomenclatureRecord]) {
    for record in records {
        record.number = strip_artifact_prefix(&record.number).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_prefix() {
        assert_eq!(strip_artifact_prefix("0025010000"), "25010000");
        assert_eq!(strip_artifact_prefix("25010000"), "25010000");
        assert_eq!(strip_artifact_prefix(""), "");
    }

    #[test]
    fn strip_is_idempotent() {
        let once = strip_artifact_prefix("0025010000");
        assert_eq!(strip_artifact_prefix(once), once);
    }

    #[test]
    fn code_of_only_zeros_loses_one_pair() {
        // "0000" is two stacked prefixes; a single cleanse removes one.
        assert_eq!(strip_artifact_prefix("0000"), "00");
    }
}
