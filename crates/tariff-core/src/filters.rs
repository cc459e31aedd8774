//! Chapter and country-group filters.

use tracing::{info, warn};

use tariff_model::{Config, DutyRateRecord};

/// Keep records whose code's first two characters name a configured chapter.
///
/// Codes shorter than two characters are dropped. An empty chapter list
/// disables the filter rather than emptying the table.
pub fn retain_configured_chapters<T>(
    records: &mut Vec<T>,
    chapter_list: &[String],
    code: impl Fn(&T) -> &str,
) {
    if chapter_list.is_empty() {
        warn!("no chapter list configured, skipping chapter filter");
        return;
    }
    let before = records.len();
    records.retain(|record| {
        code(record)
            .get(..2)
            .is_some_and(|chapter| chapter_list.iter().any(|known| known == chapter))
    });
    info!(
        before,
        after = records.len(),
        removed = before - records.len(),
        "chapter filter applied"
    );
}

/// Keep duty-rate records whose composite "country_group duty_rate_type" key
/// is listed as active (not marked "remove") in the rate-type table.
///
/// An empty rate-type table disables the filter rather than emptying the
/// table.
pub fn retain_active_country_groups(records: &mut Vec<DutyRateRecord>, config: &Config) {
    if config.rate_type_defs.is_empty() {
        warn!("no rate-type definitions configured, skipping country-group filter");
        return;
    }
    let active = config.active_country_groups();
    let before = records.len();
    records.retain(|record| active.iter().any(|key| key == &record.composite_key()));
    info!(
        before,
        after = records.len(),
        removed = before - records.len(),
        "country-group filter applied"
    );
}
