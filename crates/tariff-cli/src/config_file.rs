//! Configuration file loading.
//!
//! The per-country configuration arrives as a JSON document carrying the
//! same tables the operator maintains in the master workbook. Only the
//! shape is checked here; completeness against the batch is the validation
//! stage's job.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use tariff_model::Config;

/// Load and sanity-check the configuration, applying an optional country
/// override.
pub fn load_config(path: &Path, country_override: Option<&str>) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let mut config: Config =
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;

    if let Some(country) = country_override {
        info!(country, "using country override");
        config.country = country.to_string();
    }
    config.ensure_valid()?;

    info!(
        country = %config.country,
        year = %config.year,
        min_chapter = config.min_chapter,
        rate_type_count = config.rate_type_defs.len(),
        uom_count = config.uom_dict.len(),
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        std::fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn loads_and_overrides_country() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            r#"{"country": "NZ", "year": "2026", "min_chapter": 25, "max_csv": 100}"#,
        );
        let config = load_config(&path, Some("CA")).expect("load");
        assert_eq!(config.country, "CA");
        assert_eq!(config.year, "2026");
    }

    #[test]
    fn rejects_bad_year() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            r#"{"country": "NZ", "year": "26", "min_chapter": 25, "max_csv": 100}"#,
        );
        assert!(load_config(&path, None).is_err());
    }
}
