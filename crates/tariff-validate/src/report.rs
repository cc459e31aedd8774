//! Validation findings report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::coverage::ConfigCheck;
use crate::rates::RateCheck;

/// Combined findings of one run, written next to the generated files so the
/// operator can act on them after the batch completes.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationFindings {
    pub rates: RateCheck,
    pub config: ConfigCheck,
}

impl ValidationFindings {
    pub fn has_findings(&self) -> bool {
        self.rates.has_findings() || self.config.has_findings()
    }
}

/// Write the findings as `validation_findings.json` in the output directory.
pub fn write_findings_json(output_dir: &Path, findings: &ValidationFindings) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join("validation_findings.json");
    let json = serde_json::to_string_pretty(findings).context("serialize findings")?;
    std::fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_report_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let findings = ValidationFindings {
            rates: RateCheck {
                missing_hs: vec!["25010000".to_string()],
            },
            config: ConfigCheck::default(),
        };
        let path = write_findings_json(dir.path(), &findings).expect("write report");
        let content = std::fs::read_to_string(path).expect("read report");
        assert!(content.contains("25010000"));
    }
}
