//! Informational completeness checks.
//!
//! Both checks surface data-quality gaps to the operator without blocking
//! the run: records missing every rate text, and country groups or unit
//! codes present in the XML but absent from the configuration. Findings are
//! printed in the run summary and written as a JSON report next to the
//! generated files.

pub mod coverage;
pub mod rates;
pub mod report;

pub use coverage::{ConfigCheck, check_config_coverage};
pub use rates::{RateCheck, check_rate_texts};
pub use report::{ValidationFindings, write_findings_json};
