//! Record classification flags.
//!
//! Every duty-rate and nomenclature record ends up in exactly one of three
//! states after flagging: the sort-winner for its HS code is either still in
//! force (`Active`) or expired (`Invalid`), and every record superseded by a
//! winner is `Duplicate`. The string forms match the codes the downstream
//! master-data system expects.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HsFlag {
    /// Sort-winner whose validity extends into the processing year.
    Active,
    /// Sort-winner whose validity ended before the processing year.
    Invalid,
    /// Superseded by an earlier record in the flagging sort order.
    Duplicate,
}

impl HsFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HsFlag::Active => "01-active",
            HsFlag::Invalid => "02-invalid",
            HsFlag::Duplicate => "03-duplicate",
        }
    }
}

impl fmt::Display for HsFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_codes() {
        assert_eq!(HsFlag::Active.to_string(), "01-active");
        assert_eq!(HsFlag::Invalid.to_string(), "02-invalid");
        assert_eq!(HsFlag::Duplicate.to_string(), "03-duplicate");
    }
}
