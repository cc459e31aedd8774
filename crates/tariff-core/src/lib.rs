//! Core tariff transforms.
//!
//! The import pipeline runs these stages in order over the ingested records:
//! 1. **Cleanse**: strip the "00" artifact prefix from HS codes
//! 2. **Filter**: restrict to configured chapters and active country groups
//! 3. **Flag**: classify each record as active / invalid / duplicate
//! 4. **Describe**: build full hierarchical descriptions for nomenclature
//!
//! Each stage mutates or filters a plain `Vec` of records; none of them
//! touches the filesystem.

pub mod description;
pub mod filters;
pub mod flagging;
pub mod normalize;

pub use description::build_full_descriptions;
pub use filters::{retain_active_country_groups, retain_configured_chapters};
pub use flagging::{NomFlagMode, flag_duty_rates, flag_nomenclature};
pub use normalize::{cleanse_duty_rates, cleanse_nomenclature, strip_artifact_prefix};
