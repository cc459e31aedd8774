pub mod config;
pub mod error;
pub mod flag;
pub mod records;

pub use config::{Config, MainCountryGroup, RateTypeDef};
pub use error::{Result, TariffError};
pub use flag::HsFlag;
pub use records::{DutyRateRecord, NomenclatureRecord, TextRecord};
