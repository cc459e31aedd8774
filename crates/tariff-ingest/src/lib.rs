//! XML ingestion for tariff-schedule feeds.
//!
//! Three document types arrive per batch: DTR (duty rates), NOM
//! (nomenclature), and TXT (supplementary text). Each reader takes a list of
//! file paths and produces flat records plus a list of per-file errors; a
//! malformed file never aborts the batch.

pub mod discovery;
pub mod dtr;
pub mod error;
pub mod nom;
pub mod txt;
pub mod xml;

pub use discovery::{DiscoveredFiles, discover_input_files};
pub use dtr::read_duty_rates;
pub use error::IngestError;
pub use nom::read_nomenclature;
pub use txt::read_texts;
pub use xml::{XmlElement, read_xml_tree};

/// Records parsed from a batch of files, with one error entry per file that
/// could not be read.
#[derive(Debug, Default)]
pub struct Ingested<T> {
    pub records: Vec<T>,
    pub errors: Vec<String>,
}
