//! Upload file generation.
//!
//! Every output format is an explicit record struct implementing
//! [`UploadRecord`]; generators are pure functions from the processed duty
//! and nomenclature tables (plus the configuration) to a vector of records.
//! Writers then handle the physical contract: size-bounded semicolon CSV
//! splits for the import formats, a single XLSX workbook for the export
//! format.

pub mod csv_writer;
pub mod export_hs;
pub mod format;
pub mod join;
pub mod restricted;
pub mod table;
pub mod xlsx_writer;
pub mod zd14;

pub use csv_writer::{find_next_version, write_csv_split};
pub use export_hs::{ExportHsRecord, generate_export_hs};
pub use join::{BaseRow, NomLookup, build_base_rows};
pub use restricted::{
    CapdrRecord, Mx6Record, ZzdeRecord, generate_capdr, generate_mx6digits, generate_zzde,
    generate_zzdf,
};
pub use table::UploadRecord;
pub use xlsx_writer::write_xlsx;
pub use zd14::{Zd14Record, generate_zd14};
