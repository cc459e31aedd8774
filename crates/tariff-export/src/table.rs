//! Output table contract.

/// A row of one upload format. The header list and the row cells must agree
/// in length and order; writers rely on that to repeat the header in every
/// split file.
pub trait UploadRecord {
    fn headers() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}
