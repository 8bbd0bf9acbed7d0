//! Export Module
//!
//! Serializers behind the download endpoints.

mod csv;
mod excel;

pub use self::csv::{to_csv, CSV_FILE_NAME, CSV_HEADER};
pub use self::excel::{to_xlsx, XLSX_CONTENT_TYPE, XLSX_FILE_NAME};
