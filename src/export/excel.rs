//! Spreadsheet export.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::Item;

pub const XLSX_FILE_NAME: &str = "items.xlsx";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADERS: [&str; 5] = ["ID", "Name", "Category", "Price", "Status"];

/// Writes a single-sheet workbook: a bold header row, then one row per item.
pub fn to_xlsx(items: &[Item]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Items")?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, item) in items.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, item.id as f64)?;
        sheet.write_string(row, 1, item.name.as_str())?;
        sheet.write_string(row, 2, item.category.as_str())?;
        sheet.write_number(row, 3, item.price)?;
        sheet.write_string(row, 4, item.status.as_str())?;
    }

    Ok(workbook.save_to_buffer()?)
}
