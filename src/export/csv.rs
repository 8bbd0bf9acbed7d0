//! CSV serialization of items.
//!
//! Fields are joined with bare commas. Values are written verbatim with no
//! quoting or escaping, so a comma inside a field shifts the columns of that
//! row; downstream consumers depend on this exact output.

use crate::models::Item;

pub const CSV_FILE_NAME: &str = "items.csv";

pub const CSV_HEADER: &str = "ID,Name,Category,Price,Status";

/// Renders the header line followed by one line per item, each ending in `\n`.
pub fn to_csv(items: &[Item]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + items.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for item in items {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            item.id, item.name, item.category, item.price, item.status
        ));
    }
    out
}
