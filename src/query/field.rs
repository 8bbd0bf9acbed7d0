//! Item Field Module
//!
//! Names the item columns that can be filtered and sorted on.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::Item;

// == Item Field ==
/// A filterable, sortable column of [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Id,
    Name,
    Category,
    Price,
    Status,
}

/// The value of one field of one item, borrowed where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl ItemField {
    /// Every field in column order, as exported.
    pub const ALL: [ItemField; 5] = [
        ItemField::Id,
        ItemField::Name,
        ItemField::Category,
        ItemField::Price,
        ItemField::Status,
    ];

    /// Column name in the backing table.
    pub fn column(&self) -> &'static str {
        match self {
            ItemField::Id => "id",
            ItemField::Name => "name",
            ItemField::Category => "category",
            ItemField::Price => "price",
            ItemField::Status => "status",
        }
    }

    /// Reads this field from an item.
    pub fn value<'a>(&self, item: &'a Item) -> FieldValue<'a> {
        match self {
            ItemField::Id => FieldValue::Number(item.id as f64),
            ItemField::Name => FieldValue::Text(&item.name),
            ItemField::Category => FieldValue::Text(&item.category),
            ItemField::Price => FieldValue::Number(item.price),
            ItemField::Status => FieldValue::Text(&item.status),
        }
    }

    /// Renders this field of an item the way a text column comparison sees it.
    pub fn text(&self, item: &Item) -> String {
        match self {
            ItemField::Id => item.id.to_string(),
            ItemField::Name => item.name.clone(),
            ItemField::Category => item.category.clone(),
            ItemField::Price => item.price.to_string(),
            ItemField::Status => item.status.clone(),
        }
    }

    /// Orders two items by this field, ascending.
    ///
    /// Text compares case-insensitively, so `apple` sorts before `Mango`.
    /// Values differing only in case are equal.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match (self.value(a), self.value(b)) {
            (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
            (FieldValue::Text(x), FieldValue::Text(y)) => x
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(y.chars().flat_map(char::to_lowercase)),
            // A field always yields the same variant for every item
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ItemField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemField::ALL
            .into_iter()
            .find(|field| field.column() == s)
            .ok_or_else(|| {
                AppError::InvalidParameter(format!(
                    "sort_by must be one of id, name, category, price, status (got '{}')",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_columns() {
        for field in ItemField::ALL {
            assert_eq!(field.column().parse::<ItemField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_unknown_column() {
        let result = "price; drop table items".parse::<ItemField>();
        assert!(matches!(result, Err(AppError::InvalidParameter(_))));
    }

    #[test]
    fn test_compare_numeric_and_text() {
        let cheap = Item::new(2, "b", "x", 1.5, "Active");
        let dear = Item::new(1, "a", "x", 20.0, "Active");

        assert_eq!(ItemField::Price.compare(&cheap, &dear), Ordering::Less);
        assert_eq!(ItemField::Name.compare(&cheap, &dear), Ordering::Greater);
        assert_eq!(ItemField::Id.compare(&cheap, &dear), Ordering::Greater);
    }

    #[test]
    fn test_text_compare_ignores_case() {
        let zebra = Item::new(1, "Zebra", "x", 1.0, "Active");
        let apple = Item::new(2, "apple", "x", 1.0, "Active");
        let mango = Item::new(3, "Mango", "x", 1.0, "Active");
        let upper_apple = Item::new(4, "APPLE", "x", 1.0, "Active");

        assert_eq!(ItemField::Name.compare(&apple, &mango), Ordering::Less);
        assert_eq!(ItemField::Name.compare(&mango, &zebra), Ordering::Less);
        assert_eq!(ItemField::Name.compare(&apple, &upper_apple), Ordering::Equal);
    }

    #[test]
    fn test_text_rendering_of_numbers() {
        let item = Item::new(42, "n", "c", 7079.0, "s");
        assert_eq!(ItemField::Id.text(&item), "42");
        assert_eq!(ItemField::Price.text(&item), "7079");
    }
}
