//! Predicate Module
//!
//! Composable boolean conditions over items. The tree is evaluated directly by
//! in-memory stores and rendered to SQL by [`crate::query::sql`].

use crate::models::Item;
use crate::query::field::{FieldValue, ItemField};

// == Predicate ==
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field = value` on a numeric field; never holds for text fields
    Equals { field: ItemField, value: f64 },
    /// Case-insensitive, unanchored substring match
    Contains { field: ItemField, needle: String },
    /// At least one member holds; an empty group never holds
    Or(Vec<Predicate>),
    /// Every member holds; an empty group always holds
    And(Vec<Predicate>),
}

impl Predicate {
    /// The predicate that accepts every item.
    pub fn always() -> Self {
        Predicate::And(Vec::new())
    }

    pub fn equals(field: ItemField, value: f64) -> Self {
        Predicate::Equals { field, value }
    }

    pub fn contains(field: ItemField, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            needle: needle.into(),
        }
    }

    /// Returns true when this predicate accepts every item without inspecting it.
    pub fn is_trivial(&self) -> bool {
        matches!(self, Predicate::And(members) if members.iter().all(Predicate::is_trivial))
    }

    /// Evaluates the predicate against one item.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Predicate::Equals { field, value } => {
                matches!(field.value(item), FieldValue::Number(actual) if actual == *value)
            }
            Predicate::Contains { field, needle } => field
                .text(item)
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Predicate::Or(members) => members.iter().any(|p| p.matches(item)),
            Predicate::And(members) => members.iter().all(|p| p.matches(item)),
        }
    }
}
