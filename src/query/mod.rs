//! Query Module
//!
//! Validated request filters, the predicate tree built from them and its SQL
//! rendering.

mod field;
mod filter;
mod predicate;
pub mod sql;


use std::cmp::Ordering;

pub use field::{FieldValue, ItemField};
pub use filter::{QueryFilter, Sort, SortDirection};
pub use predicate::Predicate;
pub use sql::{Literal, SqlStatement};

use crate::models::Item;

// == Item Query ==
/// A store-independent description of which items to read and in what order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemQuery {
    pub predicate: Predicate,
    /// `None` leaves ordering to the store (primary key order)
    pub sort: Option<Sort>,
}

impl ItemQuery {
    pub fn new(predicate: Predicate, sort: Option<Sort>) -> Self {
        Self { predicate, sort }
    }

    /// Every item in store order.
    pub fn all() -> Self {
        Self::new(Predicate::always(), None)
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.predicate.matches(item)
    }

    /// Orders two items; items are equal when no sort is requested.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        self.sort
            .map(|sort| sort.compare(a, b))
            .unwrap_or(Ordering::Equal)
    }
}

/// A contiguous slice of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u32,
}

impl Window {
    pub fn new(offset: u64, limit: u32) -> Self {
        Self { offset, limit }
    }
}
