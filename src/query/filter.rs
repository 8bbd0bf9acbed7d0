//! Query Filter Module
//!
//! Turns the raw query-string map into a validated [`QueryFilter`] at the
//! HTTP boundary, rejecting malformed values before they reach a store.

use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::models::{Item, RawParams};
use crate::query::field::ItemField;

// == Sort ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(AppError::InvalidParameter(format!(
                "sort_direction must be 'asc' or 'desc' (got '{}')",
                s
            ))),
        }
    }
}

/// Ordering requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: ItemField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: ItemField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Orders two items according to this sort.
    pub fn compare(&self, a: &Item, b: &Item) -> std::cmp::Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

// == Query Filter ==
/// Validated listing parameters for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    /// Substring match on category
    pub category: Option<String>,
    /// Exact price
    pub price: Option<f64>,
    /// Substring match on name, category or status
    pub search: Option<String>,
    pub sort: Option<Sort>,
    /// 1-based page number
    pub page: u32,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            category: None,
            price: None,
            search: None,
            sort: None,
            page: 1,
        }
    }
}

impl QueryFilter {
    // == From Params ==
    /// Builds a filter from the raw query map.
    ///
    /// Blank values count as absent. Unknown parameters are ignored here but
    /// still take part in the cache key.
    ///
    /// # Errors
    /// `InvalidParameter` for a non-numeric or non-finite `price`, a `page`
    /// that is not a positive integer, an unknown `sort_by` column or a
    /// `sort_direction` other than asc/desc.
    pub fn from_params(params: &RawParams) -> Result<Self> {
        let price = params.filled("price").map(parse_price).transpose()?;

        let page = match params.filled("page") {
            Some(raw) => raw.parse::<u32>().ok().filter(|p| *p >= 1).ok_or_else(|| {
                AppError::InvalidParameter(format!(
                    "page must be a positive integer (got '{}')",
                    raw
                ))
            })?,
            None => 1,
        };

        let sort = match params.filled("sort_by") {
            Some(column) => {
                let field = column.parse::<ItemField>()?;
                let direction = params
                    .filled("sort_direction")
                    .map(str::parse::<SortDirection>)
                    .transpose()?
                    .unwrap_or_default();
                Some(Sort::new(field, direction))
            }
            None => None,
        };

        Ok(Self {
            category: params.filled("category").map(str::to_string),
            price,
            search: params.filled("search").map(str::to_string),
            sort,
            page,
        })
    }

    // == From Export Params ==
    /// Builds the CSV export filter: only `category`, `price` and `search` are
    /// read, so stray `page` or `sort_by` values never fail the download.
    ///
    /// A value of `"0"` counts as absent here, the same as a blank one.
    ///
    /// # Errors
    /// `InvalidParameter` for a non-numeric or non-finite `price`.
    pub fn from_export_params(params: &RawParams) -> Result<Self> {
        let set = |key: &str| params.filled(key).filter(|v| *v != "0");

        Ok(Self {
            category: set("category").map(str::to_string),
            price: set("price").map(parse_price).transpose()?,
            search: set("search").map(str::to_string),
            ..Self::default()
        })
    }
}

fn parse_price(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| AppError::InvalidParameter(format!("price must be a number (got '{}')", raw)))
}
