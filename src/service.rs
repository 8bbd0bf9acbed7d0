//! Item Query Service
//!
//! Builds the predicate for a validated filter and runs it against the
//! injected [`ItemStore`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Item, Page};
use crate::query::{ItemField, ItemQuery, Predicate, QueryFilter, Window};
use crate::store::ItemStore;

/// Default number of items per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// == Item Query Service ==
#[derive(Clone)]
pub struct ItemQueryService {
    store: Arc<dyn ItemStore>,
    page_size: u32,
}

impl ItemQueryService {
    /// Creates a service over `store`. A zero page size falls back to the default.
    pub fn new(store: Arc<dyn ItemStore>, page_size: u32) -> Self {
        Self {
            store,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    // == Build Query ==
    /// Category, price and search groups are ANDed; the search group ORs
    /// name, category and status.
    pub fn build_query(&self, filter: &QueryFilter) -> ItemQuery {
        let mut clauses = Vec::new();

        if let Some(category) = &filter.category {
            info!("Applying category filter: {}", category);
            clauses.push(Predicate::contains(ItemField::Category, category.as_str()));
        }

        if let Some(price) = filter.price {
            info!("Applying price filter: {}", price);
            clauses.push(Predicate::equals(ItemField::Price, price));
        }

        if let Some(search) = &filter.search {
            info!("Applying search filter: {}", search);
            clauses.push(Predicate::Or(vec![
                Predicate::contains(ItemField::Name, search.as_str()),
                Predicate::contains(ItemField::Category, search.as_str()),
                Predicate::contains(ItemField::Status, search.as_str()),
            ]));
        }

        if let Some(sort) = filter.sort {
            info!("Applying sort: {} {}", sort.field, sort.direction.as_sql());
        }

        ItemQuery::new(Predicate::And(clauses), filter.sort)
    }

    // == Fetch Page ==
    /// Runs the filter and returns the requested page.
    ///
    /// A page past the end has no rows but still reports the total.
    pub async fn fetch_page(&self, filter: &QueryFilter) -> Result<Page<Item>> {
        let query = self.build_query(filter);
        let window = Window::new(Page::<Item>::offset(filter.page, self.page_size), self.page_size);
        debug!("Database query: {}", query.to_count_sql());
        debug!("Database query: {}", query.to_sql(Some(window)));

        let total = self.store.count(&query).await?;
        let data = self.store.select(&query, Some(window)).await?;
        info!("Data fetched from store: {} items (total {})", data.len(), total);

        Ok(Page::new(data, total, self.page_size, filter.page))
    }

    // == Fetch All Matching ==
    /// Same predicate as [`Self::fetch_page`], without paging.
    pub async fn fetch_all_matching(&self, filter: &QueryFilter) -> Result<Vec<Item>> {
        let query = self.build_query(filter);
        debug!("Database query: {}", query.to_sql(None));

        let items = self.store.select(&query, None).await?;
        info!("Data fetched from store: {} items", items.len());
        Ok(items)
    }

    /// Every item in store order, ignoring any filter.
    pub async fn fetch_everything(&self) -> Result<Vec<Item>> {
        self.store.select(&ItemQuery::all(), None).await
    }
}
