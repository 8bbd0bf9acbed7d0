//! In-memory item store.

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::Item;
use crate::query::{ItemQuery, Window};
use crate::store::ItemStore;

/// Item store backed by a vector kept in primary key order.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    /// Creates a store holding `items`, sorted by id.
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_by_key(|item| item.id);
        Self {
            items: RwLock::new(items),
        }
    }

    /// Loads a JSON array of items from disk.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::DataStoreUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let items: Vec<Item> = serde_json::from_str(&raw).map_err(|e| {
            AppError::DataStoreUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;
        info!("Loaded {} items from {}", items.len(), path.display());
        Ok(Self::new(items))
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn count(&self, query: &ItemQuery) -> Result<u64> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|item| query.matches(item)).count() as u64)
    }

    async fn select(&self, query: &ItemQuery, window: Option<Window>) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut matching: Vec<Item> = items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();

        // Stable sort keeps primary key order between equal keys
        if query.sort.is_some() {
            matching.sort_by(|a, b| query.compare(a, b));
        }

        Ok(match window {
            Some(window) => matching
                .into_iter()
                .skip(usize::try_from(window.offset).unwrap_or(usize::MAX))
                .take(window.limit as usize)
                .collect(),
            None => matching,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ItemField, Predicate, Sort, SortDirection};

    fn store() -> MemoryItemStore {
        MemoryItemStore::new(vec![
            Item::new(3, "Hammer", "Tools", 25.0, "Active"),
            Item::new(1, "Phone", "Electronics", 799.0, "Active"),
            Item::new(2, "Saw", "Tools", 25.0, "Discontinued"),
        ])
    }

    #[tokio::test]
    async fn test_store_order_is_primary_key() {
        let items = store().select(&ItemQuery::all(), None).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_count_and_select_agree() {
        let query = ItemQuery::new(
            Predicate::And(vec![Predicate::contains(ItemField::Category, "tools")]),
            None,
        );
        let store = store();
        assert_eq!(store.count(&query).await.unwrap(), 2);
        assert_eq!(store.select(&query, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_sort_is_stable() {
        let query = ItemQuery::new(
            Predicate::always(),
            Some(Sort::new(ItemField::Price, SortDirection::Asc)),
        );
        let items = store().select(&query, None).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_name_sort_ignores_case() {
        let store = MemoryItemStore::new(vec![
            Item::new(1, "Zebra", "Toys", 5.0, "Active"),
            Item::new(2, "apple", "Food", 1.0, "Active"),
            Item::new(3, "Mango", "Food", 2.0, "Active"),
            Item::new(4, "APPLE", "Food", 1.0, "Active"),
        ]);

        let ascending = ItemQuery::new(
            Predicate::always(),
            Some(Sort::new(ItemField::Name, SortDirection::Asc)),
        );
        let items = store.select(&ascending, None).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);

        let descending = ItemQuery::new(
            Predicate::always(),
            Some(Sort::new(ItemField::Name, SortDirection::Desc)),
        );
        let items = store.select(&descending, None).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[tokio::test]
    async fn test_window() {
        let store = store();
        let items = store
            .select(&ItemQuery::all(), Some(Window::new(1, 1)))
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);

        let past_end = store
            .select(&ItemQuery::all(), Some(Window::new(10, 10)))
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_from_json_file_missing() {
        let result = MemoryItemStore::from_json_file("/nonexistent/items.json").await;
        assert!(matches!(result, Err(AppError::DataStoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("items_{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[{"id": 2, "name": "b", "category": "c", "price": 1, "status": "s"},
                {"id": 1, "name": "a", "category": "c", "price": 2, "status": "s"}]"#,
        )
        .await
        .unwrap();

        let store = MemoryItemStore::from_json_file(&path).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert!(!store.is_empty().await);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
