use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Item;

/// In-memory item list with auto-increment ids.
///
/// Clones share the same list. Every mutation holds the write lock for its
/// whole read-modify-write, so concurrent creates never hand out the same id.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in creation order
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Item> {
        let inner = self.inner.read().await;
        inner.items.iter().find(|item| item.id == Some(id)).cloned()
    }

    /// Any id on `item` is discarded in favour of the next counter value.
    pub async fn create(&self, mut item: Item) -> Item {
        let mut inner = self.inner.write().await;
        item.id = Some(inner.next_id);
        inner.next_id += 1;
        inner.items.push(item.clone());
        item
    }

    /// Replaces the stored record wholesale; nothing is merged from the old one.
    pub async fn update(&self, id: i64, mut item: Item) -> Option<Item> {
        let mut inner = self.inner.write().await;
        let slot = inner.items.iter_mut().find(|existing| existing.id == Some(id))?;
        item.id = Some(id);
        *slot = item.clone();
        Some(item)
    }

    /// Returns whether anything was removed.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != Some(id));
        inner.items.len() < before
    }
}
