//! In-memory to-do collection and id allocator.
//!
//! The store is a plain synchronous value. Sharing across requests is done
//! by the router state (`SharedStore`), which wraps it in a `RwLock` so every
//! mutation, including id allocation, happens under the write lock.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::ToDoItem;

pub type SharedStore = Arc<RwLock<ToDoStore>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(i64),
}

/// Ordered collection of `ToDoItem`s plus the next id to hand out.
#[derive(Debug, Clone)]
pub struct ToDoStore {
    items: Vec<ToDoItem>,
    next_id: i64,
}

impl Default for ToDoStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ToDoStore {
    /// Empty store; the first allocated id is 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the two startup records, allocator at 3.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                ToDoItem::new(1, "Hello from Azure Function!", true),
                ToDoItem::new(2, "Hello, from the other side", false),
            ],
            next_id: 3,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn list(&self) -> &[ToDoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn get(&self, id: i64) -> Result<&ToDoItem, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append `item`, allocating an id when it carries `0`.
    ///
    /// Caller-supplied ids are stored as given, even when another item
    /// already uses them.
    pub fn create(&mut self, mut item: ToDoItem) -> &ToDoItem {
        if item.id == 0 {
            item.id = self.next_id;
            self.next_id += 1;
        }
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn update(&mut self, id: i64, patch: ToDoItem) -> Result<&ToDoItem, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.merge(patch);
        Ok(item)
    }

    pub fn delete(&mut self, id: i64) -> Result<ToDoItem, StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.items.remove(index))
    }
}
