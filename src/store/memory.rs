//! In-process document store.
//!
//! Keeps each collection ordered by `_id`, which for generated ObjectIds is
//! creation order. Filters follow the subset of MongoDB query semantics the
//! catalog uses: every key must equal the document's value, and an array
//! field matches when it contains the value.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::{StoreError, StoreResult};

type Collection = BTreeMap<ObjectId, Document>;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| match document.get(key) {
        Some(Bson::Array(values)) => match expected {
            Bson::Array(wanted) => values == wanted,
            _ => values.contains(expected),
        },
        Some(actual) => actual == expected,
        None => matches!(expected, Bson::Null),
    })
}

fn document_id(document: &Document) -> StoreResult<ObjectId> {
    document
        .get_object_id("_id")
        .map_err(|e| StoreError::Malformed(format!("document without _id: {}", e)))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| matches(doc, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(&id))
            .cloned())
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()> {
        let id = document_id(&document)?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(&id) {
            return Err(StoreError::Malformed(format!(
                "duplicate _id {} in {}",
                id, collection
            )));
        }
        docs.insert(id, document);
        Ok(())
    }

    async fn replace_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        mut document: Document,
    ) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections.get_mut(collection).and_then(|docs| docs.get_mut(&id)) else {
            return Ok(false);
        };
        // _id is immutable
        document.insert("_id", id);
        *slot = document;
        Ok(true)
    }

    async fn remove_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(&id)))
    }

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        Ok(self.find(collection, filter).await?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_find_remove() {
        let store = MemoryStore::new();
        let id = ObjectId::new();
        store
            .insert("genres", doc! { "_id": id, "name": "Poetry" })
            .await
            .unwrap();

        let found = store.find_by_id("genres", id).await.unwrap().unwrap();
        assert_eq!(found.get_str("name").unwrap(), "Poetry");

        let removed = store.remove_by_id("genres", id).await.unwrap();
        assert!(removed.is_some());
        assert!(store.find_by_id("genres", id).await.unwrap().is_none());
        assert!(store.remove_by_id("genres", id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filter_matches_array_membership() {
        let store = MemoryStore::new();
        let fantasy = ObjectId::new();
        let poetry = ObjectId::new();
        store
            .insert("books", doc! { "_id": ObjectId::new(), "genre": [fantasy, poetry] })
            .await
            .unwrap();
        store
            .insert("books", doc! { "_id": ObjectId::new(), "genre": [poetry] })
            .await
            .unwrap();

        assert_eq!(store.count("books", doc! { "genre": fantasy }).await.unwrap(), 1);
        assert_eq!(store.count("books", doc! { "genre": poetry }).await.unwrap(), 2);
        assert_eq!(store.count("books", doc! {}).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_replace_keeps_id() {
        let store = MemoryStore::new();
        let id = ObjectId::new();
        store
            .insert("genres", doc! { "_id": id, "name": "Poetry" })
            .await
            .unwrap();

        let replaced = store
            .replace_by_id("genres", id, doc! { "_id": ObjectId::new(), "name": "Verse" })
            .await
            .unwrap();
        assert!(replaced);

        let found = store.find_by_id("genres", id).await.unwrap().unwrap();
        assert_eq!(found.get_object_id("_id").unwrap(), id);
        assert_eq!(found.get_str("name").unwrap(), "Verse");

        let missing = store
            .replace_by_id("genres", ObjectId::new(), doc! { "name": "x" })
            .await
            .unwrap();
        assert!(!missing);
    }

    #[tokio::test]
    async fn test_insert_requires_id() {
        let store = MemoryStore::new();
        assert!(store.insert("genres", doc! { "name": "x" }).await.is_err());
    }
}
