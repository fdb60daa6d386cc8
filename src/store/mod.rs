//! Document store seam.
//!
//! Handlers never talk to a driver directly: they go through [`DocumentStore`],
//! which exposes the handful of single-document operations the catalog needs.
//! Every operation is atomic for one document only; there is no cross-document
//! transaction.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::error::StoreResult;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Operations over named collections of BSON documents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents matching an equality filter (an empty filter matches everything)
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    /// Insert a document carrying its own `_id`
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()>;

    /// Overwrite the document stored under `id`. Returns false when nothing matched.
    async fn replace_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        document: Document,
    ) -> StoreResult<bool>;

    /// Remove the document stored under `id`, returning it if it existed
    async fn remove_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64>;
}
