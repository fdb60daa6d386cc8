//! MongoDB-backed document store

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Collection, Database,
};

use super::DocumentStore;
use crate::error::StoreResult;

#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(url).await?;
        let database = client.database(name);

        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()> {
        self.collection(collection).insert_one(document).await?;
        Ok(())
    }

    async fn replace_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        document: Document,
    ) -> StoreResult<bool> {
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id }, document)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn remove_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one_and_delete(doc! { "_id": id })
            .await?)
    }

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        Ok(self.collection(collection).count_documents(filter).await?)
    }
}
