//! Typed access to one collection

use std::{marker::PhantomData, sync::Arc};

use futures_util::future::try_join_all;
use mongodb::bson::{self, doc, oid::ObjectId, Document};

use crate::{
    error::{AppError, AppResult, StoreError},
    models::Record,
    store::DocumentStore,
};

pub struct Records<T> {
    store: Arc<dyn DocumentStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Records<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

fn decode<T: Record>(document: Document) -> AppResult<T> {
    bson::from_document(document).map_err(|e| StoreError::from(e).into())
}

impl<T: Record> Records<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        self.find_by(doc! {}).await
    }

    pub async fn find_by(&self, filter: Document) -> AppResult<Vec<T>> {
        self.store
            .find(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<T>> {
        self.store
            .find_by_id(T::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Like [`Records::find_by_id`] but a missing document is an error
    pub async fn get_by_id(&self, id: ObjectId) -> AppResult<T> {
        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{} with id {} not found", T::COLLECTION, id))
        })
    }

    /// Resolve a list of references, skipping dangling ones
    pub async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<T>> {
        let found = try_join_all(ids.iter().map(|id| self.find_by_id(*id))).await?;
        Ok(found.into_iter().flatten().collect())
    }

    pub async fn insert(&self, record: &T) -> AppResult<()> {
        let document = bson::to_document(record).map_err(StoreError::from)?;
        self.store.insert(T::COLLECTION, document).await?;
        Ok(())
    }

    /// Overwrite the stored document with the same identifier
    pub async fn replace(&self, record: &T) -> AppResult<()> {
        let id = record.id();
        let document = bson::to_document(record).map_err(StoreError::from)?;
        if !self.store.replace_by_id(T::COLLECTION, id, document).await? {
            return Err(AppError::NotFound(format!(
                "{} with id {} not found",
                T::COLLECTION,
                id
            )));
        }
        Ok(())
    }

    pub async fn remove_by_id(&self, id: ObjectId) -> AppResult<Option<T>> {
        self.store
            .remove_by_id(T::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn count_by(&self, filter: Document) -> AppResult<u64> {
        Ok(self.store.count(T::COLLECTION, filter).await?)
    }
}
