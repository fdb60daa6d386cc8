//! Book instance queries

use mongodb::bson::{doc, oid::ObjectId};

use super::records::Records;
use crate::{
    error::AppResult,
    models::{BookInstance, InstanceStatus},
};

pub type InstancesRepository = Records<BookInstance>;

impl Records<BookInstance> {
    pub async fn of_book(&self, book: ObjectId) -> AppResult<Vec<BookInstance>> {
        self.find_by(doc! { "book": book }).await
    }

    pub async fn count_with_status(&self, status: InstanceStatus) -> AppResult<u64> {
        self.count_by(doc! { "status": status.as_str() }).await
    }
}
