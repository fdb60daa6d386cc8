//! Book queries

use mongodb::bson::{doc, oid::ObjectId};

use super::records::Records;
use crate::{error::AppResult, models::Book};

pub type BooksRepository = Records<Book>;

impl Records<Book> {
    /// All books sorted by title
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let mut books = self.find_all().await?;
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    pub async fn by_author(&self, author: ObjectId) -> AppResult<Vec<Book>> {
        self.find_by(doc! { "author": author }).await
    }

    pub async fn by_genre(&self, genre: ObjectId) -> AppResult<Vec<Book>> {
        self.find_by(doc! { "genre": genre }).await
    }
}
