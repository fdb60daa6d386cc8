//! Catalog document models

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};

use crate::forms::Escaped;

// Re-export commonly used types
pub use author::{Author, AuthorBuilder, AuthorDetails, AUTHOR_FORM};
pub use book::{Book, BookBuilder, BookDetails, BookListing, BOOK_FORM};
pub use book_instance::{
    BookInstance, BookInstanceBuilder, BookInstanceDetails, InstanceStatus, BOOK_INSTANCE_FORM,
};
pub use genre::{Genre, GenreBuilder, GenreDetails, GENRE_FORM};

/// A document type stored in its own collection
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;

    fn id(&self) -> ObjectId;
}

fn id_value(id: ObjectId) -> Escaped {
    Escaped::from_raw(&id.to_hex())
}

fn date_value(date: NaiveDate) -> Escaped {
    Escaped::from_raw(&date.format("%Y-%m-%d").to_string())
}
