//! Book model and related types

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::{author::Author, book_instance::BookInstance, genre::Genre, Record};
use crate::{
    error::{AppError, AppResult},
    forms::{Escaped, FieldKind, FieldSpec, FormSpec, FormValues, Rule, Submission},
};

/// Book document. `author` and `genre` hold identifiers of other documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: Escaped,
    pub author: ObjectId,
    pub summary: Escaped,
    pub isbn: Escaped,
    #[serde(default)]
    pub genre: Vec<ObjectId>,
}

impl Record for Book {
    const COLLECTION: &'static str = "books";

    fn id(&self) -> ObjectId {
        self.id
    }
}

impl Book {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id.to_hex())
    }

    pub fn form_values(&self) -> FormValues {
        let mut values = FormValues::default();
        values.set("title", self.title.clone());
        values.set("author", super::id_value(self.author));
        values.set("summary", self.summary.clone());
        values.set("isbn", self.isbn.clone());
        values.set_all("genre", self.genre.iter().copied().map(super::id_value).collect());
        values
    }
}

pub const BOOK_FORM: FormSpec = FormSpec {
    fields: &[
        FieldSpec {
            name: "title",
            label: "Title",
            kind: FieldKind::Text,
            placeholder: "Name of book",
            message: "Title must not be empty.",
            rules: &[Rule::Trim, Rule::Required, Rule::Escape],
        },
        FieldSpec {
            name: "author",
            label: "Author",
            kind: FieldKind::Select,
            placeholder: "Select author",
            message: "Author must not be empty.",
            rules: &[Rule::Trim, Rule::Required, Rule::ObjectId, Rule::Escape],
        },
        FieldSpec {
            name: "summary",
            label: "Summary",
            kind: FieldKind::TextArea,
            placeholder: "Summary",
            message: "Summary must not be empty.",
            rules: &[Rule::Trim, Rule::Required, Rule::Escape],
        },
        FieldSpec {
            name: "isbn",
            label: "ISBN",
            kind: FieldKind::Text,
            placeholder: "ISBN13",
            message: "ISBN must not be empty",
            rules: &[Rule::Trim, Rule::Required, Rule::Escape],
        },
        FieldSpec {
            name: "genre",
            label: "Genre",
            kind: FieldKind::Checkboxes,
            placeholder: "",
            message: "Invalid genre",
            rules: &[Rule::Trim, Rule::Optional, Rule::ObjectId, Rule::Escape],
        },
    ],
};

#[derive(Debug, Default)]
pub struct BookBuilder {
    id: Option<ObjectId>,
    title: Escaped,
    author: Option<ObjectId>,
    summary: Escaped,
    isbn: Escaped,
    genre: Vec<ObjectId>,
}

impl BookBuilder {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            id: None,
            title: submission.text("title"),
            author: submission.object_id("author"),
            summary: submission.text("summary"),
            isbn: submission.text("isbn"),
            genre: submission.object_ids("genre"),
        }
    }

    pub fn id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> AppResult<Book> {
        let author = self
            .author
            .ok_or_else(|| AppError::BadRequest("Author must not be empty.".to_string()))?;

        Ok(Book {
            id: self.id.unwrap_or_else(ObjectId::new),
            title: self.title,
            author,
            summary: self.summary,
            isbn: self.isbn,
            genre: self.genre,
        })
    }
}

/// Book with its author resolved, for listings
#[derive(Debug, Clone)]
pub struct BookListing {
    pub book: Book,
    pub author: Option<Author>,
}

/// Book with every reference resolved, plus its copies
#[derive(Debug, Clone)]
pub struct BookDetails {
    pub book: Book,
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
    pub instances: Vec<BookInstance>,
}
