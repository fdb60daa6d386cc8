//! Genre model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::{book::Book, Record};
use crate::forms::{Escaped, FieldKind, FieldSpec, FormSpec, FormValues, Rule, Submission};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: Escaped,
}

impl Record for Genre {
    const COLLECTION: &'static str = "genres";

    fn id(&self) -> ObjectId {
        self.id
    }
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id.to_hex())
    }

    /// Case-insensitive name comparison used to keep genre labels unique
    pub fn same_name(&self, other: &Escaped) -> bool {
        self.name.as_str().to_lowercase() == other.as_str().to_lowercase()
    }

    pub fn form_values(&self) -> FormValues {
        let mut values = FormValues::default();
        values.set("name", self.name.clone());
        values
    }
}

pub const GENRE_FORM: FormSpec = FormSpec {
    fields: &[FieldSpec {
        name: "name",
        label: "Genre",
        kind: FieldKind::Text,
        placeholder: "Fantasy, Poetry etc.",
        message: "Genre name must contain between 3 and 100 characters",
        rules: &[
            Rule::Trim,
            Rule::Length { min: Some(3), max: Some(100) },
            Rule::Escape,
        ],
    }],
};

#[derive(Debug, Default)]
pub struct GenreBuilder {
    id: Option<ObjectId>,
    name: Escaped,
}

impl GenreBuilder {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            id: None,
            name: submission.text("name"),
        }
    }

    pub fn id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> Genre {
        Genre {
            id: self.id.unwrap_or_else(ObjectId::new),
            name: self.name,
        }
    }
}

/// Genre with the books filed under it
#[derive(Debug, Clone)]
pub struct GenreDetails {
    pub genre: Genre,
    pub books: Vec<Book>,
}
