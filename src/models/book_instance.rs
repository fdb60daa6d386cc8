//! Book instance (physical copy) model and related types

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::{book::Book, Record};
use crate::{
    error::{AppError, AppResult},
    forms::{Escaped, FieldKind, FieldSpec, FormSpec, FormValues, Rule, Submission},
};

/// Availability of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl InstanceStatus {
    pub const ALL: [InstanceStatus; 4] = [
        InstanceStatus::Maintenance,
        InstanceStatus::Available,
        InstanceStatus::Loaned,
        InstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Reserved => "Reserved",
        }
    }

    /// Whether the copy is out of the library and expected back
    pub fn is_unavailable(&self) -> bool {
        *self != InstanceStatus::Available
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", s)))
    }
}

const STATUS_NAMES: &[&str] = &["Maintenance", "Available", "Loaned", "Reserved"];

/// A copy of a [`Book`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInstance {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub book: ObjectId,
    pub imprint: Escaped,
    #[serde(default)]
    pub status: InstanceStatus,
    #[serde(default)]
    pub due_back: Option<NaiveDate>,
}

impl Record for BookInstance {
    const COLLECTION: &'static str = "bookinstances";

    fn id(&self) -> ObjectId {
        self.id
    }
}

impl BookInstance {
    pub fn url(&self) -> String {
        format!("/catalog/instance/{}", self.id.to_hex())
    }

    pub fn book_url(&self) -> String {
        format!("/catalog/book/{}", self.book.to_hex())
    }

    pub fn due_back_formatted(&self) -> String {
        self.due_back
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn form_values(&self) -> FormValues {
        let mut values = FormValues::default();
        values.set("book", super::id_value(self.book));
        values.set("imprint", self.imprint.clone());
        values.set("status", Escaped::from_raw(self.status.as_str()));
        if let Some(date) = self.due_back {
            values.set("due_back", super::date_value(date));
        }
        values
    }
}

pub const BOOK_INSTANCE_FORM: FormSpec = FormSpec {
    fields: &[
        FieldSpec {
            name: "book",
            label: "Book",
            kind: FieldKind::Select,
            placeholder: "Select book",
            message: "Book must be specified",
            rules: &[Rule::Trim, Rule::Required, Rule::ObjectId, Rule::Escape],
        },
        FieldSpec {
            name: "imprint",
            label: "Imprint",
            kind: FieldKind::Text,
            placeholder: "Publisher and date information",
            message: "Imprint must be specified",
            rules: &[Rule::Trim, Rule::Required, Rule::Escape],
        },
        FieldSpec {
            name: "status",
            label: "Status",
            kind: FieldKind::Select,
            placeholder: "Select status",
            message: "Invalid status",
            rules: &[
                Rule::Trim,
                Rule::Optional,
                Rule::OneOf(STATUS_NAMES),
                Rule::Escape,
            ],
        },
        FieldSpec {
            name: "due_back",
            label: "Date when book available",
            kind: FieldKind::Date,
            placeholder: "",
            message: "Invalid date",
            rules: &[Rule::Trim, Rule::Optional, Rule::IsoDate],
        },
    ],
};

#[derive(Debug, Default)]
pub struct BookInstanceBuilder {
    id: Option<ObjectId>,
    book: Option<ObjectId>,
    imprint: Escaped,
    status: Escaped,
    due_back: Option<NaiveDate>,
}

impl BookInstanceBuilder {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            id: None,
            book: submission.object_id("book"),
            imprint: submission.text("imprint"),
            status: submission.text("status"),
            due_back: submission.date("due_back"),
        }
    }

    pub fn id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> AppResult<BookInstance> {
        let book = self
            .book
            .ok_or_else(|| AppError::BadRequest("Book must be specified".to_string()))?;

        Ok(BookInstance {
            id: self.id.unwrap_or_else(ObjectId::new),
            book,
            imprint: self.imprint,
            status: if self.status.is_empty() {
                InstanceStatus::default()
            } else {
                self.status.as_str().parse()?
            },
            due_back: self.due_back,
        })
    }
}

/// Copy with its book resolved. `book` is `None` when the reference dangles.
#[derive(Debug, Clone)]
pub struct BookInstanceDetails {
    pub instance: BookInstance,
    pub book: Option<Book>,
}

impl BookInstanceDetails {
    pub fn book_title(&self) -> Escaped {
        self.book
            .as_ref()
            .map(|book| book.title.clone())
            .unwrap_or_default()
    }
}
