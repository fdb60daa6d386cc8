//! Author model and related types

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::{book::Book, Record};
use crate::forms::{Escaped, FieldKind, FieldSpec, FormSpec, FormValues, Rule, Submission};

/// Author document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: Escaped,
    pub family_name: Escaped,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,
}

impl Record for Author {
    const COLLECTION: &'static str = "authors";

    fn id(&self) -> ObjectId {
        self.id
    }
}

impl Author {
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id.to_hex())
    }

    /// "Family, First", or empty when either part is missing
    pub fn name(&self) -> Escaped {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return Escaped::default();
        }
        Escaped::from_escaped(format!("{}, {}", self.family_name, self.first_name))
    }

    pub fn lifespan(&self) -> String {
        let day = |d: &NaiveDate| d.format("%b %-d, %Y").to_string();
        match (&self.date_of_birth, &self.date_of_death) {
            (Some(birth), Some(death)) => format!("{} - {}", day(birth), day(death)),
            (Some(birth), None) => format!("{} -", day(birth)),
            (None, Some(death)) => format!("- {}", day(death)),
            (None, None) => String::new(),
        }
    }

    pub fn form_values(&self) -> FormValues {
        let mut values = FormValues::default();
        values.set("first_name", self.first_name.clone());
        values.set("family_name", self.family_name.clone());
        if let Some(date) = self.date_of_birth {
            values.set("date_of_birth", super::date_value(date));
        }
        if let Some(date) = self.date_of_death {
            values.set("date_of_death", super::date_value(date));
        }
        values
    }
}

pub const AUTHOR_FORM: FormSpec = FormSpec {
    fields: &[
        FieldSpec {
            name: "first_name",
            label: "First Name",
            kind: FieldKind::Text,
            placeholder: "First name",
            message: "First name must be specified.",
            rules: &[
                Rule::Trim,
                Rule::Required,
                Rule::Length { min: None, max: Some(100) },
                Rule::Alphanumeric("First name has non-alphanumeric characters."),
                Rule::Escape,
            ],
        },
        FieldSpec {
            name: "family_name",
            label: "Family Name",
            kind: FieldKind::Text,
            placeholder: "Family name",
            message: "Family name must be specified.",
            rules: &[
                Rule::Trim,
                Rule::Required,
                Rule::Length { min: None, max: Some(100) },
                Rule::Alphanumeric("Family name has non-alphanumeric characters."),
                Rule::Escape,
            ],
        },
        FieldSpec {
            name: "date_of_birth",
            label: "Date of birth",
            kind: FieldKind::Date,
            placeholder: "",
            message: "Invalid date of birth",
            rules: &[Rule::Trim, Rule::Optional, Rule::IsoDate],
        },
        FieldSpec {
            name: "date_of_death",
            label: "Date of death",
            kind: FieldKind::Date,
            placeholder: "",
            message: "Invalid date of death",
            rules: &[Rule::Trim, Rule::Optional, Rule::IsoDate],
        },
    ],
};

/// Builds an [`Author`] from sanitized form values
#[derive(Debug, Default)]
pub struct AuthorBuilder {
    id: Option<ObjectId>,
    first_name: Escaped,
    family_name: Escaped,
    date_of_birth: Option<NaiveDate>,
    date_of_death: Option<NaiveDate>,
}

impl AuthorBuilder {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            id: None,
            first_name: submission.text("first_name"),
            family_name: submission.text("family_name"),
            date_of_birth: submission.date("date_of_birth"),
            date_of_death: submission.date("date_of_death"),
        }
    }

    /// Keep an existing identifier (update) instead of generating one
    pub fn id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> Author {
        Author {
            id: self.id.unwrap_or_else(ObjectId::new),
            first_name: self.first_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

/// Author with the books they wrote
#[derive(Debug, Clone)]
pub struct AuthorDetails {
    pub author: Author,
    pub books: Vec<Book>,
}
