//! Field rules.
//!
//! A field's rules form a small pipeline: each rule receives the current
//! value and either passes a (possibly transformed) value on, finishes the
//! field early, or rejects it. Sanitizers never reject.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use mongodb::bson::oid::ObjectId;
use validator::ValidateLength;

use super::escape::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Strip leading and trailing whitespace
    Trim,
    /// HTML-escape the value
    Escape,
    /// Value must not be empty
    Required,
    /// Length bounds in characters
    Length { min: Option<u64>, max: Option<u64> },
    /// ASCII letters and digits only, with its own message
    Alphanumeric(&'static str),
    /// An empty value ends the pipeline: the field is simply absent
    Optional,
    /// ISO-8601 date or date-time, normalized to `YYYY-MM-DD`
    IsoDate,
    /// 24-character hexadecimal document identifier
    ObjectId,
    /// Value must be one of the listed options
    OneOf(&'static [&'static str]),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Finish(String),
    Reject(String, Option<&'static str>),
}

impl Rule {
    pub fn apply(&self, value: String) -> Step {
        match self {
            Rule::Trim => Step::Continue(value.trim().to_string()),
            Rule::Escape => Step::Continue(escape(&value)),
            Rule::Required => {
                if value.is_empty() {
                    Step::Reject(value, None)
                } else {
                    Step::Continue(value)
                }
            }
            Rule::Length { min, max } => {
                if value.validate_length(*min, *max, None) {
                    Step::Continue(value)
                } else {
                    Step::Reject(value, None)
                }
            }
            Rule::Alphanumeric(message) => {
                if value.chars().all(|c| c.is_ascii_alphanumeric()) {
                    Step::Continue(value)
                } else {
                    Step::Reject(value, Some(*message))
                }
            }
            Rule::Optional => {
                if value.is_empty() {
                    Step::Finish(value)
                } else {
                    Step::Continue(value)
                }
            }
            Rule::IsoDate => match parse_iso_date(&value) {
                Some(date) => Step::Continue(date.format("%Y-%m-%d").to_string()),
                None => Step::Reject(value, None),
            },
            Rule::ObjectId => {
                if ObjectId::parse_str(&value).is_ok() {
                    Step::Continue(value)
                } else {
                    Step::Reject(value, None)
                }
            }
            Rule::OneOf(options) => {
                if options.contains(&value.as_str()) {
                    Step::Continue(value)
                } else {
                    Step::Reject(value, None)
                }
            }
        }
    }
}

/// Accepts `2024-03-01`, `2024-03-01T10:00:00` and RFC 3339 date-times
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|datetime| datetime.date())
}
