//! HTML escaping of user-supplied text

use std::fmt;

use maud::Render;
use serde::{Deserialize, Serialize};

/// Replace the characters that are unsafe inside HTML text and attributes
/// with entities.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            c => out.push(c),
        }
    }
    out
}

/// Text that has already been trimmed and HTML-escaped.
///
/// Only the form pipeline creates these from request input, so record
/// builders taking `Escaped` cannot be fed raw user text. Rendering writes
/// the value verbatim since it is already safe markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Escaped(String);

impl Escaped {
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(escape(raw))
    }

    pub(crate) fn from_escaped(escaped: String) -> Self {
        Self(escaped)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Render for Escaped {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}
