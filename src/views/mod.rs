//! Server-side HTML views.
//!
//! Every page is a function returning [`Markup`]. Values of type
//! [`Escaped`](crate::forms::Escaped) are written verbatim, everything else
//! is escaped by maud.

pub mod authors;
pub mod books;
pub mod forms;
pub mod genres;
pub mod index;
pub mod instances;

use axum::http::StatusCode;
use maud::{html, Markup, Render, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("/catalog", "Home"),
    ("/catalog/books", "All books"),
    ("/catalog/authors", "All authors"),
    ("/catalog/genres", "All genres"),
    ("/catalog/instances", "All book-instances"),
];

const NAV_CREATE: &[(&str, &str)] = &[
    ("/catalog/author/create", "Create new author"),
    ("/catalog/genre/create", "Create new genre"),
    ("/catalog/book/create", "Create new book"),
    ("/catalog/instance/create", "Create new book instance (copy)"),
];

/// Page shell with the catalog sidebar
pub fn layout(title: impl Render, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Local Library" }
            }
            body {
                div.container-fluid {
                    div.row {
                        nav.col-sm-2 {
                            ul.sidebar-nav {
                                @for (href, label) in NAV {
                                    li { a href=(href) { (label) } }
                                }
                                li { hr; }
                                @for (href, label) in NAV_CREATE {
                                    li { a href=(href) { (label) } }
                                }
                            }
                        }
                        main.col-sm-10 {
                            (content)
                        }
                    }
                }
            }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        "Error",
        html! {
            h1 { (message) }
            h2 { (status.as_u16()) }
        },
    )
}

/// Links shown under a detail page
fn record_actions(url: &str) -> Markup {
    html! {
        hr;
        p { a href={ (url) "/delete" } { "Delete" } }
        p { a href={ (url) "/update" } { "Update" } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page(StatusCode::NOT_FOUND, "<nope>").into_string();
        assert!(page.contains("&lt;nope&gt;"));
        assert!(page.contains("404"));
    }
}
