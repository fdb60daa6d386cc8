use maud::{html, Markup};

use super::{
    forms::{self, Choices, FormView},
    books::summaries,
    layout, record_actions,
};
use crate::{
    forms::{FormValues, Violation},
    models::{Author, AuthorDetails, AUTHOR_FORM},
};

pub fn list(authors: &[Author]) -> Markup {
    layout(
        "Author List",
        html! {
            h1 { "Author List" }
            ul {
                @for author in authors {
                    li {
                        a href=(author.url()) { (author.name()) }
                        " (" (author.lifespan()) ")"
                    }
                }
                @if authors.is_empty() {
                    li { "There are no authors." }
                }
            }
        },
    )
}

pub fn detail(details: &AuthorDetails) -> Markup {
    let author = &details.author;
    layout(
        "Author Detail",
        html! {
            h1 { "Author: " (author.name()) }
            p { (author.lifespan()) }
            div style="margin-left:20px;margin-top:20px" {
                h4 { "Books" }
                dl {
                    (summaries(&details.books))
                    @if details.books.is_empty() {
                        p { "This author has no books." }
                    }
                }
            }
            (record_actions(&author.url()))
        },
    )
}

pub fn form(title: &str, values: &FormValues, violations: &[Violation]) -> Markup {
    layout(
        title,
        forms::render(&FormView {
            title,
            spec: &AUTHOR_FORM,
            values,
            choices: &Choices::new(),
            violations,
        }),
    )
}

pub fn delete(details: &AuthorDetails) -> Markup {
    let author = &details.author;
    layout(
        "Delete Author",
        html! {
            h1 { "Delete Author: " (author.name()) }
            p { (author.lifespan()) }
            @if details.books.is_empty() {
                p { "Do you really want to delete this Author?" }
                form method="POST" action="" {
                    div.form-group {
                        input.form-control #authorid type="hidden" name="authorid" required value=(author.id.to_hex());
                    }
                    button.btn.btn-primary type="submit" { "Delete" }
                }
            } @else {
                p { strong { "Delete the following books before attempting to delete this author." } }
                div style="margin-left:20px;margin-top:20px" {
                    h4 { "Books" }
                    dl { (summaries(&details.books)) }
                }
            }
        },
    )
}
