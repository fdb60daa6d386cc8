use maud::{html, Markup};

use super::{
    forms::{self, Choice, Choices, FormView},
    instances::status_badge,
    layout, record_actions,
};
use crate::{
    forms::{FormValues, Violation},
    models::{Book, BookDetails, BookInstance, BookListing, BOOK_FORM},
    services::books::BookChoices,
};

pub fn list(books: &[BookListing]) -> Markup {
    layout(
        "Book List",
        html! {
            h1 { "Book List" }
            ul {
                @for listing in books {
                    li {
                        a href=(listing.book.url()) { (listing.book.title) }
                        @if let Some(author) = &listing.author {
                            " (" (author.name()) ")"
                        }
                    }
                }
                @if books.is_empty() {
                    li { "There are no books." }
                }
            }
        },
    )
}

/// Title and summary of each book, as a definition list body
pub(super) fn summaries(books: &[Book]) -> Markup {
    html! {
        @for book in books {
            dt { a href=(book.url()) { (book.title) } }
            dd { (book.summary) }
        }
    }
}

fn copies(instances: &[BookInstance]) -> Markup {
    html! {
        @for instance in instances {
            hr;
            (status_badge(instance))
            p { strong { "Imprint: " } (instance.imprint) }
            @if instance.status.is_unavailable() && instance.due_back.is_some() {
                p { strong { "Due back: " } (instance.due_back_formatted()) }
            }
            p { strong { "Id: " } a href=(instance.url()) { (instance.id.to_hex()) } }
        }
    }
}

pub fn detail(details: &BookDetails) -> Markup {
    let book = &details.book;
    layout(
        html! { "Book: " (book.title) },
        html! {
            h1 { "Title: " (book.title) }
            p {
                strong { "Author: " }
                @if let Some(author) = &details.author {
                    a href=(author.url()) { (author.name()) }
                }
            }
            p { strong { "Summary: " } (book.summary) }
            p { strong { "ISBN: " } (book.isbn) }
            p {
                strong { "Genre: " }
                @for (i, genre) in details.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (genre.name) }
                }
            }
            div style="margin-left:20px;margin-top:20px" {
                h4 { "Copies" }
                (copies(&details.instances))
                @if details.instances.is_empty() {
                    p { "There are no copies of this book in the library." }
                }
            }
            (record_actions(&book.url()))
        },
    )
}

fn choices(lookups: &BookChoices) -> Choices {
    let mut choices = Choices::new();
    choices.insert(
        "author",
        lookups
            .authors
            .iter()
            .map(|author| Choice::new(author.id.to_hex(), author.name()))
            .collect(),
    );
    choices.insert(
        "genre",
        lookups
            .genres
            .iter()
            .map(|genre| Choice::new(genre.id.to_hex(), genre.name.clone()))
            .collect(),
    );
    choices
}

pub fn form(
    title: &str,
    values: &FormValues,
    lookups: &BookChoices,
    violations: &[Violation],
) -> Markup {
    layout(
        title,
        forms::render(&FormView {
            title,
            spec: &BOOK_FORM,
            values,
            choices: &choices(lookups),
            violations,
        }),
    )
}

pub fn delete(book: &Book, instances: &[BookInstance]) -> Markup {
    layout(
        "Delete Book",
        html! {
            h1 { "Delete Book: " (book.title) }
            p { strong { "Summary: " } (book.summary) }
            p { strong { "ISBN: " } (book.isbn) }
            @if instances.is_empty() {
                p { "Do you really want to delete this Book?" }
                form method="POST" action="" {
                    div.form-group {
                        input.form-control #bookid type="hidden" name="bookid" required value=(book.id.to_hex());
                    }
                    button.btn.btn-primary type="submit" { "Delete" }
                }
            } @else {
                p { strong { "Delete the following copies before attempting to delete this book." } }
                div style="margin-left:20px;margin-top:20px" {
                    h4 { "Copies" }
                    (copies(instances))
                }
            }
        },
    )
}
