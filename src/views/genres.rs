use maud::{html, Markup};

use super::{
    forms::{self, Choices, FormView},
    books::summaries,
    layout, record_actions,
};
use crate::{
    forms::{FormValues, Violation},
    models::{Genre, GenreDetails, GENRE_FORM},
};

pub fn list(genres: &[Genre]) -> Markup {
    layout(
        "Genre List",
        html! {
            h1 { "Genre List" }
            ul {
                @for genre in genres {
                    li { a href=(genre.url()) { (genre.name) } }
                }
                @if genres.is_empty() {
                    li { "There are no genres." }
                }
            }
        },
    )
}

pub fn detail(details: &GenreDetails) -> Markup {
    let genre = &details.genre;
    layout(
        "Genre Detail",
        html! {
            h1 { "Genre: " (genre.name) }
            div style="margin-left:20px;margin-top:20px" {
                h4 { "Books" }
                dl {
                    (summaries(&details.books))
                    @if details.books.is_empty() {
                        p { "This genre has no books." }
                    }
                }
            }
            (record_actions(&genre.url()))
        },
    )
}

pub fn form(title: &str, values: &FormValues, violations: &[Violation]) -> Markup {
    layout(
        title,
        forms::render(&FormView {
            title,
            spec: &GENRE_FORM,
            values,
            choices: &Choices::new(),
            violations,
        }),
    )
}

pub fn delete(details: &GenreDetails) -> Markup {
    let genre = &details.genre;
    layout(
        "Delete Genre",
        html! {
            h1 { "Delete Genre: " (genre.name) }
            @if details.books.is_empty() {
                p { "Do you really want to delete this Genre?" }
                form method="POST" action="" {
                    div.form-group {
                        input.form-control #genreid type="hidden" name="genreid" required value=(genre.id.to_hex());
                    }
                    button.btn.btn-primary type="submit" { "Delete" }
                }
            } @else {
                p { strong { "Delete the following books before attempting to delete this genre." } }
                div style="margin-left:20px;margin-top:20px" {
                    h4 { "Books" }
                    dl { (summaries(&details.books)) }
                }
            }
        },
    )
}
