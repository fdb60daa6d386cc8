use maud::{html, Markup};

use super::{
    forms::{self, Choice, Choices, FormView},
    layout, record_actions,
};
use crate::{
    forms::{Escaped, FormValues, Violation},
    models::{Book, BookInstance, BookInstanceDetails, InstanceStatus, BOOK_INSTANCE_FORM},
};

pub(super) fn status_badge(instance: &BookInstance) -> Markup {
    let class = match instance.status {
        InstanceStatus::Available => "text-success",
        InstanceStatus::Maintenance => "text-danger",
        InstanceStatus::Loaned | InstanceStatus::Reserved => "text-warning",
    };
    html! {
        p class=(class) { (instance.status) }
    }
}

pub fn list(instances: &[BookInstanceDetails]) -> Markup {
    layout(
        "Book Instance List",
        html! {
            h1 { "Book Instance List" }
            ul {
                @for details in instances {
                    @let instance = &details.instance;
                    li {
                        a href=(instance.url()) {
                            (details.book_title()) " : " (instance.imprint)
                        }
                        " - " (status_badge(instance))
                        @if instance.status.is_unavailable() && instance.due_back.is_some() {
                            span { " (Due: " (instance.due_back_formatted()) ")" }
                        }
                    }
                }
                @if instances.is_empty() {
                    li { "There are no book copies in this library." }
                }
            }
        },
    )
}

fn summary(details: &BookInstanceDetails) -> Markup {
    let instance = &details.instance;
    html! {
        p {
            strong { "Title: " }
            a href=(instance.book_url()) { (details.book_title()) }
        }
        p { strong { "Imprint: " } (instance.imprint) }
        p { strong { "Status: " } (status_badge(instance)) }
        @if instance.status.is_unavailable() && instance.due_back.is_some() {
            p { strong { "Due back: " } (instance.due_back_formatted()) }
        }
    }
}

pub fn detail(details: &BookInstanceDetails) -> Markup {
    let instance = &details.instance;
    layout(
        html! { "Copy: " (details.book_title()) },
        html! {
            h1 { "ID: " (instance.id.to_hex()) }
            (summary(details))
            (record_actions(&instance.url()))
        },
    )
}

fn choices(books: &[Book]) -> Choices {
    let mut choices = Choices::new();
    choices.insert(
        "book",
        books
            .iter()
            .map(|book| Choice::new(book.id.to_hex(), book.title.clone()))
            .collect(),
    );
    choices.insert(
        "status",
        InstanceStatus::ALL
            .iter()
            .map(|status| Choice::new(status.as_str(), Escaped::from_raw(status.as_str())))
            .collect(),
    );
    choices
}

pub fn form(title: &str, values: &FormValues, books: &[Book], violations: &[Violation]) -> Markup {
    layout(
        title,
        forms::render(&FormView {
            title,
            spec: &BOOK_INSTANCE_FORM,
            values,
            choices: &choices(books),
            violations,
        }),
    )
}

pub fn delete(details: &BookInstanceDetails) -> Markup {
    let instance = &details.instance;
    layout(
        "Delete Copy",
        html! {
            h1 { "Delete Copy: " (instance.id.to_hex()) }
            (summary(details))
            p { "Do you really want to delete this copy?" }
            form method="POST" action="" {
                div.form-group {
                    input.form-control #instanceid type="hidden" name="instanceid" required value=(instance.id.to_hex());
                }
                button.btn.btn-primary type="submit" { "Delete" }
            }
        },
    )
}
