//! Book pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;

use super::{path_id, posted_id, FormBody};
use crate::{
    error::AppResult,
    forms::{FormValues, Submission},
    services::{DeleteOutcome, FormOutcome},
    views, AppState,
};

const LIST_URL: &str = "/catalog/books";

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.books.list().await?;
    Ok(views::books::list(&books))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = path_id(&id, "Book")?;
    let details = state.services.books.detail(id).await?;
    Ok(views::books::detail(&details))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let choices = state.services.books.choices().await?;
    Ok(views::books::form("Create Book", &FormValues::default(), &choices, &[]))
}

/// Re-render a rejected submission with fresh author and genre lists
async fn rejected(state: &AppState, title: &str, submission: Submission) -> AppResult<Response> {
    let choices = state.services.books.choices().await?;
    Ok(views::books::form(
        title,
        submission.values(),
        &choices,
        submission.violations(),
    )
    .into_response())
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    match state.services.books.create(&input).await? {
        FormOutcome::Saved(book) => Ok(Redirect::to(&book.url()).into_response()),
        FormOutcome::Rejected(submission) => rejected(&state, "Create Book", submission).await,
    }
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = path_id(&id, "Book")?;
    let (book, choices) = state.services.books.edit(id).await?;
    Ok(views::books::form("Update Book", &book.form_values(), &choices, &[]))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let id = path_id(&id, "Book")?;
    match state.services.books.update(id, &input).await? {
        FormOutcome::Saved(book) => Ok(Redirect::to(&book.url()).into_response()),
        FormOutcome::Rejected(submission) => rejected(&state, "Update Book", submission).await,
    }
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = path_id(&id, "Book") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };
    Ok(match state.services.books.delete_details(id).await? {
        Some((book, instances)) => views::books::delete(&book, &instances).into_response(),
        None => Redirect::to(LIST_URL).into_response(),
    })
}

pub async fn delete(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let Some(id) = posted_id(&input, "bookid") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };
    Ok(match state.services.books.delete(id).await? {
        DeleteOutcome::Blocked((book, instances)) => {
            views::books::delete(&book, &instances).into_response()
        }
        DeleteOutcome::Deleted | DeleteOutcome::Missing => Redirect::to(LIST_URL).into_response(),
    })
}
