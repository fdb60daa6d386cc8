//! Author pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;

use super::{path_id, posted_id, FormBody};
use crate::{
    error::AppResult,
    forms::FormValues,
    services::{DeleteOutcome, FormOutcome},
    views, AppState,
};

const LIST_URL: &str = "/catalog/authors";

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.services.authors.list().await?;
    Ok(views::authors::list(&authors))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = path_id(&id, "Author")?;
    let details = state.services.authors.detail(id).await?;
    Ok(views::authors::detail(&details))
}

pub async fn create_form() -> Markup {
    views::authors::form("Create Author", &FormValues::default(), &[])
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    Ok(match state.services.authors.create(&input).await? {
        FormOutcome::Saved(author) => Redirect::to(&author.url()).into_response(),
        FormOutcome::Rejected(submission) => views::authors::form(
            "Create Author",
            submission.values(),
            submission.violations(),
        )
        .into_response(),
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = path_id(&id, "Author")?;
    let author = state.services.authors.edit(id).await?;
    Ok(views::authors::form("Update Author", &author.form_values(), &[]))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let id = path_id(&id, "Author")?;
    Ok(match state.services.authors.update(id, &input).await? {
        FormOutcome::Saved(author) => Redirect::to(&author.url()).into_response(),
        FormOutcome::Rejected(submission) => views::authors::form(
            "Update Author",
            submission.values(),
            submission.violations(),
        )
        .into_response(),
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = path_id(&id, "Author") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };
    Ok(match state.services.authors.delete_details(id).await? {
        Some(details) => views::authors::delete(&details).into_response(),
        None => Redirect::to(LIST_URL).into_response(),
    })
}

pub async fn delete(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let Some(id) = posted_id(&input, "authorid") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };
    Ok(match state.services.authors.delete(id).await? {
        DeleteOutcome::Blocked(details) => views::authors::delete(&details).into_response(),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => Redirect::to(LIST_URL).into_response(),
    })
}
