//! Book instance (copy) pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;

use super::{path_id, posted_id, FormBody};
use crate::{
    error::AppResult,
    forms::{FormValues, Submission},
    services::FormOutcome,
    views, AppState,
};

/// Where a missing copy sends the browser
const FALLBACK_URL: &str = "/catalog/books";

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let instances = state.services.instances.list().await?;
    Ok(views::instances::list(&instances))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = path_id(&id, "Book copy")?;
    let details = state.services.instances.detail(id).await?;
    Ok(views::instances::detail(&details))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.instances.choices().await?;
    Ok(views::instances::form(
        "Create BookInstance",
        &FormValues::default(),
        &books,
        &[],
    ))
}

async fn rejected(state: &AppState, title: &str, submission: Submission) -> AppResult<Response> {
    let books = state.services.instances.choices().await?;
    Ok(views::instances::form(title, submission.values(), &books, submission.violations())
        .into_response())
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    match state.services.instances.create(&input).await? {
        FormOutcome::Saved(instance) => Ok(Redirect::to(&instance.url()).into_response()),
        FormOutcome::Rejected(submission) => {
            rejected(&state, "Create BookInstance", submission).await
        }
    }
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = path_id(&id, "Book copy")?;
    let (details, books) = state.services.instances.edit(id).await?;
    Ok(views::instances::form(
        "Update BookInstance",
        &details.instance.form_values(),
        &books,
        &[],
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let id = path_id(&id, "Book copy")?;
    match state.services.instances.update(id, &input).await? {
        FormOutcome::Saved(instance) => Ok(Redirect::to(&instance.url()).into_response()),
        FormOutcome::Rejected(submission) => {
            rejected(&state, "Update BookInstance", submission).await
        }
    }
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = path_id(&id, "Book copy") else {
        return Ok(Redirect::to(FALLBACK_URL).into_response());
    };
    Ok(match state.services.instances.delete_details(id).await? {
        Some(details) => views::instances::delete(&details).into_response(),
        None => Redirect::to(FALLBACK_URL).into_response(),
    })
}

/// Remove a copy and return to its book
pub async fn delete(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let Some(id) = posted_id(&input, "instanceid") else {
        return Ok(Redirect::to("/catalog/instances").into_response());
    };
    Ok(match state.services.instances.delete(id).await? {
        Some(instance) => Redirect::to(&instance.book_url()).into_response(),
        None => Redirect::to("/catalog/instances").into_response(),
    })
}
